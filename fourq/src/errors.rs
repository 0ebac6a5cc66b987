// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Errors which may occur when decoding points or multiplying by them.

use core::fmt;
use core::fmt::Display;

/// Errors reported by point decoding and the scalar multiplication drivers.
///
/// Precondition violations inside the arithmetic core (an even or
/// unreduced scalar handed to a recoder) are programming errors and are
/// caught by debug assertions instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CurveError {
    /// A point failed the curve equation check.
    InvalidPoint,
    /// An encoding had a reserved bit set or a non-canonical coordinate.
    MalformedEncoding,
    /// An error in the length of bytes handed to a constructor.
    ///
    /// `name` names the type which is returning the error, and `length` is
    /// the number of bytes its constructor expects.
    BytesLengthError {
        /// The type being constructed.
        name: &'static str,
        /// The expected length in bytes.
        length: usize,
    },
}

impl Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CurveError::InvalidPoint => write!(f, "Point is not on the curve"),
            CurveError::MalformedEncoding => {
                write!(f, "Point encoding has reserved bits set or is not canonical")
            }
            CurveError::BytesLengthError { name: n, length: l } => {
                write!(f, "{} must be {} bytes in length", n, l)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CurveError {}

#[cfg(test)]
mod test {
    use super::*;
    use std::string::ToString;

    #[test]
    fn display_names_the_type() {
        let e = CurveError::BytesLengthError {
            name: "CompressedPoint",
            length: 32,
        };
        assert_eq!(e.to_string(), "CompressedPoint must be 32 bytes in length");
        assert_eq!(
            CurveError::InvalidPoint.to_string(),
            "Point is not on the curve"
        );
    }
}
