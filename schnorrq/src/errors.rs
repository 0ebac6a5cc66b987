// -*- mode: rust; -*-
//
// This file is part of schnorrq.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Errors which may occur when parsing keys and/or signatures to or from wire formats.

// rustc seems to think the typenames in match statements (e.g. in
// Display) should be snake cased, for some reason.
#![allow(non_snake_case)]

use core::fmt;
use core::fmt::Display;

#[cfg(feature = "std")]
use std::error::Error;

use fourq::CurveError;

/// Internal errors.  Most application-level developers will likely not
/// need to pay any attention to these.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) enum InternalError {
    PointDecompression(CurveError),
    ScalarFormat,
    /// An error in the length of bytes handed to a constructor.
    ///
    /// To use this, pass a string specifying the `name` of the type which is
    /// returning the error, and the `length` in bytes which its constructor
    /// expects.
    BytesLength {
        name: &'static str,
        length: usize,
    },
    /// The verification equation wasn't satisfied
    Verify,
    /// Two keys were given which do not belong together.
    MismatchedKeypair,
    /// The public key has a nonzero torsion component.
    WeakKey,
}

impl Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InternalError::PointDecompression(e) => {
                write!(f, "Cannot decompress FourQ point: {}", e)
            }
            InternalError::ScalarFormat => write!(f, "Cannot use scalar with high bits set"),
            InternalError::BytesLength { name: n, length: l } => {
                write!(f, "{} must be {} bytes in length", n, l)
            }
            InternalError::Verify => write!(f, "Verification equation was not satisfied"),
            InternalError::MismatchedKeypair => {
                write!(f, "Verifying key does not match the signing key")
            }
            InternalError::WeakKey => write!(f, "Verifying key is not in the prime-order subgroup"),
        }
    }
}

#[cfg(feature = "std")]
impl Error for InternalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InternalError::PointDecompression(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors which may occur while processing signatures and keypairs.
///
/// This error may arise due to:
///
/// * Being given bytes with a length different to what was expected.
///
/// * A problem decompressing the curve point of a `VerifyingKey`, or a
///   reserved bit set in the `R` half of a `Signature`.
///
/// * A problem with the format of `s`, a scalar, in the `Signature`.  This
///   is only raised if one of the top four bits of the scalar was set.
///
/// * Failure of a signature to satisfy the verification equation.
pub type SignatureError = ::signature::Error;

impl From<InternalError> for SignatureError {
    #[cfg(not(feature = "std"))]
    fn from(_err: InternalError) -> SignatureError {
        SignatureError::new()
    }

    #[cfg(feature = "std")]
    fn from(err: InternalError) -> SignatureError {
        SignatureError::from_source(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::string::ToString;

    #[test]
    fn display_names_the_type() {
        let e = InternalError::BytesLength {
            name: "Signature",
            length: 64,
        };
        assert_eq!(e.to_string(), "Signature must be 64 bytes in length");
    }

    #[cfg(feature = "std")]
    #[test]
    fn curve_error_is_the_source() {
        let e = InternalError::PointDecompression(CurveError::MalformedEncoding);
        assert_eq!(
            e.source().map(|s| s.to_string()),
            Some(CurveError::MalformedEncoding.to_string())
        );
    }
}
