// -*- mode: rust; -*-
//
// This file is part of schnorrq.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! A SchnorrQ signature.

use core::convert::TryFrom;
use core::fmt::Debug;

use fourq::edwards::CompressedPoint;
use fourq::scalar::Scalar;

#[cfg(feature = "serde")]
use serde::de::Error as SerdeError;
#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde::{Deserializer, Serializer};

use crate::constants::*;
use crate::errors::*;

/// A SchnorrQ signature.
///
/// # Note
///
/// These signatures are "detached": they do **not** include a copy of
/// the message which has been signed.
#[allow(non_snake_case)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Signature {
    /// `R` is the encoding of a FourQ point, formed by hashing the nonce
    /// half of the expanded secret key together with the message, reducing
    /// the first 32 bytes of the digest modulo \\( r \\), and multiplying the
    /// generator by the result.
    pub(crate) R: CompressedPoint,

    /// `s` is a `Scalar`, \\( s = r - k h \bmod r \\), where `h` is derived
    /// from the digest of
    ///
    /// - the `R` portion of this `Signature`,
    /// - the `VerifyingKey` which should be used to verify this `Signature`, and
    /// - the message to be signed.
    pub(crate) s: Scalar,
}

impl Debug for Signature {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "Signature( R: {:?}, s: {:?} )", &self.R, &self.s)
    }
}

impl Signature {
    /// Convert this `Signature` to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut signature_bytes: [u8; SIGNATURE_LENGTH] = [0u8; SIGNATURE_LENGTH];

        signature_bytes[..32].copy_from_slice(&self.R.as_bytes()[..]);
        signature_bytes[32..].copy_from_slice(&self.s.as_bytes()[..]);
        signature_bytes
    }

    /// The encoding of the commitment point `R`.
    #[inline]
    pub fn r_bytes(&self) -> &[u8; 32] {
        self.R.as_bytes()
    }

    /// The little-endian encoding of the response scalar `s`.
    #[inline]
    pub fn s_bytes(&self) -> &[u8; 32] {
        self.s.as_bytes()
    }

    /// Construct a `Signature` from its 64-byte encoding.
    ///
    /// # Errors
    ///
    /// * the top bit of byte 15 is reserved in a point encoding, so it must
    ///   be clear in `R`;
    /// * `s` is below \\( 2^{252} \\), so the top four bits of byte 63 must be
    ///   clear.
    #[inline]
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LENGTH]) -> Result<Signature, SignatureError> {
        let mut lower: [u8; 32] = [0u8; 32];
        let mut upper: [u8; 32] = [0u8; 32];

        lower.copy_from_slice(&bytes[..32]);
        upper.copy_from_slice(&bytes[32..]);

        if lower[15] & 0x80 != 0 {
            return Err(InternalError::PointDecompression(fourq::CurveError::MalformedEncoding).into());
        }
        if upper[31] & 0xF0 != 0 {
            return Err(InternalError::ScalarFormat.into());
        }

        Ok(Signature {
            R: CompressedPoint(lower),
            s: Scalar::from_bits(upper),
        })
    }

    /// Construct a `Signature` from a slice of bytes.
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Result<Signature, SignatureError> {
        let bytes: &[u8; SIGNATURE_LENGTH] = bytes.try_into().map_err(|_| {
            SignatureError::from(InternalError::BytesLength {
                name: "Signature",
                length: SIGNATURE_LENGTH,
            })
        })?;
        Signature::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = SignatureError;

    fn try_from(bytes: &[u8]) -> Result<Signature, SignatureError> {
        Signature::from_slice(bytes)
    }
}

impl From<Signature> for [u8; SIGNATURE_LENGTH] {
    fn from(signature: Signature) -> [u8; SIGNATURE_LENGTH] {
        signature.to_bytes()
    }
}

impl ::signature::SignatureEncoding for Signature {
    type Repr = [u8; SIGNATURE_LENGTH];
}

#[cfg(feature = "serde")]
impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.to_bytes()[..])
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for Signature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        struct SignatureVisitor;

        impl<'d> Visitor<'d> for SignatureVisitor {
            type Value = Signature;

            fn expecting(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter.write_str("A SchnorrQ signature as 64 bytes.")
            }

            fn visit_bytes<E>(self, bytes: &[u8]) -> Result<Signature, E>
            where
                E: SerdeError,
            {
                Signature::from_slice(bytes).or(Err(SerdeError::invalid_length(bytes.len(), &self)))
            }
        }
        deserializer.deserialize_bytes(SignatureVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reserved_bits_are_rejected() {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[0] = 1;
        assert!(Signature::from_bytes(&bytes).is_ok());

        let mut r_high = bytes;
        r_high[15] |= 0x80;
        assert!(Signature::from_bytes(&r_high).is_err());

        for bit in 4..8 {
            let mut s_high = bytes;
            s_high[63] |= 1 << bit;
            assert!(Signature::from_bytes(&s_high).is_err());
        }

        let mut s_low = bytes;
        s_low[63] = 0x0F;
        assert!(Signature::from_bytes(&s_low).is_ok());
    }

    #[test]
    fn from_slice_checks_length() {
        assert!(Signature::from_slice(&[0u8; 63]).is_err());
        assert!(Signature::from_slice(&[0u8; 65]).is_err());
        assert!(Signature::try_from(&[0u8; 64][..]).is_ok());
    }

    #[test]
    fn bytes_are_preserved() {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        bytes[15] &= 0x7F;
        bytes[63] &= 0x0F;
        let sig = Signature::from_bytes(&bytes).unwrap();
        assert_eq!(sig.to_bytes(), bytes);
        assert_eq!(&sig.r_bytes()[..], &bytes[..32]);
        assert_eq!(&sig.s_bytes()[..], &bytes[32..]);
    }
}
