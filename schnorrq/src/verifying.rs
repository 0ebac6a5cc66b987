// -*- mode: rust; -*-
//
// This file is part of schnorrq.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! SchnorrQ public keys.

use core::convert::TryFrom;
use core::fmt::Debug;
use core::hash::{Hash, Hasher};

use fourq::edwards::CompressedPoint;
use fourq::edwards::ExtendedPoint;

use sha2::Sha512;

#[cfg(feature = "serde")]
use serde::de::Error as SerdeError;
#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::*;
use crate::errors::*;
use crate::hazmat::{self, ExpandedSecretKey};
use crate::signature::Signature;
use crate::signing::SigningKey;

/// A SchnorrQ public key.
///
/// # Note
///
/// The `Eq` and `Hash` impls here use the point encoding, _not_ the
/// algebraic representation.  Decoding rejects the encodings that are not
/// canonical, so the two agree.
// Invariant: VerifyingKey.point is always the decompression of VerifyingKey.compressed
#[derive(Copy, Clone, Default, Eq)]
pub struct VerifyingKey {
    /// Serialized compressed FourQ point.
    pub(crate) compressed: CompressedPoint,

    /// Decompressed point used for curve arithmetic operations.
    pub(crate) point: ExtendedPoint,
}

impl Debug for VerifyingKey {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "VerifyingKey({:?}, {:?})", self.compressed, self.point)
    }
}

impl AsRef<[u8]> for VerifyingKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Hash for VerifyingKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialEq<VerifyingKey> for VerifyingKey {
    fn eq(&self, other: &VerifyingKey) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl From<&ExpandedSecretKey> for VerifyingKey {
    /// Derive this public key from its corresponding `ExpandedSecretKey`.
    fn from(expanded_secret_key: &ExpandedSecretKey) -> VerifyingKey {
        let point = ExtendedPoint::mul_base(&expanded_secret_key.scalar);
        let compressed = point.compress();

        // Invariant: VerifyingKey.point is always the decompression of VerifyingKey.compressed
        VerifyingKey { compressed, point }
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(signing_key: &SigningKey) -> VerifyingKey {
        signing_key.verifying_key()
    }
}

impl VerifyingKey {
    /// Convert this public key to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.compressed.to_bytes()
    }

    /// View this public key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        self.compressed.as_bytes()
    }

    /// Construct a `VerifyingKey` from its 32-byte encoding.
    ///
    /// # Example
    ///
    /// ```
    /// use schnorrq::VerifyingKey;
    /// use schnorrq::PUBLIC_KEY_LENGTH;
    /// use schnorrq::SignatureError;
    ///
    /// # fn doctest() -> Result<VerifyingKey, SignatureError> {
    /// let public_key_bytes: [u8; PUBLIC_KEY_LENGTH] = [
    ///    0x41, 0xae, 0x5f, 0x6d, 0x8f, 0xcf, 0x29, 0x5b, 0x2b, 0x67, 0xa5, 0x7b, 0x97, 0xfe, 0x58, 0x67,
    ///    0x48, 0x18, 0xfa, 0x17, 0xb0, 0x48, 0x44, 0xf6, 0x97, 0xf5, 0x80, 0x99, 0xdd, 0x08, 0x85, 0x6f];
    ///
    /// let public_key = VerifyingKey::from_bytes(&public_key_bytes)?;
    /// #
    /// # Ok(public_key)
    /// # }
    /// #
    /// # fn main() {
    /// #     assert!(doctest().is_ok());
    /// # }
    /// ```
    ///
    /// # Returns
    ///
    /// A `Result` whose okay value is a `VerifyingKey` or whose error value
    /// is a `SignatureError` describing the error that occurred: the
    /// reserved bit 7 of byte 15 is set, a coordinate is not canonical, or
    /// the bytes do not decode to a point on the curve.
    #[inline]
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<VerifyingKey, SignatureError> {
        let compressed = CompressedPoint(*bytes);
        let point = compressed
            .decompress()
            .map_err(InternalError::PointDecompression)?
            .to_extended();

        // Invariant: VerifyingKey.point is always the decompression of VerifyingKey.compressed
        Ok(VerifyingKey { compressed, point })
    }

    /// Returns whether this is a _weak_ public key, i.e., if this public key
    /// is of small order.
    ///
    /// A weak public key can be used to generate a signature that's valid
    /// for almost every message.  [`Self::verify_strict`] denies keys with
    /// any torsion component.
    pub fn is_weak(&self) -> bool {
        self.point.is_small_order()
    }

    /// Strictly verify a signature on a message with this public key.
    ///
    /// In addition to the checks of [`Verifier::verify`], the public key must
    /// lie in the prime-order subgroup.
    ///
    /// [`Verifier::verify`]: ::signature::Verifier::verify
    pub fn verify_strict(
        &self,
        message: &[u8],
        signature: &Signature,
    ) -> Result<(), SignatureError> {
        if !self.point.is_torsion_free() {
            return Err(InternalError::WeakKey.into());
        }
        hazmat::raw_verify::<Sha512>(self, message, signature)
    }
}

impl ::signature::Verifier<Signature> for VerifyingKey {
    /// Verify a signature on a message with this public key.
    ///
    /// # Return
    ///
    /// Returns `Ok(())` if the signature is valid, and `Err` otherwise.
    fn verify(&self, message: &[u8], signature: &Signature) -> Result<(), SignatureError> {
        hazmat::raw_verify::<Sha512>(self, message, signature)
    }
}

impl TryFrom<&[u8]> for VerifyingKey {
    type Error = SignatureError;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<VerifyingKey, SignatureError> {
        let bytes = bytes.try_into().map_err(|_| InternalError::BytesLength {
            name: "VerifyingKey",
            length: PUBLIC_KEY_LENGTH,
        })?;
        Self::from_bytes(bytes)
    }
}

impl From<VerifyingKey> for ExtendedPoint {
    fn from(vk: VerifyingKey) -> ExtendedPoint {
        vk.point
    }
}

#[cfg(feature = "serde")]
impl Serialize for VerifyingKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.as_bytes()[..])
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for VerifyingKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        struct VerifyingKeyVisitor;

        impl<'de> Visitor<'de> for VerifyingKeyVisitor {
            type Value = VerifyingKey;

            fn expecting(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(formatter, "An encoded FourQ point as {} bytes", PUBLIC_KEY_LENGTH)
            }

            fn visit_bytes<E: SerdeError>(self, bytes: &[u8]) -> Result<VerifyingKey, E> {
                VerifyingKey::try_from(bytes).map_err(E::custom)
            }
        }

        deserializer.deserialize_bytes(VerifyingKeyVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use fourq::constants::GENERATOR_COMPRESSED;
    use fourq::traits::Identity;

    #[test]
    fn generator_is_a_valid_key() {
        let vk = VerifyingKey::from_bytes(GENERATOR_COMPRESSED.as_bytes()).unwrap();
        assert_eq!(vk.to_bytes(), GENERATOR_COMPRESSED.to_bytes());
        assert!(!vk.is_weak());
    }

    #[test]
    fn reserved_bit_is_rejected() {
        let mut bytes = GENERATOR_COMPRESSED.to_bytes();
        bytes[15] |= 0x80;
        assert!(VerifyingKey::from_bytes(&bytes).is_err());
    }

    #[test]
    fn identity_is_weak() {
        let vk = VerifyingKey::from_bytes(CompressedPoint::identity().as_bytes()).unwrap();
        assert!(vk.is_weak());
    }

    #[test]
    fn slices_of_the_wrong_length_are_rejected() {
        let bytes = GENERATOR_COMPRESSED.to_bytes();
        assert!(VerifyingKey::try_from(&bytes[..31]).is_err());
        assert!(VerifyingKey::try_from(&bytes[..]).is_ok());
    }
}
