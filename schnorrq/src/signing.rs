// -*- mode: rust; -*-
//
// This file is part of schnorrq.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! SchnorrQ secret key types.

use core::convert::TryFrom;
use core::fmt::Debug;

#[cfg(feature = "rand_core")]
use rand_core::CryptoRngCore;

use sha2::Sha512;

#[cfg(feature = "serde")]
use serde::de::Error as SerdeError;
#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::*;
use crate::errors::*;
use crate::hazmat::{self, ExpandedSecretKey};
use crate::signature::Signature;
use crate::verifying::VerifyingKey;

/// A SchnorrQ secret key.
///
/// Instances of this secret are automatically overwritten with zeroes when they
/// fall out of scope.
#[derive(Clone)]
pub struct SecretKey(pub(crate) [u8; SECRET_KEY_LENGTH]);

#[cfg(feature = "zeroize")]
impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.zeroize()
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for SecretKey {}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

impl AsRef<[u8]> for SecretKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<[u8; SECRET_KEY_LENGTH]> for SecretKey {
    fn from(bytes: [u8; SECRET_KEY_LENGTH]) -> SecretKey {
        SecretKey(bytes)
    }
}

impl SecretKey {
    /// Convert this secret key to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        self.0
    }

    /// View this secret key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LENGTH] {
        &self.0
    }

    /// Generate a `SecretKey` from a `csprng`.
    #[cfg(feature = "rand_core")]
    pub fn generate<R: CryptoRngCore + ?Sized>(csprng: &mut R) -> SecretKey {
        let mut sk = SecretKey([0u8; SECRET_KEY_LENGTH]);
        csprng.fill_bytes(&mut sk.0);
        sk
    }
}

/// A SchnorrQ signing key: the secret key, its SHA-512 expansion
/// \\( k = H(sk) \\), and the public key
/// \\( \mathrm{encode}((k_{0..32} \bmod r) G) \\).
#[derive(Clone)]
pub struct SigningKey {
    /// The secret half of this signing key.
    pub(crate) secret_key: SecretKey,
    /// The expansion of `secret_key` used for signing.
    pub(crate) expanded: ExpandedSecretKey,
    /// The public half of this signing key.
    pub(crate) verifying_key: VerifyingKey,
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl SigningKey {
    /// Construct a [`SigningKey`] from a [`SecretKey`].
    #[inline]
    pub fn from_secret_key(secret_key: SecretKey) -> Self {
        let expanded = ExpandedSecretKey::from_secret_key::<Sha512>(secret_key.as_bytes());
        let verifying_key = VerifyingKey::from(&expanded);
        SigningKey {
            secret_key,
            expanded,
            verifying_key,
        }
    }

    /// Construct a [`SigningKey`] from the bytes of a [`SecretKey`].
    ///
    /// # Example
    ///
    /// ```
    /// use schnorrq::SigningKey;
    /// use schnorrq::SECRET_KEY_LENGTH;
    ///
    /// let secret_key_bytes: [u8; SECRET_KEY_LENGTH] = [
    ///    157, 097, 177, 157, 239, 253, 090, 096,
    ///    186, 132, 074, 244, 146, 236, 044, 196,
    ///    068, 073, 197, 105, 123, 050, 105, 025,
    ///    112, 059, 172, 003, 028, 174, 127, 096, ];
    ///
    /// let signing_key: SigningKey = SigningKey::from_bytes(&secret_key_bytes);
    /// assert_eq!(signing_key.to_bytes(), secret_key_bytes);
    /// ```
    #[inline]
    pub fn from_bytes(secret_key: &[u8; SECRET_KEY_LENGTH]) -> Self {
        SigningKey::from_secret_key(SecretKey(*secret_key))
    }

    /// Convert this [`SigningKey`] into a byte array holding its secret key.
    #[inline]
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        self.secret_key.to_bytes()
    }

    /// View the secret key of this [`SigningKey`].
    #[inline]
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LENGTH] {
        self.secret_key.as_bytes()
    }

    /// Construct a [`SigningKey`] from a secret key followed by its public
    /// key.
    ///
    /// # Returns
    ///
    /// A `Result` whose okay value is a [`SigningKey`] or whose error value
    /// is a `SignatureError`: the public half does not decode, or it does
    /// not belong to the secret half.
    #[inline]
    pub fn from_keypair_bytes(bytes: &[u8; KEYPAIR_LENGTH]) -> Result<SigningKey, SignatureError> {
        let mut secret_key = [0u8; SECRET_KEY_LENGTH];
        let mut public_key = [0u8; PUBLIC_KEY_LENGTH];
        secret_key.copy_from_slice(&bytes[..SECRET_KEY_LENGTH]);
        public_key.copy_from_slice(&bytes[SECRET_KEY_LENGTH..]);

        let signing_key = SigningKey::from_bytes(&secret_key);
        let verifying_key = VerifyingKey::from_bytes(&public_key)?;

        #[cfg(feature = "zeroize")]
        secret_key.zeroize();

        if signing_key.verifying_key() != verifying_key {
            return Err(InternalError::MismatchedKeypair.into());
        }
        Ok(signing_key)
    }

    /// Convert this signing key to a 64-byte keypair: the secret key
    /// followed by the public key.
    pub fn to_keypair_bytes(&self) -> [u8; KEYPAIR_LENGTH] {
        let mut bytes: [u8; KEYPAIR_LENGTH] = [0u8; KEYPAIR_LENGTH];

        bytes[..SECRET_KEY_LENGTH].copy_from_slice(self.secret_key.as_bytes());
        bytes[SECRET_KEY_LENGTH..].copy_from_slice(self.verifying_key.as_bytes());
        bytes
    }

    /// Get the [`VerifyingKey`] for this [`SigningKey`].
    pub fn verifying_key(&self) -> VerifyingKey {
        self.verifying_key
    }

    /// Generate a SchnorrQ signing key.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "rand_core")]
    /// # {
    /// use rand::rngs::OsRng;
    /// use schnorrq::{Signature, Signer, SigningKey, Verifier};
    ///
    /// let mut csprng = OsRng;
    /// let signing_key: SigningKey = SigningKey::generate(&mut csprng);
    /// let signature: Signature = signing_key.sign(b"hello");
    /// assert!(signing_key.verify(b"hello", &signature).is_ok());
    /// # }
    /// ```
    ///
    /// # Input
    ///
    /// A CSPRNG with a `fill_bytes()` method, e.g. `rand_core::OsRng`.
    #[cfg(feature = "rand_core")]
    pub fn generate<R: CryptoRngCore + ?Sized>(csprng: &mut R) -> SigningKey {
        SigningKey::from_secret_key(SecretKey::generate(csprng))
    }

    /// Verify a signature on a message with this signing key's public key.
    pub fn verify_strict(
        &self,
        message: &[u8],
        signature: &Signature,
    ) -> Result<(), SignatureError> {
        self.verifying_key.verify_strict(message, signature)
    }
}

impl AsRef<VerifyingKey> for SigningKey {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl ::signature::KeypairRef for SigningKey {
    type VerifyingKey = VerifyingKey;
}

impl ::signature::Signer<Signature> for SigningKey {
    /// Sign a message with this signing key's secret key.
    fn try_sign(&self, message: &[u8]) -> Result<Signature, SignatureError> {
        Ok(hazmat::raw_sign::<Sha512>(
            &self.expanded,
            message,
            &self.verifying_key,
        ))
    }
}

impl ::signature::Verifier<Signature> for SigningKey {
    /// Verify a signature on a message with this signing key's public key.
    fn verify(&self, message: &[u8], signature: &Signature) -> Result<(), SignatureError> {
        self.verifying_key.verify(message, signature)
    }
}

impl From<SecretKey> for SigningKey {
    #[inline]
    fn from(secret: SecretKey) -> Self {
        Self::from_secret_key(secret)
    }
}

impl From<&[u8; SECRET_KEY_LENGTH]> for SigningKey {
    #[inline]
    fn from(secret: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self::from_bytes(secret)
    }
}

impl TryFrom<&[u8]> for SigningKey {
    type Error = SignatureError;

    fn try_from(bytes: &[u8]) -> Result<SigningKey, SignatureError> {
        let bytes: &[u8; SECRET_KEY_LENGTH] = bytes.try_into().map_err(|_| {
            SignatureError::from(InternalError::BytesLength {
                name: "SecretKey",
                length: SECRET_KEY_LENGTH,
            })
        })?;
        Ok(SigningKey::from_bytes(bytes))
    }
}

#[cfg(feature = "serde")]
impl Serialize for SigningKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(self.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for SigningKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        struct SigningKeyVisitor;

        impl<'de> Visitor<'de> for SigningKeyVisitor {
            type Value = SigningKey;

            fn expecting(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(formatter, "A SchnorrQ secret key as {} bytes", SECRET_KEY_LENGTH)
            }

            fn visit_bytes<E: SerdeError>(self, bytes: &[u8]) -> Result<SigningKey, E> {
                SigningKey::try_from(bytes).map_err(E::custom)
            }
        }

        deserializer.deserialize_bytes(SigningKeyVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use ::signature::{Keypair, Signer, Verifier};

    #[test]
    fn keypair_bytes_round_trip() {
        let signing_key = SigningKey::from_bytes(&[0x42; 32]);
        let bytes = signing_key.to_keypair_bytes();
        let recovered = SigningKey::from_keypair_bytes(&bytes).unwrap();
        assert_eq!(recovered.to_bytes(), signing_key.to_bytes());
        assert_eq!(recovered.verifying_key(), signing_key.verifying_key());
    }

    #[test]
    fn mismatched_keypair_is_rejected() {
        let a = SigningKey::from_bytes(&[0x01; 32]);
        let b = SigningKey::from_bytes(&[0x02; 32]);
        let mut bytes = a.to_keypair_bytes();
        bytes[32..].copy_from_slice(b.verifying_key().as_bytes());
        assert!(SigningKey::from_keypair_bytes(&bytes).is_err());
    }

    #[test]
    fn keypair_trait_matches_inherent() {
        let signing_key = SigningKey::from_bytes(&[0x03; 32]);
        assert_eq!(
            Keypair::verifying_key(&signing_key),
            signing_key.verifying_key()
        );
    }

    #[test]
    fn sign_then_verify() {
        let signing_key = SigningKey::from_bytes(&[0x04; 32]);
        let sig: Signature = signing_key.sign(b"abc");
        assert!(signing_key.verify(b"abc", &sig).is_ok());
        assert!(signing_key.verify_strict(b"abc", &sig).is_ok());
        assert!(signing_key.verify(b"abd", &sig).is_err());
    }

    #[test]
    fn signing_is_deterministic() {
        let signing_key = SigningKey::from_bytes(&[0x05; 32]);
        assert_eq!(signing_key.sign(b"m"), signing_key.sign(b"m"));
        assert_ne!(signing_key.sign(b"m"), signing_key.sign(b"n"));
    }

    #[test]
    fn debug_hides_secret() {
        let signing_key = SigningKey::from_bytes(&[0xAB; 32]);
        let s = format!("{:?}", signing_key);
        assert!(s.starts_with("SigningKey { verifying_key: VerifyingKey("));
        assert!(s.ends_with(", .. }"));
        assert_eq!(format!("{:?}", signing_key.secret_key), "SecretKey { .. }");
    }
}
