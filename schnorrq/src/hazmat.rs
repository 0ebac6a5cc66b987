// -*- mode: rust; -*-
//
// This file is part of schnorrq.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Low-level interfaces to SchnorrQ functions
//!
//! # ⚠️ Warning: Hazmat
//!
//! These primitives are easy-to-misuse low-level interfaces.
//!
//! If you are an end user / non-expert cryptographer, **do not use any of these functions**.
//! Failure to use them correctly can lead to catastrophic failures including **full private key
//! recovery.**

use fourq::digest::generic_array::typenum::U64;
use fourq::digest::Digest;
use fourq::edwards::{CompressedPoint, ExtendedPoint};
use fourq::scalar::Scalar;

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::*;
use crate::errors::*;
use crate::signature::Signature;
use crate::verifying::VerifyingKey;

/// Contains the secret scalar and domain separator used for generating signatures.
///
/// This is used internally for signing.
///
/// In the usual SchnorrQ signing algorithm, `scalar` and `hash_prefix` are
/// the two halves of the digest of the secret key.  With this type, users
/// can provide them directly.
///
/// # ⚠️  Cautions
///
/// It is extremely important that you use a different `hash_prefix` for
/// every `scalar`.  Reusing a prefix under another scalar can leak the
/// secret key.
#[derive(Clone)]
pub struct ExpandedSecretKey {
    /// The secret scalar used for signing, reduced modulo \\( r \\).
    pub scalar: Scalar,
    /// The domain separator used when hashing the message to generate the
    /// pseudorandom nonce `r`.
    pub hash_prefix: [u8; 32],
}

#[cfg(feature = "zeroize")]
impl Drop for ExpandedSecretKey {
    fn drop(&mut self) {
        self.scalar.zeroize();
        self.hash_prefix.zeroize()
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for ExpandedSecretKey {}

impl ExpandedSecretKey {
    /// Construct an `ExpandedSecretKey` from an array of 64 bytes.  The
    /// lower half is read as a little-endian integer and reduced modulo
    /// \\( r \\); the upper half is the nonce prefix.
    pub fn from_bytes(bytes: &[u8; EXPANDED_SECRET_KEY_LENGTH]) -> Self {
        let mut scalar_bytes: [u8; 32] = [0u8; 32];
        let mut hash_prefix: [u8; 32] = [0u8; 32];
        scalar_bytes.copy_from_slice(&bytes[00..32]);
        hash_prefix.copy_from_slice(&bytes[32..64]);

        let scalar = Scalar::from_bytes_mod_order(scalar_bytes);

        #[cfg(feature = "zeroize")]
        scalar_bytes.zeroize();

        ExpandedSecretKey {
            scalar,
            hash_prefix,
        }
    }

    /// Expand a 32-byte secret key with the hash function `D`.
    pub fn from_secret_key<D>(secret_key: &[u8; SECRET_KEY_LENGTH]) -> Self
    where
        D: Digest<OutputSize = U64>,
    {
        let mut h = D::new();
        h.update(secret_key);
        let mut hash = [0u8; EXPANDED_SECRET_KEY_LENGTH];
        hash.copy_from_slice(h.finalize().as_slice());

        let expanded = ExpandedSecretKey::from_bytes(&hash);

        #[cfg(feature = "zeroize")]
        hash.zeroize();

        expanded
    }
}

/// Hash `parts` in order with `D` and reduce the first 32 bytes of the
/// digest modulo \\( r \\).
pub(crate) fn hash_to_scalar<D>(parts: &[&[u8]]) -> Scalar
where
    D: Digest<OutputSize = U64>,
{
    let mut h = D::new();
    for part in parts {
        h.update(part);
    }
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&h.finalize().as_slice()[..32]);
    Scalar::from_bytes_mod_order(bytes)
}

/// The challenge \\( h = H(R \Vert A \Vert M) \\).
#[allow(non_snake_case)]
pub(crate) fn compute_challenge<D>(R: &CompressedPoint, A: &CompressedPoint, M: &[u8]) -> Scalar
where
    D: Digest<OutputSize = U64>,
{
    hash_to_scalar::<D>(&[&R.as_bytes()[..], &A.as_bytes()[..], M])
}

/// Compute an ordinary SchnorrQ signature over the given message with the
/// hash function `D`.
///
/// # ⚠️  Unsafe
///
/// Do NOT use this function unless you absolutely must.  Using the wrong
/// `verifying_key` here leaks the secret key.
#[allow(non_snake_case)]
pub fn raw_sign<D>(
    expanded_secret_key: &ExpandedSecretKey,
    message: &[u8],
    verifying_key: &VerifyingKey,
) -> Signature
where
    D: Digest<OutputSize = U64>,
{
    let mut r = hash_to_scalar::<D>(&[&expanded_secret_key.hash_prefix[..], message]);
    let R: CompressedPoint = ExtendedPoint::mul_base(&r).compress();

    let h = compute_challenge::<D>(&R, &verifying_key.compressed, message);
    let s: Scalar = &r - &(&h * &expanded_secret_key.scalar);

    #[cfg(feature = "zeroize")]
    r.zeroize();

    Signature { R, s }
}

/// Verify an ordinary SchnorrQ signature over the given message with the
/// hash function `D`.
///
/// The signature is accepted iff \\( \mathrm{encode}(sG + hA) = R \\).
#[allow(non_snake_case)]
pub fn raw_verify<D>(
    verifying_key: &VerifyingKey,
    message: &[u8],
    signature: &Signature,
) -> Result<(), SignatureError>
where
    D: Digest<OutputSize = U64>,
{
    let h = compute_challenge::<D>(&signature.R, &verifying_key.compressed, message);
    let expected_R = ExtendedPoint::double_base_mul(&signature.s, &verifying_key.point, &h)
        .map_err(InternalError::PointDecompression)?
        .compress();

    if expected_R == signature.R {
        Ok(())
    } else {
        Err(InternalError::Verify.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use sha2::{Sha256, Sha512};

    use crate::signing::SigningKey;

    // A 512-bit hash built from SHA-256: H(m) || H(H(m)).
    #[derive(Clone, Default)]
    struct Sha256Pair(Sha256);

    impl fourq::digest::HashMarker for Sha256Pair {}

    impl fourq::digest::OutputSizeUser for Sha256Pair {
        type OutputSize = U64;
    }

    impl fourq::digest::Update for Sha256Pair {
        fn update(&mut self, data: &[u8]) {
            fourq::digest::Update::update(&mut self.0, data);
        }
    }

    impl fourq::digest::FixedOutput for Sha256Pair {
        fn finalize_into(self, out: &mut fourq::digest::Output<Self>) {
            let first = self.0.finalize();
            out[..32].copy_from_slice(&first);
            out[32..].copy_from_slice(&Sha256::digest(first));
        }
    }

    #[test]
    fn sign_verify_sha512() {
        let signing_key = SigningKey::from_bytes(&[0x11; 32]);
        let esk = ExpandedSecretKey::from_secret_key::<Sha512>(&signing_key.to_bytes());
        let vk = signing_key.verifying_key();

        let sig = raw_sign::<Sha512>(&esk, b"hazmat", &vk);
        assert!(raw_verify::<Sha512>(&vk, b"hazmat", &sig).is_ok());
        assert!(raw_verify::<Sha512>(&vk, b"Hazmat", &sig).is_err());
    }

    #[test]
    fn sign_verify_other_digest() {
        let esk = ExpandedSecretKey::from_secret_key::<Sha256Pair>(&[0x22; 32]);
        let vk = VerifyingKey::from(&esk);

        let sig = raw_sign::<Sha256Pair>(&esk, b"message", &vk);
        assert!(raw_verify::<Sha256Pair>(&vk, b"message", &sig).is_ok());
        // The digests differ, so the challenge differs.
        assert!(raw_verify::<Sha512>(&vk, b"message", &sig).is_err());
    }

    #[test]
    fn expanded_key_reduces_scalar() {
        let mut bytes = [0xFFu8; 64];
        bytes[40] = 0x5A;
        let esk = ExpandedSecretKey::from_bytes(&bytes);
        assert_eq!(esk.scalar, Scalar::from_bytes_mod_order([0xFF; 32]));
        assert_eq!(esk.hash_prefix[8], 0x5A);
        assert_eq!(esk.scalar.is_canonical().unwrap_u8(), 1);
    }
}
