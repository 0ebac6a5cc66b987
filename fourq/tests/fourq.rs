#![allow(non_snake_case)]

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha512};

use fourq::constants::{BASEPOINT_ORDER, GENERATOR, GENERATOR_COMPRESSED};
use fourq::edwards::{CompressedPoint, ExtendedPoint};
use fourq::scalar::Scalar;
use fourq::traits::IsIdentity;
use fourq::CurveError;

/// Public keys derived as the encoding of `H(sk)[..32] * G`.
const KEYGEN_VECTORS: [(&str, &str); 2] = [
    (
        "9aa51ec6af8420987dee03b1453a9eeb8e7bf17db8b7a175b6294ba2095410bd",
        "41ae5f6d8fcf295b2b67a57b97fe58674818fa17b04844f697f58099dd08856f",
    ),
    (
        "375c79e3c979f6354f60018064ed8ea6bb26c6be7f712d4d814ba80942ecf3c2",
        "507edd7fe7d21958f270a5f893260600a22485badcd9b1a7433678fd946c2ee4",
    ),
];

fn random_scalar() -> Scalar {
    let mut bytes = [0u8; 64];
    OsRng.fill_bytes(&mut bytes);
    Scalar::from_bytes_mod_order_wide(&bytes)
}

fn hashed_scalar(secret: &[u8]) -> Scalar {
    let digest = Sha512::digest(secret);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&digest[..32]);
    Scalar::from_bits(bytes)
}

#[test]
fn generator_encoding() {
    assert_eq!(
        hex::encode(GENERATOR_COMPRESSED.as_bytes()),
        "87b2cb2b46a224b95a7820a19bee3f0e5c8b4c8444c3a74942020e63f84a1c6e"
    );
    assert_eq!(ExtendedPoint::mul_base(&Scalar::ONE).compress(), GENERATOR_COMPRESSED);
}

#[test]
fn fixed_base_known_answers() {
    for (sk, pk) in KEYGEN_VECTORS.iter() {
        let sk = hex::decode(sk).unwrap();
        let k = hashed_scalar(&sk);
        let P = ExtendedPoint::mul_base(&k);
        assert_eq!(hex::encode(P.compress().as_bytes()), *pk);
    }
}

#[test]
fn variable_base_known_answers() {
    let G = GENERATOR.to_extended();
    for (sk, pk) in KEYGEN_VECTORS.iter() {
        let sk = hex::decode(sk).unwrap();
        let k = hashed_scalar(&sk);
        let P = G.variable_base_mul(&k, false).unwrap();
        assert_eq!(hex::encode(P.compress().as_bytes()), *pk);
    }
}

#[test]
fn public_keys_decode_into_the_subgroup() {
    for (_, pk) in KEYGEN_VECTORS.iter() {
        let bytes = hex::decode(pk).unwrap();
        let P = CompressedPoint::from_slice(&bytes).unwrap().decompress().unwrap();
        assert_eq!(hex::encode(P.compress().as_bytes()), *pk);
        assert!(P.to_extended().is_torsion_free());
    }
}

#[test]
fn fixed_and_variable_base_agree() {
    let G = GENERATOR.to_extended();
    for _ in 0..16 {
        let k = random_scalar();
        assert_eq!(ExtendedPoint::mul_base(&k), &k * &G);
    }
}

#[test]
fn order_annihilates_generator() {
    assert!(ExtendedPoint::mul_base(&BASEPOINT_ORDER).is_identity());
    assert!((&BASEPOINT_ORDER * &GENERATOR.to_extended()).is_identity());
}

#[test]
fn scalar_homomorphism() {
    let a = random_scalar();
    let b = random_scalar();
    let aG = ExtendedPoint::mul_base(&a);
    let bG = ExtendedPoint::mul_base(&b);
    assert_eq!(&aG + &bG, ExtendedPoint::mul_base(&(a + b)));
    assert_eq!(&aG - &bG, ExtendedPoint::mul_base(&(a - b)));
    assert_eq!(&b * &aG, ExtendedPoint::mul_base(&(a * b)));
}

#[test]
fn double_base_matches_sum() {
    let a = random_scalar();
    let b = random_scalar();
    let Q = ExtendedPoint::mul_base(&random_scalar());
    let sum = ExtendedPoint::double_base_mul(&a, &Q, &b).unwrap();
    assert_eq!(sum, &ExtendedPoint::mul_base(&a) + &(&b * &Q));
}

#[test]
fn decode_encode_round_trip() {
    for _ in 0..32 {
        let P = ExtendedPoint::mul_base(&random_scalar());
        let encoded = P.compress();
        let decoded = encoded.decompress().unwrap();
        assert_eq!(decoded.compress(), encoded);
    }
}

#[test]
fn decode_rejects_garbage() {
    assert_eq!(
        CompressedPoint::from_slice(&[0u8; 33]),
        Err(CurveError::BytesLengthError {
            name: "CompressedPoint",
            length: 32
        })
    );
    assert_eq!(
        CompressedPoint([0xff; 32]).decompress(),
        Err(CurveError::MalformedEncoding)
    );
}

#[cfg(feature = "digest")]
#[test]
fn hash_to_scalar_matches_wide_reduction() {
    let msg = b"FourQ";
    let s = Scalar::hash_from_bytes::<Sha512>(msg);
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&Sha512::digest(msg));
    assert_eq!(s, Scalar::from_bytes_mod_order_wide(&wide));
}
