// -*- mode: rust; -*-
//
// This file is part of schnorrq.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Integration tests for SchnorrQ signatures.

use schnorrq::*;

fn from_hex<const N: usize>(s: &str) -> [u8; N] {
    let bytes = hex::decode(s).unwrap();
    <[u8; N]>::try_from(bytes).unwrap()
}

#[cfg(test)]
mod vectors {
    use super::*;

    fn signing_key(hex_sk: &str) -> SigningKey {
        let sk = from_hex(hex_sk);
        SigningKey::from_bytes(&sk)
    }

    #[test]
    fn key_generation() {
        let cases = [
            (
                "9aa51ec6af8420987dee03b1453a9eeb8e7bf17db8b7a175b6294ba2095410bd",
                "41ae5f6d8fcf295b2b67a57b97fe58674818fa17b04844f697f58099dd08856f",
            ),
            (
                "375c79e3c979f6354f60018064ed8ea6bb26c6be7f712d4d814ba80942ecf3c2",
                "507edd7fe7d21958f270a5f893260600a22485badcd9b1a7433678fd946c2ee4",
            ),
            (
                "e1669de6854996e05c23d5e95e51022e61df5134957a1fecc939e3517ca95604",
                "e4a87eef77e983ff7b974b3b29f4b141efa2e12de6a17d3a21dac77164788ddf",
            ),
        ];
        for (sk, pk) in cases.iter() {
            let expected = from_hex(pk);
            assert_eq!(signing_key(sk).verifying_key().to_bytes(), expected);
            assert!(VerifyingKey::from_bytes(&expected).is_ok());
        }
    }

    #[test]
    fn sign_single_byte_message() {
        let key = signing_key("9aa51ec6af8420987dee03b1453a9eeb8e7bf17db8b7a175b6294ba2095410bd");
        let expected = from_hex(
            "f81ec975a9e0d24c480f1456104ca73c2d2785640f45266d03de6b1ef23d9c7e\
             dbc5904c4df55027393e3f25cf6a08e889fddd074b2c50e97f5962465e551c00",
        );

        let signature: Signature = key.sign(&[0xcb]);
        assert_eq!(signature.to_bytes(), expected);
        assert!(key.verifying_key().verify(&[0xcb], &signature).is_ok());
    }

    #[test]
    fn sign_three_byte_message() {
        let key = signing_key("e1669de6854996e05c23d5e95e51022e61df5134957a1fecc939e3517ca95604");
        let message = hex::decode("f9817e").unwrap();
        let expected = from_hex(
            "132bf1f7a96c8e5a94202ceeb289ff5c47690bd27a95a5bb7bec35c0c9fcaba8\
             e58c77c6792513d64eb93b42575752b6633e1db6ad86b62e0a53831bd40d0900",
        );

        let signature: Signature = key.sign(&message);
        assert_eq!(signature.to_bytes(), expected);

        let pk = from_hex(
            "e4a87eef77e983ff7b974b3b29f4b141efa2e12de6a17d3a21dac77164788ddf",
        );
        let verifying_key = VerifyingKey::from_bytes(&pk).unwrap();
        let parsed = Signature::from_bytes(&expected).unwrap();
        assert!(verifying_key.verify(&message, &parsed).is_ok());
        assert!(verifying_key.verify_strict(&message, &parsed).is_ok());
    }
}

#[cfg(test)]
mod integrations {
    use super::*;
    use rand::rngs::OsRng;
    use rand::RngCore;

    fn random_signing_key() -> SigningKey {
        let mut sk = [0u8; SECRET_KEY_LENGTH];
        OsRng.fill_bytes(&mut sk);
        SigningKey::from_bytes(&sk)
    }

    #[test]
    fn sign_verify() {
        let good: &[u8] = "test message".as_bytes();
        let bad: &[u8] = "wrong message".as_bytes();

        let signing_key = random_signing_key();
        let verifying_key = signing_key.verifying_key();
        let good_sig: Signature = signing_key.sign(good);
        let bad_sig: Signature = signing_key.sign(bad);

        assert!(signing_key.verify(good, &good_sig).is_ok());
        assert!(verifying_key.verify(good, &good_sig).is_ok());
        assert!(verifying_key.verify(good, &bad_sig).is_err());
        assert!(verifying_key.verify(bad, &good_sig).is_err());
    }

    #[test]
    fn tampered_signatures_fail() {
        let signing_key = random_signing_key();
        let verifying_key = signing_key.verifying_key();
        let message = b"Lorem ipsum dolor sit amet";
        let bytes = signing_key.sign(message).to_bytes();

        // Flip one bit in R and one in s; the reserved bits are left alone.
        for &(byte, bit) in [(0usize, 0u8), (20, 3), (32, 0), (50, 7)].iter() {
            let mut tampered = bytes;
            tampered[byte] ^= 1 << bit;
            let signature = Signature::from_bytes(&tampered).unwrap();
            assert!(verifying_key.verify(message, &signature).is_err());
        }
    }

    #[test]
    fn wrong_key_fails() {
        let a = random_signing_key();
        let b = random_signing_key();
        let sig = a.sign(b"message");
        assert!(b.verifying_key().verify(b"message", &sig).is_err());
    }

    #[test]
    fn signatures_round_trip_through_bytes() {
        let signing_key = random_signing_key();
        let sig = signing_key.sign(b"bytes");
        let parsed = Signature::try_from(&sig.to_bytes()[..]).unwrap();
        assert_eq!(parsed, sig);

        let vk = VerifyingKey::try_from(&signing_key.verifying_key().as_bytes()[..]).unwrap();
        assert_eq!(vk, signing_key.verifying_key());
    }

    #[test]
    fn reserved_bits_are_rejected() {
        let signing_key = random_signing_key();
        let mut pk = signing_key.verifying_key().to_bytes();
        pk[15] |= 0x80;
        assert!(VerifyingKey::from_bytes(&pk).is_err());

        let sig = signing_key.sign(b"bits").to_bytes();
        let mut r_high = sig;
        r_high[15] |= 0x80;
        assert!(Signature::from_bytes(&r_high).is_err());
        let mut s_high = sig;
        s_high[63] |= 0x10;
        assert!(Signature::from_bytes(&s_high).is_err());
    }

    #[test]
    fn public_key_from_secret_matches_hazmat_expansion() {
        let signing_key = random_signing_key();
        let expanded = hazmat::ExpandedSecretKey::from_secret_key::<Sha512>(signing_key.as_bytes());
        assert_eq!(VerifyingKey::from(&expanded), signing_key.verifying_key());
    }

    #[test]
    fn verifying_keys_are_torsion_free() {
        let signing_key = random_signing_key();
        let vk = signing_key.verifying_key();
        assert!(!vk.is_weak());
        let point: fourq::edwards::ExtendedPoint = vk.into();
        assert!(point.is_torsion_free());
    }
}

#[cfg(feature = "serde")]
mod serialisation {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let signing_key = SigningKey::from_bytes(&[0x24; 32]);
        let verifying_key = signing_key.verifying_key();
        let signature = signing_key.sign(b"serde");

        let encoded = bincode::serialize(&signature).unwrap();
        let decoded: Signature = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, signature);

        let encoded = bincode::serialize(&verifying_key).unwrap();
        let decoded: VerifyingKey = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, verifying_key);

        let encoded = bincode::serialize(&signing_key).unwrap();
        let decoded: SigningKey = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded.to_bytes(), signing_key.to_bytes());
    }

    #[test]
    fn serialized_signature_is_length_prefixed() {
        let signature = SigningKey::from_bytes(&[0x25; 32]).sign(b"length");
        let encoded = bincode::serialize(&signature).unwrap();
        // bincode writes a u64 length before the bytes
        assert_eq!(encoded.len(), 8 + SIGNATURE_LENGTH);
        assert_eq!(&encoded[8..], &signature.to_bytes()[..]);
    }
}
