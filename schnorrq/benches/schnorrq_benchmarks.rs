// -*- mode: rust; -*-
//
// This file is part of schnorrq.
// Copyright (c) 2018 Isis Lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - Isis Agora Lovecruft <isis@patternsinthevoid.net>

use criterion::{criterion_group, criterion_main, Criterion};

mod schnorrq_benches {
    use super::*;
    use rand::rngs::OsRng;
    use schnorrq::hazmat::{raw_sign, ExpandedSecretKey};
    use schnorrq::{Sha512, Signature, Signer, SigningKey, Verifier, VerifyingKey};

    fn sign(c: &mut Criterion) {
        let mut csprng = OsRng;
        let signing_key: SigningKey = SigningKey::generate(&mut csprng);
        let msg: &[u8] = b"";

        c.bench_function("SchnorrQ signing", move |b| b.iter(|| signing_key.sign(msg)));
    }

    fn sign_expanded_key(c: &mut Criterion) {
        let mut csprng = OsRng;
        let signing_key: SigningKey = SigningKey::generate(&mut csprng);
        let expanded = ExpandedSecretKey::from_secret_key::<Sha512>(signing_key.as_bytes());
        let verifying_key = signing_key.verifying_key();
        let msg: &[u8] = b"";

        c.bench_function("SchnorrQ signing with an expanded secret key", move |b| {
            b.iter(|| raw_sign::<Sha512>(&expanded, msg, &verifying_key))
        });
    }

    fn verify(c: &mut Criterion) {
        let mut csprng = OsRng;
        let signing_key: SigningKey = SigningKey::generate(&mut csprng);
        let msg: &[u8] = b"";
        let sig: Signature = signing_key.sign(msg);
        let verifying_key = signing_key.verifying_key();

        c.bench_function("SchnorrQ signature verification", move |b| {
            b.iter(|| verifying_key.verify(msg, &sig))
        });
    }

    fn verify_strict(c: &mut Criterion) {
        let mut csprng = OsRng;
        let signing_key: SigningKey = SigningKey::generate(&mut csprng);
        let msg: &[u8] = b"";
        let sig: Signature = signing_key.sign(msg);
        let verifying_key = signing_key.verifying_key();

        c.bench_function("SchnorrQ strict signature verification", move |b| {
            b.iter(|| verifying_key.verify_strict(msg, &sig))
        });
    }

    fn key_generation(c: &mut Criterion) {
        let mut csprng = OsRng;

        c.bench_function("SchnorrQ keypair generation", move |b| {
            b.iter(|| SigningKey::generate(&mut csprng))
        });
    }

    fn key_decompression(c: &mut Criterion) {
        let mut csprng = OsRng;
        let bytes = SigningKey::generate(&mut csprng).verifying_key().to_bytes();

        c.bench_function("SchnorrQ public key decompression", move |b| {
            b.iter(|| VerifyingKey::from_bytes(&bytes))
        });
    }

    criterion_group! {
        name = schnorrq_benches;
        config = Criterion::default();
        targets =
            sign,
            sign_expanded_key,
            verify,
            verify_strict,
            key_generation,
            key_decompression,
    }
}

criterion_main!(schnorrq_benches::schnorrq_benches);
