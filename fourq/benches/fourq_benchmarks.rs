#![allow(non_snake_case)]

use rand::rngs::OsRng;
use rand::thread_rng;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use fourq::constants;
use fourq::scalar::Scalar;

mod edwards_benches {
    use super::*;

    use fourq::edwards::ExtendedPoint;

    fn compress(c: &mut Criterion) {
        let G = constants::GENERATOR.to_extended();
        c.bench_function("ExtendedPoint compression", move |b| b.iter(|| G.compress()));
    }

    fn decompress(c: &mut Criterion) {
        let G_comp = &constants::GENERATOR_COMPRESSED;
        c.bench_function("CompressedPoint decompression", move |b| {
            b.iter(|| G_comp.decompress().unwrap())
        });
    }

    fn consttime_fixed_base_scalar_mul(c: &mut Criterion) {
        let s = Scalar::random(&mut OsRng);
        c.bench_function("Constant-time fixed-base scalar mul", move |b| {
            b.iter(|| ExtendedPoint::mul_base(&s))
        });
    }

    fn consttime_variable_base_scalar_mul(c: &mut Criterion) {
        let G = constants::GENERATOR.to_extended();
        let s = Scalar::random(&mut OsRng);
        c.bench_function("Constant-time variable-base scalar mul", move |b| {
            b.iter(|| &G * &s)
        });
    }

    fn cofactor_clearing_scalar_mul(c: &mut Criterion) {
        let G = constants::GENERATOR.to_extended();
        let s = Scalar::random(&mut OsRng);
        c.bench_function("Variable-base scalar mul with cofactor clearing", move |b| {
            b.iter(|| G.variable_base_mul(&s, true).unwrap())
        });
    }

    fn consttime_double_base_scalar_mul(c: &mut Criterion) {
        c.bench_function("Constant-time aG+bQ, Q variable, G fixed", |bench| {
            let mut rng = thread_rng();
            let Q = ExtendedPoint::mul_base(&Scalar::random(&mut rng));
            bench.iter_batched(
                || (Scalar::random(&mut rng), Scalar::random(&mut rng)),
                |(a, b)| ExtendedPoint::double_base_mul(&a, &Q, &b).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }

    criterion_group! {
        name = edwards_benches;
        config = Criterion::default();
        targets =
        compress,
        decompress,
        consttime_fixed_base_scalar_mul,
        consttime_variable_base_scalar_mul,
        cofactor_clearing_scalar_mul,
        consttime_double_base_scalar_mul,
    }
}

mod scalar_benches {
    use super::*;

    fn scalar_arith(c: &mut Criterion) {
        let mut rng = thread_rng();

        c.bench_function("Scalar multiplication", |b| {
            b.iter_batched(
                || (Scalar::random(&mut rng), Scalar::random(&mut rng)),
                |(x, y)| x * y,
                BatchSize::SmallInput,
            )
        });
    }

    fn scalar_decompose(c: &mut Criterion) {
        let s = Scalar::random(&mut OsRng);
        c.bench_function("Scalar decomposition", move |b| b.iter(|| s.decompose()));
    }

    criterion_group! {
        name = scalar_benches;
        config = Criterion::default();
        targets =
        scalar_arith,
        scalar_decompose,
    }
}

criterion_main!(scalar_benches::scalar_benches, edwards_benches::edwards_benches,);
