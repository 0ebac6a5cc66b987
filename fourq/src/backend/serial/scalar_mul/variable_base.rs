// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

#![allow(non_snake_case)]

use crate::backend::serial::curve_models::ProjectivePoint;
use crate::constants::{T_VARBASE, W_VARBASE};
use crate::edwards::ExtendedPoint;
use crate::scalar::Scalar;
use crate::window::VariableBaseTable;

/// Perform constant-time, variable-base scalar multiplication.
///
/// The scalar is reduced mod \\( r \\) and made odd, so a zero scalar is
/// evaluated as \\( r \\); for a point of order \\( r \\) both give the
/// identity.
pub(crate) fn mul(point: &ExtendedPoint, scalar: &Scalar) -> ExtendedPoint {
    // Construct a lookup table of [P, 3P, 5P, ..., 15P]
    let lookup_table = VariableBaseTable::from(point);
    // Setting k = scalar mod r, made odd, compute
    //    k = d_0 + d_1*16^1 + ... + d_62*16^62,
    // with each d_i odd and -15 <= d_i <= 15.
    let k = scalar.unpack().reduce().conversion_to_odd();
    let (digits, sign_masks) = k.fixed_window_recode();

    // Compute k*P as
    //
    //    k*P = P*(d_0 +   d_1*16^1 +   d_2*16^2 + ... +   d_62*16^62)
    //    k*P =  P*d_0 + 16*(P*d_1 + 16*(P*d_2 + 16*( ... + P*d_62)...))
    //
    // We sum right-to-left.  The table entry for d_62 seeds the
    // accumulator in projective coordinates.
    let quadruple_and_add = |acc: &ProjectivePoint, i: usize| -> ExtendedPoint {
        let mut tmp = acc.double();
        for _ in 1..(W_VARBASE - 1) {
            tmp = tmp.as_projective().double();
        }
        // Now tmp = 16*(prev)
        &tmp.as_addend() + &lookup_table.select(digits[i], sign_masks[i])
    };
    let seed = lookup_table
        .select(digits[T_VARBASE], sign_masks[T_VARBASE])
        .as_projective();
    let mut Q = quadruple_and_add(&seed, T_VARBASE - 1);
    for i in (0..T_VARBASE - 1).rev() {
        // Now Q = d_{i+1}*P + 16*(prev)
        Q = quadruple_and_add(&Q.as_projective(), i);
    }

    Q
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::constants::GENERATOR;

    /// Compute k*P by double-and-add over the bits of k.
    fn double_and_add(P: &ExtendedPoint, k: u64) -> ExtendedPoint {
        let mut acc = ExtendedPoint::default();
        for i in (0..64).rev() {
            acc = acc.double();
            if (k >> i) & 1 == 1 {
                acc = &acc + P;
            }
        }
        acc
    }

    #[test]
    fn small_multiples_match_double_and_add() {
        let G = GENERATOR.to_extended();
        for k in [1u64, 2, 3, 15, 16, 17, 0xdead_beef, u64::MAX].iter() {
            let expected = double_and_add(&G, *k);
            assert_eq!(mul(&G, &Scalar::from(*k)).compress(), expected.compress());
        }
    }

    #[test]
    fn zero_is_identity() {
        let G = GENERATOR.to_extended();
        let zero = mul(&G, &Scalar::ZERO);
        assert_eq!(zero.compress(), ExtendedPoint::default().compress());
    }

    #[test]
    fn even_and_odd_scalars_agree() {
        let G = GENERATOR.to_extended();
        let a = Scalar::from(1_000_000u64);
        let b = Scalar::from(999_999u64);
        let sum = &mul(&G, &a) - &mul(&G, &b);
        assert_eq!(sum.compress(), G.compress());
    }
}
