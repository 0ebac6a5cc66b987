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

//! Fixed-base multiplication of the generator with the mLSB-set comb
//! method.
//!
//! The recoded scalar is laid out as \\( W = 5 \\) rows of
//! \\( D = 50 \\) digits, and the columns are split into \\( V = 5 \\)
//! blocks of \\( E = 10 \\).  Column \\( c \\) of block \\( j \\) reads one
//! digit from each row; the four bits below the sign row index the
//! sixteen-entry sub-table for that block, and the sign row picks the
//! sign.  Each of the \\( E \\) rounds is one doubling followed by
//! \\( V \\) mixed additions, one per block.

#![allow(non_snake_case)]

use crate::backend::serial::curve_models::AffinePrecomputedPoint;
use crate::backend::serial::u64::constants::FIXED_BASE_TABLE;
use crate::constants::{D_FIXEDBASE, E_FIXEDBASE, L_FIXEDBASE, V_FIXEDBASE, W_FIXEDBASE};
use crate::edwards::ExtendedPoint;
use crate::scalar::Scalar;

/// Read the comb entry whose sign digit sits at position `top`.
///
/// The sub-table index is built from the digits at
/// `top + D, top + 2D, ..., top + (W-1)D`, most significant last.
#[inline(always)]
fn comb_entry(digits: &[i8; L_FIXEDBASE], table: usize, top: usize) -> AffinePrecomputedPoint {
    let mut index = digits[top + (W_FIXEDBASE - 1) * D_FIXEDBASE] as u8;
    for row in (1..(W_FIXEDBASE - 1)).rev() {
        index = 2 * index + digits[top + row * D_FIXEDBASE] as u8;
    }
    // The sign row holds 0 for + and -1 for -.
    let sign_mask = !(digits[top] as i64 as u64);

    FIXED_BASE_TABLE.select(table, index, sign_mask)
}

/// Compute \\( kG \\) for the generator \\( G \\) in constant time.
pub(crate) fn mul(scalar: &Scalar) -> ExtendedPoint {
    let k = scalar.unpack().reduce().conversion_to_odd();
    let digits = k.mlsb_set_recode();

    // Round E-1 of block 0 seeds the accumulator.
    let mut R = comb_entry(&digits, V_FIXEDBASE - 1, D_FIXEDBASE - 1).as_extended();

    for ii in (0..E_FIXEDBASE).rev() {
        if ii < E_FIXEDBASE - 1 {
            R = R.double();
        }
        for j in 0..V_FIXEDBASE {
            if ii == E_FIXEDBASE - 1 && j == 0 {
                continue;
            }
            let top = D_FIXEDBASE + ii - (j + 1) * E_FIXEDBASE;
            R = &R + &comb_entry(&digits, V_FIXEDBASE - j - 1, top);
        }
    }

    R
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::backend::serial::scalar_mul::variable_base;
    use crate::constants::{BASEPOINT_ORDER, GENERATOR};

    #[test]
    fn one_is_generator() {
        assert_eq!(mul(&Scalar::ONE).to_affine(), GENERATOR);
    }

    #[test]
    fn zero_and_order_are_identity() {
        let identity = ExtendedPoint::default().compress();
        assert_eq!(mul(&Scalar::ZERO).compress(), identity);
        assert_eq!(mul(&BASEPOINT_ORDER).compress(), identity);
    }

    #[test]
    fn matches_variable_base() {
        let G = GENERATOR.to_extended();
        let scalars = [
            Scalar::from(2u64),
            Scalar::from(0x0123_4567_89ab_cdefu64),
            -Scalar::ONE,
            Scalar::from_bits([0xa5; 32]),
        ];
        for k in scalars.iter() {
            assert_eq!(mul(k).compress(), variable_base::mul(&G, k).compress());
        }
    }
}
