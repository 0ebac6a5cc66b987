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

//! Various constants, such as the generator and the window parameters of
//! the scalar multiplication algorithms.
//!
//! Most of the constants are given with
//! `LONG_DESCRIPTIVE_UPPER_CASE_NAMES`, but they can be brought into
//! scope using a `let` binding:
//!
//! ```
//! use fourq::constants;
//! use fourq::traits::IsIdentity;
//!
//! let G = constants::GENERATOR.to_extended();
//! let r = &constants::BASEPOINT_ORDER;
//! assert!((r * &G).is_identity());
//! ```

#![allow(non_snake_case)]

use crate::backend::serial::u64::constants as backend;
use crate::edwards::{AffinePoint, CompressedPoint};
use crate::fp2::Fp2;
use crate::scalar::Scalar;

/// The curve constant \\( d \\) of \\( -x^2 + y^2 = 1 + d x^2 y^2 \\).
pub const EDWARDS_D: Fp2 = backend::EDWARDS_D;

/// The FourQ generator \\( G \\), a point of prime order \\( r \\).
pub const GENERATOR: AffinePoint = AffinePoint {
    x: backend::GENERATOR_X,
    y: backend::GENERATOR_Y,
};

/// The 32-byte encoding of the generator.
pub const GENERATOR_COMPRESSED: CompressedPoint = CompressedPoint([
    0x87, 0xb2, 0xcb, 0x2b, 0x46, 0xa2, 0x24, 0xb9, 0x5a, 0x78, 0x20, 0xa1, 0x9b, 0xee, 0x3f, 0x0e,
    0x5c, 0x8b, 0x4c, 0x84, 0x44, 0xc3, 0xa7, 0x49, 0x42, 0x02, 0x0e, 0x63, 0xf8, 0x4a, 0x1c, 0x6e,
]);

/// `BASEPOINT_ORDER` is the order of the prime-order subgroup,
/// \\( r = \mathtt{0x29cbc14e5e0a72f05397829cbc14e5dfbd004dfe0f79992fb2540ec7768ce7} \\),
/// a 246-bit prime.
///
/// As a `Scalar` it is unreduced; arithmetic on it reduces it to zero.
pub const BASEPOINT_ORDER: Scalar = Scalar {
    bytes: [
        0xe7, 0x8c, 0x76, 0xc7, 0x0e, 0x54, 0xb2, 0x2f, 0x99, 0x79, 0x0f, 0xfe, 0x4d, 0x00, 0xbd,
        0xdf, 0xe5, 0x14, 0xbc, 0x9c, 0x82, 0x97, 0x53, 0xf0, 0x72, 0x0a, 0x5e, 0x4e, 0xc1, 0xcb,
        0x29, 0x00,
    ],
};

/// The cofactor of the curve group, \\( \\#E = 392 r \\).
pub const COFACTOR: u64 = 392;

/// Window width of the variable-base fixed-window recoding.
pub const W_VARBASE: usize = 5;

/// Number of odd multiples in the variable-base table, \\( 2^{W-2} \\).
pub const VARBASE_TABLE_SIZE: usize = 1 << (W_VARBASE - 2);

/// Number of variable-base recoding steps; the recoding has
/// `T_VARBASE + 1` digits.
pub const T_VARBASE: usize = 62;

/// Number of rows of the generator comb.
pub const W_FIXEDBASE: usize = 5;

/// Number of sub-tables of the generator comb.
pub const V_FIXEDBASE: usize = 5;

/// Number of doubling rounds per sub-table of the generator comb.
pub const E_FIXEDBASE: usize = 10;

/// Number of digits per row of the generator comb,
/// `D_FIXEDBASE = E_FIXEDBASE * V_FIXEDBASE`.
pub const D_FIXEDBASE: usize = E_FIXEDBASE * V_FIXEDBASE;

/// Length of the mLSB-set recoding, `L_FIXEDBASE = D_FIXEDBASE * W_FIXEDBASE`.
pub const L_FIXEDBASE: usize = D_FIXEDBASE * W_FIXEDBASE;

#[cfg(test)]
mod test {
    use super::*;

    use crate::backend::serial::u64::constants::{EDWARDS_D2, R};
    use crate::traits::ValidityCheck;

    #[test]
    fn generator_is_on_curve() {
        assert!(GENERATOR.is_valid());
        assert!(GENERATOR.to_extended().is_valid());
    }

    #[test]
    fn generator_compressed_matches() {
        assert_eq!(GENERATOR.compress(), GENERATOR_COMPRESSED);
        assert_eq!(GENERATOR_COMPRESSED.decompress().unwrap(), GENERATOR);
    }

    #[test]
    fn d2_is_twice_d() {
        assert_eq!(EDWARDS_D.double(), EDWARDS_D2);
    }

    #[test]
    fn order_bytes_match_limbs() {
        assert_eq!(BASEPOINT_ORDER.bytes, R.as_bytes());
    }

    #[test]
    fn comb_dimensions() {
        assert_eq!(D_FIXEDBASE, 50);
        assert_eq!(L_FIXEDBASE, 250);
        assert_eq!(VARBASE_TABLE_SIZE, 8);
        // 2^(W-1) (T+1) must cover a 250-bit odd scalar
        assert!((W_VARBASE - 1) * (T_VARBASE + 1) >= 250);
    }
}
