// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2016-2021 isis agora lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - Isis Agora Lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! Field arithmetic modulo \\(p = 2\^{127} - 1\\).
//!
//! The `fourq::field` module provides a type alias
//! `fourq::field::FieldElement` to the field element type defined in the
//! `backend` module, `FieldElement127`.
//!
//! Field operations defined in terms of machine operations, such as field
//! multiplication, squaring or halving, are defined in the backend
//! implementation.
//!
//! Field operations defined in terms of other field operations, such as
//! field inversion, are defined here.

use subtle::Choice;
use subtle::ConstantTimeEq;

use crate::backend;

/// A `FieldElement` represents an element of the field
/// \\( \mathbb Z / (2\^{127} - 1)\\).
///
/// The `FieldElement` type is an alias for the 64-bit backend
/// implementation.
pub(crate) type FieldElement = backend::serial::u64::field::FieldElement127;

impl Default for FieldElement {
    fn default() -> FieldElement {
        FieldElement::ZERO
    }
}

impl Eq for FieldElement {}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for FieldElement {
    /// Test equality between two `FieldElement`s.  The backend keeps
    /// elements canonical, so the limbs are compared directly.
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.0[0].ct_eq(&other.0[0]) & self.0[1].ct_eq(&other.0[1])
    }
}

impl FieldElement {
    /// Determine if this `FieldElement` is zero.
    ///
    /// # Return
    ///
    /// If zero, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub(crate) fn is_zero(&self) -> Choice {
        self.ct_eq(&FieldElement::ZERO)
    }

    /// Bit 126 of the canonical representative, which is the bit carried
    /// into the sign position of a compressed point.
    pub(crate) fn high_bit(&self) -> Choice {
        Choice::from(((self.0[1] >> 62) & 1) as u8)
    }

    /// Compute `self^(2^125 - 1)`.
    ///
    /// This is the shared prefix of inversion and of the inverse square
    /// root used during point decompression.
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub(crate) fn pow125_minus_one(&self) -> FieldElement {
        // Each temporary t_i is self^e_i.  Squaring t_i doubles e_i, so
        // pow2k(k) shifts e_i left by k places; multiplying adds
        // exponents.
        //
        // Temporary                                  e_i
        //
        let t2  = &self.square() * self;        // 2^2 - 1
        let t3  = &t2.pow2k(2) * &t2;           // 2^4 - 1
        let t4  = &t3.pow2k(4) * &t3;           // 2^8 - 1
        let t5  = &t4.pow2k(8) * &t4;           // 2^16 - 1
        let t6  = &t5.pow2k(16) * &t5;          // 2^32 - 1
        let t7  = &t6.pow2k(32) * &t6;          // 2^64 - 1
        let t8  = &t7.pow2k(32) * &t6;          // 2^96 - 1
        let t9  = &t8.pow2k(16) * &t5;          // 2^112 - 1
        let t10 = &t9.pow2k(8) * &t4;           // 2^120 - 1
        let t11 = &t10.pow2k(4) * &t3;          // 2^124 - 1

        &t11.square() * self                    // 2^125 - 1
    }

    /// Given a nonzero field element, compute its inverse.
    ///
    /// The inverse is computed as self^(p-2), since
    /// x^(p-2)x = x^(p-1) = 1 (mod p), with
    /// p - 2 = 4 (2^125 - 1) + 1.
    ///
    /// This function returns zero on input zero.
    pub(crate) fn invert(&self) -> FieldElement {
        &self.pow125_minus_one().pow2k(2) * self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use rand::rngs::OsRng;
    use rand::RngCore;

    /// Random field element, not necessarily uniform.
    fn random_element<R: RngCore>(rng: &mut R) -> FieldElement {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        FieldElement::from_bytes(&bytes)
    }

    #[test]
    fn a_mul_a_inv_is_one() {
        let mut rng = OsRng;
        for _ in 0..100 {
            let a = random_element(&mut rng);
            if bool::from(a.is_zero()) {
                continue;
            }
            assert_eq!(&a * &a.invert(), FieldElement::ONE);
        }
    }

    #[test]
    fn invert_small_values() {
        let two = FieldElement::from_u128(2);
        assert_eq!(two.invert(), FieldElement::ONE.half());
        assert_eq!(FieldElement::ONE.invert(), FieldElement::ONE);
        assert_eq!(FieldElement::MINUS_ONE.invert(), FieldElement::MINUS_ONE);
        assert_eq!(FieldElement::ZERO.invert(), FieldElement::ZERO);
    }

    #[test]
    fn pow125_minus_one_matches_square_and_multiply() {
        let a = FieldElement::from_u128(0x1234_5678_9abc_def0_0fed_cba9_8765_4321);
        // Square-and-multiply over the 125 set bits of 2^125 - 1.
        let mut expected = FieldElement::ONE;
        for _ in 0..125 {
            expected = &expected.square() * &a;
        }
        assert_eq!(a.pow125_minus_one(), expected);
    }

    #[test]
    fn field_laws() {
        let mut rng = OsRng;
        for _ in 0..100 {
            let a = random_element(&mut rng);
            let b = random_element(&mut rng);
            let c = random_element(&mut rng);

            assert!(a.to_u128() < (1u128 << 127) - 1);
            assert_eq!(&a + &FieldElement::ZERO, a);
            assert_eq!(&a * &FieldElement::ONE, a);
            assert_eq!(&a + &(-&a), FieldElement::ZERO);
            assert_eq!(&(&a + &b) * &c, &(&a * &c) + &(&b * &c));
            assert_eq!(&(&a - &b) + &b, a);
            assert_eq!(a.half().double(), a);
            assert_eq!(a.square(), &a * &a);
        }
    }

    #[test]
    fn high_bit_is_bit_126() {
        assert_eq!(FieldElement::from_u128(1u128 << 126).high_bit().unwrap_u8(), 1);
        assert_eq!(FieldElement::from_u128((1u128 << 126) - 1).high_bit().unwrap_u8(), 0);
        assert_eq!(FieldElement::MINUS_ONE.high_bit().unwrap_u8(), 1);
    }
}
