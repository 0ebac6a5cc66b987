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

//! Arithmetic in \\( \mathbb F\_{p^2} = \mathbb F\_p[i] / (i^2 + 1) \\),
//! the field in which all FourQ coordinates live.
//!
//! An element \\( a = a\_0 + a\_1 i \\) is a pair of base field elements.
//! Multiplication uses the three-multiplication Karatsuba identity, and
//! inversion uses a single base field inversion of the norm
//! \\( a\_0^2 + a\_1^2 \\).

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::field::FieldElement;

/// An element \\( re + im \cdot i \\) of \\( \mathbb F\_{p^2} \\).
///
/// Both halves are always canonical, so the 32-byte encoding returned by
/// [`Fp2::to_bytes`] is unique.
#[derive(Copy, Clone, Default)]
pub struct Fp2 {
    pub(crate) re: FieldElement,
    pub(crate) im: FieldElement,
}

impl Debug for Fp2 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Fp2{{\n\tre: {:?},\n\tim: {:?}\n}}", &self.re, &self.im)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Fp2 {
    fn zeroize(&mut self) {
        self.re.zeroize();
        self.im.zeroize();
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Fp2) -> Choice {
        self.re.ct_eq(&other.re) & self.im.ct_eq(&other.im)
    }
}

impl Eq for Fp2 {}

impl PartialEq for Fp2 {
    fn eq(&self, other: &Fp2) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Fp2, b: &Fp2, choice: Choice) -> Fp2 {
        Fp2 {
            re: FieldElement::conditional_select(&a.re, &b.re, choice),
            im: FieldElement::conditional_select(&a.im, &b.im, choice),
        }
    }
}

// ------------------------------------------------------------------------
// Arithmetic
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        Fp2 {
            re: &self.re + &rhs.re,
            im: &self.im + &rhs.im,
        }
    }
}

define_add_variants!(LHS = Fp2, RHS = Fp2, Output = Fp2);

impl<'b> AddAssign<&'b Fp2> for Fp2 {
    fn add_assign(&mut self, rhs: &'b Fp2) {
        *self = &*self + rhs;
    }
}

define_add_assign_variants!(LHS = Fp2, RHS = Fp2);

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        Fp2 {
            re: &self.re - &rhs.re,
            im: &self.im - &rhs.im,
        }
    }
}

define_sub_variants!(LHS = Fp2, RHS = Fp2, Output = Fp2);

impl<'b> SubAssign<&'b Fp2> for Fp2 {
    fn sub_assign(&mut self, rhs: &'b Fp2) {
        *self = &*self - rhs;
    }
}

define_sub_assign_variants!(LHS = Fp2, RHS = Fp2);

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[rustfmt::skip] // keep alignment of explanatory comments
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        let t1 = &self.re * &rhs.re;                              // a0*b0
        let t2 = &self.im * &rhs.im;                              // a1*b1
        let t3 = &(&self.re + &self.im) * &(&rhs.re + &rhs.im);   // (a0+a1)(b0+b1)

        Fp2 {
            re: &t1 - &t2,
            im: &(&t3 - &t1) - &t2,
        }
    }
}

define_mul_variants!(LHS = Fp2, RHS = Fp2, Output = Fp2);

impl<'b> MulAssign<&'b Fp2> for Fp2 {
    fn mul_assign(&mut self, rhs: &'b Fp2) {
        *self = &*self * rhs;
    }
}

define_mul_assign_variants!(LHS = Fp2, RHS = Fp2);

impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;
    fn neg(self) -> Fp2 {
        Fp2 {
            re: -&self.re,
            im: -&self.im,
        }
    }
}

define_neg_variant!(Fp2);

impl Fp2 {
    /// The element \\( 0 \\).
    pub const ZERO: Fp2 = Fp2 {
        re: FieldElement::ZERO,
        im: FieldElement::ZERO,
    };

    /// The element \\( 1 \\).
    pub const ONE: Fp2 = Fp2 {
        re: FieldElement::ONE,
        im: FieldElement::ZERO,
    };

    /// Build an element from little-endian limbs of both halves.  The
    /// limbs must already be canonical; this is used for constant tables.
    pub(crate) const fn from_limbs(re: [u64; 2], im: [u64; 2]) -> Fp2 {
        Fp2 {
            re: FieldElement::from_u128_unchecked((re[0] as u128) | ((re[1] as u128) << 64)),
            im: FieldElement::from_u128_unchecked((im[0] as u128) | ((im[1] as u128) << 64)),
        }
    }

    /// Build an element from two integers, reducing each modulo
    /// \\( 2^{127} - 1 \\).
    pub const fn from_u128s(re: u128, im: u128) -> Fp2 {
        Fp2 {
            re: FieldElement::from_u128(re),
            im: FieldElement::from_u128(im),
        }
    }

    /// The real and imaginary halves as canonical integers.
    pub const fn to_u128s(&self) -> (u128, u128) {
        (self.re.to_u128(), self.im.to_u128())
    }

    /// Load an element from 32 bytes: the real half in bytes `0..16`
    /// and the imaginary half in bytes `16..32`, both little-endian.  The
    /// top bit of each half is ignored.
    pub fn from_bytes(bytes: &[u8; 32]) -> Fp2 {
        let mut re = [0u8; 16];
        let mut im = [0u8; 16];
        re.copy_from_slice(&bytes[..16]);
        im.copy_from_slice(&bytes[16..]);
        Fp2 {
            re: FieldElement::from_bytes(&re),
            im: FieldElement::from_bytes(&im),
        }
    }

    /// Serialize to 32 bytes, real half first.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(&self.re.as_bytes());
        bytes[16..].copy_from_slice(&self.im.as_bytes());
        bytes
    }

    /// Determine if this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.re.is_zero() & self.im.is_zero()
    }

    /// Compute \\( a^2 = (a\_0 + a\_1)(a\_0 - a\_1) + 2 a\_0 a\_1 i \\).
    pub fn square(&self) -> Fp2 {
        let t = &self.re * &self.im;
        Fp2 {
            re: &(&self.re + &self.im) * &(&self.re - &self.im),
            im: t.double(),
        }
    }

    /// Compute `2 * self`.
    pub fn double(&self) -> Fp2 {
        self + self
    }

    /// Compute `self / 2`.
    pub fn half(&self) -> Fp2 {
        Fp2 {
            re: self.re.half(),
            im: self.im.half(),
        }
    }

    /// The conjugate \\( a\_0 - a\_1 i \\).
    pub fn conjugate(&self) -> Fp2 {
        Fp2 {
            re: self.re,
            im: -&self.im,
        }
    }

    /// Compute \\( a^{-1} = (a\_0 - a\_1 i) / (a\_0^2 + a\_1^2) \\).
    ///
    /// Returns zero on input zero.
    pub fn invert(&self) -> Fp2 {
        let norm = &self.re.square() + &self.im.square();
        let inv = norm.invert();
        Fp2 {
            re: &self.re * &inv,
            im: -&(&self.im * &inv),
        }
    }

    /// The bit written into the sign position of a compressed point:
    /// bit 126 of the real half, or of the imaginary half when the real
    /// half is zero.
    pub(crate) fn sign_bit(&self) -> Choice {
        let bit = u8::conditional_select(
            &self.re.high_bit().unwrap_u8(),
            &self.im.high_bit().unwrap_u8(),
            self.re.is_zero(),
        );
        Choice::from(bit)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use rand::rngs::OsRng;
    use rand::RngCore;

    fn random_fp2() -> Fp2 {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        Fp2::from_bytes(&bytes)
    }

    #[test]
    fn karatsuba_matches_schoolbook() {
        for _ in 0..50 {
            let a = random_fp2();
            let b = random_fp2();
            let c = &a * &b;
            let re = &(&a.re * &b.re) - &(&a.im * &b.im);
            let im = &(&a.re * &b.im) + &(&a.im * &b.re);
            assert_eq!(c.re, re);
            assert_eq!(c.im, im);
            assert_eq!(a.square(), &a * &a);
        }
    }

    #[test]
    fn i_squared_is_minus_one() {
        let i = Fp2::from_u128s(0, 1);
        assert_eq!(i.square(), -Fp2::ONE);
    }

    #[test]
    fn a_mul_a_inv_is_one() {
        for _ in 0..50 {
            let a = random_fp2();
            if bool::from(a.is_zero()) {
                continue;
            }
            assert_eq!(&a * &a.invert(), Fp2::ONE);
        }
        // Purely imaginary and purely real inputs.
        let a = Fp2::from_u128s(0, 7);
        assert_eq!(&a * &a.invert(), Fp2::ONE);
        let b = Fp2::from_u128s(7, 0);
        assert_eq!(&b * &b.invert(), Fp2::ONE);
    }

    #[test]
    fn identities() {
        for _ in 0..50 {
            let a = random_fp2();
            let b = random_fp2();
            assert_eq!(a + Fp2::ZERO, a);
            assert_eq!(a * Fp2::ONE, a);
            assert_eq!(a + (-a), Fp2::ZERO);
            assert_eq!((a - b) + b, a);
            assert_eq!(a.half().double(), a);
            let norm = Fp2 {
                re: &a.re.square() + &a.im.square(),
                im: FieldElement::ZERO,
            };
            assert_eq!(&a * &a.conjugate(), norm);

            let (re, im) = a.to_u128s();
            assert!(re < (1u128 << 127) - 1);
            assert!(im < (1u128 << 127) - 1);
        }
    }

    #[test]
    fn assign_ops() {
        let a = random_fp2();
        let b = random_fp2();
        let mut c = a;
        c += b;
        c -= &b;
        assert_eq!(c, a);
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn bytes_round_trip() {
        let a = random_fp2();
        assert_eq!(Fp2::from_bytes(&a.to_bytes()), a);
    }

    #[test]
    fn sign_bit_falls_back_to_imaginary() {
        let a = Fp2::from_u128s(0, 1u128 << 126);
        assert_eq!(a.sign_bit().unwrap_u8(), 1);
        let b = Fp2::from_u128s(1, 1u128 << 126);
        assert_eq!(b.sign_bit().unwrap_u8(), 0);
        let c = Fp2::from_u128s(1u128 << 126, 0);
        assert_eq!(c.sign_bit().unwrap_u8(), 1);
    }
}
