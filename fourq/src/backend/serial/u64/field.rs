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

//! Field arithmetic modulo \\(p = 2\^{127} - 1\\), using \\(64\\)-bit
//! limbs with \\(128\\)-bit products.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// \\( 2^{127} - 1 \\), as a `u128`.
const P: u128 = (1u128 << 127) - 1;

/// A `FieldElement127` represents an element of the field
/// \\( \mathbb Z / (2\^{127} - 1)\\).
///
/// The element is stored as two little-endian `u64` limbs and is always
/// kept in canonical form, \\( 0 \leq x < p \\).  The high bit of the
/// second limb is therefore always zero.
///
/// # Note
///
/// The `fourq::field` module provides a type alias
/// `fourq::field::FieldElement` to this type.
#[derive(Copy, Clone)]
pub struct FieldElement127(pub(crate) [u64; 2]);

impl Debug for FieldElement127 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement127({:?})", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement127 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Fold a value below \\( 2^{128} \\) into canonical form.
///
/// The first fold uses \\( 2^{127} \equiv 1 \\) and leaves a value of at
/// most \\( 2^{127} \\).  The second step maps \\( p \\) to \\( 0 \\) and
/// \\( 2^{127} \\) to \\( 1 \\) without a branch.
#[inline(always)]
const fn reduce(x: u128) -> u128 {
    let x = (x & P) + (x >> 127);
    (x + ((x + 1) >> 127)) & P
}

/// u64 * u64 = u128 multiply helper
#[inline(always)]
const fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

impl<'b> AddAssign<&'b FieldElement127> for FieldElement127 {
    fn add_assign(&mut self, rhs: &'b FieldElement127) {
        *self = &*self + rhs;
    }
}

impl<'a, 'b> Add<&'b FieldElement127> for &'a FieldElement127 {
    type Output = FieldElement127;
    fn add(self, rhs: &'b FieldElement127) -> FieldElement127 {
        // Both inputs are below 2^127, so the sum fits in a u128.
        FieldElement127::from_u128_unchecked(reduce(self.to_u128() + rhs.to_u128()))
    }
}

impl<'b> SubAssign<&'b FieldElement127> for FieldElement127 {
    fn sub_assign(&mut self, rhs: &'b FieldElement127) {
        *self = &*self - rhs;
    }
}

impl<'a, 'b> Sub<&'b FieldElement127> for &'a FieldElement127 {
    type Output = FieldElement127;
    fn sub(self, rhs: &'b FieldElement127) -> FieldElement127 {
        // a - b = a + (p - b), and p - b lies in [1, p].
        FieldElement127::from_u128_unchecked(reduce(self.to_u128() + (P - rhs.to_u128())))
    }
}

impl<'b> MulAssign<&'b FieldElement127> for FieldElement127 {
    fn mul_assign(&mut self, rhs: &'b FieldElement127) {
        *self = &*self * rhs;
    }
}

impl<'a, 'b> Mul<&'b FieldElement127> for &'a FieldElement127 {
    type Output = FieldElement127;

    #[rustfmt::skip] // keep alignment of c* calculations
    fn mul(self, rhs: &'b FieldElement127) -> FieldElement127 {
        let a = &self.0;
        let b = &rhs.0;

        // Schoolbook multiplication.  a[1], b[1] < 2^63, so each cross
        // term is below 2^127 and their sum still fits in a u128.
        let lo  = m(a[0], b[0]);
        let mid = m(a[0], b[1]) + m(a[1], b[0]);
        let hi  = m(a[1], b[1]);

        // Carry into 64-bit words: product = c0 + c1*2^64 + c23*2^128.
        let c0  = lo as u64;
        let t   = (lo >> 64) + ((mid as u64) as u128);
        let c1  = t as u64;
        let c23 = (t >> 64) + (mid >> 64) + hi;

        // The product is below 2^254, so c23 < 2^126.  Since 2^128 = 2
        // (mod p), fold the top half in as 2*c23 and the bit at position
        // 127 of the low half as 1.
        let low = (c0 as u128) | ((c1 as u128) << 64);
        let folded = (low & P) + (low >> 127) + (c23 << 1);

        FieldElement127::from_u128_unchecked(reduce(folded))
    }
}

impl<'a> Neg for &'a FieldElement127 {
    type Output = FieldElement127;
    fn neg(self) -> FieldElement127 {
        FieldElement127::from_u128_unchecked(reduce(P - self.to_u128()))
    }
}

impl ConditionallySelectable for FieldElement127 {
    fn conditional_select(
        a: &FieldElement127,
        b: &FieldElement127,
        choice: Choice,
    ) -> FieldElement127 {
        FieldElement127([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
        ])
    }

    fn conditional_assign(&mut self, other: &FieldElement127, choice: Choice) {
        self.0[0].conditional_assign(&other.0[0], choice);
        self.0[1].conditional_assign(&other.0[1], choice);
    }

    fn conditional_swap(a: &mut FieldElement127, b: &mut FieldElement127, choice: Choice) {
        u64::conditional_swap(&mut a.0[0], &mut b.0[0], choice);
        u64::conditional_swap(&mut a.0[1], &mut b.0[1], choice);
    }
}

impl FieldElement127 {
    /// The scalar \\( 0 \\).
    pub const ZERO: FieldElement127 = FieldElement127([0, 0]);
    /// The scalar \\( 1 \\).
    pub const ONE: FieldElement127 = FieldElement127([1, 0]);
    /// The scalar \\( -1 \\).
    pub const MINUS_ONE: FieldElement127 = FieldElement127([0xffff_ffff_ffff_fffe, 0x7fff_ffff_ffff_ffff]);

    /// Build a field element from a value which is already reduced.
    #[inline(always)]
    pub(crate) const fn from_u128_unchecked(x: u128) -> FieldElement127 {
        FieldElement127([x as u64, (x >> 64) as u64])
    }

    /// Build a field element from any `u128`, reducing it mod \\( p \\).
    pub const fn from_u128(x: u128) -> FieldElement127 {
        FieldElement127::from_u128_unchecked(reduce(x))
    }

    /// The canonical value of this element as a `u128`.
    #[inline(always)]
    pub const fn to_u128(&self) -> u128 {
        (self.0[0] as u128) | ((self.0[1] as u128) << 64)
    }

    /// Load a `FieldElement127` from the low 127 bits of a 128-bit
    /// little-endian input.  The high bit is ignored and the value is
    /// reduced, so the all-ones encoding of \\( p \\) loads as zero.
    pub const fn from_bytes(bytes: &[u8; 16]) -> FieldElement127 {
        let x = u128::from_le_bytes(*bytes) & P;
        FieldElement127::from_u128_unchecked(reduce(x))
    }

    /// Serialize this `FieldElement127` to a 16-byte array.  The
    /// encoding is canonical.
    pub const fn as_bytes(&self) -> [u8; 16] {
        self.to_u128().to_le_bytes()
    }

    /// Returns the square of this field element.
    pub fn square(&self) -> FieldElement127 {
        self * self
    }

    /// Returns `self^(2^k)`, computed by `k` repeated squarings.
    pub fn pow2k(&self, mut k: u32) -> FieldElement127 {
        debug_assert!(k > 0);

        let mut a = *self;
        while k > 0 {
            a = a.square();
            k -= 1;
        }
        a
    }

    /// Returns `self / 2`.
    ///
    /// An odd value has \\( p \\) added first, so the shift is exact.  The
    /// addition is masked rather than branched on.
    pub fn half(&self) -> FieldElement127 {
        let x = self.to_u128();
        let odd_mask = 0u128.wrapping_sub(x & 1);
        FieldElement127::from_u128_unchecked((x + (P & odd_mask)) >> 1)
    }

    /// Returns `2 * self`.
    pub fn double(&self) -> FieldElement127 {
        self + self
    }
}
