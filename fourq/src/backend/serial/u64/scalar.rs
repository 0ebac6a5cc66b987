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

//! Arithmetic mod \\( r \\), the order of the FourQ prime-order subgroup,
//! with \\( 64 \\)-bit limbs and Montgomery multiplication for
//! \\( R = 2^{256} \\).
//!
//! Multiplication interleaves one row of the schoolbook product with one
//! word of Montgomery reduction (the CIOS method), so intermediate values
//! never exceed five words.

use core::fmt::Debug;
use core::ops::{Index, IndexMut};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use super::constants;

/// The `Scalar64` struct represents an element in
/// \\(\mathbb Z / r \mathbb Z\\) as 4 little-endian `u64` limbs.
///
/// Values handed in from the outside may be any 256-bit integer; the
/// results of `add`, `sub` and `montgomery_mul` are always below
/// \\( r \\).
#[derive(Copy, Clone)]
pub struct Scalar64(pub(crate) [u64; 4]);

impl Debug for Scalar64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar64: {:?}", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar64 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Index<usize> for Scalar64 {
    type Output = u64;
    fn index(&self, _index: usize) -> &u64 {
        &(self.0[_index])
    }
}

impl IndexMut<usize> for Scalar64 {
    fn index_mut(&mut self, _index: usize) -> &mut u64 {
        &mut (self.0[_index])
    }
}

/// u64 * u64 = u128 multiply helper
#[inline(always)]
const fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

impl Scalar64 {
    /// The scalar \\( 0 \\).
    pub const ZERO: Scalar64 = Scalar64([0, 0, 0, 0]);

    /// The scalar \\( 1 \\).
    pub const ONE: Scalar64 = Scalar64([1, 0, 0, 0]);

    /// Unpack a 32 byte / 256 bit scalar into 4 64-bit limbs.  No
    /// reduction is performed.
    pub fn from_bytes(bytes: &[u8; 32]) -> Scalar64 {
        let mut words = [0u64; 4];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *word = u64::from_le_bytes(buf);
        }
        Scalar64(words)
    }

    /// Pack the limbs of this `Scalar64` into 32 bytes.
    pub fn as_bytes(&self) -> [u8; 32] {
        let mut s = [0u8; 32];
        for (chunk, word) in s.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        s
    }

    /// Compute `a + b` (mod r).  Both inputs must be below \\( r \\).
    pub fn add(a: &Scalar64, b: &Scalar64) -> Scalar64 {
        let mut sum = Scalar64::ZERO;

        // a + b; since a, b < r < 2^246 there is no carry out of the top limb
        let mut carry: u128 = 0;
        for i in 0..4 {
            carry = (a[i] as u128) + (b[i] as u128) + (carry >> 64);
            sum[i] = carry as u64;
        }

        // subtract r if the sum is >= r
        Scalar64::sub(&sum, &constants::R)
    }

    /// Compute `a - b` (mod r).
    ///
    /// The result is below \\( r \\) whenever \\( a - b \in (-r, r) \\).
    pub fn sub(a: &Scalar64, b: &Scalar64) -> Scalar64 {
        let mut difference = Scalar64::ZERO;

        // a - b
        let mut borrow: u64 = 0;
        for i in 0..4 {
            let (d, b1) = a[i].overflowing_sub(b[i]);
            let (d, b2) = d.overflowing_sub(borrow);
            difference[i] = d;
            borrow = (b1 | b2) as u64;
        }

        // conditionally add r if the difference is negative
        let underflow_mask = 0u64.wrapping_sub(borrow);
        let mut carry: u128 = 0;
        for i in 0..4 {
            carry = (carry >> 64) + (difference[i] as u128) + ((constants::R[i] & underflow_mask) as u128);
            difference[i] = carry as u64;
        }

        difference
    }

    /// Compute `(a * b) / R` (mod r), where R is the Montgomery modulus
    /// 2^256.
    ///
    /// One operand must be below \\( r \\); the other may be any 256-bit
    /// value.  The result is below \\( r \\).
    #[rustfmt::skip] // keep alignment of t* calculations
    pub fn montgomery_mul(a: &Scalar64, b: &Scalar64) -> Scalar64 {
        let r = &constants::R;
        let r_prime = constants::R_PRIME[0];

        // t[0..4] accumulates the running value, t[4] and t[5] its carries.
        let mut t = [0u64; 6];

        for i in 0..4 {
            // t += a * b[i]
            let mut carry: u64 = 0;
            for j in 0..4 {
                let uv = m(a[j], b[i]) + (t[j] as u128) + (carry as u128);
                t[j]  = uv as u64;
                carry = (uv >> 64) as u64;
            }
            let uv = (t[4] as u128) + (carry as u128);
            t[4] = uv as u64;
            t[5] = (uv >> 64) as u64;

            // t = (t + n*r) / 2^64, where n makes the low word vanish
            let n  = t[0].wrapping_mul(r_prime);
            let uv = m(n, r[0]) + (t[0] as u128);
            let mut carry = (uv >> 64) as u64;
            for j in 1..4 {
                let uv = m(n, r[j]) + (t[j] as u128) + (carry as u128);
                t[j - 1] = uv as u64;
                carry    = (uv >> 64) as u64;
            }
            let uv = (t[4] as u128) + (carry as u128);
            t[3] = uv as u64;
            t[4] = t[5] + ((uv >> 64) as u64);
        }

        // The result is below 2r < 2^256, so t[4] is zero and one
        // conditional subtraction brings it below r.
        debug_assert_eq!(t[4], 0);
        Scalar64::sub(&Scalar64([t[0], t[1], t[2], t[3]]), r)
    }

    /// Puts a Scalar64 in to Montgomery form, i.e. computes `a*R (mod r)`.
    /// The input may be any 256-bit value.
    #[inline(never)]
    pub fn as_montgomery(&self) -> Scalar64 {
        Scalar64::montgomery_mul(self, &constants::RR)
    }

    /// Takes a Scalar64 out of Montgomery form, i.e. computes `a/R (mod r)`.
    #[allow(clippy::wrong_self_convention)]
    #[inline(never)]
    pub fn from_montgomery(&self) -> Scalar64 {
        Scalar64::montgomery_mul(self, &Scalar64::ONE)
    }

    /// Compute `a * b` (mod r).  Either input may be any 256-bit value
    /// as long as the other is below \\( r \\).
    pub fn mul(a: &Scalar64, b: &Scalar64) -> Scalar64 {
        let ab = Scalar64::montgomery_mul(a, b);
        Scalar64::montgomery_mul(&ab, &constants::RR)
    }

    /// Reduce any 256-bit value mod \\( r \\), by a round trip through
    /// Montgomery form.
    pub fn reduce(&self) -> Scalar64 {
        self.as_montgomery().from_montgomery()
    }

    /// Reduce a 512-bit value `lo + hi * 2^256` mod \\( r \\).
    pub fn from_wide(lo: &Scalar64, hi: &Scalar64) -> Scalar64 {
        // hi * R / R * RR / R = hi * 2^256 (mod r)
        let hi = Scalar64::montgomery_mul(hi, &constants::RR);
        Scalar64::add(&lo.reduce(), &hi)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// r - 1
    const R_MINUS_ONE: Scalar64 = Scalar64([
        0x2fb2540ec7768ce6,
        0xdfbd004dfe0f7999,
        0xf05397829cbc14e5,
        0x0029cbc14e5e0a72,
    ]);

    /// 2^256 - 1
    const MAX: Scalar64 = Scalar64([u64::MAX; 4]);

    /// 2^256 - 1 mod r
    const MAX_REDUCED: [u8; 32] = [
        0x1f, 0xf9, 0xe0, 0x49, 0x7a, 0x25, 0xbd, 0xdb,
        0xbb, 0x35, 0x37, 0xe1, 0x4b, 0x22, 0x5e, 0x9a,
        0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    fn eq(a: &Scalar64, b: &Scalar64) -> bool {
        a.0 == b.0
    }

    #[test]
    fn r_times_r_prime_is_minus_one() {
        // The low limb of r * r' must be 2^64 - 1.
        let low = constants::R[0].wrapping_mul(constants::R_PRIME[0]);
        assert_eq!(low, u64::MAX);
    }

    #[test]
    fn reduce_r_is_zero() {
        assert!(eq(&constants::R.reduce(), &Scalar64::ZERO));
        assert!(eq(&R_MINUS_ONE.reduce(), &R_MINUS_ONE));
    }

    #[test]
    fn reduce_max() {
        assert_eq!(MAX.reduce().as_bytes(), MAX_REDUCED);
    }

    #[test]
    fn add_wraps() {
        let sum = Scalar64::add(&R_MINUS_ONE, &Scalar64([2, 0, 0, 0]));
        assert!(eq(&sum, &Scalar64::ONE));
    }

    #[test]
    fn sub_wraps() {
        let diff = Scalar64::sub(&Scalar64::ZERO, &Scalar64::ONE);
        assert!(eq(&diff, &R_MINUS_ONE));
    }

    #[test]
    fn mul_minus_one_squared() {
        let sq = Scalar64::mul(&R_MINUS_ONE, &R_MINUS_ONE);
        assert!(eq(&sq, &Scalar64::ONE));
    }

    #[test]
    fn montgomery_round_trip() {
        let x = Scalar64([0x1234, 0x5678, 0x9abc, 0x0000_def0]);
        assert!(eq(&x.as_montgomery().from_montgomery(), &x));
    }

    #[test]
    fn from_wide_matches_shift() {
        // 1 * 2^256 + 0 reduces to 2^256 mod r, which is MAX_REDUCED + 1.
        let w = Scalar64::from_wide(&Scalar64::ZERO, &Scalar64::ONE);
        let expected = Scalar64::add(&Scalar64::from_bytes(&MAX_REDUCED), &Scalar64::ONE);
        assert!(eq(&w, &expected));
    }

    #[test]
    fn bytes_round_trip() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        assert_eq!(Scalar64::from_bytes(&bytes).as_bytes(), bytes);
    }
}
