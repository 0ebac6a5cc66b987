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

//! Arithmetic on scalars (integers mod the group order), and the scalar
//! recodings used by the multiplication algorithms.
//!
//! The FourQ generator \\( G \\) has prime order
//!
//! $$ r = \mathtt{0x0029cbc14e5e0a72f05397829cbc14e5dfbd004dfe0f79992fb2540ec7768ce7}. $$
//!
//! The `Scalar` struct holds a 256-bit integer as 32 little-endian bytes.
//! Unlike the field types, a `Scalar` is *not* required to be reduced:
//! the multiplication routines accept any 256-bit value and reduce it
//! mod \\( r \\) themselves.  Arithmetic operators always return reduced
//! values.
//!
//! # Constructing a scalar
//!
//! ```
//! use fourq::scalar::Scalar;
//!
//! let one_as_bytes: [u8; 32] = Scalar::ONE.to_bytes();
//! let a: Option<Scalar> = Scalar::from_canonical_bytes(one_as_bytes).into();
//! assert_eq!(a, Some(Scalar::ONE));
//!
//! let r_plus_two = [
//!     0xe9, 0x8c, 0x76, 0xc7, 0x0e, 0x54, 0xb2, 0x2f,
//!     0x99, 0x79, 0x0f, 0xfe, 0x4d, 0x00, 0xbd, 0xdf,
//!     0xe5, 0x14, 0xbc, 0x9c, 0x82, 0x97, 0x53, 0xf0,
//!     0x72, 0x0a, 0x5e, 0x4e, 0xc1, 0xcb, 0x29, 0x00,
//! ];
//! let b: Option<Scalar> = Scalar::from_canonical_bytes(r_plus_two).into();
//! assert!(b.is_none());
//! assert_eq!(Scalar::from_bytes_mod_order(r_plus_two), Scalar::from(2u64));
//! ```
//!
//! # Recodings
//!
//! Three internal transformations feed the multiplication drivers:
//!
//! * `Scalar64::conversion_to_odd` adds \\( r \\) to an even scalar;
//! * `Scalar64::fixed_window_recode` writes an odd scalar with signed odd
//!   digits in radix \\( 16 \\) for the variable-base multiplication;
//! * `Scalar64::mlsb_set_recode` writes an odd scalar in the modified
//!   LSB-set form read by the generator comb.
//!
//! `Scalar::decompose` gives the four-dimensional decomposition of a
//! scalar along the endomorphism lattice of FourQ.

use core::borrow::Borrow;
use core::fmt::Debug;
use core::iter::{Product, Sum};
use core::ops::Index;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

#[cfg(feature = "rand_core")]
use rand_core::CryptoRngCore;

#[cfg(feature = "digest")]
use digest::generic_array::typenum::U64;
#[cfg(feature = "digest")]
use digest::Digest;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::u64::constants;
use crate::backend::serial::u64::scalar::Scalar64;
use crate::constants::{D_FIXEDBASE, L_FIXEDBASE, T_VARBASE, W_VARBASE};

/// The `Scalar` struct holds an integer \\(s < 2\^{256} \\) which
/// represents an element of \\(\mathbb Z / r\mathbb Z \\).
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Hash)]
pub struct Scalar {
    /// `bytes` is a little-endian byte encoding of an integer.
    ///
    /// Values produced by the arithmetic operators are reduced mod
    /// \\( r \\); values built with `Scalar::from_bits` need not be.
    pub(crate) bytes: [u8; 32],
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar{{\n\tbytes: {:?},\n}}", &self.bytes)
    }
}

impl Eq for Scalar {}
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for Scalar {
    /// Compare the byte encodings.  Two unreduced scalars which are
    /// congruent mod \\( r \\) compare unequal.
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut bytes = [0u8; 32];
        #[allow(clippy::needless_range_loop)]
        for i in 0..32 {
            bytes[i] = u8::conditional_select(&a.bytes[i], &b.bytes[i], choice);
        }
        Scalar { bytes }
    }
}

impl Index<usize> for Scalar {
    type Output = u8;

    /// Index the bytes of the representative for this `Scalar`.  Mutation is not permitted.
    fn index(&self, _index: usize) -> &u8 {
        &(self.bytes[_index])
    }
}

impl Default for Scalar {
    fn default() -> Scalar {
        Scalar::ZERO
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn mul(self, _rhs: &'b Scalar) -> Scalar {
        Scalar64::mul(&self.unpack().reduce(), &_rhs.unpack()).pack()
    }
}

define_mul_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> MulAssign<&'b Scalar> for Scalar {
    fn mul_assign(&mut self, _rhs: &'b Scalar) {
        *self = &*self * _rhs;
    }
}

define_mul_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn add(self, _rhs: &'b Scalar) -> Scalar {
        // The addition in Scalar64 needs both summands below r.
        Scalar64::add(&self.unpack().reduce(), &_rhs.unpack().reduce()).pack()
    }
}

define_add_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> AddAssign<&'b Scalar> for Scalar {
    fn add_assign(&mut self, _rhs: &'b Scalar) {
        *self = &*self + _rhs;
    }
}

define_add_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn sub(self, rhs: &'b Scalar) -> Scalar {
        Scalar64::sub(&self.unpack().reduce(), &rhs.unpack().reduce()).pack()
    }
}

define_sub_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'b> SubAssign<&'b Scalar> for Scalar {
    fn sub_assign(&mut self, _rhs: &'b Scalar) {
        *self = &*self - _rhs;
    }
}

define_sub_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        Scalar64::sub(&Scalar64::ZERO, &self.unpack().reduce()).pack()
    }
}

define_neg_variant!(Scalar);

impl<T> Product<T> for Scalar
where
    T: Borrow<Scalar>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Scalar::ONE, |acc, item| acc * item.borrow())
    }
}

impl<T> Sum<T> for Scalar
where
    T: Borrow<Scalar>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Scalar::ZERO, |acc, item| acc + item.borrow())
    }
}

impl From<u8> for Scalar {
    fn from(x: u8) -> Scalar {
        let mut s_bytes = [0u8; 32];
        s_bytes[0] = x;
        Scalar { bytes: s_bytes }
    }
}

impl From<u16> for Scalar {
    fn from(x: u16) -> Scalar {
        let mut s_bytes = [0u8; 32];
        s_bytes[..2].copy_from_slice(&x.to_le_bytes());
        Scalar { bytes: s_bytes }
    }
}

impl From<u32> for Scalar {
    fn from(x: u32) -> Scalar {
        let mut s_bytes = [0u8; 32];
        s_bytes[..4].copy_from_slice(&x.to_le_bytes());
        Scalar { bytes: s_bytes }
    }
}

impl From<u64> for Scalar {
    /// Construct a scalar from the given `u64`.
    ///
    /// # Inputs
    ///
    /// An `u64` to convert to a `Scalar`.
    ///
    /// # Returns
    ///
    /// A `Scalar` corresponding to the input `u64`.
    ///
    /// # Example
    ///
    /// ```
    /// use fourq::scalar::Scalar;
    ///
    /// let fourtytwo = Scalar::from(42u64);
    /// let six = Scalar::from(6u64);
    /// let seven = Scalar::from(7u64);
    ///
    /// assert!(fourtytwo == six * seven);
    /// ```
    fn from(x: u64) -> Scalar {
        let mut s_bytes = [0u8; 32];
        s_bytes[..8].copy_from_slice(&x.to_le_bytes());
        Scalar { bytes: s_bytes }
    }
}

impl From<u128> for Scalar {
    fn from(x: u128) -> Scalar {
        let mut s_bytes = [0u8; 32];
        s_bytes[..16].copy_from_slice(&x.to_le_bytes());
        Scalar { bytes: s_bytes }
    }
}

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(32)?;
        for byte in self.as_bytes().iter() {
            tup.serialize_element(byte)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str(
                    "a sequence of 32 bytes whose little-endian interpretation is less than the group order r",
                )
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Scalar, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; 32];
                #[allow(clippy::needless_range_loop)]
                for i in 0..32 {
                    bytes[i] = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &"expected 32 bytes"))?;
                }
                Option::from(Scalar::from_canonical_bytes(bytes))
                    .ok_or_else(|| serde::de::Error::custom("scalar was not canonically encoded"))
            }
        }

        deserializer.deserialize_tuple(32, ScalarVisitor)
    }
}

impl Scalar {
    /// The scalar \\( 0 \\).
    pub const ZERO: Self = Self { bytes: [0u8; 32] };

    /// The scalar \\( 1 \\).
    pub const ONE: Self = Self {
        bytes: [
            1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0,
        ],
    };

    /// Construct a `Scalar` by reducing a 256-bit little-endian integer
    /// modulo the group order \\( r \\).
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Scalar {
        Scalar64::from_bytes(&bytes).reduce().pack()
    }

    /// Construct a `Scalar` by reducing a 512-bit little-endian integer
    /// modulo the group order \\( r \\).
    pub fn from_bytes_mod_order_wide(input: &[u8; 64]) -> Scalar {
        let mut lo = [0u8; 32];
        let mut hi = [0u8; 32];
        lo.copy_from_slice(&input[..32]);
        hi.copy_from_slice(&input[32..]);
        Scalar64::from_wide(&Scalar64::from_bytes(&lo), &Scalar64::from_bytes(&hi)).pack()
    }

    /// Attempt to construct a `Scalar` from a canonical byte
    /// representation.
    ///
    /// # Return
    ///
    /// - `Some(s)`, where `s` is the `Scalar` corresponding to `bytes`,
    ///   if `bytes` is a canonical byte representation modulo the group
    ///   order \\( r \\);
    /// - `None` if `bytes` is not a canonical byte representation.
    pub fn from_canonical_bytes(bytes: [u8; 32]) -> CtOption<Scalar> {
        let candidate = Scalar { bytes };
        CtOption::new(candidate, candidate.is_canonical())
    }

    /// Construct a `Scalar` from the low 256 bits of a little-endian
    /// integer, without any reduction.
    ///
    /// The multiplication routines reduce their scalar input, so an
    /// unreduced `Scalar` is still a valid multiplier.
    pub const fn from_bits(bytes: [u8; 32]) -> Scalar {
        Scalar { bytes }
    }

    /// Return a `Scalar` chosen uniformly at random using a user-provided RNG.
    ///
    /// # Inputs
    ///
    /// * `rng`: any RNG which implements `CryptoRngCore`
    ///   (i.e. `CryptoRng` + `RngCore`) interface.
    ///
    /// # Returns
    ///
    /// A random scalar within \\(\mathbb{Z} / r\mathbb{Z}\\).
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "rand_core")]
    /// # {
    /// use fourq::scalar::Scalar;
    ///
    /// use rand_core::OsRng;
    ///
    /// let mut csprng = OsRng;
    /// let a: Scalar = Scalar::random(&mut csprng);
    /// # }
    /// ```
    #[cfg(feature = "rand_core")]
    pub fn random<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Self {
        let mut scalar_bytes = [0u8; 64];
        rng.fill_bytes(&mut scalar_bytes);
        Scalar::from_bytes_mod_order_wide(&scalar_bytes)
    }

    #[cfg(feature = "digest")]
    /// Hash a slice of bytes into a scalar.
    ///
    /// Takes a type parameter `D`, which is any `Digest` producing 64
    /// bytes (512 bits) of output.
    ///
    /// Convenience wrapper around `from_hash`.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "digest")]
    /// # {
    /// use fourq::scalar::Scalar;
    /// use sha2::Sha512;
    ///
    /// let msg = "To really appreciate architecture, you may even need to commit a murder";
    /// let s = Scalar::hash_from_bytes::<Sha512>(msg.as_bytes());
    /// # }
    /// ```
    pub fn hash_from_bytes<D>(input: &[u8]) -> Scalar
    where
        D: Digest<OutputSize = U64> + Default,
    {
        let mut hash = D::default();
        hash.update(input);
        Scalar::from_hash(hash)
    }

    #[cfg(feature = "digest")]
    /// Construct a scalar from an existing `Digest` instance by reducing
    /// its 512-bit output modulo \\( r \\).
    pub fn from_hash<D>(hash: D) -> Scalar
    where
        D: Digest<OutputSize = U64>,
    {
        let mut output = [0u8; 64];
        output.copy_from_slice(hash.finalize().as_slice());
        Scalar::from_bytes_mod_order_wide(&output)
    }

    /// Convert this `Scalar` to its underlying sequence of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// View the little-endian byte encoding of the integer representing this Scalar.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Reduce this `Scalar` modulo \\( r \\).
    pub fn reduce(&self) -> Scalar {
        self.unpack().reduce().pack()
    }

    /// Check whether this `Scalar` is the canonical representative mod
    /// \\( r \\).
    pub fn is_canonical(&self) -> Choice {
        self.ct_eq(&self.reduce())
    }

    /// Decompose this scalar into four 64-bit coefficients
    /// \\( (a\_1, a\_2, a\_3, a\_4) \\) with
    /// \\( k \equiv a\_1 + a\_2 \lambda\_1 + a\_3 \lambda\_2 + a\_4 \lambda\_1 \lambda\_2 \pmod r \\),
    /// where \\( \lambda\_1, \lambda\_2 \\) are the eigenvalues of the two
    /// FourQ endomorphisms.  The first coefficient is always odd.
    pub fn decompose(&self) -> [u64; 4] {
        self.unpack().decompose()
    }

    /// Unpack this `Scalar` to a `Scalar64` for arithmetic.
    pub(crate) fn unpack(&self) -> Scalar64 {
        Scalar64::from_bytes(&self.bytes)
    }
}

/// u64 * u64 = u128 multiply helper
#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

/// Word 4 of the 512-bit product `s * c`, i.e. `floor(s * c / 2^256)`
/// truncated to 64 bits.
fn mul_truncate(s: &[u64; 4], c: &[u64; 4]) -> u64 {
    let mut t = [0u64; 8];
    for i in 0..4 {
        let mut carry: u128 = 0;
        for j in 0..4 {
            let uv = m(s[i], c[j]) + (t[i + j] as u128) + carry;
            t[i + j] = uv as u64;
            carry = uv >> 64;
        }
        t[i + 4] = carry as u64;
    }
    t[4]
}

/// Shift a 256-bit value right by `k < 64` places.
#[inline(always)]
fn shift_right(s: &mut [u64; 4], k: u32) {
    debug_assert!(k > 0 && k < 64);
    for i in 0..3 {
        s[i] = (s[i] >> k) | (s[i + 1] << (64 - k));
    }
    s[3] >>= k;
}

/// Add a single word to a 256-bit value, wrapping.
#[inline(always)]
fn add_word(s: &mut [u64; 4], w: u64, high: u64) {
    let mut carry: u128 = 0;
    for (i, limb) in s.iter_mut().enumerate() {
        let addend = if i == 0 { w } else { high };
        carry = (*limb as u128) + (addend as u128) + (carry >> 64);
        *limb = carry as u64;
    }
}

impl Scalar64 {
    /// Pack the limbs of this `Scalar64` into a `Scalar`.
    pub(crate) fn pack(&self) -> Scalar {
        Scalar {
            bytes: self.as_bytes(),
        }
    }

    /// Map a reduced scalar \\( k < r \\) to an odd scalar which
    /// represents the same multiple: \\( k \\) itself if odd,
    /// \\( k + r \\) if even.  The result is below \\( 2r < 2^{247} \\).
    pub(crate) fn conversion_to_odd(&self) -> Scalar64 {
        // all ones if k is even
        let mask = (self[0] & 1).wrapping_sub(1);
        let mut odd = Scalar64::ZERO;
        let mut carry: u128 = 0;
        for i in 0..4 {
            carry = (self[i] as u128) + ((constants::R[i] & mask) as u128) + (carry >> 64);
            odd[i] = carry as u64;
        }
        odd
    }

    /// Decompose this scalar with Babai rounding against the reduced
    /// endomorphism lattice.
    ///
    /// The coefficients are computed with wrapping 64-bit arithmetic;
    /// the lattice bounds guarantee the true values fit, so the low words
    /// are exact.  A final masked correction with the fourth basis
    /// vector makes the first coefficient odd.
    #[rustfmt::skip] // keep alignment of the coefficient formulas
    pub(crate) fn decompose(&self) -> [u64; 4] {
        use constants::*;

        let a1 = mul_truncate(&self.0, &ELL1);
        let a2 = mul_truncate(&self.0, &ELL2);
        let a3 = mul_truncate(&self.0, &ELL3);
        let a4 = mul_truncate(&self.0, &ELL4);

        let temp = self[0]
            .wrapping_sub(a1.wrapping_mul(B11))
            .wrapping_sub(a2.wrapping_mul(B21))
            .wrapping_sub(a3.wrapping_mul(B31))
            .wrapping_sub(a4.wrapping_mul(B41))
            .wrapping_add(C1);

        // all ones if the first coefficient is even
        let mask = (temp & 1).wrapping_sub(1);

        let s0 = temp.wrapping_add(mask & B41);
        let s1 = a1.wrapping_mul(B12)
            .wrapping_add(a2)
            .wrapping_sub(a3.wrapping_mul(B32))
            .wrapping_sub(a4.wrapping_mul(B42))
            .wrapping_add(C2)
            .wrapping_add(mask & B42);
        let s2 = a3.wrapping_mul(B33)
            .wrapping_sub(a1.wrapping_mul(B13))
            .wrapping_sub(a2)
            .wrapping_add(a4.wrapping_mul(B43))
            .wrapping_add(C3)
            .wrapping_sub(mask & B43);
        let s3 = a1.wrapping_mul(B14)
            .wrapping_sub(a2.wrapping_mul(B24))
            .wrapping_sub(a3.wrapping_mul(B34))
            .wrapping_add(a4.wrapping_mul(B44))
            .wrapping_add(C4)
            .wrapping_sub(mask & B44);

        [s0, s1, s2, s3]
    }

    /// Write an odd scalar \\( k < 2^{250} \\) as
    ///
    /// $$ k = \sum\_{i=0}^{T} \pm (2 d\_i + 1) 16^i, $$
    ///
    /// with \\( T = 62 \\) and \\( 0 \leq d\_i < 8 \\).
    ///
    /// Returns the digits \\( d\_i \\) and per-digit sign masks, which are
    /// all ones for a positive digit and zero for a negative one.  There
    /// are no secret-dependent branches.
    pub(crate) fn fixed_window_recode(&self) -> ([u8; T_VARBASE + 1], [u64; T_VARBASE + 1]) {
        debug_assert_eq!(self[0] & 1, 1);
        debug_assert!(self[3] >> 58 == 0);

        const WINDOW_MASK: u64 = (1 << W_VARBASE) - 1;
        const HALF_WINDOW: i64 = 1 << (W_VARBASE - 1);

        let mut digits = [0u8; T_VARBASE + 1];
        let mut sign_masks = [0u64; T_VARBASE + 1];
        let mut k = self.0;

        // Given an odd signed value, return (|temp| >> 1, sign mask).
        let split = |temp: i64| -> (u8, u64) {
            let sign_mask = !((temp >> 63) as u64);
            let neg = temp.wrapping_neg() as u64;
            let abs = (sign_mask & ((temp as u64) ^ neg)) ^ neg;
            ((abs >> 1) as u8, sign_mask)
        };

        for i in 0..T_VARBASE {
            // temp is odd and lies in [-15, 15]
            let temp = ((k[0] & WINDOW_MASK) as i64) - HALF_WINDOW;
            let (digit, sign_mask) = split(temp);
            digits[i] = digit;
            sign_masks[i] = sign_mask;

            // k = (k - temp) >> (w - 1); k - temp is never negative
            let sub = temp.wrapping_neg();
            add_word(&mut k, sub as u64, (sub >> 63) as u64);
            shift_right(&mut k, (W_VARBASE - 1) as u32);
        }

        // The leftover is the small positive top digit.
        let (digit, sign_mask) = split(k[0] as i64);
        digits[T_VARBASE] = digit;
        sign_masks[T_VARBASE] = sign_mask;

        (digits, sign_masks)
    }

    /// Write an odd scalar \\( k < 2^{250} \\) in modified LSB-set form.
    ///
    /// The \\( L = 250 \\) digits are read as \\( W = 5 \\) rows of
    /// \\( D = 50 \\) columns.  The first row holds signs, `0` for
    /// \\( + \\) and `-1` for \\( - \\), with column \\( D - 1 \\) always
    /// positive; the other rows hold bits in \\( \\{0, 1\\} \\), and each
    /// column's value carries the sign of its first row.  There are no
    /// secret-dependent branches.
    pub(crate) fn mlsb_set_recode(&self) -> [i8; L_FIXEDBASE] {
        debug_assert_eq!(self[0] & 1, 1);
        debug_assert!(self[3] >> 58 == 0);

        let mut digits = [0i8; L_FIXEDBASE];
        let mut k = self.0;

        digits[D_FIXEDBASE - 1] = 0;
        shift_right(&mut k, 1);

        for digit in digits.iter_mut().take(D_FIXEDBASE - 1) {
            // 0 if the next bit is set, -1 if it is clear
            *digit = ((k[0] & 1) as i8) - 1;
            shift_right(&mut k, 1);
        }

        for i in D_FIXEDBASE..L_FIXEDBASE {
            let bit = k[0] & 1;
            digits[i] = bit as i8;
            shift_right(&mut k, 1);

            // A set bit under a negative column borrows one from above.
            let negative = (digits[i % D_FIXEDBASE] as i64).wrapping_neg() as u64;
            add_word(&mut k, negative & bit, 0);
        }

        digits
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use rand::rngs::OsRng;
    use rand::RngCore;

    /// x = 24277688293729553687714862060050957316982712255821404694526012856694968363
    static X: Scalar = Scalar {
        bytes: [
            0x2b, 0x90, 0x2f, 0x89, 0x11, 0xe8, 0x18, 0x18, 0xf8, 0xc9, 0x9d, 0x5d, 0x5d, 0x98,
            0x31, 0x95, 0x75, 0x04, 0xd9, 0x0e, 0x94, 0x5d, 0xe2, 0xe8, 0xf5, 0x4e, 0xe7, 0x81,
            0x9d, 0xbd, 0x0d, 0x00,
        ],
    };

    /// r - 1, the canonical representative of -1
    static MINUS_ONE: Scalar = Scalar {
        bytes: [
            0xe6, 0x8c, 0x76, 0xc7, 0x0e, 0x54, 0xb2, 0x2f, 0x99, 0x79, 0x0f, 0xfe, 0x4d, 0x00,
            0xbd, 0xdf, 0xe5, 0x14, 0xbc, 0x9c, 0x82, 0x97, 0x53, 0xf0, 0x72, 0x0a, 0x5e, 0x4e,
            0xc1, 0xcb, 0x29, 0x00,
        ],
    };

    /// The eigenvalue of the first endomorphism.
    const LAMBDA1: Scalar64 = Scalar64([
        0xcdf0e63ce8997864,
        0x24874f0b5e4daa9b,
        0x83c18f03c13d7376,
        0x0006d9069dc876c8,
    ]);

    /// The eigenvalue of the second endomorphism.
    const LAMBDA2: Scalar64 = Scalar64([
        0x5dc7f2b7cdfd2a88,
        0xcb3688ca09ef0e88,
        0x8c4c2510ab53b51e,
        0x0018c47535351926,
    ]);

    /// The product of the two eigenvalues.
    const LAMBDA12: Scalar64 = Scalar64([
        0xe27d32386d92daba,
        0xeaaaebb7756d5f80,
        0x01cc07f2197ccf13,
        0x0017f1d82d2b6177,
    ]);

    fn random_scalar() -> Scalar {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        Scalar::from_bits(bytes)
    }

    fn recompose(s: &[u64; 4]) -> Scalar {
        Scalar::from(s[0])
            + Scalar::from(s[1]) * LAMBDA1.pack()
            + Scalar::from(s[2]) * LAMBDA2.pack()
            + Scalar::from(s[3]) * LAMBDA12.pack()
    }

    #[test]
    fn lambdas_are_consistent() {
        assert_eq!(LAMBDA1.pack() * LAMBDA2.pack(), LAMBDA12.pack());
    }

    #[test]
    fn decompose_vectors() {
        let r = crate::constants::BASEPOINT_ORDER;
        let vectors: [(Scalar, [u64; 4]); 5] = [
            (
                Scalar::ZERO,
                [0x85b6605ce2ad1ddb, 0x8b1c3a38a1086e9e, 0x7748878c1b7d50c3, 0x52f07576bff07d8d],
            ),
            (
                Scalar::ONE,
                [0x72482c5251a4559d, 0x59f95b0add276f6c, 0x7dd2d17c4625fa78, 0x6bc57def56ce8877],
            ),
            (
                MINUS_ONE,
                [0xa73d3559f9c01b71, 0x5cbd7c25c0b049bc, 0x4f85afb2bcfe35da, 0x9c3fb2f0a4cebdde],
            ),
            (
                r,
                [0xbaab69648ac8e3b1, 0x8de05b53849148ee, 0x48fb65c292558c25, 0x836aaa780df0b2f4],
            ),
            (
                Scalar::from_bits([0xff; 32]),
                [0xda35c5f965d7bda7, 0xa503c22b757aaf5f, 0x453f4116cab943e7, 0x7c2a53525734dae4],
            ),
        ];
        for (k, expected) in vectors.iter() {
            assert_eq!(k.decompose(), *expected);
            assert_eq!(recompose(expected), k.reduce());
        }
    }

    #[test]
    fn decompose_round_trips() {
        for _ in 0..100 {
            let k = random_scalar();
            let s = k.decompose();
            assert_eq!(s[0] & 1, 1);
            assert_eq!(recompose(&s), k.reduce());
        }
    }

    #[test]
    fn conversion_to_odd() {
        let r = crate::constants::BASEPOINT_ORDER;
        assert_eq!(Scalar64::ZERO.conversion_to_odd().pack(), r);
        assert_eq!(Scalar64::ONE.conversion_to_odd().pack(), Scalar::ONE);

        let two = Scalar64([2, 0, 0, 0]).conversion_to_odd();
        assert_eq!(two[0] & 1, 1);
        assert_eq!(two.pack().reduce(), Scalar::from(2u8));
    }

    /// Sum the fixed-window digits back up mod r.
    fn fixed_window_value(digits: &[u8], signs: &[u64]) -> Scalar {
        let sixteen = Scalar::from(16u8);
        let mut acc = Scalar::ZERO;
        for (d, s) in digits.iter().zip(signs.iter()).rev() {
            let term = Scalar::from(2 * (*d as u64) + 1);
            acc = &acc * &sixteen;
            acc = if *s == u64::MAX { acc + term } else { acc - term };
        }
        acc
    }

    #[test]
    fn fixed_window_recode_reconstructs() {
        for k in [Scalar::ONE, X, MINUS_ONE, random_scalar()].iter() {
            let k = k.unpack().reduce().conversion_to_odd();
            let (digits, signs) = k.fixed_window_recode();
            for (d, s) in digits.iter().zip(signs.iter()) {
                assert!(*d < 8);
                assert!(*s == 0 || *s == u64::MAX);
            }
            assert_eq!(digits[T_VARBASE], 0);
            assert_eq!(signs[T_VARBASE], u64::MAX);
            assert_eq!(fixed_window_value(&digits, &signs), k.pack().reduce());
        }
    }

    #[test]
    fn fixed_window_recode_of_one() {
        // 1 = 16^62 - 15 * (16^61 + ... + 1)
        let (digits, signs) = Scalar64::ONE.fixed_window_recode();
        for i in 0..T_VARBASE {
            assert_eq!(digits[i], 7);
            assert_eq!(signs[i], 0);
        }
    }

    /// Sum the mLSB-set digits back up mod r.
    fn mlsb_set_value(digits: &[i8; L_FIXEDBASE]) -> Scalar {
        let mut acc = Scalar::ZERO;
        let mut power = Scalar::ONE;
        for i in 0..L_FIXEDBASE {
            let sign_is_negative = digits[i % D_FIXEDBASE] == -1;
            let magnitude = if i < D_FIXEDBASE { 1 } else { digits[i] as u8 };
            let term = &power * &Scalar::from(magnitude);
            acc = if sign_is_negative { acc - term } else { acc + term };
            power = power + power;
        }
        acc
    }

    #[test]
    fn mlsb_set_recode_reconstructs() {
        for k in [Scalar::ONE, X, MINUS_ONE, random_scalar(), random_scalar()].iter() {
            let k = k.unpack().reduce().conversion_to_odd();
            let digits = k.mlsb_set_recode();
            assert_eq!(digits[D_FIXEDBASE - 1], 0);
            for (i, d) in digits.iter().enumerate() {
                if i < D_FIXEDBASE {
                    assert!(*d == 0 || *d == -1);
                } else {
                    assert!(*d == 0 || *d == 1);
                }
            }
            assert_eq!(mlsb_set_value(&digits), k.pack().reduce());
        }
    }

    #[test]
    fn add_reduces() {
        assert_eq!(MINUS_ONE + Scalar::ONE, Scalar::ZERO);
        assert_eq!(Scalar::ZERO - Scalar::ONE, MINUS_ONE);
        assert_eq!(-Scalar::ONE, MINUS_ONE);
        assert_eq!(-Scalar::ZERO, Scalar::ZERO);
    }

    #[test]
    fn mul_is_distributive() {
        for _ in 0..20 {
            let a = random_scalar();
            let b = random_scalar();
            let c = random_scalar();
            assert_eq!(&(a + b) * &c, &(a * c) + &(b * c));
            assert_eq!(a * Scalar::ONE, a.reduce());
            assert_eq!(MINUS_ONE * MINUS_ONE, Scalar::ONE);
        }
    }

    #[test]
    fn assign_ops() {
        let mut s = X;
        s += Scalar::ONE;
        s -= Scalar::ONE;
        assert_eq!(s, X.reduce());
        s *= Scalar::from(2u8);
        assert_eq!(s, X + X);
    }

    #[test]
    fn canonical_bytes() {
        assert!(bool::from(X.is_canonical()));
        assert!(bool::from(MINUS_ONE.is_canonical()));
        let r = crate::constants::BASEPOINT_ORDER;
        assert!(!bool::from(r.is_canonical()));
        assert!(bool::from(Scalar::from_canonical_bytes(r.to_bytes()).is_none()));
        assert!(!bool::from(Scalar::from_bits([0xff; 32]).is_canonical()));
    }

    #[test]
    fn from_bytes_mod_order_wide() {
        // 2^256 = (2^256 - 1) + 1
        let mut wide = [0u8; 64];
        wide[32] = 1;
        let expected = Scalar::from_bytes_mod_order([0xff; 32]) + Scalar::ONE;
        assert_eq!(Scalar::from_bytes_mod_order_wide(&wide), expected);

        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(X.as_bytes());
        assert_eq!(Scalar::from_bytes_mod_order_wide(&wide), X);
    }

    #[test]
    fn sum_and_product() {
        let two = Scalar::from(2u32);
        let xs = [two, two, two];
        assert_eq!(xs.iter().sum::<Scalar>(), Scalar::from(6u16));
        assert_eq!(xs.iter().product::<Scalar>(), Scalar::from(8u128));
    }

    #[test]
    fn conditional_select() {
        let s = Scalar::conditional_select(&X, &MINUS_ONE, Choice::from(1));
        assert_eq!(s, MINUS_ONE);
        let s = Scalar::conditional_select(&X, &MINUS_ONE, Choice::from(0));
        assert_eq!(s, X);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_bincode_scalar_roundtrip() {
        use bincode;
        let encoded = bincode::serialize(&X).unwrap();
        let parsed: Scalar = bincode::deserialize(&encoded).unwrap();
        assert_eq!(parsed, X);

        // Check that the encoding is 32 bytes exactly
        assert_eq!(encoded.len(), 32);

        // Check that the encoding itself matches the usual one
        assert_eq!(X, bincode::deserialize(X.as_bytes()).unwrap());
    }
}
