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

//! Group operations for FourQ, in twisted Edwards form.
//!
//! ## Encoding and Decoding
//!
//! Encoding is done by converting to and from a `CompressedPoint`
//! struct, which is a typed wrapper around `[u8; 32]`.  The encoding
//! stores the \\(y\\)-coordinate, real half first, and puts the sign of
//! \\(x\\) in the top bit of the last byte.  The top bit of the first
//! half is reserved and must be clear.
//!
//! ## Equality Testing
//!
//! The `ExtendedPoint` struct implements the [`subtle::ConstantTimeEq`]
//! trait for constant-time equality checking, and also uses this to
//! ensure `Eq` equality checking runs in constant time.
//!
//! ## Scalars
//!
//! Scalars are represented by the `Scalar` struct.  Any 256-bit value is
//! accepted; the multiplication routines reduce it mod \\( r \\).
//!
//! ## Scalar Multiplication
//!
//! Scalar multiplication on `ExtendedPoint`s is provided by:
//!
//! * the `*` operator between a `Scalar` and an `ExtendedPoint`, which
//!   performs constant-time variable-base scalar multiplication;
//!
//! * `ExtendedPoint::variable_base_mul`, which validates its input point
//!   and can clear the cofactor first;
//!
//! * `ExtendedPoint::mul_base`, which performs constant-time fixed-base
//!   scalar multiplication of the generator with a precomputed comb;
//!
//! * `ExtendedPoint::double_base_mul`, which computes \\(aG + bQ\\).
//!
//! ## Implementation
//!
//! The Rust code in this module uses the point representations from
//! the `curve_models` module.  `ExtendedPoint` keeps the extended
//! coordinate \\( T \\) split into two factors \\( T = T\_a T\_b \\), which
//! doubling and addition both produce without a multiplication.

// We allow non snake_case names because coordinates in projective space are
// traditionally denoted by the capitalisation of their respective
// counterparts in affine space.
#![allow(non_snake_case)]

use core::fmt::Debug;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Neg, Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::curve_models::AffinePrecomputedPoint;
use crate::backend::serial::scalar_mul::{double_base, fixed_base, variable_base};
use crate::backend::serial::u64::constants;
use crate::errors::CurveError;
use crate::field::FieldElement;
use crate::fp2::Fp2;
use crate::scalar::Scalar;
use crate::traits::{Identity, IsIdentity, ValidityCheck};

// ------------------------------------------------------------------------
// Compressed points
// ------------------------------------------------------------------------

/// A point on FourQ, compressed to 32 bytes.
///
/// Bytes `0..16` hold the real half of \\(y\\) and bytes `16..32` its
/// imaginary half, both little-endian.  Bit 127 of the real half is
/// reserved.  Bit 255 holds the sign of \\(x\\): bit 126 of its real
/// half, or of its imaginary half when the real half is zero.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct CompressedPoint(pub [u8; 32]);

impl ConstantTimeEq for CompressedPoint {
    fn ct_eq(&self, other: &CompressedPoint) -> Choice {
        self.as_bytes().ct_eq(other.as_bytes())
    }
}

impl Debug for CompressedPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CompressedPoint: {:?}", self.as_bytes())
    }
}

impl CompressedPoint {
    /// View this `CompressedPoint` as an array of bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy this `CompressedPoint` to an array of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Construct a `CompressedPoint` from a slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::BytesLengthError`] if the input slice is not
    /// 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<CompressedPoint, CurveError> {
        if bytes.len() != 32 {
            return Err(CurveError::BytesLengthError {
                name: "CompressedPoint",
                length: 32,
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(bytes);
        Ok(CompressedPoint(arr))
    }

    /// Attempt to decompress to an `AffinePoint`.
    ///
    /// # Errors
    ///
    /// * [`CurveError::MalformedEncoding`] if the reserved bit is set or
    ///   either half of \\(y\\) is encoded as \\( p \\);
    /// * [`CurveError::InvalidPoint`] if no point on the curve has this
    ///   \\(y\\)-coordinate.
    ///
    /// The input is public; the checks return early.
    pub fn decompress(&self) -> Result<AffinePoint, CurveError> {
        let bytes = self.as_bytes();
        if bytes[15] & 0x80 != 0 {
            return Err(CurveError::MalformedEncoding);
        }

        let mut y_bytes = *bytes;
        y_bytes[31] &= 0x7f;
        if !is_canonical_half(&y_bytes[..16]) || !is_canonical_half(&y_bytes[16..]) {
            return Err(CurveError::MalformedEncoding);
        }
        let compressed_sign_bit = Choice::from(bytes[31] >> 7);

        let y = Fp2::from_bytes(&y_bytes);
        let YY = y.square();
        let u = &YY - &Fp2::ONE; // u =  y²-1
        let v = &(&YY * &constants::EDWARDS_D) + &Fp2::ONE; // v = dy²+1
        let mut x = recover_x(&u, &v);

        // Flip the sign of x if it's not correct
        let current_sign_bit = x.sign_bit();
        x.conditional_negate(current_sign_bit ^ compressed_sign_bit);

        let mut P = AffinePoint { x, y };
        if !P.is_valid() {
            P.x.im = -&P.x.im;
            if !P.is_valid() {
                return Err(CurveError::InvalidPoint);
            }
        }
        Ok(P)
    }
}

impl TryFrom<&[u8]> for CompressedPoint {
    type Error = CurveError;

    fn try_from(slice: &[u8]) -> Result<CompressedPoint, CurveError> {
        Self::from_slice(slice)
    }
}

impl Identity for CompressedPoint {
    fn identity() -> CompressedPoint {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        CompressedPoint(bytes)
    }
}

impl Default for CompressedPoint {
    fn default() -> CompressedPoint {
        CompressedPoint::identity()
    }
}

/// Whether a 16-byte half of an encoded \\(y\\) is below \\( p \\).  The
/// top bit is already known to be clear, so only the all-ones value fails.
fn is_canonical_half(half: &[u8]) -> bool {
    half[..15].iter().any(|b| *b != 0xff) || half[15] != 0x7f
}

/// Given \\( u = y^2 - 1 \\) and \\( v = d y^2 + 1 \\), compute a candidate
/// \\( x \\) with \\( x^2 = u / v \\) over \\( \mathbb F\_{p^2} \\).
///
/// The square root is taken through the norm: with
/// \\( n = t\_1^2 + t\_2^2 \\) the norm of \\( u \bar v \\), the value
/// \\( n^{2^{125}} \\) is a square root of it in \\( \mathbb F\_p \\), and
/// one exponentiation by \\( 2^{125} - 1 \\) then yields both halves of
/// \\( x \\).  The result is only a candidate; the caller validates it.
#[rustfmt::skip] // keep alignment of explanatory comments
fn recover_x(u: &Fp2, v: &Fp2) -> Fp2 {
    let (u0, u1) = (&u.re, &u.im);
    let (v0, v1) = (&v.re, &v.im);

    let t0 = &v0.square() + &v1.square();           // N(v)
    let t1 = &(u0 * v0) + &(u1 * v1);               // re(u * conj(v))
    let t2 = &(u1 * v0) - &(u0 * v1);               // im(u * conj(v))
    let t3 = (&t1.square() + &t2.square()).pow2k(125);

    let mut t = &t1 + &t3;
    let t_is_zero = t.is_zero();
    t.conditional_assign(&(&t1 - &t3), t_is_zero);
    let t = t.double();

    let t3 = &(&t0.square() * &t0) * &t;
    let t3 = &t0 * &t3.pow125_minus_one();

    let mut x0 = &t * &t3;
    let check = &t0 * &x0.square();
    x0 = x0.half();
    let mut x1 = &t2 * &t3;

    FieldElement::conditional_swap(&mut x0, &mut x1, !t.ct_eq(&check));

    Fp2 { re: x0, im: x1 }
}

// ------------------------------------------------------------------------
// Serde support
// ------------------------------------------------------------------------
// Serializes to and from `ExtendedPoint` directly, doing compression
// and decompression internally.  This means that users can create
// structs containing `ExtendedPoint`s and use Serde's derived
// serializers to serialize those structures.

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for ExtendedPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(32)?;
        for byte in self.compress().as_bytes().iter() {
            tup.serialize_element(byte)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl Serialize for CompressedPoint {
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
impl<'de> Deserialize<'de> for ExtendedPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ExtendedPointVisitor;

        impl<'de> Visitor<'de> for ExtendedPointVisitor {
            type Value = ExtendedPoint;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("a valid point in FourQ y + sign format")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<ExtendedPoint, A::Error>
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
                CompressedPoint(bytes)
                    .decompress()
                    .map(|P| P.to_extended())
                    .map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_tuple(32, ExtendedPointVisitor)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CompressedPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CompressedPointVisitor;

        impl<'de> Visitor<'de> for CompressedPointVisitor {
            type Value = CompressedPoint;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("32 bytes of data")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<CompressedPoint, A::Error>
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
                Ok(CompressedPoint(bytes))
            }
        }

        deserializer.deserialize_tuple(32, CompressedPointVisitor)
    }
}

// ------------------------------------------------------------------------
// Point representations
// ------------------------------------------------------------------------

/// A point \\((x, y)\\) on FourQ in affine coordinates.
///
/// Values of this type are always on the curve: the constructors
/// validate their input.
#[derive(Copy, Clone)]
pub struct AffinePoint {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
}

/// A point \\((X:Y:Z:T\_a:T\_b)\\) on FourQ in extended twisted Edwards
/// coordinates, with \\( x = X/Z \\), \\( y = Y/Z \\) and
/// \\( xy = T\_a T\_b / Z \\).
#[derive(Copy, Clone)]
#[allow(missing_docs)]
pub struct ExtendedPoint {
    pub(crate) X: Fp2,
    pub(crate) Y: Fp2,
    pub(crate) Z: Fp2,
    pub(crate) Ta: Fp2,
    pub(crate) Tb: Fp2,
}

// ------------------------------------------------------------------------
// Constructors
// ------------------------------------------------------------------------

impl Identity for AffinePoint {
    fn identity() -> AffinePoint {
        AffinePoint {
            x: Fp2::ZERO,
            y: Fp2::ONE,
        }
    }
}

impl Default for AffinePoint {
    fn default() -> AffinePoint {
        AffinePoint::identity()
    }
}

impl Identity for ExtendedPoint {
    fn identity() -> ExtendedPoint {
        ExtendedPoint {
            X: Fp2::ZERO,
            Y: Fp2::ONE,
            Z: Fp2::ONE,
            Ta: Fp2::ZERO,
            Tb: Fp2::ONE,
        }
    }
}

impl Default for ExtendedPoint {
    fn default() -> ExtendedPoint {
        ExtendedPoint::identity()
    }
}

// ------------------------------------------------------------------------
// Zeroize implementations for wiping points from memory
// ------------------------------------------------------------------------

#[cfg(feature = "zeroize")]
impl Zeroize for ExtendedPoint {
    /// Reset this `ExtendedPoint` to the identity element.
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y = Fp2::ONE;
        self.Z = Fp2::ONE;
        self.Ta.zeroize();
        self.Tb = Fp2::ONE;
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for AffinePoint {
    /// Reset this `AffinePoint` to the identity element.
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y = Fp2::ONE;
    }
}

// ------------------------------------------------------------------------
// Validity checks (for debugging, not CT)
// ------------------------------------------------------------------------

impl ValidityCheck for AffinePoint {
    fn is_valid(&self) -> bool {
        // -x^2 + y^2 = 1 + d*x^2*y^2
        let xx = self.x.square();
        let yy = self.y.square();
        let lhs = &yy - &xx;
        let rhs = &Fp2::ONE + &(&constants::EDWARDS_D * &(&xx * &yy));

        lhs == rhs
    }
}

impl ValidityCheck for ExtendedPoint {
    fn is_valid(&self) -> bool {
        let point_on_curve = self.as_projective().is_valid();
        let on_segre_image = (&self.X * &self.Y) == (&self.Z * &(&self.Ta * &self.Tb));

        point_on_curve && on_segre_image
    }
}

// ------------------------------------------------------------------------
// Constant-time assignment
// ------------------------------------------------------------------------

impl ConditionallySelectable for ExtendedPoint {
    fn conditional_select(a: &ExtendedPoint, b: &ExtendedPoint, choice: Choice) -> ExtendedPoint {
        ExtendedPoint {
            X: Fp2::conditional_select(&a.X, &b.X, choice),
            Y: Fp2::conditional_select(&a.Y, &b.Y, choice),
            Z: Fp2::conditional_select(&a.Z, &b.Z, choice),
            Ta: Fp2::conditional_select(&a.Ta, &b.Ta, choice),
            Tb: Fp2::conditional_select(&a.Tb, &b.Tb, choice),
        }
    }
}

// ------------------------------------------------------------------------
// Equality
// ------------------------------------------------------------------------

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &AffinePoint) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &AffinePoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

impl ConstantTimeEq for ExtendedPoint {
    fn ct_eq(&self, other: &ExtendedPoint) -> Choice {
        // We would like to check that the point (X/Z, Y/Z) is equal to
        // the point (X'/Z', Y'/Z') without converting into affine
        // coordinates (x, y) and (x', y'), which requires two inversions.
        // We have that X = xZ and X' = x'Z'. Thus, x = x' is equivalent to
        // (xZ)Z' = (x'Z')Z, and similarly for the y-coordinate.

        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
    }
}

impl PartialEq for ExtendedPoint {
    fn eq(&self, other: &ExtendedPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ExtendedPoint {}

// ------------------------------------------------------------------------
// Point conversions
// ------------------------------------------------------------------------

impl AffinePoint {
    /// Build a point from its affine coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidPoint`] if \\((x, y)\\) is not on the
    /// curve.
    pub fn from_coordinates(x: Fp2, y: Fp2) -> Result<AffinePoint, CurveError> {
        let P = AffinePoint { x, y };
        if P.is_valid() {
            Ok(P)
        } else {
            Err(CurveError::InvalidPoint)
        }
    }

    /// The \\(x\\)-coordinate.
    pub fn x(&self) -> &Fp2 {
        &self.x
    }

    /// The \\(y\\)-coordinate.
    pub fn y(&self) -> &Fp2 {
        &self.y
    }

    /// Lift to extended coordinates with \\( Z = 1 \\), \\( T\_a = x \\),
    /// \\( T\_b = y \\).
    pub const fn to_extended(&self) -> ExtendedPoint {
        ExtendedPoint {
            X: self.x,
            Y: self.y,
            Z: Fp2::ONE,
            Ta: self.x,
            Tb: self.y,
        }
    }

    /// Compress this point to 32 bytes.
    pub fn compress(&self) -> CompressedPoint {
        let mut bytes = self.y.to_bytes();
        bytes[31] |= self.x.sign_bit().unwrap_u8() << 7;
        CompressedPoint(bytes)
    }

    /// Check the curve equation.  Always true for values built through
    /// the public API.
    pub fn is_on_curve(&self) -> bool {
        self.is_valid()
    }

    /// Convert to \\( (x+y, y-x, 2dxy) \\), the form of a generator table
    /// entry.
    pub(crate) fn to_affine_precomputed(&self) -> AffinePrecomputedPoint {
        AffinePrecomputedPoint {
            x_plus_y: &self.x + &self.y,
            y_minus_x: &self.y - &self.x,
            xy2d: &(&self.x * &self.y) * &constants::EDWARDS_D2,
        }
    }
}

impl ExtendedPoint {
    /// Normalize to affine coordinates, with one inversion.
    pub fn to_affine(&self) -> AffinePoint {
        let recip = self.Z.invert();
        AffinePoint {
            x: &self.X * &recip,
            y: &self.Y * &recip,
        }
    }

    /// Dehomogenize to an `AffinePrecomputedPoint`.
    pub(crate) fn to_affine_precomputed(&self) -> AffinePrecomputedPoint {
        self.to_affine().to_affine_precomputed()
    }

    /// Compress this point to `CompressedPoint` format.
    pub fn compress(&self) -> CompressedPoint {
        self.to_affine().compress()
    }

    /// Check the curve equation and the consistency of \\( T\_a T\_b \\).
    /// Always true for values built through the public API.
    pub fn is_on_curve(&self) -> bool {
        self.is_valid()
    }
}

// ------------------------------------------------------------------------
// Doubling
// ------------------------------------------------------------------------

impl ExtendedPoint {
    /// Add this point to itself.
    pub fn double(&self) -> ExtendedPoint {
        self.as_projective().double()
    }
}

// ------------------------------------------------------------------------
// Addition and Subtraction
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b ExtendedPoint> for &'a ExtendedPoint {
    type Output = ExtendedPoint;
    fn add(self, other: &'b ExtendedPoint) -> ExtendedPoint {
        &self.as_addend() + &other.as_precomputed()
    }
}

define_add_variants!(
    LHS = ExtendedPoint,
    RHS = ExtendedPoint,
    Output = ExtendedPoint
);

impl<'b> AddAssign<&'b ExtendedPoint> for ExtendedPoint {
    fn add_assign(&mut self, _rhs: &'b ExtendedPoint) {
        *self = (self as &ExtendedPoint) + _rhs;
    }
}

define_add_assign_variants!(LHS = ExtendedPoint, RHS = ExtendedPoint);

impl<'a, 'b> Sub<&'b ExtendedPoint> for &'a ExtendedPoint {
    type Output = ExtendedPoint;
    fn sub(self, other: &'b ExtendedPoint) -> ExtendedPoint {
        &self.as_addend() + &(-&other.as_precomputed())
    }
}

define_sub_variants!(
    LHS = ExtendedPoint,
    RHS = ExtendedPoint,
    Output = ExtendedPoint
);

impl<'b> SubAssign<&'b ExtendedPoint> for ExtendedPoint {
    fn sub_assign(&mut self, _rhs: &'b ExtendedPoint) {
        *self = (self as &ExtendedPoint) - _rhs;
    }
}

define_sub_assign_variants!(LHS = ExtendedPoint, RHS = ExtendedPoint);

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl<'a> Neg for &'a ExtendedPoint {
    type Output = ExtendedPoint;

    fn neg(self) -> ExtendedPoint {
        ExtendedPoint {
            X: -(&self.X),
            Y: self.Y,
            Z: self.Z,
            Ta: -(&self.Ta),
            Tb: self.Tb,
        }
    }
}

define_neg_variant!(ExtendedPoint);

impl<'a> Neg for &'a AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        AffinePoint {
            x: -(&self.x),
            y: self.y,
        }
    }
}

define_neg_variant!(AffinePoint);

// ------------------------------------------------------------------------
// Scalar multiplication
// ------------------------------------------------------------------------

impl<'b> MulAssign<&'b Scalar> for ExtendedPoint {
    fn mul_assign(&mut self, scalar: &'b Scalar) {
        let result = (self as &ExtendedPoint) * scalar;
        *self = result;
    }
}

define_mul_assign_variants!(LHS = ExtendedPoint, RHS = Scalar);

define_mul_variants!(LHS = ExtendedPoint, RHS = Scalar, Output = ExtendedPoint);
define_mul_variants!(LHS = Scalar, RHS = ExtendedPoint, Output = ExtendedPoint);

impl<'a, 'b> Mul<&'b Scalar> for &'a ExtendedPoint {
    type Output = ExtendedPoint;
    /// Scalar multiplication: compute `scalar * self`.
    ///
    /// `self` must lie in the prime-order subgroup: the scalar is reduced
    /// mod \\( r \\) and made odd by adding \\( r \\), which changes the
    /// result for points with a torsion component.  The point is not
    /// validated; use [`ExtendedPoint::variable_base_mul`] with
    /// `clear_cofactor` set for untrusted points.
    ///
    /// For scalar multiplication of the generator, use
    /// `ExtendedPoint::mul_base`, which reads a precomputed comb.
    fn mul(self, scalar: &'b Scalar) -> ExtendedPoint {
        variable_base::mul(self, scalar)
    }
}

impl<'a, 'b> Mul<&'b ExtendedPoint> for &'a Scalar {
    type Output = ExtendedPoint;

    /// Scalar multiplication: compute `scalar * self`.  The subgroup
    /// precondition of `&ExtendedPoint * &Scalar` applies.
    fn mul(self, point: &'b ExtendedPoint) -> ExtendedPoint {
        point * self
    }
}

impl ExtendedPoint {
    /// Fixed-base scalar multiplication by the FourQ generator.
    pub fn mul_base(scalar: &Scalar) -> ExtendedPoint {
        fixed_base::mul(scalar)
    }

    /// Variable-base scalar multiplication: compute `scalar * self`,
    /// or `scalar * 392 * self` when `clear_cofactor` is set.
    ///
    /// Without `clear_cofactor`, `self` must lie in the prime-order
    /// subgroup: the scalar is taken mod \\( r \\), so for a point with a
    /// torsion component the result is not `scalar * self`.  With
    /// `clear_cofactor` set, any point on the curve is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidPoint`] if `self` is not on the
    /// curve.
    pub fn variable_base_mul(
        &self,
        scalar: &Scalar,
        clear_cofactor: bool,
    ) -> Result<ExtendedPoint, CurveError> {
        if !self.is_valid() {
            return Err(CurveError::InvalidPoint);
        }
        let point = if clear_cofactor {
            self.mul_by_cofactor()
        } else {
            *self
        };
        Ok(variable_base::mul(&point, scalar))
    }

    /// Compute \\(aG + bQ\\), where \\(G\\) is the FourQ generator.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidPoint`] if `Q` is not on the curve.
    pub fn double_base_mul(
        a: &Scalar,
        Q: &ExtendedPoint,
        b: &Scalar,
    ) -> Result<ExtendedPoint, CurveError> {
        if !Q.is_valid() {
            return Err(CurveError::InvalidPoint);
        }
        Ok(double_base::mul(a, Q, b))
    }

    /// Multiply by the cofactor: return \\(392 P\\).
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub fn mul_by_cofactor(&self) -> ExtendedPoint {
        let P = self.as_precomputed();
        let mut R = &self.double().as_addend() + &P;    // 3P
        for _ in 0..4 {
            R = R.double();                             // 48P
        }
        R = &R.as_addend() + &P;                        // 49P
        for _ in 0..3 {
            R = R.double();                             // 392P
        }
        R
    }

    /// Determine if this point is of small order.
    ///
    /// # Return
    ///
    /// * `true` if `self` is in the torsion subgroup \\( \mathcal E\[392\] \\);
    /// * `false` if `self` is not in the torsion subgroup.
    pub fn is_small_order(&self) -> bool {
        self.mul_by_cofactor().is_identity()
    }

    /// Determine if this point is "torsion-free", i.e., is contained in
    /// the prime-order subgroup.
    ///
    /// # Return
    ///
    /// * `true` if `self` has zero torsion component and is in the
    ///   prime-order subgroup;
    /// * `false` if `self` has a nonzero torsion component and is not
    ///   in the prime-order subgroup.
    pub fn is_torsion_free(&self) -> bool {
        // The variable-base routine evaluates the scalar 0 as r.
        variable_base::mul(self, &Scalar::ZERO).is_identity()
    }
}

// ------------------------------------------------------------------------
// Debug traits
// ------------------------------------------------------------------------

impl Debug for AffinePoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "AffinePoint{{\n\tx: {:?},\n\ty: {:?}\n}}", &self.x, &self.y)
    }
}

impl Debug for ExtendedPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ExtendedPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?},\n\tTa: {:?},\n\tTb: {:?}\n}}",
            &self.X, &self.Y, &self.Z, &self.Ta, &self.Tb
        )
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
