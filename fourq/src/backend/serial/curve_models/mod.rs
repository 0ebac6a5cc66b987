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

//! Internal curve representations which are not part of the public API.
//!
//! # Curve representations
//!
//! FourQ is the twisted Edwards curve
//!
//! ```text
//!     -x² + y² = 1 + dx²y²
//! ```
//!
//! over \\( \mathbb F\_{p^2} \\).  Passing to extended coordinates with
//! \\( x = X/Z \\), \\( y = Y/Z \\) and \\( T = XY/Z \\) gives the working
//! representation `ExtendedPoint` (defined in `edwards`), which keeps
//! \\( T \\) split as a product \\( T = T\_a T\_b \\): both doubling and
//! addition produce the two factors for free, and only a consumer which
//! actually needs \\( T \\) pays the multiplication.
//!
//! Additions are accelerated by caching the sums and differences of the
//! coordinates of one operand, in the style of Niels Duif's precomputed
//! points from the ed25519 paper.  We use four auxiliary shapes:
//!
//! * `ProjectivePoint`: `(X, Y, Z)`, the input to doubling and the form
//!   a table entry is expanded into to seed an accumulator;
//! * `PrecomputedPoint`: `(X+Y, Y-X, 2Z, 2dT)`, the second operand of a
//!   core addition and the entries of per-call tables;
//! * `AddendPoint`: `(X+Y, Y-X, Z, T)`, the first operand of a core
//!   addition;
//! * `AffinePrecomputedPoint`: `(x+y, y-x, 2dxy)`, the entries of the
//!   generator table used by mixed addition.
//!
//! Each conversion recomputes its derived coordinates; nothing is cached
//! between calls.
//!
//! The addition and doubling formulas are from ["Twisted Edwards Curves
//! Revisited"](https://www.iacr.org/archive/asiacrypt2008/53500329/53500329.pdf)
//! by Hisil, Wong, Carter, and Dawson, specialised to \\( a = -1 \\) as in
//! ["FourQ: four-dimensional decompositions on a Q-curve over the Mersenne
//! prime"](https://eprint.iacr.org/2015/565) by Costello and Longa.

#![allow(non_snake_case)]

use core::fmt::Debug;
use core::ops::{Add, Neg};

use subtle::Choice;
use subtle::ConditionallySelectable;

use crate::backend::serial::u64::constants;
use crate::edwards::ExtendedPoint;
use crate::fp2::Fp2;
use crate::traits::{Identity, ValidityCheck};

// ------------------------------------------------------------------------
// Internal point representations
// ------------------------------------------------------------------------

/// A `ProjectivePoint` is a point \\((X:Y:Z)\\) on the curve in
/// \\(\mathbb P^2(\mathbb F\_{p^2})\\).
#[derive(Copy, Clone)]
#[allow(missing_docs)]
pub struct ProjectivePoint {
    pub X: Fp2,
    pub Y: Fp2,
    pub Z: Fp2,
}

/// A pre-computed point in extended coordinates, represented as
/// \\( (X+Y, Y-X, 2Z, 2dT) \\).
#[derive(Copy, Clone)]
#[allow(missing_docs)]
pub struct PrecomputedPoint {
    pub X_plus_Y:  Fp2,
    pub Y_minus_X: Fp2,
    pub Z2:        Fp2,
    pub T2d:       Fp2,
}

/// The left operand of a core addition, represented as
/// \\( (X+Y, Y-X, Z, T) \\).
#[derive(Copy, Clone)]
#[allow(missing_docs)]
pub struct AddendPoint {
    pub X_plus_Y:  Fp2,
    pub Y_minus_X: Fp2,
    pub Z:         Fp2,
    pub T:         Fp2,
}

/// A pre-computed point in the affine model, represented as
/// \\( (x+y, y-x, 2dxy) \\).
// Safe to derive Eq because affine coordinates.
#[derive(Copy, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub struct AffinePrecomputedPoint {
    pub x_plus_y:  Fp2,
    pub y_minus_x: Fp2,
    pub xy2d:      Fp2,
}

// ------------------------------------------------------------------------
// Constructors
// ------------------------------------------------------------------------

impl Identity for ProjectivePoint {
    fn identity() -> ProjectivePoint {
        ProjectivePoint {
            X: Fp2::ZERO,
            Y: Fp2::ONE,
            Z: Fp2::ONE,
        }
    }
}

impl Identity for PrecomputedPoint {
    fn identity() -> PrecomputedPoint {
        PrecomputedPoint {
            X_plus_Y:  Fp2::ONE,
            Y_minus_X: Fp2::ONE,
            Z2:        Fp2::ONE.double(),
            T2d:       Fp2::ZERO,
        }
    }
}

impl Identity for AddendPoint {
    fn identity() -> AddendPoint {
        AddendPoint {
            X_plus_Y:  Fp2::ONE,
            Y_minus_X: Fp2::ONE,
            Z:         Fp2::ONE,
            T:         Fp2::ZERO,
        }
    }
}

impl Identity for AffinePrecomputedPoint {
    fn identity() -> AffinePrecomputedPoint {
        AffinePrecomputedPoint {
            x_plus_y:  Fp2::ONE,
            y_minus_x: Fp2::ONE,
            xy2d:      Fp2::ZERO,
        }
    }
}

impl Default for PrecomputedPoint {
    fn default() -> PrecomputedPoint {
        PrecomputedPoint::identity()
    }
}

impl Default for AffinePrecomputedPoint {
    fn default() -> AffinePrecomputedPoint {
        AffinePrecomputedPoint::identity()
    }
}

// ------------------------------------------------------------------------
// Validity checks (for debugging, not CT)
// ------------------------------------------------------------------------

impl ValidityCheck for ProjectivePoint {
    fn is_valid(&self) -> bool {
        // Curve equation is    -x^2 + y^2 = 1 + d*x^2*y^2,
        // homogenized as (-X^2 + Y^2)*Z^2 = Z^4 + d*X^2*Y^2
        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ = self.Z.square();
        let ZZZZ = ZZ.square();
        let lhs = &(&YY - &XX) * &ZZ;
        let rhs = &ZZZZ + &(&constants::EDWARDS_D * &(&XX * &YY));

        lhs == rhs
    }
}

// ------------------------------------------------------------------------
// Constant-time assignment
// ------------------------------------------------------------------------

impl ConditionallySelectable for PrecomputedPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        PrecomputedPoint {
            X_plus_Y: Fp2::conditional_select(&a.X_plus_Y, &b.X_plus_Y, choice),
            Y_minus_X: Fp2::conditional_select(&a.Y_minus_X, &b.Y_minus_X, choice),
            Z2: Fp2::conditional_select(&a.Z2, &b.Z2, choice),
            T2d: Fp2::conditional_select(&a.T2d, &b.T2d, choice),
        }
    }

    fn conditional_assign(&mut self, other: &Self, choice: Choice) {
        self.X_plus_Y.conditional_assign(&other.X_plus_Y, choice);
        self.Y_minus_X.conditional_assign(&other.Y_minus_X, choice);
        self.Z2.conditional_assign(&other.Z2, choice);
        self.T2d.conditional_assign(&other.T2d, choice);
    }
}

impl ConditionallySelectable for AffinePrecomputedPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        AffinePrecomputedPoint {
            x_plus_y: Fp2::conditional_select(&a.x_plus_y, &b.x_plus_y, choice),
            y_minus_x: Fp2::conditional_select(&a.y_minus_x, &b.y_minus_x, choice),
            xy2d: Fp2::conditional_select(&a.xy2d, &b.xy2d, choice),
        }
    }

    fn conditional_assign(&mut self, other: &Self, choice: Choice) {
        self.x_plus_y.conditional_assign(&other.x_plus_y, choice);
        self.y_minus_x.conditional_assign(&other.y_minus_x, choice);
        self.xy2d.conditional_assign(&other.xy2d, choice);
    }
}

// ------------------------------------------------------------------------
// Point conversions
// ------------------------------------------------------------------------

impl ExtendedPoint {
    /// Convert to \\( (X+Y, Y-X, 2Z, 2dT) \\), computing
    /// \\( T = T\_a T\_b \\).
    pub(crate) fn as_precomputed(&self) -> PrecomputedPoint {
        PrecomputedPoint {
            X_plus_Y:  &self.X + &self.Y,
            Y_minus_X: &self.Y - &self.X,
            Z2:        self.Z.double(),
            T2d:       &(&self.Ta * &self.Tb) * &constants::EDWARDS_D2,
        }
    }

    /// Convert to \\( (X+Y, Y-X, Z, T) \\), computing
    /// \\( T = T\_a T\_b \\).
    pub(crate) fn as_addend(&self) -> AddendPoint {
        AddendPoint {
            X_plus_Y:  &self.X + &self.Y,
            Y_minus_X: &self.Y - &self.X,
            Z:         self.Z,
            T:         &self.Ta * &self.Tb,
        }
    }

    /// Drop the \\( T \\) factors.
    pub(crate) fn as_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
        }
    }
}

impl PrecomputedPoint {
    /// Recover \\( (2X, 2Y, 2Z) \\), a projective representative of the
    /// same point, from \\( (X+Y, Y-X, 2Z) \\).
    pub(crate) fn as_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: &self.X_plus_Y - &self.Y_minus_X,
            Y: &self.X_plus_Y + &self.Y_minus_X,
            Z: self.Z2,
        }
    }
}

impl AffinePrecomputedPoint {
    /// Expand a table entry to extended coordinates with \\( Z = 1 \\).
    pub(crate) fn as_extended(&self) -> ExtendedPoint {
        let x = (&self.x_plus_y - &self.y_minus_x).half();
        let y = (&self.x_plus_y + &self.y_minus_x).half();
        ExtendedPoint {
            X: x,
            Y: y,
            Z: Fp2::ONE,
            Ta: x,
            Tb: y,
        }
    }
}

// ------------------------------------------------------------------------
// Doubling
// ------------------------------------------------------------------------

impl ProjectivePoint {
    /// Double this point: return self + self.
    ///
    /// Four squarings and three multiplications; the output keeps
    /// \\( T = T\_a T\_b \\) split.
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub fn double(&self) -> ExtendedPoint {
        let XX       = self.X.square();
        let YY       = self.Y.square();
        let X_plus_Y = &self.X + &self.Y;
        let Tb       = &XX + &YY;                       // X^2 + Y^2
        let YY_m_XX  = &YY - &XX;                       // Y^2 - X^2
        let Ta       = &X_plus_Y.square() - &Tb;        // 2XY
        let ZZ       = self.Z.square();
        let ZZ2_m    = &ZZ.double() - &YY_m_XX;         // 2Z^2 - (Y^2 - X^2)

        ExtendedPoint {
            X:  &ZZ2_m * &Ta,
            Y:  &YY_m_XX * &Tb,
            Z:  &YY_m_XX * &ZZ2_m,
            Ta,
            Tb,
        }
    }
}

// ------------------------------------------------------------------------
// Addition
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b PrecomputedPoint> for &'a AddendPoint {
    type Output = ExtendedPoint;

    /// The unified addition law.  There is no branch on the operands, so
    /// the same code handles doubling and the identity.
    #[rustfmt::skip]
    fn add(self, other: &'b PrecomputedPoint) -> ExtendedPoint {
        let TT2d = &self.T * &other.T2d;
        let ZZ2  = &self.Z * &other.Z2;
        let PP   = &self.X_plus_Y * &other.X_plus_Y;
        let MM   = &self.Y_minus_X * &other.Y_minus_X;
        let ZZ2_minus_TT2d = &ZZ2 - &TT2d;
        let ZZ2_plus_TT2d  = &ZZ2 + &TT2d;
        let Tb = &PP - &MM;
        let Ta = &PP + &MM;

        ExtendedPoint {
            X:  &Tb * &ZZ2_minus_TT2d,
            Y:  &Ta * &ZZ2_plus_TT2d,
            Z:  &ZZ2_plus_TT2d * &ZZ2_minus_TT2d,
            Ta,
            Tb,
        }
    }
}

impl<'a, 'b> Add<&'b AffinePrecomputedPoint> for &'a ExtendedPoint {
    type Output = ExtendedPoint;

    /// Mixed addition of a generator table entry.
    #[rustfmt::skip]
    fn add(self, other: &'b AffinePrecomputedPoint) -> ExtendedPoint {
        let Txy2d    = &(&self.Ta * &self.Tb) * &other.xy2d;
        let Z2       = self.Z.double();
        let X_plus_Y = &self.X + &self.Y;
        let Y_minus_X = &self.Y - &self.X;
        let Z2_minus_Txy2d = &Z2 - &Txy2d;
        let Z2_plus_Txy2d  = &Z2 + &Txy2d;
        let PP = &other.x_plus_y * &X_plus_Y;
        let MM = &other.y_minus_x * &Y_minus_X;
        let Tb = &PP - &MM;
        let Ta = &PP + &MM;

        ExtendedPoint {
            X:  &Tb * &Z2_minus_Txy2d,
            Y:  &Ta * &Z2_plus_Txy2d,
            Z:  &Z2_plus_Txy2d * &Z2_minus_Txy2d,
            Ta,
            Tb,
        }
    }
}

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl<'a> Neg for &'a PrecomputedPoint {
    type Output = PrecomputedPoint;

    fn neg(self) -> PrecomputedPoint {
        PrecomputedPoint {
            X_plus_Y:  self.Y_minus_X,
            Y_minus_X: self.X_plus_Y,
            Z2:        self.Z2,
            T2d:       -&self.T2d,
        }
    }
}

impl<'a> Neg for &'a AffinePrecomputedPoint {
    type Output = AffinePrecomputedPoint;

    fn neg(self) -> AffinePrecomputedPoint {
        AffinePrecomputedPoint {
            x_plus_y:  self.y_minus_x,
            y_minus_x: self.x_plus_y,
            xy2d:      -&self.xy2d,
        }
    }
}

// ------------------------------------------------------------------------
// Debug traits
// ------------------------------------------------------------------------

impl Debug for ProjectivePoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ProjectivePoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?}\n}}",
            &self.X, &self.Y, &self.Z
        )
    }
}

impl Debug for PrecomputedPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "PrecomputedPoint{{\n\tX_plus_Y: {:?},\n\tY_minus_X: {:?},\n\tZ2: {:?},\n\tT2d: {:?}\n}}",
            &self.X_plus_Y, &self.Y_minus_X, &self.Z2, &self.T2d
        )
    }
}

impl Debug for AddendPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "AddendPoint{{\n\tX_plus_Y: {:?},\n\tY_minus_X: {:?},\n\tZ: {:?},\n\tT: {:?}\n}}",
            &self.X_plus_Y, &self.Y_minus_X, &self.Z, &self.T
        )
    }
}

impl Debug for AffinePrecomputedPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "AffinePrecomputedPoint{{\n\tx_plus_y: {:?},\n\ty_minus_x: {:?},\n\txy2d: {:?}\n}}",
            &self.x_plus_y, &self.y_minus_x, &self.xy2d
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::constants::GENERATOR;

    fn generator() -> ExtendedPoint {
        GENERATOR.to_extended()
    }

    #[test]
    fn double_matches_core_add() {
        let G = generator();
        let G_table_entry = G.to_affine_precomputed();
        let mut P = G;
        for _ in 0..8 {
            let doubled = P.as_projective().double();
            let added = &P.as_addend() + &P.as_precomputed();
            assert_eq!(doubled.to_affine(), added.to_affine());
            assert!(doubled.is_valid());
            // P <- 2P + G
            P = &doubled + &G_table_entry;
        }
    }

    #[test]
    fn mixed_add_matches_core_add() {
        let G = generator();
        let G2 = G.double();
        let mixed = &G2 + &G.to_affine_precomputed();
        let core = &G2.as_addend() + &G.as_precomputed();
        assert_eq!(mixed.to_affine(), core.to_affine());
    }

    #[test]
    fn precomputed_round_trips() {
        let G = generator();
        let P = G.as_precomputed().as_projective();
        assert!(P.is_valid());
        let A = G.to_affine_precomputed().as_extended();
        assert_eq!(A.to_affine(), G.to_affine());
    }

    #[test]
    fn negated_entries_cancel() {
        let G = generator();
        let sum = &G.as_addend() + &(-&G.as_precomputed());
        assert_eq!(sum.to_affine(), ExtendedPoint::identity().to_affine());

        let mixed = &G + &(-&G.to_affine_precomputed());
        assert_eq!(mixed.to_affine(), ExtendedPoint::identity().to_affine());
    }

    #[test]
    fn identity_entries_are_neutral() {
        let G = generator();
        let sum = &G.as_addend() + &PrecomputedPoint::identity();
        assert_eq!(sum.to_affine(), G.to_affine());
        let sum = &G + &AffinePrecomputedPoint::identity();
        assert_eq!(sum.to_affine(), G.to_affine());
        let sum = &AddendPoint::identity() + &G.as_precomputed();
        assert_eq!(sum.to_affine(), G.to_affine());
    }

    #[test]
    fn conditional_select_picks_operand() {
        let G = generator().as_precomputed();
        let I = PrecomputedPoint::identity();
        let s = PrecomputedPoint::conditional_select(&I, &G, Choice::from(1));
        assert_eq!(s.T2d, G.T2d);
        let s = PrecomputedPoint::conditional_select(&I, &G, Choice::from(0));
        assert_eq!(s.T2d, I.T2d);
    }
}
