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

//! Code for fixed-window and comb table functionality

#![allow(non_snake_case)]

use core::fmt::Debug;

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::curve_models::{AffinePrecomputedPoint, PrecomputedPoint};
use crate::constants::{V_FIXEDBASE, VARBASE_TABLE_SIZE};
use crate::edwards::ExtendedPoint;
use crate::traits::Identity;

/// A lookup table of `N` precomputed points.
///
/// The selection of an entry is done in constant time by the `select`
/// function, which reads every entry and keeps the wanted one with a
/// masked copy.
///
/// Since `LookupTable` does not implement `Index`, it's more difficult
/// to accidentally use the table directly.  The table is `pub(crate)` so
/// that we can write hardcoded constants.
#[derive(Copy, Clone)]
pub struct LookupTable<T, const N: usize>(pub(crate) [T; N]);

impl<T, const N: usize> LookupTable<T, N>
where
    T: Identity + ConditionallySelectable + ConditionallyNegatable,
{
    /// Given a secret index `0 <= digit < N` and a sign mask, return
    /// entry `digit` if `sign_mask` is all ones, or its negation if it
    /// is zero.
    pub fn select(&self, digit: u8, sign_mask: u64) -> T {
        debug_assert!((digit as usize) < N);
        debug_assert!(sign_mask == 0 || sign_mask == u64::MAX);

        let mut t = T::identity();
        for j in 0..N {
            let c = digit.ct_eq(&(j as u8));
            t.conditional_assign(&self.0[j], c);
        }
        // Now t == entry[digit].

        let neg_mask = Choice::from(((!sign_mask) & 1) as u8);
        t.conditional_negate(neg_mask);

        t
    }
}

impl<T: Copy + Default, const N: usize> Default for LookupTable<T, N> {
    fn default() -> LookupTable<T, N> {
        LookupTable([T::default(); N])
    }
}

impl<T: Debug, const N: usize> Debug for LookupTable<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "LookupTable({:?})", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl<T, const N: usize> Zeroize for LookupTable<T, N>
where
    T: Copy + Default + Zeroize,
{
    fn zeroize(&mut self) {
        self.0.iter_mut().for_each(|e| e.zeroize());
    }
}

/// The table of odd multiples \\( P, 3P, 5P, \ldots, 15P \\) used by the
/// variable-base multiplication.
pub(crate) type VariableBaseTable = LookupTable<PrecomputedPoint, VARBASE_TABLE_SIZE>;

impl<'a> From<&'a ExtendedPoint> for VariableBaseTable {
    fn from(P: &'a ExtendedPoint) -> Self {
        let mut points = [P.as_precomputed(); VARBASE_TABLE_SIZE];
        let P2 = P.double().as_addend();
        for j in 0..(VARBASE_TABLE_SIZE - 1) {
            points[j + 1] = (&P2 + &points[j]).as_precomputed();
        }
        // Now points = [P, 3P, 5P, 7P, 9P, 11P, 13P, 15P]
        LookupTable(points)
    }
}

/// The generator comb: `V_FIXEDBASE` sub-tables of sixteen affine points.
#[derive(Copy, Clone)]
pub struct FixedBaseComb(pub(crate) [LookupTable<AffinePrecomputedPoint, 16>; V_FIXEDBASE]);

impl FixedBaseComb {
    /// Select entry `digit` of the public sub-table `table`, negated when
    /// `sign_mask` is zero.
    pub(crate) fn select(&self, table: usize, digit: u8, sign_mask: u64) -> AffinePrecomputedPoint {
        self.0[table].select(digit, sign_mask)
    }
}

impl Debug for FixedBaseComb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "FixedBaseComb([")?;
        for table in self.0.iter() {
            writeln!(f, "\t{:?},", table)?;
        }
        write!(f, "])")
    }
}
