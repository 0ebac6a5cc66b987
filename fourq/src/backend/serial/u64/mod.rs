// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2016-2018 Isis Lovecruft, Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - Isis Agora Lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! The `u64` backend uses `u64`s and a `(u64, u64) -> u128` multiplier.
//!
//! Field elements mod \\( 2^{127} - 1 \\) are two 64-bit limbs.  Scalars
//! mod \\( r \\) are four 64-bit limbs in Montgomery form with
//! \\( R = 2^{256} \\).

pub mod field;

pub mod scalar;

pub mod constants;
