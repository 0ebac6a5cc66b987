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

//! Serial implementations of field, scalar, point arithmetic.
//!
//! Point operations use several coordinate systems; see the
//! [`curve_models`] documentation.  The scalar multiplication drivers in
//! [`scalar_mul`] combine them with the recodings from
//! [`crate::scalar`] and the tables from `window`.

pub mod u64;

pub mod curve_models;

pub mod scalar_mul;
