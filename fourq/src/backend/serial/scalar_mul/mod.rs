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

//! Implementations of the scalar multiplication algorithms.
//!
//! All of these use the serial field arithmetic with the multi-model
//! strategy described in the `curve_models` module.  They assume their
//! point inputs are on the curve; validation and cofactor clearing are
//! done by the public entry points on `ExtendedPoint`.

pub mod variable_base;

pub mod fixed_base;

pub mod double_base;
