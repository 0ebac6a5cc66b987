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

#![allow(non_snake_case)]

use crate::backend::serial::scalar_mul::{fixed_base, variable_base};
use crate::edwards::ExtendedPoint;
use crate::scalar::Scalar;

/// Compute \\(aG + bQ\\) in constant time, where \\(G\\) is the
/// generator.
pub(crate) fn mul(a: &Scalar, Q: &ExtendedPoint, b: &Scalar) -> ExtendedPoint {
    let aG = fixed_base::mul(a);
    let bQ = variable_base::mul(Q, b);

    &aG.as_addend() + &bQ.as_precomputed()
}
