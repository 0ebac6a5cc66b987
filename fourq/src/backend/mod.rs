// -*- mode: rust; -*-
//
// This file is part of fourq.
// Copyright (c) 2016-2018 Isis Lovecruft, Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - Isis Agora Lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! Pluggable implementations for different architectures.
//!
//! Only the serial 64-bit backend exists.  The Mersenne prime
//! \\( 2^{127} - 1 \\) fits exactly in two 64-bit words, so every field
//! element is a pair of `u64` limbs and products are formed in `u128`.

pub mod serial;
