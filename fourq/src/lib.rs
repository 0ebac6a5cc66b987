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

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]
#![doc(html_root_url = "https://docs.rs/fourq/0.1.0")]

//! # fourq
//!
//! A pure-Rust implementation of group operations on FourQ, the twisted
//! Edwards curve
//!
//! $$ -x^2 + y^2 = 1 + d x^2 y^2 $$
//!
//! defined over the quadratic extension \\( \mathbb F\_{p^2} \\) of the
//! Mersenne field \\( p = 2^{127} - 1 \\).  The prime-order subgroup has
//! order \\( r \approx 2^{246} \\) and the full group has cofactor 392.
//!
//! All secret-dependent arithmetic is data-oblivious: field operations run
//! in constant time, table lookups touch every entry, and the scalar
//! recodings avoid secret-dependent branches.  Point validation and
//! decompression operate on public data and are allowed to short-circuit.
//!
//! ```
//! use fourq::constants::GENERATOR;
//! use fourq::edwards::ExtendedPoint;
//! use fourq::scalar::Scalar;
//!
//! let k = Scalar::from(2021u64);
//! let P = ExtendedPoint::mul_base(&k);
//! let Q = GENERATOR.to_extended().variable_base_mul(&k, false).unwrap();
//! assert_eq!(P.compress(), Q.compress());
//! ```

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(feature = "alloc")]
#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

#[cfg(feature = "digest")]
pub use digest;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

//------------------------------------------------------------------------
// fourq public modules
//------------------------------------------------------------------------

// Scalar arithmetic mod r, the order of the prime-order subgroup
pub mod scalar;

// Point operations on the twisted Edwards form of FourQ
pub mod edwards;

// Useful constants, like the generator and its precomputed table
pub mod constants;

// External (and internal) traits.
pub mod traits;

// Errors which may occur when decoding or operating on points
pub mod errors;

// Arithmetic in the quadratic extension field GF(p^2)
pub mod fp2;

//------------------------------------------------------------------------
// fourq internal modules
//------------------------------------------------------------------------

// Finite field arithmetic mod p = 2^127 - 1
pub(crate) mod field;

// Arithmetic backends (serial u64 only) and the scalar multiplication drivers
pub(crate) mod backend;

// Generic code for window lookups
pub(crate) mod window;

pub use crate::errors::CurveError;
