// -*- mode: rust; -*-
//
// This file is part of schnorrq.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! A Rust implementation of SchnorrQ signing and verification over the
//! FourQ curve.
//!
//! # Example
//!
//! Creating a SchnorrQ signature on a message is simple.
//!
//! First, we need to generate a `SigningKey`, which includes both public
//! and secret halves of an asymmetric key.  To do so, we need a
//! cryptographically secure pseudorandom number generator (CSPRNG).
//!
//! ```
//! # #[cfg(feature = "rand_core")]
//! # {
//! use rand::rngs::OsRng;
//! use schnorrq::SigningKey;
//! use schnorrq::Signature;
//!
//! let mut csprng = OsRng;
//! let signing_key: SigningKey = SigningKey::generate(&mut csprng);
//! # }
//! ```
//!
//! We can now use this `signing_key` to sign a message:
//!
//! ```
//! # use schnorrq::SigningKey;
//! # let signing_key = SigningKey::from_bytes(&[7u8; 32]);
//! use schnorrq::{Signature, Signer};
//! let message: &[u8] = b"This is a test of the tsunami alert system.";
//! let signature: Signature = signing_key.sign(message);
//! ```
//!
//! As well as to verify that this is, indeed, a valid signature on
//! that `message`:
//!
//! ```
//! # use schnorrq::{SigningKey, Signature, Signer};
//! # let signing_key = SigningKey::from_bytes(&[7u8; 32]);
//! # let message: &[u8] = b"This is a test of the tsunami alert system.";
//! # let signature: Signature = signing_key.sign(message);
//! use schnorrq::Verifier;
//! assert!(signing_key.verify(message, &signature).is_ok());
//! ```
//!
//! Anyone else, given the `public` half of the `signing_key` can also easily
//! verify this signature:
//!
//! ```
//! # use schnorrq::{SigningKey, Signature, Signer};
//! # let signing_key = SigningKey::from_bytes(&[7u8; 32]);
//! # let message: &[u8] = b"This is a test of the tsunami alert system.";
//! # let signature: Signature = signing_key.sign(message);
//! use schnorrq::{VerifyingKey, Verifier};
//!
//! let verifying_key: VerifyingKey = signing_key.verifying_key();
//! assert!(verifying_key.verify(message, &signature).is_ok());
//! ```
//!
//! ## Serialisation
//!
//! `VerifyingKey`s, `SigningKey`s and `Signature`s can be serialised into
//! byte-arrays by calling `.to_bytes()`.  Public keys and the `R` half of
//! a signature are FourQ point encodings; the `s` half is a little-endian
//! scalar whose top four bits are zero.
//!
//! ```
//! # use schnorrq::{SigningKey, Signature, Signer, VerifyingKey};
//! use schnorrq::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH};
//! # let signing_key = SigningKey::from_bytes(&[7u8; 32]);
//! # let signature: Signature = signing_key.sign(b"hello");
//!
//! let verifying_key_bytes: [u8; PUBLIC_KEY_LENGTH] = signing_key.verifying_key().to_bytes();
//! let secret_key_bytes: [u8; SECRET_KEY_LENGTH] = signing_key.to_bytes();
//! let signature_bytes: [u8; SIGNATURE_LENGTH] = signature.to_bytes();
//!
//! let verifying_key = VerifyingKey::from_bytes(&verifying_key_bytes).unwrap();
//! let signature = Signature::from_bytes(&signature_bytes).unwrap();
//! assert!(verifying_key.verify_strict(b"hello", &signature).is_ok());
//! ```
//!
//! ## Hash functions
//!
//! The keys use SHA-512.  Signing and verification under any other
//! hash function with 64 bytes of output go through the
//! [`hazmat`] module.

#![no_std]
#![warn(future_incompatible, rust_2018_idioms)]
#![deny(missing_docs)] // refuse to compile if documentation is missing
#![deny(clippy::unwrap_used)] // don't allow unwrap
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

pub use fourq;

mod constants;
mod errors;
mod signature;
mod signing;
mod verifying;

pub mod hazmat;

pub use sha2::Sha512;

pub use crate::constants::*;
pub use crate::errors::*;
pub use crate::signature::Signature;
pub use crate::signing::*;
pub use crate::verifying::*;

pub use ::signature::{Keypair, Signer, Verifier};

#[cfg(feature = "rand_core")]
pub use rand_core;
