//! Fixed-width 512-bit unsigned integer arithmetic.
//!
//! # About
//! This library provides a single big unsigned integer type, [`U512`],
//! represented as eight 64-bit limbs, together with the full arithmetic
//! surface for that width: carry-propagating addition and subtraction,
//! full-width schoolbook multiplication (the exact 1024-bit product is
//! returned as a `(lo, hi)` pair), and long division via Knuth's
//! Algorithm D, with fast paths for single-limb operands.
//!
//! # Goals
//! - No heap allocations, i.e. `no_std`-friendly.
//! - `const fn` arithmetic wherever the operations allow it.
//! - Deterministic, bit-exact results on every target: no
//!   platform-conditional code paths.
//! - Division by zero is unrepresentable in the total APIs ([`NonZero`]
//!   divisors) and reported as `None` by the `checked_*` forms.
//!
//! All operations run in variable time with respect to their operands.
//! This crate is not intended for secret-dependent cryptographic use.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

mod limb;
mod non_zero;
mod primitives;
mod uint;

pub use crate::{
    limb::{Limb, WideWord, Word},
    non_zero::NonZero,
    uint::U512,
};
