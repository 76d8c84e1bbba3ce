// Copyright 2024 Tower Field Authors.

//! Binary tower field arithmetic.
//!
//! This library implements the canonical binary field tower specified in
//! [DP23], section 2.3. This is a family of binary fields with extension
//! degree $2^{\iota}$ for any tower height $\iota$, where each level is a
//! degree-2 extension of the one below it. Fields up to 8 bits are
//! table-driven; larger fields recurse on their (low, high) halves.
//!
//! [DP23]: https://eprint.iacr.org/2023/1784

pub mod arithmetic_traits;
pub mod binary_field;
mod binary_field_arithmetic;
pub mod error;
pub mod extension;
pub mod field;
mod tracing;
pub mod underlier;
pub mod util;

pub use arithmetic_traits::*;
pub use binary_field::*;
pub use error::*;
pub use extension::*;
pub use field::*;
