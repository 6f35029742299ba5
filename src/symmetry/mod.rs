// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetries of the hypercube.
//!
//! This module turns bit permutations and bit-flip masks into validated
//! location maps that the vertex set can apply.
//!
//! ## Module Structure
//!
//! - `automorphism`: Rotation/reflection automorphisms and the bijection check
//! - `mod`: Public API and re-exports

pub mod automorphism;

pub use automorphism::{check_bijection, Automorphism};
