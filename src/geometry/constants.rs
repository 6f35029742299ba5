// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time limits and counting formulas for hypercubes.
//!
//! The largest supported dimension is selected with cargo features. Edge set
//! construction is quadratic in the vertex count, so the limit stays small.
//!
//! # Example
//!
//! ```bash
//! # Default: MAX_DIMENSION=10
//! cargo build
//!
//! # MAX_DIMENSION=12
//! cargo build --features wide_dimensions
//! ```

/// Largest dimension a [`Cube`](crate::Cube) may be built with.
///
/// - (default) → 10
/// - `wide_dimensions` → 12
#[cfg(not(feature = "wide_dimensions"))]
pub const MAX_DIMENSION: usize = 10;

#[cfg(feature = "wide_dimensions")]
pub const MAX_DIMENSION: usize = 12;

/// Number of vertices of the `dimension`-cube (2^dimension).
pub const fn vertex_count(dimension: usize) -> usize {
    1 << dimension
}

/// Number of edges of the `dimension`-cube.
///
/// Each of the 2^d vertices has d neighbours and each edge is counted twice,
/// giving d * 2^(d-1).
pub const fn edge_count(dimension: usize) -> usize {
    match dimension {
        0 => 0,
        d => d * (1 << (d - 1)),
    }
}

const _: () = assert!(
    MAX_DIMENSION < usize::BITS as usize,
    "MAX_DIMENSION must fit in a machine word"
);
