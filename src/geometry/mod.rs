// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vocabulary types for hypercubes.
//!
//! This module contains the fixed, stateless building blocks:
//! - Color: Semantic color tags for vertices and edges
//! - Vertex: Immutable id plus mutable color
//! - Edge: Unordered id pair at Hamming distance 1
//! - constants: Dimension limit and counting formulas

pub mod color;
pub mod constants;
pub mod edge;
pub mod vertex;

// Re-export for convenience
pub use color::Color;
pub use constants::*;
pub use edge::Edge;
pub use vertex::{Location, Vertex, VertexId};
