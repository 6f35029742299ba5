// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertex type for the hypercube.
//!
//! A vertex has a fixed identity (its bit-string label) and a mutable color.
//! Where a vertex currently sits is not part of the vertex: that is the
//! business of the [`VertexSet`](crate::state::VertexSet), which maps locations
//! to vertices and moves them around under automorphisms.

use crate::geometry::Color;

/// Identity of a vertex: an integer in `[0, 2^dimension)`.
///
/// Assigned when the vertex set is built and never reassigned.
pub type VertexId = usize;

/// A slot in the vertex set's location-ordered array, in `[0, 2^dimension)`.
pub type Location = usize;

/// A vertex of the hypercube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,

    /// The color currently attached to this vertex, `None` when uncolored.
    pub color: Option<Color>,
}

impl Vertex {
    /// Create an uncolored vertex.
    pub fn new(id: VertexId) -> Self {
        Self { id, color: None }
    }

    /// The vertex's immutable identity.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Check whether the vertex carries any color.
    pub fn is_colored(&self) -> bool {
        self.color.is_some()
    }
}
