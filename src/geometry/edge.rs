// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Edge type for the hypercube.
//!
//! An edge joins two vertex ids whose labels differ in exactly one bit. Edges
//! are unordered, so an `Edge` always stores its endpoints as `(low, high)`;
//! `Edge::between(3, 1)` and `Edge::between(1, 3)` are the same edge.
//!
//! Edges are named by ids, not locations, which is what keeps the edge set
//! fixed while automorphisms shuffle vertices between locations.

use crate::bits;
use crate::geometry::VertexId;
use std::fmt;

/// An unordered pair of vertex ids at Hamming distance 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    low: VertexId,
    high: VertexId,
}

impl Edge {
    /// The edge joining `u` and `v`, or `None` if they are not adjacent.
    pub fn between(u: VertexId, v: VertexId) -> Option<Self> {
        if bits::hamming_distance(u, v) != 1 {
            return None;
        }
        Some(Self {
            low: u.min(v),
            high: u.max(v),
        })
    }

    /// The smaller endpoint id.
    pub fn low(&self) -> VertexId {
        self.low
    }

    /// The larger endpoint id.
    pub fn high(&self) -> VertexId {
        self.high
    }

    /// Both endpoints as `(low, high)`.
    pub fn ids(&self) -> (VertexId, VertexId) {
        (self.low, self.high)
    }

    /// Index of the single bit (counting from the least significant) in which
    /// the endpoints differ.
    pub fn direction(&self) -> u32 {
        (self.low ^ self.high).trailing_zeros()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}
