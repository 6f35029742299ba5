// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The hypercube facade.
//!
//! A [`Cube`] combines the two halves of the model:
//! - [`VertexSet`]: location → vertex arrangement and vertex colors
//! - [`EdgeSet`]: fixed edge topology and edge colors
//!
//! It is the surface a command dispatcher mutates and a renderer reads.
//! Every operation forwards to one of the two sets; the cube adds no
//! invariants of its own.
//!
//! # Example
//!
//! ```
//! use hypercube::{bits, Color, Cube};
//!
//! let mut cube = Cube::new(3).unwrap();
//! let face = bits::pattern_to_int_list("1**", 3).unwrap();
//! cube.color_vertices_by_id_list(&face, Color::Red).unwrap();
//! cube.color_edges_by_id_list(&face, Color::Blue).unwrap();
//!
//! // Swap the two low bits, then undo it.
//! cube.rotate(&[0, 2, 1], false).unwrap();
//! assert_eq!(cube.vertex_set().lookup_location_by_id(0b001), Some(0b010));
//! cube.reset_positions();
//!
//! assert_eq!(cube.edge_color_at(0b100, 0b101), Some(Some(Color::Blue)));
//! ```

use crate::bits;
use crate::errors::Result;
use crate::geometry::{Color, Location, VertexId};
use crate::state::{EdgeSet, VertexSet};
use crate::symmetry::Automorphism;
use log::debug;

/// A hypercube of fixed dimension with colorable vertices and edges.
#[derive(Debug, Clone)]
pub struct Cube {
    dimension: usize,
    vertex_set: VertexSet,
    edge_set: EdgeSet,
}

impl Cube {
    /// Build the `dimension`-cube with every vertex at its home location and
    /// nothing colored.
    ///
    /// Fails with `OutOfRange` if `dimension > MAX_DIMENSION`.
    pub fn new(dimension: usize) -> Result<Self> {
        let vertex_set = VertexSet::new(dimension)?;
        let edge_set = EdgeSet::new(&vertex_set);

        debug!(
            "[Cube] Built dimension {} ({} vertices, {} edges)",
            dimension,
            vertex_set.len(),
            edge_set.len()
        );

        Ok(Self {
            dimension,
            vertex_set,
            edge_set,
        })
    }

    /// The cube's dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Read access to the vertex arrangement.
    pub fn vertex_set(&self) -> &VertexSet {
        &self.vertex_set
    }

    /// Read access to the edges.
    pub fn edge_set(&self) -> &EdgeSet {
        &self.edge_set
    }

    /// Permute the bits of every vertex location by `index_list`.
    ///
    /// With `preserve_colors`, colors stay where they are on screen instead of
    /// following their vertices.
    pub fn rotate(&mut self, index_list: &[usize], preserve_colors: bool) -> Result<()> {
        self.vertex_set.rotate(index_list, preserve_colors)
    }

    /// Flip the bits of every vertex location selected by `bit_mask`.
    pub fn reflect(&mut self, bit_mask: usize, preserve_colors: bool) -> Result<()> {
        self.vertex_set.reflect(bit_mask, preserve_colors)
    }

    /// Apply any supported automorphism.
    pub fn apply(&mut self, automorphism: &Automorphism, preserve_colors: bool) -> Result<()> {
        self.vertex_set.apply(automorphism, preserve_colors)
    }

    /// Return every vertex to the location equal to its id.
    pub fn reset_positions(&mut self) {
        self.vertex_set.reset_positions();
    }

    /// Color the given vertices (best effort, see
    /// [`VertexSet::color_vertices_by_id_list`]).
    pub fn color_vertices_by_id_list(&mut self, ids: &[VertexId], color: Color) -> Result<()> {
        self.vertex_set.color_vertices_by_id_list(ids, color)
    }

    /// Remove the color of the given vertices.
    pub fn uncolor_vertices_by_id_list(&mut self, ids: &[VertexId]) -> Result<()> {
        self.vertex_set.uncolor_vertices_by_id_list(ids)
    }

    /// Color the edges of the subgraph induced by `ids`.
    pub fn color_edges_by_id_list(&mut self, ids: &[VertexId], color: Color) -> Result<()> {
        self.edge_set.color_edges_by_id_list(ids, color)
    }

    /// Remove the color of the edges of the subgraph induced by `ids`.
    pub fn uncolor_edges_by_id_list(&mut self, ids: &[VertexId]) -> Result<()> {
        self.edge_set.uncolor_edges_by_id_list(ids)
    }

    /// Color the subcube named by a wildcard `pattern`: its vertices and the
    /// edges between them.
    pub fn color_subcube(&mut self, pattern: &str, color: Color) -> Result<()> {
        let ids = bits::pattern_to_int_list(pattern, self.dimension)?;
        self.color_edges_by_id_list(&ids, color)?;
        self.color_vertices_by_id_list(&ids, color)
    }

    /// Remove the color of the subcube named by a wildcard `pattern`.
    pub fn uncolor_subcube(&mut self, pattern: &str) -> Result<()> {
        let ids = bits::pattern_to_int_list(pattern, self.dimension)?;
        self.uncolor_edges_by_id_list(&ids)?;
        self.uncolor_vertices_by_id_list(&ids)
    }

    /// Color of the edge drawn between two locations: `None` if the vertices
    /// there are not adjacent, `Some(None)` if the edge is uncolored.
    pub fn edge_color_at(&self, u_location: Location, v_location: Location) -> Option<Option<Color>> {
        self.edge_set
            .lookup_color_by_locations(&self.vertex_set, u_location, v_location)
    }
}
