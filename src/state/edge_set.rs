// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The edges of a hypercube and their colors.
//!
//! Edges are derived once, from ids alone: every pair of ids at Hamming
//! distance 1. Because rotations and reflections preserve Hamming distance,
//! this set never needs to change when vertices are relocated. Location-based
//! queries go through the [`VertexSet`] to translate locations into the ids
//! currently sitting there.

use crate::bits;
use crate::errors::{CubeError, Result};
use crate::geometry::{Color, Edge, Location, VertexId};
use crate::state::VertexSet;
use log::{debug, trace};
use std::collections::BTreeMap;

/// Color state for every edge of a hypercube.
#[derive(Debug, Clone)]
pub struct EdgeSet {
    dimension: usize,
    edges: BTreeMap<Edge, Option<Color>>,
}

impl EdgeSet {
    /// Derive the edges of the cube `vertex_set` belongs to, all uncolored.
    ///
    /// Tests every unordered pair of ids, which is O(4^dimension).
    pub fn new(vertex_set: &VertexSet) -> Self {
        let dimension = vertex_set.dimension();
        let count = bits::how_many_bit_strings(dimension);
        let mut edges = BTreeMap::new();

        for low in 0..count {
            for high in low..count {
                // Some only when weight(low ^ high) == 1
                if let Some(edge) = Edge::between(low, high) {
                    edges.insert(edge, None);
                }
            }
        }

        debug!(
            "[EdgeSet] Derived {} edges for dimension {}",
            edges.len(),
            dimension
        );

        Self { dimension, edges }
    }

    /// The cube's dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of edges (dimension * 2^(dimension-1)).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True for the 0-cube, which has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over every edge and its color, ordered by `(low, high)`.
    pub fn iter(&self) -> impl Iterator<Item = (&Edge, &Option<Color>)> {
        self.edges.iter()
    }

    /// Check whether ids `u` and `v` are joined by an edge.
    pub fn contains(&self, u: VertexId, v: VertexId) -> bool {
        self.find(u, v).is_some()
    }

    fn find(&self, u: VertexId, v: VertexId) -> Option<Edge> {
        Edge::between(u, v).filter(|edge| self.edges.contains_key(edge))
    }

    /// The edge between the vertices currently at `u_location` and
    /// `v_location`, or `None` if either location is empty or they are not
    /// adjacent.
    pub fn lookup_edge_id_by_locations(
        &self,
        vertex_set: &VertexSet,
        u_location: Location,
        v_location: Location,
    ) -> Option<Edge> {
        let u = vertex_set.lookup_id_by_location(u_location)?;
        let v = vertex_set.lookup_id_by_location(v_location)?;
        self.find(u, v)
    }

    /// Color of the edge between ids `u` and `v`: `None` if there is no such
    /// edge, `Some(None)` if it is uncolored.
    pub fn lookup_color_by_vertex_ids(&self, u: VertexId, v: VertexId) -> Option<Option<Color>> {
        self.find(u, v).and_then(|edge| self.edges.get(&edge).copied())
    }

    /// Color of the edge between the vertices at two locations, as
    /// [`lookup_color_by_vertex_ids`](Self::lookup_color_by_vertex_ids).
    pub fn lookup_color_by_locations(
        &self,
        vertex_set: &VertexSet,
        u_location: Location,
        v_location: Location,
    ) -> Option<Option<Color>> {
        self.lookup_edge_id_by_locations(vertex_set, u_location, v_location)
            .and_then(|edge| self.edges.get(&edge).copied())
    }

    /// Edges of the subgraph induced by `ids`: each pair `(ids[i], ids[j])`,
    /// `i <= j`, that is an edge, in that enumeration order.
    pub fn get_induced_edges_from_id_list(&self, ids: &[VertexId]) -> Vec<Edge> {
        let mut induced = Vec::new();
        for (i, &u) in ids.iter().enumerate() {
            for &v in &ids[i..] {
                if let Some(edge) = self.find(u, v) {
                    induced.push(edge);
                }
            }
        }
        induced
    }

    /// Color the edge between ids `u` and `v`.
    ///
    /// Fails with `InvalidArgument` if they are not joined by an edge.
    pub fn color_by_ids(&mut self, u: VertexId, v: VertexId, color: Color) -> Result<()> {
        self.set_color(u, v, Some(color))
    }

    /// Remove the color of the edge between ids `u` and `v`.
    pub fn uncolor_by_ids(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.set_color(u, v, None)
    }

    /// Color the edge between the vertices at two locations.
    pub fn color_by_locations(
        &mut self,
        vertex_set: &VertexSet,
        u_location: Location,
        v_location: Location,
        color: Color,
    ) -> Result<()> {
        let edge = self.edge_at_locations(vertex_set, u_location, v_location)?;
        self.color_by_ids(edge.low(), edge.high(), color)
    }

    /// Remove the color of the edge between the vertices at two locations.
    pub fn uncolor_by_locations(
        &mut self,
        vertex_set: &VertexSet,
        u_location: Location,
        v_location: Location,
    ) -> Result<()> {
        let edge = self.edge_at_locations(vertex_set, u_location, v_location)?;
        self.uncolor_by_ids(edge.low(), edge.high())
    }

    /// Color every edge of the subgraph induced by `ids`.
    pub fn color_edges_by_id_list(&mut self, ids: &[VertexId], color: Color) -> Result<()> {
        self.set_colors_induced_by(ids, Some(color))
    }

    /// Remove the color of every edge of the subgraph induced by `ids`.
    pub fn uncolor_edges_by_id_list(&mut self, ids: &[VertexId]) -> Result<()> {
        self.set_colors_induced_by(ids, None)
    }

    fn edge_at_locations(
        &self,
        vertex_set: &VertexSet,
        u_location: Location,
        v_location: Location,
    ) -> Result<Edge> {
        self.lookup_edge_id_by_locations(vertex_set, u_location, v_location)
            .ok_or_else(|| {
                CubeError::invalid(format!(
                    "locations ({}, {}) are not joined by an edge",
                    u_location, v_location
                ))
            })
    }

    fn set_color(&mut self, u: VertexId, v: VertexId, color: Option<Color>) -> Result<()> {
        let edge = self.find(u, v).ok_or_else(|| {
            CubeError::invalid(format!(
                "vertices {} and {} do not have an edge between them",
                u, v
            ))
        })?;
        self.edges.insert(edge, color);
        trace!("[EdgeSet] Edge {} -> {:?}", edge, color);
        Ok(())
    }

    fn set_colors_induced_by(&mut self, ids: &[VertexId], color: Option<Color>) -> Result<()> {
        let induced = self.get_induced_edges_from_id_list(ids);
        trace!(
            "[EdgeSet] {} induced edges among {} vertices -> {:?}",
            induced.len(),
            ids.len(),
            color
        );
        for edge in induced {
            self.set_color(edge.low(), edge.high(), color)?;
        }
        Ok(())
    }
}
