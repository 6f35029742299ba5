// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The location → vertex arrangement of a hypercube.
//!
//! A VertexSet owns one [`Vertex`] per location. Vertex ids never change;
//! automorphisms move whole vertices between locations. Two arrays are kept in
//! step:
//!
//! ```text
//! vertices[location]  -> Vertex { id, color }
//! locations[id]       -> location
//! ```
//!
//! so both directions of lookup are O(1). Every relocation is validated as a
//! bijection on `[0, 2^dimension)` before either array is touched.

use crate::bits;
use crate::errors::{CubeError, Result};
use crate::geometry::{Color, Location, Vertex, VertexId, MAX_DIMENSION};
use crate::symmetry::{check_bijection, Automorphism};
use log::{debug, trace, warn};

/// The vertices of a hypercube, indexed by their current location.
#[derive(Debug, Clone)]
pub struct VertexSet {
    dimension: usize,

    /// Vertex at each location.
    vertices: Vec<Vertex>,

    /// Location of each vertex id (inverse of `vertices`).
    locations: Vec<Location>,
}

impl VertexSet {
    /// Create the vertex set of the `dimension`-cube, every vertex uncolored
    /// and at the location equal to its id.
    ///
    /// Fails with `OutOfRange` if `dimension > MAX_DIMENSION`.
    pub fn new(dimension: usize) -> Result<Self> {
        if dimension > MAX_DIMENSION {
            return Err(CubeError::out_of_range(
                "dimension",
                dimension,
                MAX_DIMENSION + 1,
            ));
        }
        let count = bits::how_many_bit_strings(dimension);
        let vertices = (0..count).map(Vertex::new).collect();
        let locations = (0..count).collect();

        debug!(
            "[VertexSet] Created {} vertices for dimension {}",
            count, dimension
        );

        Ok(Self {
            dimension,
            vertices,
            locations,
        })
    }

    /// The cube's dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of vertices (2^dimension).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false: even the 0-cube has a vertex.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over `(location, vertex)` in location order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, &Vertex)> {
        self.vertices.iter().enumerate()
    }

    /// The vertex at `location`, or `None` if the location is out of bounds.
    pub fn lookup_vertex_by_location(&self, location: Location) -> Option<&Vertex> {
        self.vertices.get(location)
    }

    /// The id of the vertex at `location`.
    pub fn lookup_id_by_location(&self, location: Location) -> Option<VertexId> {
        self.lookup_vertex_by_location(location).map(Vertex::id)
    }

    /// The current location of vertex `id`.
    pub fn lookup_location_by_id(&self, id: VertexId) -> Option<Location> {
        self.locations.get(id).copied()
    }

    /// The vertex with the given `id`.
    pub fn lookup_vertex_by_id(&self, id: VertexId) -> Option<&Vertex> {
        self.lookup_location_by_id(id)
            .and_then(|location| self.vertices.get(location))
    }

    /// The color of the vertex at `location`: `None` out of bounds,
    /// `Some(None)` for an uncolored vertex.
    pub fn lookup_color_by_location(&self, location: Location) -> Option<Option<Color>> {
        self.lookup_vertex_by_location(location).map(|v| v.color)
    }

    /// Bit-string label of the vertex currently at `location`.
    pub fn label_at(&self, location: Location) -> Option<String> {
        let id = self.lookup_id_by_location(location)?;
        bits::to_bit_string(id, self.dimension).ok()
    }

    /// Set the color of vertex `id`.
    pub fn color_by_id(&mut self, id: VertexId, color: Color) -> Result<()> {
        self.set_color_by_id(id, Some(color))
    }

    /// Remove the color of vertex `id`.
    pub fn uncolor_by_id(&mut self, id: VertexId) -> Result<()> {
        self.set_color_by_id(id, None)
    }

    /// Set the color of whichever vertex sits at `location`.
    pub fn color_by_location(&mut self, location: Location, color: Color) -> Result<()> {
        let id = self
            .lookup_id_by_location(location)
            .ok_or(CubeError::NotFound(location))?;
        self.color_by_id(id, color)
    }

    /// Color every vertex in `ids`.
    ///
    /// Best effort: vertices are colored one at a time, and an unknown id stops
    /// the loop with earlier colorings left in place. Validate the list first
    /// if all-or-nothing is needed.
    pub fn color_vertices_by_id_list(&mut self, ids: &[VertexId], color: Color) -> Result<()> {
        self.set_colors_by_id_list(ids, Some(color))
    }

    /// Remove the color of every vertex in `ids`, with the same best-effort
    /// behaviour as [`color_vertices_by_id_list`](Self::color_vertices_by_id_list).
    pub fn uncolor_vertices_by_id_list(&mut self, ids: &[VertexId]) -> Result<()> {
        self.set_colors_by_id_list(ids, None)
    }

    fn set_color_by_id(&mut self, id: VertexId, color: Option<Color>) -> Result<()> {
        let location = self
            .lookup_location_by_id(id)
            .ok_or(CubeError::NotFound(id))?;
        let vertex = self
            .vertices
            .get_mut(location)
            .ok_or(CubeError::NotFound(id))?;
        vertex.color = color;
        trace!("[VertexSet] Vertex {} at location {} -> {:?}", id, location, color);
        Ok(())
    }

    fn set_colors_by_id_list(&mut self, ids: &[VertexId], color: Option<Color>) -> Result<()> {
        for (done, &id) in ids.iter().enumerate() {
            if let Err(err) = self.set_color_by_id(id, color) {
                warn!(
                    "[VertexSet] Stopped coloring after {} of {} vertices: {}",
                    done,
                    ids.len(),
                    err
                );
                return Err(err);
            }
        }
        Ok(())
    }

    /// Move the vertex at each location `l` to `map(l)`, colors travelling
    /// with their vertices.
    ///
    /// Fails with `InvalidArgument`, leaving the arrangement untouched, unless
    /// `map` is a bijection on `[0, 2^dimension)`.
    pub fn map_to_locations<F>(&mut self, map: F) -> Result<()>
    where
        F: Fn(Location) -> Location,
    {
        let image = self.image_of(map)?;
        self.relocate(&image);
        Ok(())
    }

    /// Move vertices as [`map_to_locations`](Self::map_to_locations) does,
    /// but leave each color at the location it was on.
    pub fn map_to_locations_not_colors<F>(&mut self, map: F) -> Result<()>
    where
        F: Fn(Location) -> Location,
    {
        let image = self.image_of(map)?;
        self.relocate_keeping_colors(&image);
        Ok(())
    }

    /// Apply an automorphism. With `preserve_colors`, colors stay on their
    /// locations instead of following the vertices.
    pub fn apply(&mut self, automorphism: &Automorphism, preserve_colors: bool) -> Result<()> {
        let image = automorphism.location_map(self.dimension)?;
        check_bijection(&image)?;
        trace!(
            "[VertexSet] Applying {:?} (preserve_colors={})",
            automorphism,
            preserve_colors
        );
        if preserve_colors {
            self.relocate_keeping_colors(&image);
        } else {
            self.relocate(&image);
        }
        Ok(())
    }

    /// Permute the bits of every location by `index_list`.
    pub fn rotate(&mut self, index_list: &[usize], preserve_colors: bool) -> Result<()> {
        self.apply(&Automorphism::Rotation(index_list.to_vec()), preserve_colors)
    }

    /// Flip the bits of every location selected by `bit_mask` (truncated to
    /// the dimension). Applying the same reflection twice restores the
    /// arrangement.
    pub fn reflect(&mut self, bit_mask: usize, preserve_colors: bool) -> Result<()> {
        self.apply(&Automorphism::Reflection(bit_mask), preserve_colors)
    }

    /// Put every vertex back at the location equal to its id. Colors stay
    /// with their vertices.
    pub fn reset_positions(&mut self) {
        self.vertices.sort_unstable_by_key(Vertex::id);
        for (location, slot) in self.locations.iter_mut().enumerate() {
            *slot = location;
        }
        trace!("[VertexSet] Reset positions");
    }

    /// Evaluate `map` over every location and check it is a bijection.
    fn image_of<F>(&self, map: F) -> Result<Vec<Location>>
    where
        F: Fn(Location) -> Location,
    {
        let image: Vec<Location> = (0..self.len()).map(map).collect();
        check_bijection(&image)?;
        Ok(image)
    }

    /// Move vertices along a validated bijection.
    fn relocate(&mut self, image: &[Location]) {
        let previous = self.vertices.clone();
        for (location, vertex) in previous.into_iter().enumerate() {
            let target = image[location];
            self.locations[vertex.id()] = target;
            self.vertices[target] = vertex;
        }
    }

    /// Move vertices along a validated bijection, then put back the color
    /// each location had before the move.
    fn relocate_keeping_colors(&mut self, image: &[Location]) {
        let colors: Vec<Option<Color>> = self.vertices.iter().map(|v| v.color).collect();
        self.relocate(image);
        for (vertex, color) in self.vertices.iter_mut().zip(colors) {
            vertex.color = color;
        }
    }
}
