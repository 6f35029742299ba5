// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable cube state.
//!
//! - VertexSet: which vertex sits at which location, and vertex colors
//! - EdgeSet: the fixed edge topology, and edge colors
//!
//! Both are created together by [`Cube::new`](crate::Cube::new). The edge set
//! only consults the vertex set to translate locations into ids.

pub mod edge_set;
pub mod vertex_set;

pub use edge_set::EdgeSet;
pub use vertex_set::VertexSet;
