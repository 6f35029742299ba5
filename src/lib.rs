// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hypercubes as labeled graphs, with automorphisms and coloring.
//!
//! An n-dimensional hypercube has one vertex per n-bit string and an edge
//! between every two strings that differ in one bit. This crate keeps such a
//! cube in memory so that an interactive front end can rotate it (permute bit
//! positions), reflect it (flip bits), and color its vertices and edges.
//!
//! # Architecture
//!
//! Leaf first:
//!
//! 1. **bits**: pure functions on fixed-width values: conversion to and from
//!    bit strings, weight, bit permutation, reversal, wildcard patterns.
//! 2. **geometry**: vocabulary types (`Vertex`, `Edge`, `Color`) and limits.
//! 3. **symmetry**: rotations and reflections as validated location maps.
//! 4. **state**: `VertexSet` (location → vertex) and `EdgeSet` (fixed edges
//!    plus their colors).
//! 5. **cube**: the `Cube` facade over both sets.
//!
//! # Identity versus location
//!
//! Every vertex has an id, fixed for life, and a location, the slot it
//! currently occupies. Automorphisms move vertices between locations and never
//! relabel them. Edges are pairs of ids, so the edge set is computed once and
//! stays valid whatever arrangement the vertices are in: bit permutations and
//! bit flips preserve Hamming distance, hence adjacency.
//!
//! # Scale
//!
//! Building the edge set is O(4^d) and pattern matching is O(2^d · d), so
//! dimensions are capped at [`MAX_DIMENSION`](geometry::MAX_DIMENSION).

pub mod bits;
pub mod cube;
pub mod errors;
pub mod geometry;
pub mod state;
pub mod symmetry;

// Re-export commonly used types
pub use cube::Cube;
pub use errors::{CubeError, Result};
pub use geometry::{Color, Edge, Location, Vertex, VertexId};
pub use state::{EdgeSet, VertexSet};
pub use symmetry::Automorphism;
