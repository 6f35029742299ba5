// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use hypercube::{Cube, Location, VertexId};

/// Route `log` output through env_logger (set RUST_LOG to see it).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Ids in location order: `arrangement(cube)[location] == id`.
pub fn arrangement(cube: &Cube) -> Vec<VertexId> {
    cube.vertex_set().iter().map(|(_, v)| v.id()).collect()
}

/// Location of every id: `locations(cube)[id] == location`.
pub fn locations(cube: &Cube) -> Vec<Location> {
    (0..cube.vertex_set().len())
        .map(|id| cube.vertex_set().lookup_location_by_id(id).unwrap())
        .collect()
}

/// Assert that every id sits at exactly one location and vice versa.
pub fn assert_bijection(cube: &Cube) {
    let count = cube.vertex_set().len();
    let mut seen = vec![false; count];
    for (location, vertex) in cube.vertex_set().iter() {
        assert!(vertex.id() < count, "id {} out of range", vertex.id());
        assert!(!seen[vertex.id()], "id {} appears twice", vertex.id());
        seen[vertex.id()] = true;
        assert_eq!(
            cube.vertex_set().lookup_location_by_id(vertex.id()),
            Some(location),
            "inverse lookup disagrees for id {}",
            vertex.id()
        );
    }
    assert!(seen.iter().all(|&s| s));
}

/// All index lists of length `n` (n! of them), in lexicographic order.
pub fn all_index_lists(n: usize) -> Vec<Vec<usize>> {
    fn extend(prefix: &mut Vec<usize>, used: &mut Vec<bool>, out: &mut Vec<Vec<usize>>) {
        if prefix.len() == used.len() {
            out.push(prefix.clone());
            return;
        }
        for i in 0..used.len() {
            if !used[i] {
                used[i] = true;
                prefix.push(i);
                extend(prefix, used, out);
                prefix.pop();
                used[i] = false;
            }
        }
    }
    let mut out = Vec::new();
    extend(&mut Vec::new(), &mut vec![false; n], &mut out);
    out
}
