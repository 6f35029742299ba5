// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pure functions on fixed-width binary values.
//!
//! A hypercube of dimension d has one vertex per d-bit string, so everything
//! the cube does bottoms out here:
//! - `conversion`: integers to and from bit strings, range limits
//! - `permutation`: weight, Hamming distance, bit permutation, bit reversal
//! - `pattern`: wildcard patterns over `{0, 1, *}` to sets of values
//!
//! None of these functions hold state.

pub mod conversion;
pub mod pattern;
pub mod permutation;

pub use conversion::{
    how_many_bit_strings, strings_to_int_list, to_bit_string, to_int, truncate_within_dimension,
};
pub use pattern::pattern_to_int_list;
pub use permutation::{
    check_index_list, hamming_distance, invert_index_list, permute_by_index_list, reverse, weight,
};
