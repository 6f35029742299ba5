// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Wildcard patterns over `{0, 1, *}`.
//!
//! A pattern of length `dimension` names a subcube: literal positions must
//! match exactly and `*` positions match either bit. `"1**"` names the four
//! vertices of the 3-cube whose top bit is set.

use super::conversion::how_many_bit_strings;
use crate::errors::{CubeError, Result};

/// Every value in `[0, 2^dimension)` whose bit string matches `pattern`,
/// in ascending order.
///
/// # Examples
///
/// ```
/// use hypercube::bits::pattern_to_int_list;
///
/// assert_eq!(pattern_to_int_list("1**", 3).unwrap(), vec![4, 5, 6, 7]);
/// assert_eq!(pattern_to_int_list("*0", 2).unwrap(), vec![0, 2]);
/// ```
pub fn pattern_to_int_list(pattern: &str, dimension: usize) -> Result<Vec<usize>> {
    let (care_mask, care_bits) = parse_pattern(pattern, dimension)?;
    Ok((0..how_many_bit_strings(dimension))
        .filter(|value| value & care_mask == care_bits)
        .collect())
}

/// Split a pattern into the mask of literal positions and the bits required there.
fn parse_pattern(pattern: &str, dimension: usize) -> Result<(usize, usize)> {
    if let Some(c) = pattern.chars().find(|c| !matches!(c, '0' | '1' | '*')) {
        return Err(CubeError::malformed(
            pattern,
            format!("unexpected character {:?}, expected 0, 1 or *", c),
        ));
    }
    if pattern.len() != dimension {
        return Err(CubeError::malformed(
            pattern,
            format!("pattern has length {}, expected {}", pattern.len(), dimension),
        ));
    }
    if dimension >= usize::BITS as usize {
        return Err(CubeError::out_of_range(
            "dimension",
            dimension,
            usize::BITS as usize,
        ));
    }

    let mut care_mask = 0;
    let mut care_bits = 0;
    for (position, c) in pattern.bytes().enumerate() {
        let bit = 1 << (dimension - 1 - position);
        match c {
            b'0' => care_mask |= bit,
            b'1' => {
                care_mask |= bit;
                care_bits |= bit;
            }
            _ => {}
        }
    }
    Ok((care_mask, care_bits))
}
