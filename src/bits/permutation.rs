// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Weight, distance, and rearrangement of the bits of a fixed-width value.
//!
//! Positions are numbered as in the bit string: position 0 is the most
//! significant of the `dimension` bits.

use super::conversion::check_in_range;
use crate::errors::{CubeError, Result};

/// Number of `1` bits in `value`.
pub fn weight(value: usize) -> usize {
    value.count_ones() as usize
}

/// Number of bit positions in which `a` and `b` differ.
pub fn hamming_distance(a: usize, b: usize) -> usize {
    weight(a ^ b)
}

/// Check that `indices` is a permutation of `0..dimension`.
///
/// The list must have length `dimension` and mention every index; with equal
/// length, full coverage rules out duplicates.
pub fn check_index_list(indices: &[usize], dimension: usize) -> Result<()> {
    if indices.len() != dimension {
        return Err(CubeError::invalid(format!(
            "index list {:?} has length {}, expected {}",
            indices,
            indices.len(),
            dimension
        )));
    }
    let mut seen = vec![false; dimension];
    for &index in indices {
        if index < dimension {
            seen[index] = true;
        }
    }
    if let Some(missing) = seen.iter().position(|&present| !present) {
        return Err(CubeError::invalid(format!(
            "index list {:?} is not a permutation of 0..{} (missing {})",
            indices, dimension, missing
        )));
    }
    Ok(())
}

/// Rearrange the bits of `value` so that output position `j` holds input
/// position `indices[j]`.
///
/// # Examples
///
/// ```
/// use hypercube::bits::permute_by_index_list;
///
/// // "110" -> positions [2, 0, 1] -> "011"
/// assert_eq!(permute_by_index_list(0b110, &[2, 0, 1], 3).unwrap(), 0b011);
/// ```
pub fn permute_by_index_list(value: usize, indices: &[usize], dimension: usize) -> Result<usize> {
    check_index_list(indices, dimension)?;
    check_in_range(value, dimension)?;
    Ok(permute_unchecked(value, indices, dimension))
}

/// Permute without validation. `indices` must already satisfy
/// [`check_index_list`] and `value` must fit in `dimension` bits.
pub(crate) fn permute_unchecked(value: usize, indices: &[usize], dimension: usize) -> usize {
    let mut result = 0;
    for (j, &i) in indices.iter().enumerate() {
        let bit = (value >> (dimension - 1 - i)) & 1;
        result |= bit << (dimension - 1 - j);
    }
    result
}

/// The index list that undoes `indices`.
///
/// Permuting by `indices` and then by the result gives back the original value.
pub fn invert_index_list(indices: &[usize], dimension: usize) -> Result<Vec<usize>> {
    check_index_list(indices, dimension)?;
    let mut inverse = vec![0; dimension];
    for (j, &i) in indices.iter().enumerate() {
        inverse[i] = j;
    }
    Ok(inverse)
}

/// Reverse the order of the `dimension` bits of `value`.
pub fn reverse(value: usize, dimension: usize) -> Result<usize> {
    check_in_range(value, dimension)?;
    let mut result = 0;
    for position in 0..dimension {
        if (value >> position) & 1 != 0 {
            result |= 1 << (dimension - 1 - position);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::how_many_bit_strings;

    #[test]
    fn test_weight() {
        assert_eq!(weight(0b1011), 3);
        assert_eq!(weight(0), 0);
        assert_eq!(weight(0b1000_0000), 1);
        assert_eq!(weight(usize::MAX), usize::BITS as usize);
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance(0b00, 0b01), 1);
        assert_eq!(hamming_distance(0b00, 0b11), 2);
        assert_eq!(hamming_distance(5, 5), 0);
    }

    #[test]
    fn test_check_index_list() {
        assert!(check_index_list(&[2, 0, 1], 3).is_ok());
        assert!(check_index_list(&[], 0).is_ok());
        assert!(matches!(
            check_index_list(&[0, 1], 3),
            Err(CubeError::InvalidArgument(_))
        ));
        assert!(matches!(
            check_index_list(&[0, 0, 1], 3),
            Err(CubeError::InvalidArgument(_))
        ));
        assert!(matches!(
            check_index_list(&[0, 1, 3], 3),
            Err(CubeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_identity_permutation() {
        for dimension in 0..=6 {
            let identity: Vec<usize> = (0..dimension).collect();
            for value in 0..how_many_bit_strings(dimension) {
                assert_eq!(permute_by_index_list(value, &identity, dimension), Ok(value));
            }
        }
    }

    #[test]
    fn test_swap_two_bits() {
        // "01" -> "10"
        assert_eq!(permute_by_index_list(0b01, &[1, 0], 2), Ok(0b10));
        assert_eq!(permute_by_index_list(0b11, &[1, 0], 2), Ok(0b11));
    }

    #[test]
    fn test_permute_reads_from_indices() {
        // Output position 0 takes input position 2, etc.
        // input "100": position 0 is 1.
        assert_eq!(permute_by_index_list(0b100, &[2, 0, 1], 3), Ok(0b010));
        assert_eq!(permute_by_index_list(0b001, &[2, 0, 1], 3), Ok(0b100));
    }

    #[test]
    fn test_permute_rejects_out_of_range_value() {
        assert!(matches!(
            permute_by_index_list(8, &[0, 1, 2], 3),
            Err(CubeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_invert_index_list() {
        let indices = [2, 0, 3, 1];
        let inverse = invert_index_list(&indices, 4).unwrap();
        for value in 0..16 {
            let there = permute_by_index_list(value, &indices, 4).unwrap();
            assert_eq!(permute_by_index_list(there, &inverse, 4), Ok(value));
        }
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse(0b001, 3), Ok(0b100));
        assert_eq!(reverse(0b110, 3), Ok(0b011));
        assert_eq!(reverse(0b1010, 4), Ok(0b0101));
        assert_eq!(reverse(0, 0), Ok(0));
        assert!(reverse(4, 2).is_err());
    }

    #[test]
    fn test_reverse_matches_reversed_index_list() {
        let reversed = [4, 3, 2, 1, 0];
        for value in 0..32 {
            assert_eq!(reverse(value, 5), permute_by_index_list(value, &reversed, 5));
        }
    }
}
