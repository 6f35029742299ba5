// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Automorphisms of the hypercube as location maps.
//!
//! Two families generate the symmetries we support:
//! - **Rotation**: permute bit positions by an index list.
//! - **Reflection**: flip the bits selected by a mask (XOR).
//!
//! Both preserve Hamming distance, so both map edges to edges. Before a vertex
//! set applies one, the automorphism is expanded into its image over every
//! location and that image is checked to be a bijection.

use crate::bits::{self, permutation::permute_unchecked};
use crate::errors::{CubeError, Result};
use crate::geometry::Location;

/// A structure-preserving relocation of the vertices of a cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Automorphism {
    /// Output bit position `j` takes input bit position `indices[j]`.
    Rotation(Vec<usize>),
    /// XOR every location with the mask, truncated to the cube's dimension.
    Reflection(usize),
}

impl Automorphism {
    /// Compute the location each location is sent to, for a cube of `dimension`.
    ///
    /// Fails with `InvalidArgument` if a rotation's index list is not a
    /// permutation of `0..dimension`.
    pub fn location_map(&self, dimension: usize) -> Result<Vec<Location>> {
        let count = bits::how_many_bit_strings(dimension);
        match self {
            Automorphism::Rotation(indices) => {
                bits::check_index_list(indices, dimension)?;
                Ok((0..count)
                    .map(|location| permute_unchecked(location, indices, dimension))
                    .collect())
            }
            Automorphism::Reflection(mask) => {
                let mask = bits::truncate_within_dimension(*mask, dimension);
                Ok((0..count).map(|location| location ^ mask).collect())
            }
        }
    }

    /// The automorphism that undoes this one.
    pub fn inverse(&self, dimension: usize) -> Result<Self> {
        match self {
            Automorphism::Rotation(indices) => Ok(Automorphism::Rotation(
                bits::invert_index_list(indices, dimension)?,
            )),
            Automorphism::Reflection(mask) => Ok(Automorphism::Reflection(*mask)),
        }
    }

    /// Check whether this automorphism leaves every location in place.
    pub fn is_identity(&self, dimension: usize) -> bool {
        match self {
            Automorphism::Rotation(indices) => {
                indices.len() == dimension && indices.iter().enumerate().all(|(j, &i)| i == j)
            }
            Automorphism::Reflection(mask) => bits::truncate_within_dimension(*mask, dimension) == 0,
        }
    }
}

/// Check that `image` sends `[0, image.len())` onto itself with no collisions.
///
/// `image[location]` is where the vertex at `location` goes.
pub fn check_bijection(image: &[Location]) -> Result<()> {
    let count = image.len();
    let mut hit = vec![false; count];
    for (location, &target) in image.iter().enumerate() {
        if target >= count {
            return Err(CubeError::invalid(format!(
                "location {} is sent to {}, outside [0, {})",
                location, target, count
            )));
        }
        if hit[target] {
            return Err(CubeError::invalid(format!(
                "location map is not a bijection: {} is the image of more than one location",
                target
            )));
        }
        hit[target] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_map_dimension_2() {
        let swap = Automorphism::Rotation(vec![1, 0]);
        assert_eq!(swap.location_map(2), Ok(vec![0b00, 0b10, 0b01, 0b11]));
    }

    #[test]
    fn test_reflection_map_truncates_mask() {
        let flip = Automorphism::Reflection(0b1101);
        // Only the low 2 bits (0b01) apply in dimension 2.
        assert_eq!(flip.location_map(2), Ok(vec![1, 0, 3, 2]));
    }

    #[test]
    fn test_invalid_rotation() {
        let bad = Automorphism::Rotation(vec![0, 0, 1]);
        assert!(matches!(bad.location_map(3), Err(CubeError::InvalidArgument(_))));
        assert!(bad.inverse(3).is_err());
    }

    #[test]
    fn test_maps_are_bijections() {
        for dimension in 0..=5 {
            let reversed: Vec<usize> = (0..dimension).rev().collect();
            let rotation = Automorphism::Rotation(reversed);
            check_bijection(&rotation.location_map(dimension).unwrap()).unwrap();

            let reflection = Automorphism::Reflection(0b10110);
            check_bijection(&reflection.location_map(dimension).unwrap()).unwrap();
        }
    }

    #[test]
    fn test_inverse_composes_to_identity() {
        let rotation = Automorphism::Rotation(vec![3, 0, 2, 1]);
        let forward = rotation.location_map(4).unwrap();
        let backward = rotation.inverse(4).unwrap().location_map(4).unwrap();
        for location in 0..16 {
            assert_eq!(backward[forward[location]], location);
        }
    }

    #[test]
    fn test_is_identity() {
        assert!(Automorphism::Rotation(vec![0, 1, 2]).is_identity(3));
        assert!(!Automorphism::Rotation(vec![1, 0, 2]).is_identity(3));
        assert!(Automorphism::Reflection(0b1000).is_identity(3));
        assert!(!Automorphism::Reflection(0b0100).is_identity(3));
        assert!(Automorphism::Rotation(vec![]).is_identity(0));
    }

    #[test]
    fn test_check_bijection_rejects_collision() {
        assert!(matches!(
            check_bijection(&[0, 0, 2, 3]),
            Err(CubeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_check_bijection_rejects_out_of_range() {
        assert!(matches!(
            check_bijection(&[1, 2, 3, 4]),
            Err(CubeError::InvalidArgument(_))
        ));
        assert!(check_bijection(&[3, 2, 1, 0]).is_ok());
        assert!(check_bijection(&[]).is_ok());
    }
}
