// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Conversion between integers and fixed-width bit strings.
//!
//! Bit strings are big-endian: the first character is the most significant of
//! the `dimension` bits, so `"100"` is 4 in dimension 3.

use crate::errors::{CubeError, Result};

/// Parse a string of `0`s and `1`s as an unsigned integer.
///
/// Fails with `MalformedInput` on an empty string, any other character, or a
/// value too wide for a machine word.
pub fn to_int(bit_string: &str) -> Result<usize> {
    if bit_string.is_empty() {
        return Err(CubeError::malformed(bit_string, "bit string is empty"));
    }
    let mut result: usize = 0;
    for c in bit_string.chars() {
        let bit = match c {
            '0' => 0,
            '1' => 1,
            _ => {
                return Err(CubeError::malformed(
                    bit_string,
                    format!("unexpected character {:?}, expected 0 or 1", c),
                ))
            }
        };
        result = result
            .checked_mul(2)
            .and_then(|r| r.checked_add(bit))
            .ok_or_else(|| CubeError::malformed(bit_string, "too many significant bits"))?;
    }
    Ok(result)
}

/// Render `value` as a zero-padded bit string of length `dimension`.
///
/// Dimension 0 has exactly one vertex, which renders as `"0"`.
pub fn to_bit_string(value: usize, dimension: usize) -> Result<String> {
    check_in_range(value, dimension)?;
    if dimension == 0 {
        return Ok(String::from("0"));
    }
    Ok(format!("{:0width$b}", value, width = dimension))
}

/// Parse each bit string, requiring every one to have length `dimension`.
///
/// Lengths are checked for the whole list before any string is parsed.
pub fn strings_to_int_list<S: AsRef<str>>(bit_strings: &[S], dimension: usize) -> Result<Vec<usize>> {
    if let Some(bad) = bit_strings
        .iter()
        .map(|s| s.as_ref())
        .find(|s| s.chars().count() != dimension)
    {
        return Err(CubeError::invalid(format!(
            "bit string {:?} has length {}, all bit strings must be of length {}",
            bad,
            bad.chars().count(),
            dimension
        )));
    }
    bit_strings.iter().map(|s| to_int(s.as_ref())).collect()
}

/// Number of bit strings of length `dimension`, i.e. 2^dimension.
///
/// Saturates at `usize::MAX` for widths a machine word cannot count.
pub fn how_many_bit_strings(dimension: usize) -> usize {
    u32::try_from(dimension)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .unwrap_or(usize::MAX)
}

/// Keep only the low `dimension` bits of `value`.
pub fn truncate_within_dimension(value: usize, dimension: usize) -> usize {
    match u32::try_from(dimension).ok().and_then(|shift| 1usize.checked_shl(shift)) {
        Some(limit) => value & (limit - 1),
        None => value,
    }
}

/// Fail with `OutOfRange` unless `value < 2^dimension`.
pub(crate) fn check_in_range(value: usize, dimension: usize) -> Result<()> {
    let limit = how_many_bit_strings(dimension);
    if limit != usize::MAX && value >= limit {
        return Err(CubeError::out_of_range("value", value, limit));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_int() {
        assert_eq!(to_int("0"), Ok(0));
        assert_eq!(to_int("1011"), Ok(11));
        assert_eq!(to_int("0001"), Ok(1));
        assert_eq!(to_int("100"), Ok(4));
    }

    #[test]
    fn test_to_int_malformed() {
        assert!(matches!(to_int(""), Err(CubeError::MalformedInput { .. })));
        assert!(matches!(to_int("012"), Err(CubeError::MalformedInput { .. })));
        assert!(matches!(to_int("1*0"), Err(CubeError::MalformedInput { .. })));
        assert!(matches!(to_int(" 10"), Err(CubeError::MalformedInput { .. })));
    }

    #[test]
    fn test_to_int_overflow() {
        let wide = "1".repeat(usize::BITS as usize + 1);
        assert!(matches!(to_int(&wide), Err(CubeError::MalformedInput { .. })));

        // Leading zeros never overflow.
        let padded = format!("{}1", "0".repeat(100));
        assert_eq!(to_int(&padded), Ok(1));
    }

    #[test]
    fn test_to_bit_string() {
        assert_eq!(to_bit_string(5, 3).unwrap(), "101");
        assert_eq!(to_bit_string(1, 4).unwrap(), "0001");
        assert_eq!(to_bit_string(0, 2).unwrap(), "00");
        assert_eq!(to_bit_string(0, 0).unwrap(), "0");
    }

    #[test]
    fn test_to_bit_string_out_of_range() {
        assert_eq!(
            to_bit_string(8, 3),
            Err(CubeError::out_of_range("value", 8, 8))
        );
        assert!(to_bit_string(1, 0).is_err());
    }

    #[test]
    fn test_round_trip_all_small_dimensions() {
        for dimension in 1..=8 {
            for value in 0..how_many_bit_strings(dimension) {
                let s = to_bit_string(value, dimension).unwrap();
                assert_eq!(s.len(), dimension);
                assert_eq!(to_int(&s), Ok(value));
            }
        }
        assert_eq!(to_int(&to_bit_string(0, 0).unwrap()), Ok(0));
    }

    #[test]
    fn test_strings_to_int_list() {
        assert_eq!(strings_to_int_list(&["000", "101", "111"], 3), Ok(vec![0, 5, 7]));
        let empty: [&str; 0] = [];
        assert_eq!(strings_to_int_list(&empty, 0), Ok(vec![]));
    }

    #[test]
    fn test_strings_to_int_list_wrong_length() {
        let result = strings_to_int_list(&["000", "10"], 3);
        assert!(matches!(result, Err(CubeError::InvalidArgument(_))));
    }

    #[test]
    fn test_strings_to_int_list_bad_alphabet() {
        let result = strings_to_int_list(&[String::from("0a1")], 3);
        assert!(matches!(result, Err(CubeError::MalformedInput { .. })));
    }

    #[test]
    fn test_how_many_bit_strings() {
        assert_eq!(how_many_bit_strings(0), 1);
        assert_eq!(how_many_bit_strings(1), 2);
        assert_eq!(how_many_bit_strings(6), 64);
        assert_eq!(how_many_bit_strings(usize::BITS as usize), usize::MAX);
    }

    #[test]
    fn test_truncate_within_dimension() {
        assert_eq!(truncate_within_dimension(0b11111, 3), 0b111);
        assert_eq!(truncate_within_dimension(0b1010, 2), 0b10);
        assert_eq!(truncate_within_dimension(0b1010, 0), 0);
        assert_eq!(truncate_within_dimension(usize::MAX, usize::BITS as usize), usize::MAX);
    }
}
