//! Parsing of byte-size strings such as `4g`, `512MB` or `1073741824`.

use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes in a mebibyte, the cluster's allocation granularity.
pub const MIB: i64 = 1024 * 1024;

static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(-?\d+)\s*([kmgtp]?)(?:b|bytes?)?\s*$").unwrap()
});

/// Parse a size with an optional binary suffix into bytes.
///
/// `-1` passes through unchanged so callers can keep using it as the
/// "unset" sentinel.
pub fn parse_size(value: &str) -> Result<i64> {
    let invalid = || Error::InvalidSize {
        value: value.to_string(),
    };

    let captures = SIZE_PATTERN.captures(value).ok_or_else(invalid)?;
    let number: i64 = captures[1].parse().map_err(|_| invalid())?;
    let shift = match captures[2].to_ascii_lowercase().as_str() {
        "" => 0,
        "k" => 10,
        "m" => 20,
        "g" => 30,
        "t" => 40,
        "p" => 50,
        _ => return Err(invalid()),
    };

    number
        .checked_mul(1i64 << shift)
        .ok_or_else(|| Error::SizeOverflow {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", 0)]
    #[case("1024", 1024)]
    #[case("-1", -1)]
    #[case("4k", 4096)]
    #[case("200m", 200 * MIB)]
    #[case("200MB", 200 * MIB)]
    #[case("1g", 1024 * MIB)]
    #[case(" 2 G ", 2048 * MIB)]
    #[case("1t", 1024 * 1024 * MIB)]
    #[case("10bytes", 10)]
    fn test_parse_size(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(parse_size(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("g")]
    #[case("1.5g")]
    #[case("12x")]
    fn test_parse_size_rejects(#[case] input: &str) {
        assert!(matches!(parse_size(input), Err(Error::InvalidSize { .. })));
    }

    #[test]
    fn test_parse_size_overflow() {
        assert!(matches!(
            parse_size("9000000p"),
            Err(Error::SizeOverflow { .. })
        ));
    }
}
