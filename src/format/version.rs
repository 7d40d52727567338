//! Version string handling.
//!
//! The major component is read leniently: leading whitespace and a sign are allowed, and only the leading digits count, so `"3"`, `"3.2.0"` and `" 3rc.0"` are all major version 3. A component without leading digits has no major version.

/// Major version of the versioned beatmap shape.
pub const V3_MAJOR: i64 = 3;

/// Extracts the major component of `version`, the text before the first `.`.
///
/// Returns `None` if it does not begin with an integer.
#[must_use]
pub fn major_version(version: &str) -> Option<i64> {
    let major = version.split_once('.').map_or(version, |(major, _)| major);
    parse_leading_int(major)
}

fn parse_leading_int(source: &str) -> Option<i64> {
    let source = source.trim_start();
    let (negative, digits) = match source.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, source.strip_prefix('+').unwrap_or(source)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_major_component() {
        assert_eq!(major_version("3.2.0"), Some(3));
        assert_eq!(major_version("3"), Some(3));
        assert_eq!(major_version("2.6.0"), Some(2));
        assert_eq!(major_version("10.0"), Some(10));
    }

    #[test]
    fn lenient_like_integer_prefix() {
        assert_eq!(major_version(" 3rc.1"), Some(3));
        assert_eq!(major_version("+3.0"), Some(3));
        assert_eq!(major_version("-1.0"), Some(-1));
    }

    #[test]
    fn malformed_has_no_major() {
        assert_eq!(major_version(""), None);
        assert_eq!(major_version("v3.0.0"), None);
        assert_eq!(major_version(".3"), None);
        assert_eq!(major_version("-"), None);
        assert_eq!(major_version("99999999999999999999.0"), None);
    }
}
