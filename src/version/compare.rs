//! Version ordering
//!
//! `is_lower` is the strict "older than" relation used to order release lists
//! from highest to lowest.

use std::cmp::Ordering;

use crate::version::decompose::{NumericSegment, VersionDecomposition, decompose};
use crate::version::error::VersionError;

/// Returns true if `a` is an older version than `b`.
///
/// Numeric segments are compared pairwise. When one version is a prefix of the
/// other, the shorter one is lower, so `1.2` is lower than `1.2.0`. For equal
/// segments a pre-release is lower than the release, and two pre-releases are
/// ordered by marker (`alpha` < `beta` < `rc`) then by sub-version.
pub fn is_lower(a: &str, b: &str) -> Result<bool, VersionError> {
    let a = decompose(a)?;
    let b = decompose(b)?;
    Ok(is_decomposition_lower(&a, &b))
}

fn is_decomposition_lower(a: &VersionDecomposition, b: &VersionDecomposition) -> bool {
    for (x, y) in a.numeric_segments.iter().zip(&b.numeric_segments) {
        if x != y {
            return x < y;
        }
    }

    match a.numeric_segments.len().cmp(&b.numeric_segments.len()) {
        Ordering::Less => return true,
        Ordering::Greater => return false,
        Ordering::Equal => {}
    }

    match (a.pre_release_order, b.pre_release_order) {
        (Some(_), None) => true,
        (Some(x), Some(y)) if x != y => x < y,
        (Some(_), Some(_)) => is_subversion_lower(
            a.pre_release_subversion.as_deref(),
            b.pre_release_subversion.as_deref(),
        ),
        (None, _) => false,
    }
}

/// Numeric sub-versions compare as numbers and rank below non-numeric ones,
/// which compare as text. A missing sub-version ranks below any present one.
fn is_subversion_lower(a: Option<&str>, b: Option<&str>) -> bool {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        (None, Some(_)) => return true,
        _ => return false,
    };

    match (NumericSegment::parse(a), NumericSegment::parse(b)) {
        (Some(x), Some(y)) => x < y,
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => a < b,
    }
}

/// Sort versions in place from highest to lowest.
///
/// Runs full bubble passes until one completes without a swap. Release lists
/// hold at most a few hundred entries.
pub fn sort_descending(versions: &mut [String]) -> Result<(), VersionError> {
    loop {
        let mut swapped = false;
        for i in 1..versions.len() {
            if is_lower(&versions[i - 1], &versions[i])? {
                versions.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.0.0", "2.0.0", true)]
    #[case("2.0.0", "1.0.0", false)]
    #[case("1.9.9", "1.10.0", true)]
    #[case("1.2", "1.2.0", true)]
    #[case("1.2.0", "1.2", false)]
    #[case("1.0.0-alpha1", "1.0.0", true)]
    #[case("1.0.0", "1.0.0-alpha1", false)]
    #[case("1.0.0-beta1", "1.0.0-alpha2", false)]
    #[case("1.0.0-alpha2", "1.0.0-beta1", true)]
    #[case("1.0.0-rc1", "1.0.0-rc2", true)]
    #[case("1.0.0-rc2", "1.0.0-rc10", true)]
    #[case("1.0.0-rc10", "1.0.0-rc2", false)]
    #[case("1.0.0-rc", "1.0.0-rc1", true)]
    #[case("1.0.0-rc1", "1.0.0-rc", false)]
    #[case("0.9.9", "1.0.0-alpha1", true)]
    #[case("20231231235959123456", "1.0", false)]
    #[case("1.0", "20231231235959123456", true)]
    #[case("1.99999999999999999999", "1.100000000000000000000", true)]
    #[case("1.0.0-rc99999999999999999999", "1.0.0-rc100000000000000000000", true)]
    fn is_lower_orders_versions(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
        assert_eq!(is_lower(a, b).unwrap(), expected);
    }

    #[rstest]
    #[case("1.2.3")]
    #[case("10")]
    #[case("2.0.0-rc1")]
    fn is_lower_is_false_for_equal_versions(#[case] version: &str) {
        assert!(!is_lower(version, version).unwrap());
    }

    #[rstest]
    #[case("01.2", "1.2")]
    #[case("1.02.0", "1.2.0")]
    #[case("1.0.0-rc01", "1.0.0-rc1")]
    #[case("0.0", "000.00")]
    fn is_lower_is_false_both_ways_for_numerically_equal_versions(
        #[case] a: &str,
        #[case] b: &str,
    ) {
        assert!(!is_lower(a, b).unwrap());
        assert!(!is_lower(b, a).unwrap());
    }

    #[test]
    fn is_lower_propagates_malformed_version() {
        let result = is_lower("1.2.3", "1.two.3");

        assert_eq!(
            result,
            Err(VersionError::MalformedVersion {
                version: "1.two.3".to_string(),
                segment: "two".to_string(),
            })
        );
    }

    #[test]
    fn sort_descending_places_release_above_its_candidates() {
        let mut versions: Vec<String> = ["1.2.0", "2.0.0", "1.9.9", "2.0.0-rc1"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        sort_descending(&mut versions).unwrap();

        assert_eq!(versions, vec!["2.0.0", "2.0.0-rc1", "1.9.9", "1.2.0"]);
    }

    #[test]
    fn sort_descending_orders_pre_release_markers() {
        let mut versions: Vec<String> = [
            "3.0.0-alpha1",
            "3.0.0-rc1",
            "2.1",
            "3.0.0-beta2",
            "3.0.0",
            "2.1.0",
            "3.0.0-beta1",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        sort_descending(&mut versions).unwrap();

        assert_eq!(
            versions,
            vec![
                "3.0.0",
                "3.0.0-rc1",
                "3.0.0-beta2",
                "3.0.0-beta1",
                "3.0.0-alpha1",
                "2.1.0",
                "2.1",
            ]
        );
    }

    #[test]
    fn sort_descending_keeps_duplicates() {
        let mut versions = vec!["1.0.0".to_string(), "1.1.0".to_string(), "1.0.0".to_string()];

        sort_descending(&mut versions).unwrap();

        assert_eq!(versions, vec!["1.1.0", "1.0.0", "1.0.0"]);
    }

    #[test]
    fn sort_descending_fails_on_malformed_entry() {
        let mut versions = vec!["1.0.0".to_string(), "1.0.x".to_string()];

        assert!(matches!(
            sort_descending(&mut versions),
            Err(VersionError::MalformedVersion { .. })
        ));
    }

    #[test]
    fn sort_descending_accepts_empty_list() {
        let mut versions: Vec<String> = vec![];

        sort_descending(&mut versions).unwrap();

        assert!(versions.is_empty());
    }
}
