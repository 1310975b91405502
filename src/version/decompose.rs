//! Version string decomposition
//!
//! Splits a core version such as `2.3.1-rc2` into its numeric segments and an
//! optional pre-release marker:
//!
//! - `2.3.1` -> segments `[2, 3, 1]`, stable
//! - `2.3.1-rc2` -> segments `[2, 3, 1]`, marker `rc`, sub-version `2`
//! - `1.0beta` -> segments `[1, 0]`, marker `beta`, no sub-version
//!
//! Only the last dot-separated segment may carry a marker.

use std::cmp::Ordering;

use crate::version::error::VersionError;

/// Pre-release markers ordered from least to most stable
pub const PRE_RELEASE_MARKERS: [&str; 3] = ["alpha", "beta", "rc"];

/// Comparable structure of a version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDecomposition {
    pub numeric_segments: Vec<NumericSegment>,
    /// Index into [`PRE_RELEASE_MARKERS`], `None` for a stable version
    pub pre_release_order: Option<usize>,
    /// Text following the marker (`2` in `rc2`)
    pub pre_release_subversion: Option<String>,
}

/// Digit string of arbitrary length, ordered by numeric value
///
/// Leading zeros are stripped, so `007` and `7` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericSegment(String);

impl NumericSegment {
    /// Returns `None` unless `digits` is a non-empty run of ASCII digits
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        let normalized = if trimmed.is_empty() { "0" } else { trimmed };
        Some(Self(normalized.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for NumericSegment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for NumericSegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl VersionDecomposition {
    pub fn is_stable(&self) -> bool {
        self.pre_release_order.is_none()
    }
}

/// Decompose a core version string (without alphabetic prefix).
///
/// Returns `VersionError::MalformedVersion` if any segment is not numeric once
/// the pre-release suffix has been stripped.
pub fn decompose(raw: &str) -> Result<VersionDecomposition, VersionError> {
    let (head, last) = match raw.rsplit_once('.') {
        Some((head, last)) => (Some(head), last),
        None => (None, raw),
    };

    let mut numeric_segments = Vec::new();
    if let Some(head) = head {
        for segment in head.split('.') {
            numeric_segments.push(parse_segment(raw, segment)?);
        }
    }

    let suffix = LastSegment::tokenize(last);
    numeric_segments.push(parse_segment(raw, suffix.numeric)?);

    let (pre_release_order, pre_release_subversion) = match suffix.rest {
        "" => (None, None),
        rest => match match_marker(rest) {
            Some((order, subversion)) => (
                Some(order),
                (!subversion.is_empty()).then(|| subversion.to_string()),
            ),
            None => return Err(malformed(raw, last)),
        },
    };

    Ok(VersionDecomposition {
        numeric_segments,
        pre_release_order,
        pre_release_subversion,
    })
}

/// Last segment split into its leading digits and whatever follows them
struct LastSegment<'a> {
    numeric: &'a str,
    rest: &'a str,
}

impl<'a> LastSegment<'a> {
    fn tokenize(segment: &'a str) -> Self {
        let end = segment
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(segment.len());
        let (numeric, rest) = segment.split_at(end);
        Self { numeric, rest }
    }
}

/// Match `rest` against the marker list, allowing one leading `-`.
///
/// Returns the marker order and the remaining sub-version text.
fn match_marker(rest: &str) -> Option<(usize, &str)> {
    let rest = rest.strip_prefix('-').unwrap_or(rest);
    PRE_RELEASE_MARKERS
        .iter()
        .enumerate()
        .find_map(|(order, marker)| {
            let head = rest.get(..marker.len())?;
            head.eq_ignore_ascii_case(marker)
                .then(|| (order, &rest[marker.len()..]))
        })
}

fn parse_segment(raw: &str, segment: &str) -> Result<NumericSegment, VersionError> {
    NumericSegment::parse(segment).ok_or_else(|| malformed(raw, segment))
}

fn malformed(raw: &str, segment: &str) -> VersionError {
    VersionError::MalformedVersion {
        version: raw.to_string(),
        segment: segment.to_string(),
    }
}
