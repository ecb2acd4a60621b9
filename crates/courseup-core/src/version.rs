//! Supported schema versions.
//!
//! Every authored document carries its schema version in a `version`
//! attribute on the root element. The set of versions a deployment can
//! upconvert from is closed and ordered; each adjacent pair is owned by
//! exactly one boundary converter.

use std::fmt;

use strum::EnumIter;

/// A supported schema version.
///
/// Variants are ordered oldest to newest, so `<`/`>` comparisons follow the
/// version timeline. Adding a new version requires updating `all()`,
/// `attribute()`, `next()` and the converter chain; the exhaustive matches
/// below turn a forgotten spot into a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum SchemaVersion {
    /// Schema version 6.0 (oldest version the chain can start from)
    V6,
    /// Schema version 7.0
    V7,
    /// Schema version 8.0
    V8,
    /// Schema version 9.0
    V9,
    /// Schema version 10.0 (current)
    V10,
}

impl SchemaVersion {
    /// All supported versions, oldest first.
    pub const fn all() -> &'static [SchemaVersion] {
        &[
            SchemaVersion::V6,
            SchemaVersion::V7,
            SchemaVersion::V8,
            SchemaVersion::V9,
            SchemaVersion::V10,
        ]
    }

    /// The current schema version.
    pub const fn latest() -> SchemaVersion {
        SchemaVersion::V10
    }

    /// Whether this is the current schema version.
    pub const fn is_latest(&self) -> bool {
        matches!(self, SchemaVersion::V10)
    }

    /// The value of the root `version` attribute for this schema version.
    pub const fn attribute(&self) -> &'static str {
        match self {
            SchemaVersion::V6 => "6.0",
            SchemaVersion::V7 => "7.0",
            SchemaVersion::V8 => "8.0",
            SchemaVersion::V9 => "9.0",
            SchemaVersion::V10 => "10.0",
        }
    }

    /// The next version in the timeline, or `None` for the current version.
    pub const fn next(&self) -> Option<SchemaVersion> {
        match self {
            SchemaVersion::V6 => Some(SchemaVersion::V7),
            SchemaVersion::V7 => Some(SchemaVersion::V8),
            SchemaVersion::V8 => Some(SchemaVersion::V9),
            SchemaVersion::V9 => Some(SchemaVersion::V10),
            SchemaVersion::V10 => None,
        }
    }

    /// Resolves a root `version` attribute value to a supported version.
    ///
    /// Only the `major.minor` prefix is significant: fully-converted files
    /// are stamped with a trailing revision (e.g. `"10.0.1"`) and must still
    /// probe as `10.0`. Returns `None` for values outside the supported set.
    pub fn parse_attribute(value: &str) -> Option<SchemaVersion> {
        let mut parts = value.split('.');
        let major = parts.next()?;
        let minor = parts.next().unwrap_or("0");
        let prefix = format!("{}.{}", major.trim(), minor.trim());

        SchemaVersion::all()
            .iter()
            .find(|v| v.attribute() == prefix)
            .copied()
    }

    /// The version string stamped on fully-converted output files.
    ///
    /// The trailing `.1` revision marks the file as produced by the
    /// conversion pipeline rather than authored directly (e.g. `"10.0.1"`).
    pub fn converted_attribute() -> String {
        format!("{}.1", SchemaVersion::latest().attribute())
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_versions_are_ordered() {
        let all = SchemaVersion::all();
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1], "{} should precede {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_next_walks_the_whole_timeline() {
        let mut version = SchemaVersion::V6;
        let mut hops = 0;
        while let Some(next) = version.next() {
            version = next;
            hops += 1;
        }
        assert_eq!(version, SchemaVersion::latest());
        assert_eq!(hops, SchemaVersion::all().len() - 1);
    }

    #[test]
    fn test_parse_attribute_exact() {
        assert_eq!(
            SchemaVersion::parse_attribute("6.0"),
            Some(SchemaVersion::V6)
        );
        assert_eq!(
            SchemaVersion::parse_attribute("10.0"),
            Some(SchemaVersion::V10)
        );
    }

    #[test]
    fn test_parse_attribute_ignores_revision() {
        assert_eq!(
            SchemaVersion::parse_attribute("10.0.1"),
            Some(SchemaVersion::V10)
        );
        assert_eq!(
            SchemaVersion::parse_attribute("8.0.1"),
            Some(SchemaVersion::V8)
        );
    }

    #[test]
    fn test_parse_attribute_rejects_unknown() {
        assert_eq!(SchemaVersion::parse_attribute("2.0"), None);
        assert_eq!(SchemaVersion::parse_attribute("11.0"), None);
        assert_eq!(SchemaVersion::parse_attribute(""), None);
        assert_eq!(SchemaVersion::parse_attribute("abc"), None);
    }

    #[test]
    fn test_converted_attribute_has_revision() {
        assert_eq!(SchemaVersion::converted_attribute(), "10.0.1");
    }

    #[test]
    fn test_iter_matches_all() {
        let from_iter: Vec<SchemaVersion> = SchemaVersion::iter().collect();
        assert_eq!(from_iter.as_slice(), SchemaVersion::all());
    }
}
