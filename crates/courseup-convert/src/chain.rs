//! The conversion chain.
//!
//! One converter exists per adjacent pair of supported schema versions.
//! Each converter, after producing its own target-version tree, delegates
//! to the next converter in the chain, so invoking the earliest applicable
//! converter yields a fully up-to-date document in one call. Ordering is
//! fixed and total; no converter can be skipped.

use courseup_core::{DocumentKind, SchemaDescriptor, SchemaVersion};

use crate::descriptors;
use crate::v6_to_v7::V6ToV7Converter;
use crate::v7_to_v8::V7ToV8Converter;
use crate::v8_to_v9::V8ToV9Converter;
use crate::v9_to_v10::V9ToV10Converter;

/// Version and descriptor facts common to every boundary converter.
///
/// The typed conversion entry points live on the concrete converter types
/// (their tree types differ per boundary); this trait carries what the
/// chain needs for ordering checks, logging, and descriptor lookup.
pub trait BoundaryConverter: Send + Sync {
    /// The schema version this converter starts from.
    fn from_version(&self) -> SchemaVersion;

    /// The schema version this converter produces.
    fn to_version(&self) -> SchemaVersion;

    /// Human-readable summary of what changes across this boundary.
    ///
    /// Used for logging and debugging purposes.
    fn description(&self) -> &'static str;

    /// The descriptor the external parser needs to parse this converter's
    /// *previous* version of the given document kind.
    fn previous_descriptor(&self, kind: DocumentKind) -> Option<&'static SchemaDescriptor> {
        descriptors::descriptor(kind, self.from_version())
    }
}

/// All boundary converters, oldest boundary first.
///
/// The array is the chain: element `i` converts from `all()[i].from_version()`
/// to `all()[i].to_version()`, and `to_version()` of each element equals
/// `from_version()` of the next.
pub fn converters() -> &'static [&'static dyn BoundaryConverter] {
    &[
        &V6ToV7Converter,
        &V7ToV8Converter,
        &V8ToV9Converter,
        &V9ToV10Converter,
    ]
}

/// Finds the converter whose boundary starts at the given version.
pub fn converter_for(version: SchemaVersion) -> Option<&'static dyn BoundaryConverter> {
    converters()
        .iter()
        .find(|c| c.from_version() == version)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_is_continuous() {
        let chain = converters();
        for pair in chain.windows(2) {
            assert_eq!(
                pair[0].to_version(),
                pair[1].from_version(),
                "chain broken between '{}' and '{}'",
                pair[0].description(),
                pair[1].description()
            );
        }
    }

    #[test]
    fn test_chain_spans_oldest_to_latest() {
        let chain = converters();
        assert_eq!(chain.first().unwrap().from_version(), SchemaVersion::V6);
        assert_eq!(
            chain.last().unwrap().to_version(),
            SchemaVersion::latest()
        );
        assert_eq!(chain.len(), SchemaVersion::all().len() - 1);
    }

    #[test]
    fn test_every_pre_latest_version_has_a_converter() {
        for version in SchemaVersion::all() {
            if version.is_latest() {
                assert!(converter_for(*version).is_none());
            } else {
                let converter = converter_for(*version)
                    .unwrap_or_else(|| panic!("no converter starting from {}", version));
                assert_eq!(converter.from_version(), *version);
            }
        }
    }

    #[test]
    fn test_converters_expose_previous_descriptors() {
        for converter in converters() {
            for kind in DocumentKind::all() {
                if kind.requires_conversion() {
                    let descriptor = converter.previous_descriptor(*kind).unwrap();
                    assert_eq!(descriptor.version, converter.from_version());
                } else {
                    assert!(converter.previous_descriptor(*kind).is_none());
                }
            }
        }
    }
}
