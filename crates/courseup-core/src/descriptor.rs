//! Schema descriptors.
//!
//! A descriptor bundles the static facts the external parser needs to parse
//! one document kind at one schema version: where the schema definition
//! lives and what the root element is called. Descriptors are process-wide
//! constants; each boundary converter exposes the descriptors of the version
//! it converts *from*.

use crate::kind::DocumentKind;
use crate::version::SchemaVersion;

/// Static facts about one (document kind, schema version) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaDescriptor {
    /// Which top-level schema this descriptor belongs to.
    pub kind: DocumentKind,
    /// The schema version the descriptor describes.
    pub version: SchemaVersion,
    /// Locator of the schema definition file, relative to the deployment's
    /// schema root (configuration data supplied by the embedding application).
    pub schema_file: &'static str,
    /// Name of the document's root element under this schema.
    pub root_element: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_is_plain_data() {
        let descriptor = SchemaDescriptor {
            kind: DocumentKind::Course,
            version: SchemaVersion::V6,
            schema_file: "schemas/6.0/course.xsd",
            root_element: "Course",
        };
        let copy = descriptor;
        assert_eq!(copy, descriptor);
    }
}
