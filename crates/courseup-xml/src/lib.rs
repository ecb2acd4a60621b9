//! XML adapter for the Courseup parser port.
//!
//! [`XmlDocumentParser`] implements
//! [`ParseDocument`](courseup_core::ParseDocument) with `quick-xml`'s serde
//! support. Every authored file declares its schema version in a `version`
//! attribute on the root element; probing reads only as far as the first
//! start tag.
//!
//! XSD-level validation stays with the embedding application (the schema
//! descriptor carries the schema locator for it); this adapter enforces
//! the structural shape the typed trees define, plus the root element name
//! and, in fail-fast mode, the declared version.

use quick_xml::events::Event;
use quick_xml::Reader;

use courseup_core::{
    ConvertError, ParseDocument, Result, SchemaDescriptor, SchemaRoot, SchemaVersion, SourceFile,
    VersionProbe,
};

/// `quick-xml` backed parse-and-validate service.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlDocumentParser;

impl XmlDocumentParser {
    pub fn new() -> Self {
        Self
    }
}

impl ParseDocument for XmlDocumentParser {
    fn parse<T: SchemaRoot>(
        &self,
        file: &SourceFile,
        descriptor: &SchemaDescriptor,
        fail_fast: bool,
    ) -> Result<T> {
        if T::ROOT_ELEMENT != descriptor.root_element || T::KIND != descriptor.kind {
            return Err(ConvertError::parse(
                file.name(),
                format!(
                    "requested tree type for a {} '{}' root does not match the {} '{}' descriptor",
                    T::KIND,
                    T::ROOT_ELEMENT,
                    descriptor.kind,
                    descriptor.root_element
                ),
            ));
        }

        let root = read_root(file)?;
        if root.element != descriptor.root_element {
            return Err(ConvertError::parse(
                file.name(),
                format!(
                    "expected root element '{}' but found '{}'",
                    descriptor.root_element, root.element
                ),
            ));
        }

        if fail_fast {
            let declared = root.version.as_deref().unwrap_or("(none)");
            if SchemaVersion::parse_attribute(declared) != Some(descriptor.version) {
                return Err(ConvertError::parse(
                    file.name(),
                    format!(
                        "declared version '{}' does not match the {} schema",
                        declared, descriptor.version
                    ),
                ));
            }
        }

        tracing::debug!(
            "Parsing '{}' as {} version {}",
            file.name(),
            descriptor.kind,
            descriptor.version
        );

        quick_xml::de::from_str(file.contents())
            .map_err(|e| ConvertError::parse(file.name(), e.to_string()))
    }

    fn probe_version(&self, file: &SourceFile) -> Result<VersionProbe> {
        let root = read_root(file)?;

        let Some(declared) = root.version else {
            // No version attribute means the file predates the supported
            // range; those files cannot be migrated.
            return Err(ConvertError::unsupported_version(file.name(), "(none)"));
        };

        match SchemaVersion::parse_attribute(&declared) {
            Some(version) if version.is_latest() => Ok(VersionProbe::AlreadyLatest),
            Some(version) => Ok(VersionProbe::Supported(version)),
            None => Err(ConvertError::unsupported_version(file.name(), declared)),
        }
    }
}

/// The first start tag of a document: its element name and `version`
/// attribute, if any.
struct RootTag {
    element: String,
    version: Option<String>,
}

/// Reads the root element without parsing the rest of the document.
fn read_root(file: &SourceFile) -> Result<RootTag> {
    let mut reader = Reader::from_str(file.contents());

    loop {
        match reader
            .read_event()
            .map_err(|e| ConvertError::parse(file.name(), e.to_string()))?
        {
            Event::Start(tag) | Event::Empty(tag) => {
                let element = String::from_utf8_lossy(tag.name().as_ref()).into_owned();

                let mut version = None;
                for attribute in tag.attributes() {
                    let attribute =
                        attribute.map_err(|e| ConvertError::parse(file.name(), e.to_string()))?;
                    if attribute.key.as_ref() == b"version" {
                        let value = attribute
                            .unescape_value()
                            .map_err(|e| ConvertError::parse(file.name(), e.to_string()))?;
                        version = Some(value.into_owned());
                    }
                }

                return Ok(RootTag { element, version });
            }
            Event::Eof => {
                return Err(ConvertError::parse(
                    file.name(),
                    "document has no root element",
                ));
            }
            // Prolog, comments, whitespace before the root element.
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courseup_core::DocumentKind;

    #[test]
    fn test_probe_reads_root_attribute() {
        let parser = XmlDocumentParser::new();
        let file = SourceFile::new(
            "demo.course.xml",
            "<?xml version=\"1.0\"?>\n<Course version=\"8.0\"><name>x</name></Course>",
        );

        assert_eq!(
            parser.probe_version(&file).unwrap(),
            VersionProbe::Supported(SchemaVersion::V8)
        );
    }

    #[test]
    fn test_probe_treats_revision_suffix_as_latest() {
        let parser = XmlDocumentParser::new();
        let file = SourceFile::new("demo.course.xml", "<Course version=\"10.0.1\"/>");

        assert_eq!(
            parser.probe_version(&file).unwrap(),
            VersionProbe::AlreadyLatest
        );
    }

    #[test]
    fn test_probe_rejects_missing_version() {
        let parser = XmlDocumentParser::new();
        let file = SourceFile::new("ancient.course.xml", "<Course><name>x</name></Course>");

        let err = parser.probe_version(&file).unwrap_err();
        assert!(err.is_unsupported_version());
        assert!(err.to_string().contains("(none)"));
    }

    #[test]
    fn test_probe_rejects_out_of_range_version() {
        let parser = XmlDocumentParser::new();
        let file = SourceFile::new("ancient.course.xml", "<Course version=\"2.0\"/>");

        let err = parser.probe_version(&file).unwrap_err();
        assert!(err.is_unsupported_version());
        assert!(err.to_string().contains("2.0"));
    }

    #[test]
    fn test_probe_rejects_empty_document() {
        let parser = XmlDocumentParser::new();
        let file = SourceFile::new("empty.course.xml", "  <!-- nothing here -->  ");

        assert!(parser.probe_version(&file).unwrap_err().is_parse());
    }

    #[test]
    fn test_parse_typed_tree() {
        use courseup_schema::v6;

        let parser = XmlDocumentParser::new();
        let descriptor = SchemaDescriptor {
            kind: DocumentKind::Metadata,
            version: SchemaVersion::V6,
            schema_file: "schemas/6.0/metadata.xsd",
            root_element: "Metadata",
        };
        let file = SourceFile::new(
            "demo.metadata.xml",
            concat!(
                "<Metadata version=\"6.0\">",
                "<simpleRef>slides.pptx</simpleRef>",
                "<concepts><concept name=\"navigation\"><attributes/></concept></concepts>",
                "</Metadata>"
            ),
        );

        let metadata: v6::metadata::Metadata = parser.parse(&file, &descriptor, true).unwrap();
        assert_eq!(metadata.simple_ref, "slides.pptx");
        assert_eq!(metadata.concepts.concepts[0].name, "navigation");
    }

    #[test]
    fn test_parse_rejects_wrong_root_element() {
        use courseup_schema::v6;

        let parser = XmlDocumentParser::new();
        let descriptor = SchemaDescriptor {
            kind: DocumentKind::Metadata,
            version: SchemaVersion::V6,
            schema_file: "schemas/6.0/metadata.xsd",
            root_element: "Metadata",
        };
        let file = SourceFile::new("demo.metadata.xml", "<Course version=\"6.0\"/>");

        let err = parser
            .parse::<v6::metadata::Metadata>(&file, &descriptor, false)
            .unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("Course"));
    }

    #[test]
    fn test_fail_fast_enforces_declared_version() {
        use courseup_schema::v6;

        let parser = XmlDocumentParser::new();
        let descriptor = SchemaDescriptor {
            kind: DocumentKind::Metadata,
            version: SchemaVersion::V6,
            schema_file: "schemas/6.0/metadata.xsd",
            root_element: "Metadata",
        };
        let file = SourceFile::new(
            "demo.metadata.xml",
            "<Metadata version=\"7.0\"><simpleRef>x</simpleRef><concepts/></Metadata>",
        );

        let err = parser
            .parse::<v6::metadata::Metadata>(&file, &descriptor, true)
            .unwrap_err();
        assert!(err.is_parse());

        // Without fail-fast the version mismatch is tolerated.
        assert!(parser
            .parse::<v6::metadata::Metadata>(&file, &descriptor, false)
            .is_ok());
    }
}
