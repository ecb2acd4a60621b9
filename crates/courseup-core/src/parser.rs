//! The parser port.
//!
//! Parsing raw bytes against a schema definition is an external concern; the
//! pipeline only specifies the boundary. Implementations live outside this
//! crate (the workspace ships a `quick-xml` backed one) and are injected
//! into the dispatcher and the converters' raw-file entry points.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::descriptor::SchemaDescriptor;
use crate::error::Result;
use crate::kind::DocumentKind;
use crate::version::SchemaVersion;

/// A typed document root tied to its schema facts.
///
/// Implemented by every versioned root type in the schema crate, so the
/// parser can cross-check the tree it produces against the descriptor it
/// was given.
pub trait SchemaRoot: Serialize + DeserializeOwned {
    /// The document kind this root belongs to.
    const KIND: DocumentKind;
    /// The schema version this root belongs to.
    const VERSION: SchemaVersion;
    /// The root element name.
    const ROOT_ELEMENT: &'static str;
}

/// Raw file content handed to the pipeline.
///
/// The pipeline never touches the filesystem beyond the optional
/// [`SourceFile::from_path`] convenience; callers may equally construct one
/// from in-memory content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    contents: String,
}

impl SourceFile {
    /// Creates a source file from a display name and raw content.
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Reads a source file from disk.
    ///
    /// # Errors
    ///
    /// Returns a `Parse` error carrying the path if the file cannot be read.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| crate::error::ConvertError::parse(path.display().to_string(), e.to_string()))?;
        Ok(Self {
            name: path.display().to_string(),
            contents,
        })
    }

    /// The file's display name (used in error and log messages).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw file content.
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// Outcome of probing a file's declared schema version.
///
/// "Already at the latest version" is a control signal, not an error: the
/// dispatcher reacts by parsing against the current schema and skipping the
/// chain entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionProbe {
    /// The file declares the current schema version; no migration is needed.
    AlreadyLatest,
    /// The file declares an older, supported version the chain can start from.
    Supported(SchemaVersion),
}

/// The external parse-and-validate service.
///
/// Implementations are expected to:
/// - fail with a `Parse` error when the bytes do not conform to the schema
///   named by the descriptor,
/// - fail with an `UnsupportedVersion` error when the declared version is
///   outside the supported range,
/// - never mutate the source file.
pub trait ParseDocument {
    /// Parses the file against the schema named by `descriptor` into the
    /// typed tree `T`.
    ///
    /// With `fail_fast` set, the first validation event aborts the parse;
    /// otherwise implementations may collect and tolerate recoverable
    /// events, matching the behavior of the embedding application's
    /// validation layer.
    ///
    /// # Errors
    ///
    /// Returns a `Parse` error if the content does not conform to the
    /// descriptor's schema, or if `T`'s schema facts disagree with the
    /// descriptor.
    fn parse<T: SchemaRoot>(
        &self,
        file: &SourceFile,
        descriptor: &SchemaDescriptor,
        fail_fast: bool,
    ) -> Result<T>;

    /// Reads the declared schema version from the file's root element.
    ///
    /// # Errors
    ///
    /// Returns an `UnsupportedVersion` error when the declared version is
    /// older than the oldest supported boundary or newer than the current
    /// version, and a `Parse` error when no version can be read at all.
    fn probe_version(&self, file: &SourceFile) -> Result<VersionProbe>;
}

/// The caller-visible backup of a document that was upconverted.
///
/// Retains the pre-conversion file content in its authored form, together
/// with the version it was authored against; callers decide whether to
/// persist it. Training application references are exempt from backup
/// retention and never produce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalDocument {
    /// The document kind of the backed-up file.
    pub kind: DocumentKind,
    /// The schema version the file was authored against.
    pub version: SchemaVersion,
    /// The file's display name.
    pub name: String,
    /// The pre-conversion file content, exactly as authored.
    pub contents: String,
}

impl OriginalDocument {
    /// Captures a backup of a source file at a detected version.
    pub fn capture(file: &SourceFile, kind: DocumentKind, version: SchemaVersion) -> Self {
        Self {
            kind,
            version,
            name: file.name().to_string(),
            contents: file.contents().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_file_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.course.xml");
        std::fs::write(&path, "<Course version=\"6.0\"/>").unwrap();

        let file = SourceFile::from_path(&path).unwrap();
        assert!(file.name().ends_with("demo.course.xml"));
        assert!(file.contents().contains("6.0"));
    }

    #[test]
    fn test_source_file_from_missing_path_is_parse_error() {
        let err = SourceFile::from_path("/definitely/not/here.xml").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_capture_retains_authored_content() {
        let file = SourceFile::new("a.metadata.xml", "<Metadata version=\"7.0\"/>");
        let backup = OriginalDocument::capture(&file, DocumentKind::Metadata, SchemaVersion::V7);
        assert_eq!(backup.contents, file.contents());
        assert_eq!(backup.version, SchemaVersion::V7);
    }
}
