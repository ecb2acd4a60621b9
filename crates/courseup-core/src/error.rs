//! Error types for the conversion pipeline.

use thiserror::Error;

use crate::kind::DocumentKind;
use crate::version::SchemaVersion;

/// The shared error type for the conversion pipeline.
///
/// Provides typed, structured variants for each failure category. Non-fatal
/// information loss is never an error; it is only ever recorded on the
/// [`IssueLog`](crate::issue::IssueLog).
#[derive(Error, Debug, Clone)]
pub enum ConvertError {
    /// The input bytes do not conform to the expected schema.
    #[error("Unable to parse '{file}': {message}")]
    Parse { file: String, message: String },

    /// The file's declared schema version is outside the supported range.
    #[error(
        "Unable to convert '{file}' because its schema version of '{declared}' is not supported. \
         Files can be converted between version {oldest} and version {latest}."
    )]
    UnsupportedVersion {
        file: String,
        declared: String,
        oldest: SchemaVersion,
        latest: SchemaVersion,
    },

    /// A recognized-but-unmappable construct was encountered mid-conversion.
    ///
    /// Always fatal for the current migration call; a construct with no
    /// equivalent in the target version is never silently defaulted because
    /// defaulting risks discarding author intent.
    #[error("Found unhandled {construct} while converting a {kind} from version {from} to {to}")]
    UnhandledConstruct {
        construct: String,
        kind: DocumentKind,
        from: SchemaVersion,
        to: SchemaVersion,
    },

    /// Any other unexpected failure, wrapped with the offending file's identity.
    #[error("Unable to convert '{file}': {message}")]
    Conversion { file: String, message: String },
}

impl ConvertError {
    // ========================================================================
    // Constructor helpers
    // ========================================================================

    /// Creates a `Parse` error.
    pub fn parse(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Creates an `UnsupportedVersion` error spanning the supported range.
    pub fn unsupported_version(file: impl Into<String>, declared: impl Into<String>) -> Self {
        Self::UnsupportedVersion {
            file: file.into(),
            declared: declared.into(),
            oldest: SchemaVersion::V6,
            latest: SchemaVersion::latest(),
        }
    }

    /// Creates an `UnhandledConstruct` error for one boundary conversion.
    pub fn unhandled(
        construct: impl Into<String>,
        kind: DocumentKind,
        from: SchemaVersion,
        to: SchemaVersion,
    ) -> Self {
        Self::UnhandledConstruct {
            construct: construct.into(),
            kind,
            from,
            to,
        }
    }

    /// Creates a `Conversion` error carrying the file identity.
    pub fn conversion(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conversion {
            file: file.into(),
            message: message.into(),
        }
    }

    // ========================================================================
    // Type checking methods
    // ========================================================================

    /// Check if this is a `Parse` error.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is an `UnsupportedVersion` error.
    pub fn is_unsupported_version(&self) -> bool {
        matches!(self, Self::UnsupportedVersion { .. })
    }

    /// Check if this is an `UnhandledConstruct` error.
    pub fn is_unhandled_construct(&self) -> bool {
        matches!(self, Self::UnhandledConstruct { .. })
    }

    /// Attach (or replace) the file identity on errors surfaced to callers.
    ///
    /// Converters deep in the chain do not know which file they are working
    /// on; the dispatcher stamps the identity once at the top.
    pub fn with_file(self, file: impl Into<String>) -> Self {
        match self {
            Self::Parse { message, .. } => Self::Parse {
                file: file.into(),
                message,
            },
            Self::UnsupportedVersion {
                declared,
                oldest,
                latest,
                ..
            } => Self::UnsupportedVersion {
                file: file.into(),
                declared,
                oldest,
                latest,
            },
            Self::Conversion { message, .. } => Self::Conversion {
                file: file.into(),
                message,
            },
            // The construct identity is the interesting part; keep it.
            err @ Self::UnhandledConstruct { .. } => err,
        }
    }
}

/// A type alias for `Result<T, ConvertError>`.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unhandled_construct_message_names_the_construct() {
        let err = ConvertError::unhandled(
            "condition input type 'NoSuchInput'",
            DocumentKind::Scenario,
            SchemaVersion::V9,
            SchemaVersion::V10,
        );
        let message = err.to_string();
        assert!(message.contains("NoSuchInput"));
        assert!(message.contains("9.0"));
        assert!(message.contains("10.0"));
        assert!(err.is_unhandled_construct());
    }

    #[test]
    fn test_unsupported_version_names_the_range() {
        let err = ConvertError::unsupported_version("old.course.xml", "2.0");
        let message = err.to_string();
        assert!(message.contains("old.course.xml"));
        assert!(message.contains("2.0"));
        assert!(message.contains("6.0"));
        assert!(message.contains("10.0"));
    }

    #[test]
    fn test_with_file_stamps_identity() {
        let err = ConvertError::parse("", "missing root element").with_file("a.dkf.xml");
        assert!(err.to_string().contains("a.dkf.xml"));
    }

    #[test]
    fn test_with_file_preserves_unhandled_construct() {
        let err = ConvertError::unhandled(
            "producer type",
            DocumentKind::LearnerConfiguration,
            SchemaVersion::V8,
            SchemaVersion::V9,
        )
        .with_file("learner.learnerconfig.xml");
        assert!(err.is_unhandled_construct());
    }
}
