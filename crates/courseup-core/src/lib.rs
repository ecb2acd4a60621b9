//! Core types of the Courseup conversion pipeline.
//!
//! This crate holds the version- and kind-agnostic vocabulary the rest of
//! the workspace builds on: the supported [`SchemaVersion`] timeline,
//! [`DocumentKind`]s, the append-only [`IssueLog`], schema descriptors, the
//! parser port, and the shared [`ConvertError`] type.
//!
//! The versioned document trees live in `courseup-schema`; the boundary
//! converters, chain, and dispatcher live in `courseup-convert`.

pub mod descriptor;
pub mod error;
pub mod issue;
pub mod kind;
pub mod parser;
pub mod version;

// Re-export the common vocabulary
pub use descriptor::SchemaDescriptor;
pub use error::{ConvertError, Result};
pub use issue::IssueLog;
pub use kind::DocumentKind;
pub use parser::{OriginalDocument, ParseDocument, SchemaRoot, SourceFile, VersionProbe};
pub use version::SchemaVersion;
