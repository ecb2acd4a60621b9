//! The Courseup conversion chain.
//!
//! This crate upgrades authored documents produced against an old schema
//! version into the shape required by the current version:
//!
//! - One [boundary converter](chain::BoundaryConverter) exists per adjacent
//!   pair of supported versions. Each converter maps every document kind
//!   one hop forward and then delegates to the next converter, so invoking
//!   the earliest applicable converter yields a current-version tree in one
//!   call.
//! - Non-fatal information loss is recorded on the
//!   [`IssueLog`](courseup_core::IssueLog) threaded through every hop;
//!   constructs with no current-version equivalent and no reasonable
//!   default fail the migration with an unhandled-construct error instead.
//! - [`MigrationService`](dispatch::MigrationService) is the single entry
//!   point per file: it probes the declared version, bypasses export kinds,
//!   short-circuits already-current documents, and assembles the
//!   [`MigrationResult`](result::MigrationResult).
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    MigrationService                       │
//! │  (probe version, bypass exports, capture backups)         │
//! └──────────────────────────────────────────────────────────┘
//!          │ earliest applicable converter
//!          V
//!   V6ToV7Converter ─> V7ToV8Converter ─> V8ToV9Converter ─> V9ToV10Converter
//!   (each hop maps its document kinds, then delegates forward)
//! ```

pub mod chain;
pub mod descriptors;
pub mod dispatch;
pub mod result;
pub mod v6_to_v7;
pub mod v7_to_v8;
pub mod v8_to_v9;
pub mod v9_to_v10;

// Public API
pub use chain::{converter_for, converters, BoundaryConverter};
pub use dispatch::MigrationService;
pub use result::{MigratedDocument, MigrationResult};
pub use v6_to_v7::V6ToV7Converter;
pub use v7_to_v8::V7ToV8Converter;
pub use v8_to_v9::V8ToV9Converter;
pub use v9_to_v10::V9ToV10Converter;
