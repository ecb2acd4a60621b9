//! Document types for schema version 7.0.
//!
//! Differs from version 6.0 only in the metadata schema, which drops the
//! per-attribute quadrant-specific marker.

pub mod conversation;
pub mod course;
pub mod learner;
pub mod metadata;
pub mod pedagogy;
pub mod scenario;
pub mod sensor;
