//! Document types for the current schema version (10.0).
//!
//! Everything the conversion chain produces lands in these types. This
//! version retires the SIMILE condition input and lesson-material file
//! references, names learner configuration inputs, and adds the export
//! snapshot types that never participate in conversion.

pub mod conversation;
pub mod course;
pub mod learner;
pub mod metadata;
pub mod pedagogy;
pub mod scenario;
pub mod sensor;
pub mod survey;
