//! Document types for schema version 8.0.
//!
//! This version promotes several flat values into wrappers: course concepts
//! become a list/hierarchy choice, the bare survey key gains a properties
//! wrapper, feedback messages become nodes with display options, and
//! metadata grows a content choice and a `presentAt` wrapper.

pub mod conversation;
pub mod course;
pub mod learner;
pub mod metadata;
pub mod pedagogy;
pub mod scenario;
pub mod sensor;
