//! Document types for schema version 6.0.
//!
//! The oldest version the conversion chain can start from. Version modules
//! share no types with each other; a tree is always homogeneous in one
//! version, and only the boundary converters map between them.

pub mod conversation;
pub mod course;
pub mod learner;
pub mod metadata;
pub mod pedagogy;
pub mod scenario;
pub mod sensor;
