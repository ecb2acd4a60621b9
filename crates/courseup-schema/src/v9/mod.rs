//! Document types for schema version 9.0.
//!
//! This version replaces scenario waypoints with places of interest
//! (point/path/area), wraps triggers in a node carrying an optional delay,
//! renames the branch-point course object to adaptive courseflow, and makes
//! the course description mandatory.

pub mod conversation;
pub mod course;
pub mod learner;
pub mod metadata;
pub mod pedagogy;
pub mod scenario;
pub mod sensor;
