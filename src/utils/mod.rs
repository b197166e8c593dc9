//! Utility functions shared by the HTTP handlers.
//!
//! - [`resource_id`] - Resource identifier parsing from request paths

pub mod resource_id;

pub use resource_id::parse_resource_id;
