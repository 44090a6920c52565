//! Configuration types
//!
//! All parameters are compile-time constants; there is no configuration
//! file and nothing is persisted.

pub mod types;

pub use types::*;
