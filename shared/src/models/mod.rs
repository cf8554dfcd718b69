//! Data models
//!
//! Orders are persisted as plain JSON documents, one array per collection.

pub mod order;

// Re-exports
pub use order::*;
