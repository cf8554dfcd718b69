//! Shared types for order-desk
//!
//! Data model and validation errors used by the desk binary and its tests.

pub mod error;
pub mod models;

// Re-exports
pub use error::LineItemError;
pub use models::{LineItem, Order};
pub use serde::{Deserialize, Serialize};
