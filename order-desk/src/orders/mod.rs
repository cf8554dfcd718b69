//! Order collections: storage, construction and fulfillment
//!
//! - [`OrderStorage`] - one JSON document per collection
//! - [`add_order`] - interactive construction into the pending collection
//! - [`process_order`] - pending → completed transition

pub mod builder;
pub mod fulfillment;
pub mod storage;

pub use builder::{AddOutcome, add_order};
pub use fulfillment::{ProcessOutcome, process_order};
pub use storage::{OrderStorage, StorageError, StorageResult};
