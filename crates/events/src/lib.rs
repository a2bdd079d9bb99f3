//! Event infrastructure for the search index mirror.
//!
//! - [`bus`]: in-process publish/subscribe via `tokio::sync::broadcast`.
//! - [`indexer`]: background task that reloads changed entities into
//!   `search_documents`.

pub mod bus;
pub mod indexer;

pub use bus::{EntityEvent, EventBus};
pub use indexer::{IndexError, SearchIndexer};
