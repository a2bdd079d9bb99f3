//! Domain primitives shared by the database, event and HTTP layers.
//!
//! Nothing in here touches I/O: errors, id aliases, the criteria-filter and
//! paging models parsed from query strings, search query helpers, and custom
//! field validators.

pub mod criteria;
pub mod error;
pub mod paging;
pub mod search;
pub mod types;
pub mod validation;
