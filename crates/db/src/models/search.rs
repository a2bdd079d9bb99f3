//! Entities mirrored into the `search_documents` index.

use serde::Serialize;

/// A DTO that can be stored in the search index.
///
/// The whole DTO is stored as the document returned by `_search`; only
/// [`Searchable::search_text`] feeds the full-text vector.
pub trait Searchable: Serialize {
    /// Value of `search_documents.entity_type`.
    const ENTITY_TYPE: &'static str;

    /// Text that full-text queries match against.
    fn search_text(&self) -> String;
}

/// A hit returned from the search index.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SearchDocument {
    pub entity_id: String,
    pub document: serde_json::Value,
}
