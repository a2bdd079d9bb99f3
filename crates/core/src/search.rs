//! Search-index constants and query helpers.
//!
//! Lives in `core` (zero internal deps) so both the indexer and the
//! repository layer agree on what is searchable and how user input becomes
//! a PostgreSQL `tsquery`.

/// Entity types mirrored into the search index.
pub const SEARCHABLE_ENTITY_TYPES: &[&str] = &["comment", "product"];

/// Check whether an entity type is mirrored into the search index.
pub fn is_searchable(entity_type: &str) -> bool {
    SEARCHABLE_ENTITY_TYPES.contains(&entity_type)
}

/// Sanitize user input into a list of terms suitable for tsquery construction.
///
/// Any character other than a letter, digit or `_` separates terms, so
/// tsquery operators in user input never reach PostgreSQL.
///
/// Returns `None` if the input yields no usable terms.
fn sanitize_terms(query: &str) -> Option<Vec<&str>> {
    let terms: Vec<&str> = query
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() { None } else { Some(terms) }
}

/// Build a prefix tsquery: terms are AND-ed and the last term matches as a
/// prefix, so partially typed words still hit.
///
/// # Examples
///
/// ```
/// use souk_core::search::build_prefix_tsquery;
/// assert_eq!(build_prefix_tsquery("red"), Some("red:*".to_string()));
/// assert_eq!(build_prefix_tsquery("red sh"), Some("red & sh:*".to_string()));
/// assert_eq!(build_prefix_tsquery("  "), None);
/// ```
pub fn build_prefix_tsquery(query: &str) -> Option<String> {
    let terms = sanitize_terms(query)?;
    let (last, exact) = terms.split_last()?;

    if exact.is_empty() {
        Some(format!("{last}:*"))
    } else {
        Some(format!("{} & {last}:*", exact.join(" & ")))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
