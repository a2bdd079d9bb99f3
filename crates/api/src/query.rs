//! Raw query-string access for list, count and search endpoints.
//!
//! Criteria filters use dynamic keys (`name.contains`, `price.lessThan`)
//! and may repeat (`sort`, `id.in`), so the query is kept as ordered
//! pairs and interpreted per resource.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use souk_core::criteria::{Criteria, FieldSpec};
use souk_core::paging::PageRequest;

use crate::error::AppError;

/// Every `key=value` pair of the query string, in order.
#[derive(Debug, Clone, Default)]
pub struct ListParams(pub Vec<(String, String)>);

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(Self(pairs))
    }
}

impl ListParams {
    /// Filters for a resource with the given field table.
    pub fn criteria(&self, fields: &[FieldSpec]) -> Result<Criteria, AppError> {
        Ok(Criteria::from_params(fields, &self.0)?)
    }

    /// `page`, `size` and `sort` for a resource with the given field table.
    pub fn page(&self, fields: &[FieldSpec]) -> Result<PageRequest, AppError> {
        Ok(PageRequest::from_params(fields, &self.0)?)
    }

    /// First value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `true` only for `key=true` (case-insensitive).
    pub fn flag(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        ListParams(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn flag_requires_literal_true() {
        let p = params(&[("eagerload", "TRUE"), ("distinct", "yes")]);
        assert!(p.flag("eagerload"));
        assert!(!p.flag("distinct"));
        assert!(!p.flag("missing"));
    }

    #[test]
    fn get_returns_first_occurrence() {
        let p = params(&[("sort", "name"), ("sort", "id,desc")]);
        assert_eq!(p.get("sort"), Some("name"));
    }
}
