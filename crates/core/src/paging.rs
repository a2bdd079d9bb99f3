//! Page and sort requests for list endpoints (`?page=&size=&sort=`).

use serde::Serialize;

use crate::criteria::{find_field, FieldSpec};
use crate::error::CoreError;

/// Default page size when `size` is omitted.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: i64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: &'static str,
    pub direction: Direction,
}

/// A zero-based page request with optional sort orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
    pub sort: Vec<SortOrder>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

impl PageRequest {
    /// Read `page`, `size` and every `sort` parameter.
    ///
    /// Non-numeric `page` / `size` fall back to their defaults; `size` is
    /// clamped to `1..=MAX_PAGE_SIZE`. Sorting on an unknown field, or on a
    /// field reached through a join table, is rejected.
    ///
    /// A `sort` value is `prop[,prop...][,asc|desc]`; the direction applies
    /// to every property listed before it.
    pub fn from_params(fields: &[FieldSpec], params: &[(String, String)]) -> Result<Self, CoreError> {
        let mut request = PageRequest::default();

        for (key, value) in params {
            match key.as_str() {
                "page" => {
                    request.page = value.trim().parse::<i64>().map_or(0, |p| p.max(0));
                }
                "size" => {
                    request.size = value
                        .trim()
                        .parse::<i64>()
                        .map_or(DEFAULT_PAGE_SIZE, |s| s.clamp(1, MAX_PAGE_SIZE));
                }
                "sort" => request.sort.extend(parse_sort(fields, value)?),
                _ => {}
            }
        }

        Ok(request)
    }

    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

fn parse_sort(fields: &[FieldSpec], value: &str) -> Result<Vec<SortOrder>, CoreError> {
    let mut tokens: Vec<&str> = value.split(',').map(str::trim).filter(|t| !t.is_empty()).collect();

    let direction = match tokens.last() {
        Some(last) if last.eq_ignore_ascii_case("desc") => Direction::Desc,
        Some(last) if last.eq_ignore_ascii_case("asc") => Direction::Asc,
        _ => Direction::Asc,
    };
    if tokens
        .last()
        .is_some_and(|t| t.eq_ignore_ascii_case("asc") || t.eq_ignore_ascii_case("desc"))
    {
        tokens.pop();
    }

    tokens
        .into_iter()
        .map(|name| {
            let column = find_field(fields, name)
                .and_then(FieldSpec::own_column)
                .ok_or_else(|| CoreError::Validation(format!("Cannot sort by unknown property '{name}'")))?;
            Ok(SortOrder { column, direction })
        })
        .collect()
}

/// One page of results plus the total row count across all pages.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> i64 {
        if self.size <= 0 {
            return 0;
        }
        (self.total + self.size - 1) / self.size
    }

    /// Convert every item, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
