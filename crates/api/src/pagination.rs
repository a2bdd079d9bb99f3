//! Paged list responses: JSON array body plus `X-Total-Count` and an
//! RFC 5988 `Link` header.

use axum::http::header::LINK;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use souk_core::paging::Page;

pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// Build the list response for `page`, linking relative to `uri`.
pub fn paged_response<T: Serialize>(uri: &Uri, page: Page<T>) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(X_TOTAL_COUNT, HeaderValue::from(page.total));
    if let Ok(link) = HeaderValue::from_str(&link_header(uri, &page)) {
        headers.insert(LINK, link);
    }
    (headers, Json(page.items)).into_response()
}

/// `<...>; rel="next", <...>; rel="prev", <...>; rel="last", <...>; rel="first"`.
///
/// `next` / `prev` only appear when such a page exists.
pub fn link_header<T>(uri: &Uri, page: &Page<T>) -> String {
    let base = base_query(uri);
    let last = (page.total_pages() - 1).max(0);
    let link = |n: i64, rel: &str| {
        format!(
            "<{}?{base}page={n}&size={}>; rel=\"{rel}\"",
            uri.path(),
            page.size
        )
    };

    let mut links = Vec::with_capacity(4);
    if page.page < last {
        links.push(link(page.page + 1, "next"));
    }
    if page.page > 0 {
        links.push(link(page.page - 1, "prev"));
    }
    links.push(link(last, "last"));
    links.push(link(0, "first"));
    links.join(",")
}

/// The request's query without `page` / `size`, with a trailing `&` when
/// non-empty.
fn base_query(uri: &Uri) -> String {
    let kept: Vec<&str> = uri
        .query()
        .unwrap_or("")
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split('=').next().unwrap_or("");
            key != "page" && key != "size"
        })
        .collect();
    if kept.is_empty() {
        String::new()
    } else {
        format!("{}&", kept.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: i64, size: i64, total: i64) -> Page<()> {
        Page {
            items: Vec::new(),
            total,
            page,
            size,
        }
    }

    #[test]
    fn middle_page_links_every_direction() {
        let uri: Uri = "/api/tags?name.contains=a&page=1&size=2".parse().unwrap();
        assert_eq!(
            link_header(&uri, &page(1, 2, 5)),
            "</api/tags?name.contains=a&page=2&size=2>; rel=\"next\",\
             </api/tags?name.contains=a&page=0&size=2>; rel=\"prev\",\
             </api/tags?name.contains=a&page=2&size=2>; rel=\"last\",\
             </api/tags?name.contains=a&page=0&size=2>; rel=\"first\""
        );
    }

    #[test]
    fn empty_result_links_first_and_last_only() {
        let uri: Uri = "/api/tags".parse().unwrap();
        assert_eq!(
            link_header(&uri, &page(0, 20, 0)),
            "</api/tags?page=0&size=20>; rel=\"last\",</api/tags?page=0&size=20>; rel=\"first\""
        );
    }
}
