//! Pagination metadata and list-query assembly.

use serde::Deserialize;

pub const DEFAULT_PAGE: i32 = 1;
pub const DEFAULT_PER_PAGE: i32 = 25;
pub const MAX_PER_PAGE: i32 = 100;

/// Pagination metadata from API responses.
///
/// `next_page` is the sole continuation signal; it is never inferred from
/// current-page vs total-pages arithmetic.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub current_page: i32,
    pub per_page: i32,
    pub total_pages: i32,
    pub total_count: i64,
    pub next_page: Option<i32>,
    pub prev_page: Option<i32>,
}

impl Pagination {
    /// True if there are more pages available.
    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    /// True if there are previous pages.
    pub fn has_prev_page(&self) -> bool {
        self.prev_page.is_some()
    }
}

/// Pagination parameters for list operations.
///
/// Values of zero or below are omitted from the query; `per_page` is capped
/// at [`MAX_PER_PAGE`].
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub page: i32,
    pub per_page: i32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ListOptions {
    /// Query parameters for these options.
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.page > 0 {
            params.push(("page", self.page.to_string()));
        }
        if self.per_page > 0 {
            params.push(("per_page", self.per_page.min(MAX_PER_PAGE).to_string()));
        }
        params
    }
}

/// Append query parameters to a path, percent-encoding values.
pub(crate) fn append_query(path: &mut String, params: &[(&'static str, String)]) {
    for (i, (key, value)) in params.iter().enumerate() {
        path.push(if i == 0 { '?' } else { '&' });
        path.push_str(key);
        path.push('=');
        path.push_str(&urlencoding::encode(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_page_capped_at_maximum() {
        let opts = ListOptions {
            page: 1,
            per_page: 250,
        };
        let params = opts.query();
        assert!(params.contains(&("per_page", "100".to_string())));
    }

    #[test]
    fn non_positive_values_omitted() {
        let opts = ListOptions {
            page: 0,
            per_page: -5,
        };
        assert!(opts.query().is_empty());
    }

    #[test]
    fn defaults_produce_both_params() {
        let params = ListOptions::default().query();
        assert_eq!(
            params,
            vec![("page", "1".to_string()), ("per_page", "25".to_string())]
        );
    }

    #[test]
    fn has_next_page_follows_server_signal() {
        let mut p = Pagination {
            current_page: 1,
            total_pages: 5,
            ..Pagination::default()
        };
        // total_pages says more exist, but the server did not signal a next page
        assert!(!p.has_next_page());
        p.next_page = Some(2);
        assert!(p.has_next_page());
    }

    #[test]
    fn pagination_tolerates_missing_fields() {
        let p: Pagination = serde_json::from_str(r#"{"current_page": 3}"#).unwrap();
        assert_eq!(p.current_page, 3);
        assert!(p.next_page.is_none());
        assert!(!p.has_prev_page());
    }

    #[test]
    fn append_query_encodes_values() {
        let mut path = String::from("/services/search");
        append_query(&mut path, &[("query", "git hub".to_string())]);
        assert_eq!(path, "/services/search?query=git%20hub");
    }

    #[test]
    fn append_query_empty_params_leaves_path() {
        let mut path = String::from("/boards");
        append_query(&mut path, &[]);
        assert_eq!(path, "/boards");
    }
}
