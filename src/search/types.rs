use crate::catalog::types::Record;
use serde::{Deserialize, Serialize};

/// Records per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Per-router search settings, shared with the handler as an extension.
#[derive(Debug, Clone, Copy)]
pub struct SearchSettings {
    pub page_size: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A coerced search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    /// 1-based page number, always >= 1.
    pub page: i64,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, page: i64) -> Self {
        Self {
            text: text.into(),
            page: if page <= 0 { 1 } else { page },
        }
    }

    /// Builds a query from decoded URL parameters.
    ///
    /// Only the first `q` and the first `page` are considered. A `page` that is missing,
    /// not an integer, or not positive becomes 1.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut text: Option<String> = None;
        let mut page: Option<String> = None;

        for (key, value) in pairs {
            match key.as_ref() {
                "q" if text.is_none() => text = Some(value.as_ref().to_string()),
                "page" if page.is_none() => page = Some(value.as_ref().to_string()),
                _ => {}
            }
        }

        let page = page
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or(1);

        Self::new(text.unwrap_or_default(), page)
    }
}

/// One page of search results as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    pub query: String,
    pub results: Vec<Record>,
    pub prev: i64,
    pub next: i64,
    pub range_left: usize,
    pub range_right: usize,
    /// Total matches across all pages.
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
