use super::pagination::PageWindow;
use super::types::{ResultPage, SearchQuery};
use crate::catalog::types::{Catalog, Record};

/// Records whose name contains `text`, ignoring case, in catalog order.
///
/// An empty `text` matches every record.
pub fn filter_by_name<'a>(catalog: &'a Catalog, text: &str) -> Vec<&'a Record> {
    let needle = fold_case(text);
    catalog
        .records()
        .iter()
        .filter(|record| fold_case(&record.name).contains(&needle))
        .collect()
}

/// Lowercases one char at a time, so a substring folds the same way inside any name
/// (`str::to_lowercase` turns a word-final `Σ` into `ς`).
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Runs `query` against the catalog and cuts out the requested page.
///
/// `prev` and `next` are plain neighbours of the requested page; callers decide
/// whether they are in range by looking at `count`.
pub fn fetch_results(catalog: &Catalog, query: &SearchQuery, page_size: usize) -> ResultPage {
    let matches = filter_by_name(catalog, &query.text);
    let window = PageWindow::new(matches.len(), query.page, page_size);

    ResultPage {
        query: query.text.clone(),
        results: matches[window.start..window.end]
            .iter()
            .map(|record| (*record).clone())
            .collect(),
        prev: query.page.saturating_sub(1),
        next: query.page.saturating_add(1),
        range_left: window.range_left,
        range_right: window.range_right,
        count: matches.len(),
    }
}
