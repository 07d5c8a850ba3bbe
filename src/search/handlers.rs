use super::engine::fetch_results;
use super::types::{ErrorResponse, SearchQuery, SearchSettings};
use crate::catalog::types::Catalog;
use axum::extract::Query;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("failed to serialize search results: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        tracing::error!("Search request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Serves one page of name matches.
///
/// Parameters are read leniently (`q` defaults to empty, bad `page` to 1), so a
/// well-formed request never fails; only a serialization error yields a 500.
pub async fn handle_search(
    Query(params): Query<Vec<(String, String)>>,
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(settings): Extension<SearchSettings>,
) -> Result<Response, SearchError> {
    let query = SearchQuery::from_pairs(params);
    let page = fetch_results(&catalog, &query, settings.page_size);

    tracing::debug!(
        "Query {:?} page {}: {} matches, showing {}-{}",
        query.text,
        query.page,
        page.count,
        page.range_left,
        page.range_right
    );

    let body = serde_json::to_vec(&page)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
