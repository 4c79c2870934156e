use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse},
};
use tracing::{info, warn};

use super::{error::ApiError, render, state::AppState};

/// Query string of the roster page.
///
/// Only the first `search` value counts; repeats and unknown keys are
/// ignored rather than rejected.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub search: String,
}

impl SearchParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let search = pairs
            .into_iter()
            .find(|(key, _)| key == "search")
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self { search }
    }
}

/// Artist roster page (GET /?search=...)
///
/// Filters the in-memory roster by name; an empty or missing `search`
/// lists every artist.
pub async fn index(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let params = SearchParams::from_pairs(pairs);
    let matches = state.roster.search(&params.search);
    info!(
        query = %params.search,
        matches = matches.len(),
        "Roster page requested"
    );

    state.metrics.index_served();
    Html(render::index_page(&matches, &params.search))
}

/// Artist detail page (GET /artist/{*id})
///
/// Everything after `/artist/` is the id, slashes included.
pub async fn artist_detail(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    render_detail(state, artist_id).await
}

/// GET /artist/ with nothing after it: an empty id.
pub async fn artist_detail_root(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    render_detail(state, String::new()).await
}

/// Runs the four upstream fetches for `artist_id`. Every failed sub-fetch
/// is logged; the page fails with 400 if any of them did.
async fn render_detail(state: AppState, artist_id: String) -> Result<Html<String>, ApiError> {
    info!(%artist_id, "Artist detail requested");

    let outcome = state.aggregator.fetch_outcomes(&artist_id).await;
    for err in outcome.errors() {
        warn!(
            %artist_id,
            resource = %err.resource(),
            error = %err,
            "Upstream fetch failed"
        );
    }

    match outcome.into_detail() {
        Ok(detail) => {
            state.metrics.detail_served();
            Ok(Html(render::artist_page(&detail)))
        }
        Err(err) => {
            state.metrics.detail_failed();
            Err(ApiError::DetailUnavailable(err))
        }
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Any path without a route, including missing static files.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Known path, unsupported method.
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::BadRequest(format!("method {} not allowed", method))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_search_params_first_value_wins() {
        let params = SearchParams::from_pairs(pairs(&[
            ("page", "2"),
            ("search", "floy"),
            ("search", "queen"),
        ]));
        assert_eq!(params.search, "floy");
    }

    #[test]
    fn test_search_params_missing_is_empty() {
        assert_eq!(SearchParams::from_pairs(vec![]).search, "");
        assert_eq!(SearchParams::from_pairs(pairs(&[("q", "x")])).search, "");
    }
}
