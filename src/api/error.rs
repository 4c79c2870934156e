use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use thiserror::Error;

use super::render;
use crate::catalog::FetchError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("artist detail unavailable: {0}")]
    DetailUnavailable(#[from] FetchError),
    #[error("page not found: {0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::DetailUnavailable(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Renders the status page only; the error text stays in the logs.
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        (status, Html(render::status_page(status))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ResourceKind;

    #[test]
    fn test_status_codes() {
        let fetch = FetchError::Transport {
            resource: ResourceKind::Profile,
            url: "http://upstream/artists/1".to_string(),
            reason: "connection refused".to_string(),
        };

        assert_eq!(
            ApiError::from(fetch).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::BadRequest("POST".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("/nope".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_response_does_not_leak_upstream_details() {
        let err = ApiError::DetailUnavailable(FetchError::Read {
            resource: ResourceKind::Dates,
            url: "http://secret-upstream/dates/1".to_string(),
            reason: "connection reset".to_string(),
        });

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
