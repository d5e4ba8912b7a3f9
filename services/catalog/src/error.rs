use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Catalog service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("movie not found")]
    MovieNotFound,
    #[error("no movie found for title")]
    TitleNotFound,
    #[error("user or movie not found")]
    RatingTargetNotFound,
    #[error("missing data")]
    MissingData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::MovieNotFound => "MOVIE_NOT_FOUND",
            Self::TitleNotFound => "TITLE_NOT_FOUND",
            Self::RatingTargetNotFound => "RATING_TARGET_NOT_FOUND",
            Self::MissingData => "MISSING_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for CatalogServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound
            | Self::MovieNotFound
            | Self::TitleNotFound
            | Self::RatingTargetNotFound => StatusCode::NOT_FOUND,
            Self::MissingData => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
