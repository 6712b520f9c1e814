use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error taxonomy of the API surface.
///
/// Absent users and ratings are client errors on this API, so they map to
/// 400 rather than 404. Only provider trouble produces a 5xx.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("no user registered with email '{0}'")]
    UserNotFound(String),
    #[error("user with email '{0}' already exists")]
    UserExists(String),
    #[error("no rating stored for image '{0}'")]
    RatingNotFound(String),
    #[error("a rating for image '{0}' already exists, update it instead")]
    RatingExists(String),
    #[error("fetching astronomy image: {0}")]
    Provider(anyhow::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "INVALID_REQUEST",
            ApiError::UserNotFound(_) => "USER_NOT_FOUND",
            ApiError::UserExists(_) => "USER_EXISTS",
            ApiError::RatingNotFound(_) => "RATING_NOT_FOUND",
            ApiError::RatingExists(_) => "RATING_EXISTS",
            ApiError::Provider(_) => "PROVIDER_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Provider(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_400_not_404() {
        let err = ApiError::UserNotFound("a@x.com".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let err = ApiError::RatingNotFound("https://img/1".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn provider_failure_maps_to_502() {
        let err = ApiError::Provider(anyhow::anyhow!("connection refused"));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.code(), "PROVIDER_ERROR");
    }
}
