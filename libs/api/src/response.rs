use axum::{http::StatusCode, response::IntoResponse};
use repository::RepositoryError;
use tracing::error;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            // callers get a bare 500, nothing about the cause
            ApiError::ServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, message: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for Result<T, RepositoryError> {
    fn into_response(self, message: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!("{}: {:?}", message, e);
            ApiError::ServerError(message.to_string())
        })
    }
}
