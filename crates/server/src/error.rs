use crate::dtos::error::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use models::error::FilterError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected query parameters, reported before the database is touched
    #[error(transparent)]
    InvalidQuery(#[from] FilterError),
    #[error("An error occurred while fetching lessons.")]
    Database(#[from] DbErr),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::InvalidQuery(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: err.to_string(),
                    details: None,
                },
            ),
            Self::Database(err) => {
                error!("Failed to fetch lessons: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: self.to_string(),
                        details: Some(err.to_string()),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
