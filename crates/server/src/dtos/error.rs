use serde::Serialize;
use utoipa::ToSchema;

/// Body of every non-2xx JSON response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Underlying store error, only present on 500 responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
