use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flipdns_domain::DomainError;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::RecordNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),

            DomainError::InvalidDomainName(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::LookupTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, self.0.to_string()),

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
