use crate::models::ErrorResponse;
use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;

/// Errors surfaced by API handlers
///
/// Every variant renders the same fixed `{ "error": ... }` payload; the
/// detail only goes to the server log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::server_error())
    }
}

impl From<crate::services::CacheError> for ApiError {
    fn from(err: crate::services::CacheError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    ApiError::InvalidQuery(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidQuery("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Internal("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_internal_error_body_hides_detail() {
        let resp = ApiError::Internal("key must be a string at line 3".into()).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let text = std::str::from_utf8(&body).unwrap();
        assert!(!text.contains("key must be a string"));

        let payload: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload, ErrorResponse::server_error());
        assert_eq!(payload.error, crate::models::SERVER_ERROR_MESSAGE);
    }
}
