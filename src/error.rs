/*
 * Responsibility
 * - HTTP 境界のエラー表現 (status / JSON error body)
 * - ApiKeyError → 401 への変換をここに集約 (middleware / extractor で共用)
 * - エラー種別の分岐は code 文字列ではなく ApiKeyError の equality で行う
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::ApiKeyError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("unauthorized: {0}")]
    Unauthorized(#[from] ApiKeyError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Unauthorized(e) => {
                let code = match e {
                    ApiKeyError::NoAuthHeader => "NO_AUTH_HEADER",
                    ApiKeyError::MalformedHeader => "MALFORMED_AUTH_HEADER",
                };
                (StatusCode::UNAUTHORIZED, code, e.to_string())
            }
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_map_to_unauthorized() {
        for e in [ApiKeyError::NoAuthHeader, ApiKeyError::MalformedHeader] {
            let response = ApiError::from(e).into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }
}
