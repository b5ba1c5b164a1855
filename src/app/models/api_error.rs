use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use validator::ValidationError;

#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

// field validators always set a message, the code is the fallback
impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        let message = match e.message {
            Some(message) => message.to_string(),
            None => e.code.to_string(),
        };

        Self {
            code: StatusCode::BAD_REQUEST,
            message,
        }
    }
}
