use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum AuthorsApiError {
    AuthorNotFound,
    AuthorAlreadyExists,
}

impl AuthorsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::AuthorNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Author not found.".to_string(),
            },
            Self::AuthorAlreadyExists => ApiError {
                code: StatusCode::CONFLICT,
                message: "Author already exists.".to_string(),
            },
        }
    }
}

impl From<AuthorsApiError> for ApiError {
    fn from(e: AuthorsApiError) -> Self {
        e.value()
    }
}
