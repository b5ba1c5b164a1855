use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    NotFound,
    NothingToEdit,
    MalformedSortQuery,
    InvalidSortField,
    InternalServerError,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::NotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Not Found".to_string(),
            },
            Self::NothingToEdit => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Received nothing to edit.".to_string(),
            },
            Self::MalformedSortQuery => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Malformed sort query.".to_string(),
            },
            Self::InvalidSortField => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid sort field.".to_string(),
            },
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Internal Server Error".to_string(),
            },
        }
    }
}

impl From<DefaultApiError> for ApiError {
    fn from(e: DefaultApiError) -> Self {
        e.value()
    }
}
