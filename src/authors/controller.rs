use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    app::{
        models::api_error::ApiError,
        structs::{json_from_request::JsonFromRequest, query_from_request::QueryFromRequest},
    },
    AppState,
};

use super::{
    dtos::{
        create_author_dto::CreateAuthorDto, edit_author_dto::EditAuthorDto,
        get_authors_filter_dto::GetAuthorsFilterDto,
    },
    models::author::Author,
    service,
};

pub async fn create_author(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<CreateAuthorDto>,
) -> Result<(StatusCode, Json<Author>), ApiError> {
    let author = service::create_author(&dto, &state.pool).await?;

    Ok((StatusCode::CREATED, Json(author)))
}

pub async fn get_authors(
    State(state): State<AppState>,
    QueryFromRequest(dto): QueryFromRequest<GetAuthorsFilterDto>,
) -> Result<Json<Vec<Author>>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match service::get_authors(&dto, &state.pool).await {
        Ok(authors) => Ok(Json(authors)),
        Err(e) => Err(e),
    }
}

pub async fn get_author_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Author>, ApiError> {
    match service::get_author_by_id(&id, &state.pool).await {
        Ok(author) => Ok(Json(author)),
        Err(e) => Err(e),
    }
}

pub async fn edit_author_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonFromRequest(dto): JsonFromRequest<EditAuthorDto>,
) -> Result<Json<Author>, ApiError> {
    match service::edit_author_by_id(&id, &dto, &state.pool).await {
        Ok(author) => Ok(Json(author)),
        Err(e) => Err(e),
    }
}

pub async fn delete_author_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    service::delete_author_by_id(&id, &state.pool).await
}
