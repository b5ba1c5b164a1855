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
        create_post_dto::CreatePostDto, edit_post_dto::EditPostDto,
        get_posts_filter_dto::GetPostsFilterDto,
    },
    models::post::Post,
    service,
};

pub async fn create_post(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<CreatePostDto>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = service::create_post(&dto, &state.pool).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn get_posts(
    State(state): State<AppState>,
    QueryFromRequest(dto): QueryFromRequest<GetPostsFilterDto>,
) -> Result<Json<Vec<Post>>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match service::get_posts(&dto, &state.pool).await {
        Ok(posts) => Ok(Json(posts)),
        Err(e) => Err(e),
    }
}

pub async fn get_post_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    match service::get_post_by_id(&id, &state.pool).await {
        Ok(post) => Ok(Json(post)),
        Err(e) => Err(e),
    }
}

pub async fn edit_post_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonFromRequest(dto): JsonFromRequest<EditPostDto>,
) -> Result<Json<Post>, ApiError> {
    match service::edit_post_by_id(&id, &dto, &state.pool).await {
        Ok(post) => Ok(Json(post)),
        Err(e) => Err(e),
    }
}

pub async fn delete_post_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    service::delete_post_by_id(&id, &state.pool).await
}
