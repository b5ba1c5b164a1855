use sqlx::PgPool;

use crate::app::{
    errors::DefaultApiError,
    models::api_error::ApiError,
    util::{sqlx::contains_pattern, time},
};

use super::{
    dtos::{
        create_post_dto::CreatePostDto, edit_post_dto::EditPostDto,
        get_posts_filter_dto::GetPostsFilterDto,
    },
    errors::PostsApiError,
    models::post::Post,
};

pub async fn create_post(dto: &CreatePostDto, pool: &PgPool) -> Result<Post, ApiError> {
    let post = Post::new(dto)?;

    let sqlx_result = sqlx::query(
        "
        INSERT INTO posts (
            id, title, content, summary, category, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ",
    )
    .bind(&post.id)
    .bind(&post.title)
    .bind(&post.content)
    .bind(&post.summary)
    .bind(&post.category)
    .bind(post.created_at)
    .bind(post.updated_at)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => {
            tracing::info!(id = %post.id, "post created");
            Ok(post)
        }
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_posts(dto: &GetPostsFilterDto, pool: &PgPool) -> Result<Vec<Post>, ApiError> {
    let sql = dto.to_sql()?;

    let mut sqlx = sqlx::query_as::<_, Post>(&sql);

    if let Some(id) = &dto.id {
        sqlx = sqlx.bind(id);
    }
    if let Some(category) = &dto.category {
        sqlx = sqlx.bind(category);
    }
    if let Some(search) = &dto.search {
        sqlx = sqlx.bind(contains_pattern(search));
    }

    match sqlx.fetch_all(pool).await {
        Ok(posts) => Ok(posts),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_post_by_id(id: &str, pool: &PgPool) -> Result<Post, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Post>(
        "
        SELECT * FROM posts
        WHERE posts.id = $1
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(post) => match post {
            Some(post) => Ok(post),
            None => Err(PostsApiError::PostNotFound.into()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn edit_post_by_id(
    id: &str,
    dto: &EditPostDto,
    pool: &PgPool,
) -> Result<Post, ApiError> {
    dto.validate_fields()?;
    let sql = dto.to_sql()?;

    let mut sqlx = sqlx::query_as::<_, Post>(&sql);

    if let Some(title) = &dto.title {
        sqlx = sqlx.bind(title);
    }
    if let Some(content) = &dto.content {
        sqlx = sqlx.bind(content);
    }
    if let Some(summary) = &dto.summary {
        sqlx = sqlx.bind(summary);
    }
    if let Some(category) = &dto.category {
        sqlx = sqlx.bind(category);
    }
    sqlx = sqlx.bind(time::current_time_in_secs() as i64);
    sqlx = sqlx.bind(id);

    match sqlx.fetch_optional(pool).await {
        Ok(post) => match post {
            Some(post) => {
                tracing::info!(id, "post edited");
                Ok(post)
            }
            None => Err(PostsApiError::PostNotFound.into()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn delete_post_by_id(id: &str, pool: &PgPool) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        DELETE FROM posts
        WHERE id = $1
        ",
    )
    .bind(id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => {
                tracing::info!(id, "post deleted");
                Ok(())
            }
            false => Err(PostsApiError::PostNotFound.into()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
