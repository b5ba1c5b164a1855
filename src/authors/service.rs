use sqlx::PgPool;

use crate::app::{
    errors::DefaultApiError,
    models::api_error::ApiError,
    util::{
        sqlx::{contains_pattern, is_unique_violation},
        time,
    },
};

use super::{
    dtos::{
        create_author_dto::CreateAuthorDto, edit_author_dto::EditAuthorDto,
        get_authors_filter_dto::GetAuthorsFilterDto,
    },
    errors::AuthorsApiError,
    models::author::Author,
};

pub async fn create_author(dto: &CreateAuthorDto, pool: &PgPool) -> Result<Author, ApiError> {
    let author = Author::new(dto)?;

    let sqlx_result = sqlx::query(
        "
        INSERT INTO authors (
            id, name, phone_number, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5)
        ",
    )
    .bind(&author.id)
    .bind(&author.name)
    .bind(&author.phone_number)
    .bind(author.created_at)
    .bind(author.updated_at)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => {
            tracing::info!(id = %author.id, "author created");
            Ok(author)
        }
        Err(e) if is_unique_violation(&e) => Err(AuthorsApiError::AuthorAlreadyExists.into()),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_authors(
    dto: &GetAuthorsFilterDto,
    pool: &PgPool,
) -> Result<Vec<Author>, ApiError> {
    let sql = dto.to_sql()?;

    let mut sqlx = sqlx::query_as::<_, Author>(&sql);

    if let Some(id) = &dto.id {
        sqlx = sqlx.bind(id);
    }
    if let Some(name) = &dto.name {
        sqlx = sqlx.bind(name);
    }
    if let Some(search) = &dto.search {
        sqlx = sqlx.bind(contains_pattern(search));
    }

    match sqlx.fetch_all(pool).await {
        Ok(authors) => Ok(authors),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_author_by_id(id: &str, pool: &PgPool) -> Result<Author, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Author>(
        "
        SELECT * FROM authors WHERE id = $1
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(author) => match author {
            Some(author) => Ok(author),
            None => Err(AuthorsApiError::AuthorNotFound.into()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn edit_author_by_id(
    id: &str,
    dto: &EditAuthorDto,
    pool: &PgPool,
) -> Result<Author, ApiError> {
    dto.validate_fields()?;
    let sql = dto.to_sql()?;

    let mut sqlx = sqlx::query_as::<_, Author>(&sql);

    if let Some(name) = &dto.name {
        sqlx = sqlx.bind(name);
    }
    if let Some(phone_number) = &dto.phone_number {
        sqlx = sqlx.bind(phone_number);
    }
    sqlx = sqlx.bind(time::current_time_in_secs() as i64);
    sqlx = sqlx.bind(id);

    match sqlx.fetch_optional(pool).await {
        Ok(author) => match author {
            Some(author) => {
                tracing::info!(id, "author edited");
                Ok(author)
            }
            None => Err(AuthorsApiError::AuthorNotFound.into()),
        },
        Err(e) if is_unique_violation(&e) => Err(AuthorsApiError::AuthorAlreadyExists.into()),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn delete_author_by_id(id: &str, pool: &PgPool) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        DELETE FROM authors
        WHERE id = $1
        ",
    )
    .bind(id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => {
                tracing::info!(id, "author deleted");
                Ok(())
            }
            false => Err(AuthorsApiError::AuthorNotFound.into()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use axum::http::StatusCode;
    use sqlx::postgres::PgPoolOptions;

    use super::*;

    #[tokio::test]
    #[ignore = "needs a postgres instance at DATABASE_URL"]
    async fn duplicate_name_is_a_conflict() {
        let database_url = env::var("DATABASE_URL").unwrap();
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();
        sqlx::query("DELETE FROM authors").execute(&pool).await.unwrap();

        let first = CreateAuthorDto {
            name: "Ben".to_string(),
            phone_number: Some("1231144321".to_string()),
        };
        let created = create_author(&first, &pool).await.unwrap();

        let second = CreateAuthorDto {
            name: "Ben".to_string(),
            phone_number: Some("9876543210".to_string()),
        };
        let e = create_author(&second, &pool).await.unwrap_err();
        assert_eq!(e.code, StatusCode::CONFLICT);

        let fetched = get_author_by_id(&created.id, &pool).await.unwrap();
        assert_eq!(fetched.phone_number.as_deref(), Some("1231144321"));

        delete_author_by_id(&created.id, &pool).await.unwrap();
        let e = get_author_by_id(&created.id, &pool).await.unwrap_err();
        assert_eq!(e.code, StatusCode::NOT_FOUND);
    }
}
