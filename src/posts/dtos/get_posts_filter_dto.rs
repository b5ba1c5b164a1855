use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    posts::{models::post::POST_SORTABLE_FIELDS, validators},
};

#[derive(Debug, Deserialize, Validate)]
pub struct GetPostsFilterDto {
    #[validate(length(equal = 36, message = "id must be 36 characters."))]
    pub id: Option<String>,
    #[validate(custom(function = "validate_category_filter"))]
    pub category: Option<String>,
    #[validate(length(
        min = 1,
        max = 512,
        message = "search must be between 1 and 512 characters."
    ))]
    pub search: Option<String>,
    pub sort: Option<String>,
    #[validate(range(min = 1, max = 100, message = "limit must equal or less than 100."))]
    pub limit: Option<u8>,
}

fn validate_category_filter(value: &str) -> Result<(), ValidationError> {
    validators::validate_category(value)
}

impl GetPostsFilterDto {
    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql = "SELECT * FROM posts".to_string();
        let mut clauses = Vec::new();

        let mut sort_field = "created_at".to_string();
        let mut sort_order = "DESC".to_string();
        let mut page_limit: u8 = 50;

        let mut index: u8 = 0;

        // WHERE CLAUSES
        if self.id.is_some() {
            index += 1;
            clauses.push(["id = $", &index.to_string()].concat());
        }
        if self.category.is_some() {
            index += 1;
            clauses.push(["category = $", &index.to_string()].concat());
        }
        if self.search.is_some() {
            index += 1;
            clauses.push(["title LIKE $", &index.to_string()].concat());
        }

        // SORT
        if let Some(sort) = &self.sort {
            let sort_params: Vec<&str> = sort.split(',').collect();

            if sort_params.len() != 2 {
                return Err(DefaultApiError::MalformedSortQuery.value());
            }
            if !POST_SORTABLE_FIELDS.contains(&sort_params[0]) {
                return Err(DefaultApiError::InvalidSortField.value());
            }

            sort_field = sort_params[0].to_string();
            sort_order = match sort_params[1].to_uppercase().as_str() {
                "ASC" => "ASC".to_string(),
                "DESC" => "DESC".to_string(),
                _ => return Err(DefaultApiError::MalformedSortQuery.value()),
            };
        }

        // CLAUSES BUILDER
        let mut has_inserted_where = false;

        for clause in clauses {
            if !has_inserted_where {
                sql.push_str(" WHERE ");
                has_inserted_where = true;
            } else {
                sql.push_str(" AND ");
            }

            sql.push_str(&clause);
        }

        // ORDER BY
        sql.push_str(&[" ORDER BY ", &sort_field, " ", &sort_order, ", id ", &sort_order].concat());

        // LIMIT
        if let Some(limit) = self.limit {
            page_limit = limit;
        }

        sql.push_str(&[" LIMIT ", &page_limit.to_string()].concat());

        tracing::debug!(sql);

        Ok(sql)
    }
}
