use serde::Deserialize;
use validator::Validate;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    authors::models::author::AUTHOR_SORTABLE_FIELDS,
};

#[derive(Debug, Deserialize, Validate)]
pub struct GetAuthorsFilterDto {
    #[validate(length(equal = 36, message = "id must be 36 characters."))]
    pub id: Option<String>,
    pub name: Option<String>,
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

impl GetAuthorsFilterDto {
    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql = "SELECT * FROM authors".to_string();
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
        if self.name.is_some() {
            index += 1;
            clauses.push(["name = $", &index.to_string()].concat());
        }
        if self.search.is_some() {
            index += 1;
            clauses.push(["name LIKE $", &index.to_string()].concat());
        }

        // SORT
        if let Some(sort) = &self.sort {
            let sort_params: Vec<&str> = sort.split(',').collect();

            if sort_params.len() != 2 {
                return Err(DefaultApiError::MalformedSortQuery.value());
            }
            if !AUTHOR_SORTABLE_FIELDS.contains(&sort_params[0]) {
                return Err(DefaultApiError::InvalidSortField.value());
            }

            sort_field = sort_params[0].to_string();
            sort_order = sort_params[1].to_uppercase();

            if sort_order != "ASC" && sort_order != "DESC" {
                return Err(DefaultApiError::MalformedSortQuery.value());
            }
        }

        // CLAUSES BUILDER
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
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
