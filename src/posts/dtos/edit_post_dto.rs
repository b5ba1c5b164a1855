use serde::Deserialize;
use validator::ValidationError;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    posts::validators,
};

#[derive(Debug, Deserialize)]
pub struct EditPostDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
}

impl EditPostDto {
    pub fn validate_fields(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            validators::validate_title(title)?;
        }
        if let Some(content) = &self.content {
            validators::validate_content(content)?;
        }
        if let Some(category) = &self.category {
            validators::validate_category(category)?;
        }
        if let Some(summary) = &self.summary {
            validators::validate_summary(summary)?;
        }

        Ok(())
    }

    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql = "UPDATE posts SET ".to_string();
        let mut clauses = Vec::new();

        let mut index: u8 = 1;

        // SET CLAUSES
        if self.title.is_some() {
            clauses.push(["title = $", &index.to_string()].concat());
            index += 1;
        }
        if self.content.is_some() {
            clauses.push(["content = $", &index.to_string()].concat());
            index += 1;
        }
        if self.summary.is_some() {
            clauses.push(["summary = $", &index.to_string()].concat());
            index += 1;
        }
        if self.category.is_some() {
            clauses.push(["category = $", &index.to_string()].concat());
            index += 1;
        }

        // CLAUSES BUILDER
        if clauses.is_empty() {
            return Err(DefaultApiError::NothingToEdit.value());
        }

        sql.push_str(&clauses.join(", "));

        sql.push_str(&[", updated_at = $", &index.to_string()].concat());
        index += 1;
        sql.push_str(&[" WHERE id = $", &index.to_string()].concat());
        sql.push_str(" RETURNING *");

        tracing::debug!(sql);

        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> EditPostDto {
        EditPostDto {
            title: None,
            content: None,
            summary: None,
            category: None,
        }
    }

    #[test]
    fn builds_update_for_present_fields_only() {
        let dto = EditPostDto {
            title: Some("Rust in production".to_string()),
            category: Some("Health".to_string()),
            ..empty()
        };

        assert_eq!(
            dto.to_sql().unwrap(),
            "UPDATE posts SET title = $1, category = $2, updated_at = $3 WHERE id = $4 RETURNING *"
        );
    }

    #[test]
    fn empty_edit_is_rejected() {
        assert_eq!(
            empty().to_sql().unwrap_err().message,
            "Received nothing to edit."
        );
    }

    #[test]
    fn reassigned_fields_are_revalidated() {
        let dto = EditPostDto {
            title: Some("How to write Rust".to_string()),
            ..empty()
        };
        assert_eq!(dto.validate_fields().unwrap_err().code, "title_clickbait");

        let dto = EditPostDto {
            content: Some("too short".to_string()),
            ..empty()
        };
        assert_eq!(dto.validate_fields().unwrap_err().code, "content_length");

        let dto = EditPostDto {
            summary: Some("T".repeat(251)),
            ..empty()
        };
        assert_eq!(dto.validate_fields().unwrap_err().code, "summary_length");

        let dto = EditPostDto {
            category: Some("Lifestyle".to_string()),
            ..empty()
        };
        assert!(dto.validate_fields().is_ok());

        let dto = EditPostDto {
            category: Some(String::new()),
            ..empty()
        };
        assert!(dto.validate_fields().is_ok());
    }
}
