use serde::Deserialize;
use validator::ValidationError;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    authors::validators,
};

#[derive(Debug, Deserialize)]
pub struct EditAuthorDto {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

impl EditAuthorDto {
    /// Re-runs the field validators for every reassigned field.
    pub fn validate_fields(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validators::validate_name(name)?;
        }
        if let Some(phone_number) = &self.phone_number {
            validators::validate_phone_number(phone_number)?;
        }

        Ok(())
    }

    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql = "UPDATE authors SET ".to_string();
        let mut clauses = Vec::new();

        let mut index: u8 = 1;

        // SET CLAUSES
        if self.name.is_some() {
            clauses.push(["name = $", &index.to_string()].concat());
            index += 1;
        }
        if self.phone_number.is_some() {
            clauses.push(["phone_number = $", &index.to_string()].concat());
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
    use axum::http::StatusCode;

    use super::*;

    fn dto(name: Option<&str>, phone_number: Option<&str>) -> EditAuthorDto {
        EditAuthorDto {
            name: name.map(str::to_string),
            phone_number: phone_number.map(str::to_string),
        }
    }

    #[test]
    fn builds_update_for_present_fields_only() {
        let sql = dto(None, Some("1231144321")).to_sql().unwrap();
        assert_eq!(
            sql,
            "UPDATE authors SET phone_number = $1, updated_at = $2 WHERE id = $3 RETURNING *"
        );

        let sql = dto(Some("Ben"), Some("1231144321")).to_sql().unwrap();
        assert_eq!(
            sql,
            "UPDATE authors SET name = $1, phone_number = $2, updated_at = $3 WHERE id = $4 RETURNING *"
        );
    }

    #[test]
    fn empty_edit_is_rejected() {
        let e = dto(None, None).to_sql().unwrap_err();
        assert_eq!(e.code, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "Received nothing to edit.");
    }

    #[test]
    fn reassigned_fields_are_revalidated() {
        assert_eq!(
            dto(Some(""), None).validate_fields().unwrap_err().code,
            "name_required"
        );
        assert_eq!(
            dto(None, Some("123456789!")).validate_fields().unwrap_err().code,
            "phone_number_digits"
        );
        assert!(dto(Some("Ben"), Some("1231144321")).validate_fields().is_ok());
        assert!(dto(None, None).validate_fields().is_ok());
        assert!(dto(None, Some("")).validate_fields().is_ok());
    }
}
