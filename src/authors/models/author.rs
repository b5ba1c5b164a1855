use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::ValidationError;

use crate::{
    app::util::time,
    authors::{dtos::create_author_dto::CreateAuthorDto, validators},
};

pub static AUTHOR_SORTABLE_FIELDS: [&str; 2] = ["created_at", "updated_at"];

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

impl Author {
    /// Validates every field before building the record. Uniqueness of `name`
    /// is left to the `authors` table.
    pub fn new(dto: &CreateAuthorDto) -> Result<Self, ValidationError> {
        validators::validate_name(&dto.name)?;
        if let Some(phone_number) = &dto.phone_number {
            validators::validate_phone_number(phone_number)?;
        }

        return Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: dto.name.to_string(),
            phone_number: dto.phone_number.to_owned(),
            created_at: time::current_time_in_secs() as i64,
            updated_at: None,
        });
    }
}
