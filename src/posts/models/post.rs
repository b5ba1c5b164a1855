use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::ValidationError;

use crate::{
    app::util::time,
    posts::{dtos::create_post_dto::CreatePostDto, validators},
};

pub static POST_SORTABLE_FIELDS: [&str; 2] = ["created_at", "updated_at"];

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

impl Post {
    pub fn new(dto: &CreatePostDto) -> Result<Self, ValidationError> {
        validators::validate_title(&dto.title)?;
        validators::validate_content(&dto.content)?;
        if let Some(category) = &dto.category {
            validators::validate_category(category)?;
        }
        if let Some(summary) = &dto.summary {
            validators::validate_summary(summary)?;
        }

        return Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: dto.title.to_string(),
            content: dto.content.to_string(),
            summary: dto.summary.to_owned(),
            category: dto.category.to_owned(),
            created_at: time::current_time_in_secs() as i64,
            updated_at: None,
        });
    }
}
