use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatePostDto {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub category: Option<String>,
}
