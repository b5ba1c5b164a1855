use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAuthorDto {
    pub name: String,
    pub phone_number: Option<String>,
}
