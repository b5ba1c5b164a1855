pub mod create_author_dto;
pub mod edit_author_dto;
pub mod get_authors_filter_dto;
