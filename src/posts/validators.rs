use std::borrow::Cow;

use validator::ValidationError;

use super::enums::post_category::PostCategory;

pub const MIN_CONTENT_LENGTH: usize = 250;
pub const MAX_SUMMARY_LENGTH: usize = 250;

// Matched as literal, case-sensitive substrings. "[number]" is not a wildcard.
pub static CLICKBAIT_PHRASES: [&str; 6] = [
    "You Won't Believe What Happens Next!",
    "Top [number] Reasons",
    "Why You Should",
    "The Secret to",
    "How to",
    "This One Simple Trick",
];

fn error(code: &'static str, message: String) -> ValidationError {
    let mut e = ValidationError::new(code);
    e.message = Some(Cow::from(message));
    e
}

pub fn is_clickbait(title: &str) -> bool {
    CLICKBAIT_PHRASES.iter().any(|phrase| title.contains(phrase))
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(error("title_required", "Post must have a title.".to_string()));
    }
    if is_clickbait(title) {
        return Err(error(
            "title_clickbait",
            "Title cannot be clickbait.".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    if content.chars().count() < MIN_CONTENT_LENGTH {
        return Err(error(
            "content_length",
            format!("Content must be at least {MIN_CONTENT_LENGTH} characters."),
        ));
    }

    Ok(())
}

pub fn validate_summary(summary: &str) -> Result<(), ValidationError> {
    if summary.chars().count() > MAX_SUMMARY_LENGTH {
        return Err(error(
            "summary_length",
            format!("Summary cannot exceed {MAX_SUMMARY_LENGTH} characters."),
        ));
    }

    Ok(())
}

/// An empty category counts as absent.
pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Ok(());
    }
    if PostCategory::from_value(category).is_none() {
        let valid_categories: Vec<&str> = PostCategory::all().iter().map(|c| c.value()).collect();

        return Err(error(
            "category_invalid",
            format!("Category must be one of: {}", valid_categories.join(", ")),
        ));
    }

    Ok(())
}
