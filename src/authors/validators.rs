use std::borrow::Cow;

use validator::ValidationError;

pub const PHONE_NUMBER_LENGTH: usize = 10;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut e = ValidationError::new(code);
    e.message = Some(Cow::from(message));
    e
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(error("name_required", "Author must have a name."));
    }

    Ok(())
}

/// An empty phone number counts as absent. Length and digit checks are
/// separate so each failure is reported on its own.
pub fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    if phone_number.is_empty() {
        return Ok(());
    }
    if phone_number.chars().count() != PHONE_NUMBER_LENGTH {
        return Err(error(
            "phone_number_length",
            "Phone number must be exactly 10 digits.",
        ));
    }
    if !phone_number.chars().all(|c| c.is_ascii_digit()) {
        return Err(error(
            "phone_number_digits",
            "Phone number must contain only digits.",
        ));
    }

    Ok(())
}
