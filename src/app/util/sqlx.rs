use sqlx::error::DatabaseError;

#[non_exhaustive]
pub struct SqlStateCodes;

impl SqlStateCodes {
    pub const UNIQUE_VIOLATION: &str = "23505";
}

pub fn get_code_from_db_err(db_err: &dyn DatabaseError) -> Option<String> {
    db_err.code().map(|code| code.into_owned())
}

/// True when the storage layer rejected a write because of a unique constraint.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error()
    else {
        return false;
    };

    get_code_from_db_err(db_err).as_deref() == Some(SqlStateCodes::UNIQUE_VIOLATION)
}

/// Escapes `LIKE` wildcards so the value matches literally under postgres'
/// default `\` escape character.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

/// `%value%` with the value's own wildcards escaped.
pub fn contains_pattern(value: &str) -> String {
    ["%", &escape_like(value), "%"].concat()
}
