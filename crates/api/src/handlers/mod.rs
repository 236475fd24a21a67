pub mod auth;
pub mod embed;
pub mod models;
pub mod settings;
pub mod users;

use crate::error::AppError;

/// Require a present, non-empty string field. Returns the trimmed value.
pub(crate) fn require_str(
    value: Option<&str>,
    field: &'static str,
) -> Result<String, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::BadRequest(format!("{field} is required"))),
    }
}
