//! Input validation for item data.

use crate::error::{ItemqlError, Result};

/// Maximum allowed length for a locally generated item ID.
pub const MAX_ID_LENGTH: usize = 64;

/// Validates a required item field (`name` or `description`) on creation.
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ItemqlError::Validation(format!("Path `{}` is required.", field)));
    }
    Ok(())
}

/// Validates an item ID for the local backends.
///
/// IDs double as file names in the file store, so only ASCII
/// alphanumerics, `-` and `_` are accepted.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(ItemqlError::InvalidId("ID cannot be empty".to_string()));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(ItemqlError::InvalidId(format!(
            "ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }
    if let Some(c) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(ItemqlError::InvalidId(format!(
            "ID cannot contain '{}': {}",
            c, id
        )));
    }
    Ok(())
}
