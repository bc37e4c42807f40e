use crate::utils::error::{RosterError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Department and team names occupy a whole line of the record book on their own, so they
/// must be non-blank and free of commas and line breaks.
pub fn validate_name(value: &str) -> Result<()> {
    let reason = if value.trim().is_empty() {
        Some("name cannot be empty")
    } else if value.contains(',') {
        Some("name cannot contain a comma")
    } else if value.contains(['\n', '\r']) {
        Some("name cannot contain a line break")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(RosterError::InvalidName {
            value: value.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Player fields are quoted by the codec, so only line breaks and blank values are refused.
pub fn validate_player_field(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() || value.contains(['\n', '\r']) {
        return Err(RosterError::InputFormat {
            field: field_name.to_string(),
            expected: "a non-empty single line of text".to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}
