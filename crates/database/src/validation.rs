//! Input validation for user and reflection fields.

use std::fmt;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty value where one is required.
    Empty(String),
    /// Value too short.
    TooShort { field: String, min: usize, actual: usize },
    /// Value too long.
    TooLong { field: String, max: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty(field) => write!(f, "{} is required", field),
            ValidationError::TooShort { field, min, .. } => {
                write!(f, "{} must be at least {} characters", field, min)
            }
            ValidationError::TooLong { field, max, actual } => {
                write!(f, "{} is too long ({} chars, max {})", field, actual, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Maximum allowed length for email addresses.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum allowed length for display names.
pub const MAX_NAME_LENGTH: usize = 100;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum allowed length for a reflection.
pub const MAX_CONTENT_LENGTH: usize = 20_000;

/// Maximum allowed length for a mood label.
pub const MAX_MOOD_LENGTH: usize = 64;

/// Validate an email address. Any non-empty string of bounded length is an
/// identity; uniqueness is enforced by storage.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::Empty("email".to_string()));
    }

    let chars = email.chars().count();
    if chars > MAX_EMAIL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LENGTH,
            actual: chars,
        });
    }

    Ok(())
}

/// Validate a password. Only the minimum length is checked; bcrypt hashes
/// the first 72 bytes of longer passwords.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Empty("password".to_string()));
    }

    let chars = password.chars().count();
    if chars < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LENGTH,
            actual: chars,
        });
    }

    Ok(())
}

/// Validate a display name.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Empty("name".to_string()));
    }

    let chars = name.chars().count();
    if chars > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
            actual: chars,
        });
    }

    Ok(())
}

/// Validate reflection content and its optional mood.
pub fn validate_reflection(content: &str, mood: Option<&str>) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::Empty("content".to_string()));
    }

    let chars = content.chars().count();
    if chars > MAX_CONTENT_LENGTH {
        return Err(ValidationError::TooLong {
            field: "content".to_string(),
            max: MAX_CONTENT_LENGTH,
            actual: chars,
        });
    }

    if let Some(mood) = mood {
        let chars = mood.chars().count();
        if chars > MAX_MOOD_LENGTH {
            return Err(ValidationError::TooLong {
                field: "mood".to_string(),
                max: MAX_MOOD_LENGTH,
                actual: chars,
            });
        }
    }

    Ok(())
}
