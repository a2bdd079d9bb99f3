//! Field validators used by `#[validate(custom(...))]` on DTOs.

use validator::ValidationError;

/// Accepts `#RRGGBB` hex colours.
pub fn validate_hex_colour(value: &str) -> Result<(), ValidationError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value.chars().skip(1).all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("hex_colour"))
    }
}

/// Accepts logins made of letters, digits and `_ . @ -`.
pub fn validate_login(value: &str) -> Result<(), ValidationError> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '@' | '-'));
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("login"))
    }
}
