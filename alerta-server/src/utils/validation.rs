//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits match what the mobile client enforces so the two layers
//! never disagree on what a valid submission looks like.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Alert descriptions
pub const MAX_DESCRIPTION_LEN: usize = 250;

/// Comment bodies
pub const MAX_COMMENT_LEN: usize = 500;

/// Display names
pub const MAX_DISPLAY_NAME_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
///
/// Limits count characters, not bytes: accented text ("descripción")
/// must not burn through the limit twice as fast.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        let len = v.chars().count();
        if len > max_len {
            return Err(AppError::validation(format!(
                "{field} is too long ({len} chars, max {max_len})"
            )));
        }
    }
    Ok(())
}

/// Validate a latitude/longitude pair.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), AppError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(AppError::validation(format!(
            "latitude out of range: {latitude}"
        )));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(AppError::validation(format!(
            "longitude out of range: {longitude}"
        )));
    }
    Ok(())
}

/// Validate an email address (light-weight structural check).
pub fn validate_email(email: &str) -> Result<(), AppError> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    let Some((local, domain)) = email.split_once('@') else {
        return Err(AppError::validation("email must contain '@'"));
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(AppError::validation("email is malformed"));
    }
    Ok(())
}

/// Validate a password before hashing.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password is too long (max {MAX_PASSWORD_LEN})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_empty_and_overlong() {
        assert!(validate_required_text("  ", "description", MAX_DESCRIPTION_LEN).is_err());
        let long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(validate_required_text(&long, "description", MAX_DESCRIPTION_LEN).is_err());
        assert!(validate_required_text("pothole on 5th", "description", MAX_DESCRIPTION_LEN).is_ok());
    }

    #[test]
    fn length_limits_count_characters_not_bytes() {
        // "ñ" is two bytes in UTF-8; 250 of them must still fit a 250-char limit
        let accented = "ñ".repeat(MAX_DESCRIPTION_LEN);
        assert!(validate_required_text(&accented, "description", MAX_DESCRIPTION_LEN).is_ok());
        let over = "ñ".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(validate_required_text(&over, "description", MAX_DESCRIPTION_LEN).is_err());

        let comment = Some("á".repeat(MAX_COMMENT_LEN));
        assert!(validate_optional_text(&comment, "text", MAX_COMMENT_LEN).is_ok());
    }

    #[test]
    fn coordinates_are_range_checked() {
        assert!(validate_coordinates(-18.01, -70.25).is_ok());
        assert!(validate_coordinates(91.0, 0.0).is_err());
        assert!(validate_coordinates(0.0, -181.0).is_err());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn email_structural_check() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ana@nodot").is_err());
    }

    #[test]
    fn password_length_bounds() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
        assert!(validate_password(&"x".repeat(MAX_PASSWORD_LEN + 1)).is_err());
    }
}
