//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates that a color is a strict 6-digit hex string, with or without a leading `#`.
///
/// # Examples
///
/// ```ignore
/// validate_hex_color("#3b82f6") // Ok
/// validate_hex_color("3B82F6")  // Ok
/// validate_hex_color("#fff")    // Err - shorthand is not accepted
/// ```
pub fn validate_hex_color(hex: &str) -> Result<(), ValidationError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        let mut err = ValidationError::new("hex_color_length");
        err.message =
            Some(format!("Color must have exactly 6 hex digits (got {})", digits.len()).into());
        return Err(err);
    }

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        let mut err = ValidationError::new("hex_color_format");
        err.message = Some("Color must contain only hexadecimal characters".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_hex_color_valid() {
        assert!(validate_hex_color("#3b82f6").is_ok());
        assert!(validate_hex_color("3B82F6").is_ok());
        assert!(validate_hex_color("#000000").is_ok());
    }

    #[test]
    fn test_validate_hex_color_invalid_length() {
        assert!(validate_hex_color("#fff").is_err()); // shorthand
        assert!(validate_hex_color("#3b82f6ff").is_err()); // alpha
        assert!(validate_hex_color("").is_err()); // empty
        assert!(validate_hex_color("#").is_err());
    }

    #[test]
    fn test_validate_hex_color_invalid_format() {
        assert!(validate_hex_color("#3b82g6").is_err()); // invalid hex
        assert!(validate_hex_color("#3b 2f6").is_err()); // space
        assert!(validate_hex_color("##3b82f").is_err()); // double prefix
    }
}
