//! Validation logic for the city setup form.
//!
//! Extracted from the setup component to enable easier testing. The
//! session store itself accepts any string; rejecting empty names is a
//! UI-boundary decision only.

/// Validation errors that can occur during setup form validation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// Field is required but empty
    Required,
}

/// Validates a community name.
///
/// # Validation rules
/// - Name must not be empty after trimming surrounding whitespace
pub fn validate_city_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_city_name_valid() {
        assert!(validate_city_name("Springfield").is_ok());
        assert!(validate_city_name("Downtown District").is_ok());
        assert!(validate_city_name("  Elm City  ").is_ok());
        assert!(validate_city_name("X").is_ok()); // Single character is fine
    }

    #[test]
    fn test_validate_city_name_invalid() {
        assert_eq!(validate_city_name(""), Err(ValidationError::Required));
        assert_eq!(validate_city_name("   "), Err(ValidationError::Required));
        assert_eq!(validate_city_name("\t\n"), Err(ValidationError::Required));
    }
}
