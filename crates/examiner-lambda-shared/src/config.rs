//! Environment configuration accessors.

use thiserror::Error;

/// Raised when a required configuration item is absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("configuration item {key} was not provided with a value")]
    Missing { key: String },
}

/// Return the value when present and non-blank, or the supplied default.
pub fn default_if_not_present(value: Option<String>, default_value: &str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => default_value.to_string(),
    }
}

/// Return the value when present and non-blank, or fail naming the missing
/// configuration key.
pub fn require_value(value: Option<String>, config_key: &str) -> Result<String, ConfigError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing {
            key: config_key.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_present_values() {
        assert_eq!(
            default_if_not_present(Some("value".to_string()), "default"),
            "value"
        );
        assert_eq!(
            require_value(Some("value".to_string()), "MY_KEY").unwrap(),
            "value"
        );
    }

    #[test]
    fn defaults_when_absent_or_blank() {
        assert_eq!(default_if_not_present(None, "default"), "default");
        assert_eq!(
            default_if_not_present(Some("   ".to_string()), "default"),
            "default"
        );
        assert_eq!(default_if_not_present(Some(String::new()), "default"), "default");
    }

    #[test]
    fn required_value_error_names_the_key() {
        let err = require_value(None, "USERS_TABLE_NAME").unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration item USERS_TABLE_NAME was not provided with a value"
        );

        assert!(require_value(Some("  ".to_string()), "USERS_TABLE_NAME").is_err());
    }
}
