//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid config format: {0}")]
    InvalidFormat(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ConfigError::NotFound("inspector.toml".to_string());
        assert!(err.to_string().contains("inspector.toml"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_invalid_value_error() {
        let err = ConfigError::InvalidValue {
            field: "serializer.max_text_length".to_string(),
            message: "must be greater than 0".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("serializer.max_text_length"));
        assert!(display.contains("must be greater than 0"));
    }

    #[test]
    fn test_env_var_not_set_error() {
        let err = ConfigError::EnvVarNotSet("PAGE_URL".to_string());
        assert!(err.to_string().contains("PAGE_URL"));
        assert!(err.to_string().contains("not set"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::from(io_err);
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_all_error_variants_display() {
        let errors: Vec<ConfigError> = vec![
            ConfigError::NotFound("path".to_string()),
            ConfigError::InvalidFormat("format".to_string()),
            ConfigError::InvalidValue {
                field: "f".to_string(),
                message: "m".to_string(),
            },
            ConfigError::EnvVarNotSet("VAR".to_string()),
        ];

        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
