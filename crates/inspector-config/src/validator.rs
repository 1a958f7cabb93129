//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error into a [`ConfigError::InvalidValue`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_resolver(config, &mut result);
        Self::validate_serializer(config, &mut result);
        Self::validate_prompt(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_resolver(config: &Config, result: &mut ValidationResult) {
        let resolver = &config.resolver;

        if resolver.overlay_class.trim().is_empty() {
            result.add_error(ValidationError::new(
                "resolver.overlay_class",
                "overlay_class cannot be empty",
            ));
        }

        if resolver.overlay_attribute.trim().is_empty() {
            result.add_error(ValidationError::new(
                "resolver.overlay_attribute",
                "overlay_attribute cannot be empty",
            ));
        } else if !resolver.overlay_attribute.starts_with("data-") {
            result.add_warning(ValidationWarning::new(
                "resolver.overlay_attribute",
                "overlay_attribute is not a data-* attribute and may collide with page markup",
            ));
        }

        if let Some(ref selector) = resolver.exclude_selector {
            if selector.trim().is_empty() {
                result.add_error(ValidationError::new(
                    "resolver.exclude_selector",
                    "exclude_selector is set but empty",
                ));
            }
        }
    }

    fn validate_serializer(config: &Config, result: &mut ValidationResult) {
        let max = config.serializer.max_text_length;

        if max == 0 {
            result.add_error(ValidationError::new(
                "serializer.max_text_length",
                "max_text_length must be greater than 0",
            ));
        }

        if max > 10_000 {
            result.add_warning(ValidationWarning::new(
                "serializer.max_text_length",
                "max_text_length is very high (>10000), prompts may become large",
            ));
        }
    }

    fn validate_prompt(config: &Config, result: &mut ValidationResult) {
        if let Some(ref url) = config.prompt.page_url {
            if !url.contains("://") {
                result.add_error(ValidationError::new(
                    "prompt.page_url",
                    format!("page_url '{}' has no scheme", url),
                ));
            }
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        if config.logging.level.trim().is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "level cannot be empty",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
