//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    /// `~/.element-inspector/config.toml`, or a relative path without a home directory.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".element-inspector"))
            .unwrap_or_else(|| PathBuf::from(".element-inspector"))
            .join("config.toml")
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        let mut result = content.to_string();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.config`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inspector_protocols::TemplateKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.serializer.max_text_length, 100);
        assert_eq!(config.prompt.template, TemplateKind::Xml);
    }

    #[test]
    fn test_load_full_config() {
        let content = r##"
            [resolver]
            exclude_selector = "#toolbar, .debug"
            overlay_class = "my-overlay"

            [serializer]
            max_text_length = 80
            escape_markup = true

            [prompt]
            template = "markdown"

            [logging]
            level = "debug"
        "##;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(
            config.resolver.exclude_selector.as_deref(),
            Some("#toolbar, .debug")
        );
        assert_eq!(config.resolver.overlay_class, "my-overlay");
        assert_eq!(config.serializer.max_text_length, 80);
        assert!(config.serializer.escape_markup);
        assert_eq!(config.prompt.template, TemplateKind::Markdown);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[serializer]").unwrap();
        writeln!(file, "max_text_length = 20").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.serializer.max_text_length, 20);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            ConfigLoader::load_or_default(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.serializer.max_text_length, 100);
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("invalid = [unclosed");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("INSPECTOR_TEST_PAGE_URL", "https://x.test");
        }
        let content = "[prompt]\npage_url = \"${INSPECTOR_TEST_PAGE_URL}\"";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.prompt.page_url.as_deref(), Some("https://x.test"));
        unsafe {
            std::env::remove_var("INSPECTOR_TEST_PAGE_URL");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_INSPECTOR_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_env_vars_no_vars() {
        let content = "value = \"no variables here\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }

    #[test]
    fn test_expand_path_no_tilde() {
        let path = "/usr/local/share";
        assert_eq!(ConfigLoader::expand_path(path), path);
    }

    #[test]
    fn test_default_path_file_name() {
        let path = ConfigLoader::default_path();
        assert!(path.ends_with(".element-inspector/config.toml"));
    }
}
