use super::*;

#[test]
fn test_validate_default_config() {
    let result = ConfigValidator::validate(&Config::default());
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_zero_max_text_length() {
    let mut config = Config::default();
    config.serializer.max_text_length = 0;

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result
        .errors
        .iter()
        .any(|e| e.path == "serializer.max_text_length"));
}

#[test]
fn test_validate_high_max_text_length_warning() {
    let mut config = Config::default();
    config.serializer.max_text_length = 50_000;

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_validate_empty_overlay_class() {
    let mut config = Config::default();
    config.resolver.overlay_class = " ".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "resolver.overlay_class"));
}

#[test]
fn test_validate_non_data_overlay_attribute_warning() {
    let mut config = Config::default();
    config.resolver.overlay_attribute = "inspector".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result
        .warnings
        .iter()
        .any(|w| w.path == "resolver.overlay_attribute"));
}

#[test]
fn test_validate_empty_exclude_selector() {
    let mut config = Config::default();
    config.resolver.exclude_selector = Some(String::new());

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
}

#[test]
fn test_validate_page_url_without_scheme() {
    let mut config = Config::default();
    config.prompt.page_url = Some("example.test/page".to_string());

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "prompt.page_url"));
}

#[test]
fn test_validate_empty_log_level() {
    let mut config = Config::default();
    config.logging.level = String::new();

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "logging.level"));
}

#[test]
fn test_into_result_reports_first_error() {
    let mut config = Config::default();
    config.serializer.max_text_length = 0;
    config.logging.level = String::new();

    let err = ConfigValidator::validate(&config).into_result().unwrap_err();
    assert!(err.to_string().contains("serializer.max_text_length"));
}

#[test]
fn test_into_result_passes_warnings() {
    let mut config = Config::default();
    config.serializer.max_text_length = 20_000;

    let warnings = ConfigValidator::validate(&config).into_result().unwrap();
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_validation_result_default() {
    let result = ValidationResult::default();
    assert!(result.is_valid());
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}
