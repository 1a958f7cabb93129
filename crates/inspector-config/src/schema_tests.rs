use super::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(config.resolver.exclude_selector.is_none());
    assert_eq!(config.resolver.overlay_class, "element-selector");
    assert_eq!(config.resolver.overlay_attribute, "data-element-selector");
    assert_eq!(config.serializer.max_text_length, 100);
    assert!(!config.serializer.escape_markup);
    assert_eq!(config.prompt.template, TemplateKind::Xml);
    assert!(config.prompt.page_url.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file_dir.is_none());
}

#[test]
fn test_partial_section_keeps_defaults() {
    let config: Config = toml::from_str(
        r##"
        [resolver]
        exclude_selector = "#toolbar"
        "##,
    )
    .unwrap();
    assert_eq!(config.resolver.exclude_selector.as_deref(), Some("#toolbar"));
    assert_eq!(config.resolver.overlay_class, "element-selector");
}

#[test]
fn test_template_kind_lowercase() {
    let config: Config = toml::from_str(
        r#"
        [prompt]
        template = "markdown"
        page_url = "https://example.test/"
        "#,
    )
    .unwrap();
    assert_eq!(config.prompt.template, TemplateKind::Markdown);
    assert_eq!(config.prompt.page_url.as_deref(), Some("https://example.test/"));
}

#[test]
fn test_unknown_template_rejected() {
    let result: Result<Config, _> = toml::from_str(
        r#"
        [prompt]
        template = "html"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_logging_file_dir() {
    let config: Config = toml::from_str(
        r#"
        [logging]
        level = "debug"
        file_dir = "/var/log/inspector"
        "#,
    )
    .unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file_dir,
        Some(PathBuf::from("/var/log/inspector"))
    );
}

#[test]
fn test_config_serialize_roundtrip() {
    let mut config = Config::default();
    config.serializer.max_text_length = 40;
    config.prompt.template = TemplateKind::Markdown;

    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed.serializer.max_text_length, 40);
    assert_eq!(parsed.prompt.template, TemplateKind::Markdown);
}
