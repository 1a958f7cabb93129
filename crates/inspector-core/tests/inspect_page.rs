//! End-to-end inspection of a recorded page snapshot.

use std::path::Path;

use inspector_config::ConfigLoader;
use inspector_core::{
    xpath_for, ElementResolver, PluginContext, PromptComposer, PromptRequest, SelectionSet,
    NO_SELECTION_NOTICE,
};
use inspector_dom_snapshot::Document;
use inspector_protocols::{ElementHandle, InspectorMessage, Point, TemplateKind};

fn load_page() -> Document {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../extensions/dom-snapshot/tests/fixtures/page.json");
    Document::load(&path).unwrap()
}

#[test]
fn test_resolve_fixture_points() {
    let doc = load_page();
    let resolver = ElementResolver::default();

    let button = resolver.resolve(&doc, Point::new(60.0, 350.0));
    assert_eq!(button.id(), "buy");
    assert_eq!(xpath_for(&button, false), "/html/body/main/section/button");

    let link = resolver.resolve(&doc, Point::new(20.0, 30.0));
    assert_eq!(link.tag_name(), "a");

    // the inspector's own overlay is transparent to resolution
    let under_overlay = resolver.resolve(&doc, Point::new(1020.0, 715.0));
    assert_eq!(under_overlay.tag_name(), "body");

    let under_chart = resolver.resolve(&doc, Point::new(950.0, 150.0));
    assert_eq!(under_chart.id(), "content");

    let outside = resolver.resolve(&doc, Point::new(-5.0, -5.0));
    assert_eq!(outside.tag_name(), "body");
}

#[test]
fn test_configured_exclusion() {
    let doc = load_page();
    let config = ConfigLoader::load_str(
        r#"
[resolver]
exclude_selector = "header"
"#,
    )
    .unwrap();
    let resolver = ElementResolver::from_config(&config.resolver).unwrap();

    let resolved = resolver.resolve(&doc, Point::new(20.0, 30.0));
    assert_eq!(resolved.tag_name(), "body");
}

#[tokio::test]
async fn test_compose_xml_prompt_for_selection() {
    let doc = load_page();
    let resolver = ElementResolver::default();

    let mut selection = SelectionSet::new();
    selection.insert(resolver.resolve(&doc, Point::new(60.0, 350.0)));
    selection.insert(resolver.resolve(&doc, Point::new(20.0, 30.0)));

    let plugins = vec![PluginContext::new("router").snippet("route", "/pricing")];
    let request = PromptRequest::new(selection.as_slice(), "Make the buy button larger")
        .with_url(doc.url().unwrap())
        .with_plugins(&plugins);
    let prompt = PromptComposer::default().compose(request).await;

    assert!(prompt.starts_with(
        "<request>\n  <user_goal>Make the buy button larger</user_goal>\n  <url>https://shop.example.test/pricing</url>\n  <selected_elements>\n    <element index=\"1\">\n  <tag>button</tag>\n"
    ));
    assert!(prompt.contains(
        "  <attributes>\n    <id>buy</id>\n    <type>button</type>\n    <data-sku>pro</data-sku>\n  </attributes>\n"
    ));
    assert!(prompt.contains("<element index=\"2\">\n  <tag>a</tag>\n"));
    assert!(prompt.contains("    <href>/</href>\n    <data-track>nav</data-track>\n"));
    assert!(prompt.contains("    <display>inline-block</display>\n"));
    assert!(prompt.ends_with(
        "  </selected_elements>\n  <plugin_contexts>\n    <router>\n      <route>/pricing</route>\n    </router>\n  </plugin_contexts>\n</request>"
    ));
}

#[tokio::test]
async fn test_compose_markdown_prompt_without_selection() {
    let doc = load_page();
    let selection: SelectionSet<_> = doc.elements().take(0).collect();

    let config = ConfigLoader::load_str("[prompt]\ntemplate = \"markdown\"\n").unwrap();
    let composer = PromptComposer::from_config(&config);
    assert_eq!(composer.template(), TemplateKind::Markdown);

    let prompt = composer
        .compose(PromptRequest::new(selection.as_slice(), "Why is it slow?"))
        .await;
    assert_eq!(
        prompt,
        format!("# Goal\nWhy is it slow?\n\n## Context\n{}", NO_SELECTION_NOTICE)
    );
}

#[test]
fn test_selection_message_round_trip() {
    let doc = load_page();
    let selection: SelectionSet<_> = ["buy", "top"]
        .into_iter()
        .filter_map(|id| doc.get_element_by_id(id))
        .collect();

    let json = selection.to_selected_message().to_json().unwrap();
    assert!(json.starts_with("{\"type\":\"ELEMENT_INSPECTOR_SELECTED\",\"payload\":{\"elements\":["));

    let parsed = InspectorMessage::from_json(&json).unwrap();
    let elements = parsed.elements();
    assert_eq!(elements[0].id, "buy");
    assert_eq!(elements[0].class_name, "btn primary");
    assert_eq!(elements[1].tag_name, "header");
    assert_eq!(elements[1].text_content.as_deref(), Some("Home"));
}
