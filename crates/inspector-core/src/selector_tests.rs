use super::*;
use inspector_dom_snapshot::{Document, DocumentSnapshot, NodeSnapshot};

fn page() -> Document {
    Document::from_snapshot(DocumentSnapshot::new(
        NodeSnapshot::element("html").child(
            NodeSnapshot::element("body")
                .child(
                    NodeSnapshot::element("aside")
                        .attr("id", "toolbar")
                        .child(
                            NodeSnapshot::element("ul").child(
                                NodeSnapshot::element("li")
                                    .attr("class", "item active")
                                    .attr("data-role", "tab"),
                            ),
                        ),
                )
                .child(
                    NodeSnapshot::element("main").child(
                        NodeSnapshot::element("button")
                            .attr("id", "save")
                            .attr("class", "btn")
                            .attr("type", "submit"),
                    ),
                ),
        ),
    ))
    .unwrap()
}

#[test]
fn test_parse_rejects_empty() {
    assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
}

#[test]
fn test_parse_rejects_unsupported_syntax() {
    for bad in [
        "a:hover",
        "a,",
        ", a",
        "div >",
        "> div",
        "[data-x",
        "div]",
        "[class~=x]",
        "a+b",
        "#",
        ".",
    ] {
        let result = Selector::parse(bad);
        assert!(
            matches!(result, Err(SelectorError::Unsupported { .. })),
            "{bad:?} parsed as {result:?}"
        );
    }
}

#[test]
fn test_display_keeps_source() {
    let selector: Selector = "  #toolbar, .debug ".parse().unwrap();
    assert_eq!(selector.to_string(), "#toolbar, .debug");
    assert_eq!(selector.as_str(), "#toolbar, .debug");
}

#[test]
fn test_matches_tag_id_and_class() {
    let doc = page();
    let save = doc.get_element_by_id("save").unwrap();

    assert!(Selector::parse("button").unwrap().matches(&save));
    assert!(Selector::parse("BUTTON").unwrap().matches(&save));
    assert!(Selector::parse("#save").unwrap().matches(&save));
    assert!(Selector::parse("button#save.btn").unwrap().matches(&save));
    assert!(Selector::parse("*").unwrap().matches(&save));
    assert!(!Selector::parse(".btn.primary").unwrap().matches(&save));
    assert!(!Selector::parse("a").unwrap().matches(&save));
}

#[test]
fn test_matches_attributes() {
    let doc = page();
    let save = doc.get_element_by_id("save").unwrap();

    assert!(Selector::parse("[type]").unwrap().matches(&save));
    assert!(Selector::parse("[type=submit]").unwrap().matches(&save));
    assert!(Selector::parse("[type=\"submit\"]").unwrap().matches(&save));
    assert!(Selector::parse("[ type = 'submit' ]").unwrap().matches(&save));
    assert!(!Selector::parse("[type=reset]").unwrap().matches(&save));
    assert!(!Selector::parse("[disabled]").unwrap().matches(&save));
}

#[test]
fn test_quoted_value_may_contain_separators() {
    let selector = Selector::parse("[title=\"a, b > c\"]").unwrap();
    let doc = Document::from_snapshot(DocumentSnapshot::new(
        NodeSnapshot::element("p").attr("title", "a, b > c"),
    ))
    .unwrap();
    assert!(selector.matches(&doc.root()));
}

#[test]
fn test_combinators() {
    let doc = page();
    let li = doc
        .elements()
        .find(|el| el.tag_name() == "li")
        .unwrap();

    assert!(Selector::parse("aside li").unwrap().matches(&li));
    assert!(Selector::parse("#toolbar > ul > li").unwrap().matches(&li));
    assert!(Selector::parse("body aside>ul li.active").unwrap().matches(&li));
    assert!(!Selector::parse("aside > li").unwrap().matches(&li));
    assert!(!Selector::parse("main li").unwrap().matches(&li));
}

#[test]
fn test_descendant_backtracks_past_first_match() {
    let doc = Document::from_snapshot(DocumentSnapshot::new(
        NodeSnapshot::element("div").attr("class", "a").child(
            NodeSnapshot::element("div").child(
                NodeSnapshot::element("section")
                    .child(NodeSnapshot::element("div").child(NodeSnapshot::element("p"))),
            ),
        ),
    ))
    .unwrap();
    let p = doc
        .elements()
        .find(|el| el.tag_name() == "p")
        .unwrap();
    assert!(Selector::parse(".a section > div > p").unwrap().matches(&p));
    assert!(!Selector::parse(".a > section p").unwrap().matches(&p));
}

#[test]
fn test_groups_match_any() {
    let doc = page();
    let save = doc.get_element_by_id("save").unwrap();
    assert!(Selector::parse("#nope, main button").unwrap().matches(&save));
}

#[test]
fn test_matches_self_or_ancestor() {
    let doc = page();
    let li = doc
        .elements()
        .find(|el| el.tag_name() == "li")
        .unwrap();
    let toolbar = Selector::parse("#toolbar").unwrap();

    assert!(!toolbar.matches(&li));
    assert!(toolbar.matches_self_or_ancestor(&li));
    assert!(!toolbar.matches_self_or_ancestor(&doc.get_element_by_id("save").unwrap()));
}
