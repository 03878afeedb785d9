use veildom::{DomError, Element, Selector};

fn tree() -> Element {
    Element::div()
        .id("root")
        .child(
            Element::div()
                .id("header")
                .class("bar")
                .child(Element::button("Close").id("close").class("icon")),
        )
        .child(Element::input().id("query").attr("type", "search"))
        .child(Element::button("Go").id("go").attr("autofocus", ""))
}

fn ids(elements: Vec<&Element>) -> Vec<&str> {
    elements.into_iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn test_tag_selector() {
    let root = tree();
    let sel = Selector::parse("button").unwrap();
    assert_eq!(ids(sel.query_all(&root)), vec!["close", "go"]);
    assert_eq!(sel.query(&root).map(|e| e.id.as_str()), Some("close"));
}

#[test]
fn test_id_and_class_selectors() {
    let root = tree();
    assert_eq!(
        Selector::parse("#query").unwrap().query(&root).map(|e| e.id.as_str()),
        Some("query")
    );
    assert_eq!(ids(Selector::parse(".bar").unwrap().query_all(&root)), vec!["header"]);
    assert_eq!(ids(Selector::parse("button.icon").unwrap().query_all(&root)), vec!["close"]);
}

#[test]
fn test_attribute_selectors() {
    let root = tree();
    assert_eq!(ids(Selector::parse("[autofocus]").unwrap().query_all(&root)), vec!["go"]);
    assert_eq!(
        ids(Selector::parse("input[type=search]").unwrap().query_all(&root)),
        vec!["query"]
    );
    assert_eq!(
        ids(Selector::parse("[type='search']").unwrap().query_all(&root)),
        vec!["query"]
    );
    assert!(Selector::parse("[type=text]").unwrap().query(&root).is_none());
}

#[test]
fn test_selector_list_and_universal() {
    let root = tree();
    assert_eq!(ids(Selector::parse("#go, #query").unwrap().query_all(&root)), vec!["query", "go"]);
    assert_eq!(Selector::parse("*").unwrap().query_all(&root).len(), 4);
}

#[test]
fn test_query_excludes_root() {
    let root = tree();
    assert!(Selector::parse("#root").unwrap().query(&root).is_none());
}

#[test]
fn test_invalid_selectors() {
    for input in ["", "div >", "a b", "[unterminated", "#", "div,", "[x='open]", "div!"] {
        assert!(
            matches!(Selector::parse(input), Err(DomError::InvalidSelector { .. })),
            "{input:?} should be rejected"
        );
    }
}
