use veildom::focus::{is_natively_focusable, SENTINEL_ATTR};
use veildom::{collect_tabbable, is_focusable, is_tabbable, tabbable_within, Document, Element};

// =============================================================================
// Focusability Rules
// =============================================================================

#[test]
fn test_native_focusability() {
    assert!(is_focusable(&Element::button("ok")));
    assert!(is_focusable(&Element::input()));
    assert!(is_focusable(&Element::link("/home")));
    assert!(!is_focusable(&Element::new("a")));
    assert!(!is_focusable(&Element::div()));
    assert!(!is_focusable(&Element::button("ok").attr("disabled", "")));
}

#[test]
fn test_tabindex_focusability() {
    let programmatic = Element::div().attr("tabindex", "-1");
    assert!(is_focusable(&programmatic));
    assert!(!is_tabbable(&programmatic));
    assert!(!is_natively_focusable(&programmatic));

    let stop = Element::div().attr("tabindex", "0");
    assert!(is_tabbable(&stop));

    let removed = Element::button("ok").attr("tabindex", "-1");
    assert!(is_focusable(&removed));
    assert!(!is_tabbable(&removed));
}

#[test]
fn test_collect_tabbable_tree_order_skips_hidden() {
    let root = Element::div()
        .id("root")
        .child(Element::button("a").id("a"))
        .child(
            Element::div()
                .hidden()
                .child(Element::button("hidden").id("hidden")),
        )
        .child(Element::div().id("s").attr("tabindex", "0").attr(SENTINEL_ATTR, "top"))
        .child(Element::input().id("b"));

    assert_eq!(collect_tabbable(&root), vec!["a", "s", "b"]);
}

#[test]
fn test_tabbable_within_excludes_sentinels_and_container() {
    let doc = Document::with_children([Element::div()
        .id("dialog")
        .attr("tabindex", "-1")
        .child(Element::div().id("top").attr("tabindex", "0").attr(SENTINEL_ATTR, "top"))
        .child(Element::button("a").id("a"))
        .child(Element::button("b").id("b"))
        .child(Element::div().id("bottom").attr("tabindex", "0").attr(SENTINEL_ATTR, "bottom"))])
    .unwrap();

    assert_eq!(tabbable_within(&doc, "dialog"), vec!["a", "b"]);
}

#[test]
fn test_tabbable_within_hidden_container_is_empty() {
    let doc = Document::with_children([Element::div()
        .id("dialog")
        .hidden()
        .child(Element::button("a").id("a"))])
    .unwrap();

    assert!(tabbable_within(&doc, "dialog").is_empty());
    assert!(tabbable_within(&doc, "missing").is_empty());
}

// =============================================================================
// Sequential Navigation
// =============================================================================

fn nav_doc() -> Document {
    Document::with_children([
        Element::button("one").id("one"),
        Element::div()
            .id("box")
            .attr("tabindex", "-1")
            .child(Element::button("two").id("two")),
        Element::button("three").id("three"),
    ])
    .unwrap()
}

#[test]
fn test_focus_next_wraps() {
    let mut doc = nav_doc();
    doc.focus_next();
    assert_eq!(doc.active_element(), Some("one"));
    doc.focus_next();
    assert_eq!(doc.active_element(), Some("two"));
    doc.focus_next();
    assert_eq!(doc.active_element(), Some("three"));
    doc.focus_next();
    assert_eq!(doc.active_element(), Some("one"));
}

#[test]
fn test_focus_prev_wraps() {
    let mut doc = nav_doc();
    doc.focus_prev();
    assert_eq!(doc.active_element(), Some("three"));
    doc.focus("one").unwrap();
    doc.focus_prev();
    assert_eq!(doc.active_element(), Some("three"));
}

#[test]
fn test_navigation_from_programmatic_focus() {
    let mut doc = nav_doc();
    // "box" has tabindex=-1: focusable, but not part of the tab order
    doc.focus("box").unwrap();
    doc.focus_next();
    assert_eq!(doc.active_element(), Some("two"));

    doc.focus("box").unwrap();
    doc.focus_prev();
    assert_eq!(doc.active_element(), Some("one"));
}

#[test]
fn test_navigation_without_tabbables() {
    let mut doc = Document::with_children([Element::div()]).unwrap();
    assert!(doc.focus_next().is_empty());
    assert_eq!(doc.active_element(), None);
}
