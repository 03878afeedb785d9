use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use veil::prelude::*;
use veil::{FocusTrap, SentinelKind};

fn page() -> Document {
    Document::with_children([
        Element::div()
            .id("main")
            .child(Element::button("Open").id("trigger")),
        Element::div()
            .id("dialog")
            .child(Element::button("A").id("a"))
            .child(Element::text("body copy"))
            .child(Element::button("B").id("b")),
    ])
    .unwrap()
}

fn open(manager: &mut OverlayManager, doc: &mut Document, id: &OverlayId) {
    assert!(manager.set_open(doc, id, true).unwrap());
    manager.advance(doc, Duration::from_millis(100));
}

fn setup() -> (OverlayManager, Document, OverlayId) {
    let mut doc = page();
    let mut manager = OverlayManager::default();
    let dialog = OverlayId::from("dialog");
    manager
        .register(&mut doc, dialog.clone(), OverlayOptions::new())
        .unwrap();
    open(&mut manager, &mut doc, &dialog);
    (manager, doc, dialog)
}

fn tab(manager: &mut OverlayManager, doc: &mut Document) -> bool {
    manager.dispatch_key(doc, Key::Tab, Modifiers::new())
}

fn shift_tab(manager: &mut OverlayManager, doc: &mut Document) -> bool {
    manager.dispatch_key(doc, Key::Tab, Modifiers::shift())
}

// =============================================================================
// Sentinel Placement
// =============================================================================

#[test]
fn test_enable_inserts_sentinels_around_content() {
    let mut doc = page();
    let trap = FocusTrap::enable(&mut doc, "dialog").unwrap();

    let ids = doc.get("dialog").unwrap().child_ids();
    assert_eq!(ids.first(), Some(&"dialog-trap-top"));
    assert_eq!(ids[ids.len() - 2], "dialog-trap-intermediate");
    assert_eq!(ids.last(), Some(&"dialog-trap-bottom"));
    assert!(trap.is_ordered(&doc));
    assert_eq!(doc.attr("dialog", "tabindex"), Some("-1"));
    assert_eq!(
        trap.sentinel_kind("dialog-trap-intermediate"),
        Some(SentinelKind::Intermediate)
    );
    assert_eq!(trap.sentinel_kind("a"), None);
}

#[test]
fn test_disable_removes_sentinels_and_added_tabindex() {
    let mut doc = page();
    let trap = FocusTrap::enable(&mut doc, "dialog").unwrap();

    trap.disable(&mut doc);

    assert!(!doc.contains("dialog-trap-top"));
    assert!(!doc.contains("dialog-trap-intermediate"));
    assert!(!doc.contains("dialog-trap-bottom"));
    assert_eq!(doc.attr("dialog", "tabindex"), None);
}

#[test]
fn test_enable_keeps_existing_tabindex() {
    let mut doc = page();
    doc.set_attr("dialog", "tabindex", "0").unwrap();

    let trap = FocusTrap::enable(&mut doc, "dialog").unwrap();
    trap.disable(&mut doc);

    assert_eq!(doc.attr("dialog", "tabindex"), Some("0"));
}

#[test]
fn test_revalidate_after_content_appended() {
    let mut doc = page();
    let trap = FocusTrap::enable(&mut doc, "dialog").unwrap();

    doc.append_child("dialog", Element::button("C").id("c")).unwrap();
    assert!(!trap.is_ordered(&doc));

    assert!(trap.revalidate(&mut doc).unwrap());
    assert!(trap.is_ordered(&doc));
    assert_eq!(trap.last_tabbable(&doc), Some("c".to_string()));
    assert!(!trap.revalidate(&mut doc).unwrap());
}

#[test]
fn test_enable_on_missing_container_fails() {
    let mut doc = page();
    assert!(FocusTrap::enable(&mut doc, "nope").is_err());
}

// =============================================================================
// Redirect Targets
// =============================================================================

#[test]
fn test_redirect_targets() {
    let mut doc = page();
    let trap = FocusTrap::enable(&mut doc, "dialog").unwrap();

    assert_eq!(trap.redirect_target(&doc, SentinelKind::Intermediate), "a");
    assert_eq!(trap.redirect_target(&doc, SentinelKind::Bottom), "b");
    assert_eq!(trap.redirect_target(&doc, SentinelKind::Top), "b");
    assert_eq!(trap.tab_from_container(&doc), "a");
    assert_eq!(trap.shift_tab_from_container(&doc), "b");
}

#[test]
fn test_redirect_without_tabbables_targets_container() {
    let mut doc =
        Document::with_children([Element::div().id("empty").child(Element::text("nothing"))])
            .unwrap();
    let trap = FocusTrap::enable(&mut doc, "empty").unwrap();

    assert_eq!(trap.first_tabbable(&doc), None);
    assert_eq!(trap.redirect_target(&doc, SentinelKind::Bottom), "empty");
    assert_eq!(trap.tab_from_container(&doc), "empty");
}

// =============================================================================
// Tab Cycling
// =============================================================================

#[test]
fn test_tab_cycles_within_open_overlay() {
    let (mut manager, mut doc, _) = setup();
    assert_eq!(doc.active_element(), Some("dialog"));

    // Tab on the container itself goes to the first element.
    assert!(tab(&mut manager, &mut doc));
    assert_eq!(doc.active_element(), Some("a"));

    assert!(!tab(&mut manager, &mut doc));
    assert_eq!(doc.active_element(), Some("b"));

    // Off the end: lands on the intermediate sentinel, sent back to the start.
    tab(&mut manager, &mut doc);
    assert_eq!(doc.active_element(), Some("a"));

    // Off the start: lands on the top sentinel, sent to the end.
    shift_tab(&mut manager, &mut doc);
    assert_eq!(doc.active_element(), Some("b"));
}

#[test]
fn test_shift_tab_from_container_stays_inside() {
    let (mut manager, mut doc, _) = setup();
    assert_eq!(doc.active_element(), Some("dialog"));

    assert!(shift_tab(&mut manager, &mut doc));
    assert_eq!(doc.active_element(), Some("b"));

    manager.focus(&mut doc, "dialog").unwrap();
    assert!(manager.dispatch_key(&mut doc, Key::BackTab, Modifiers::new()));
    assert_eq!(doc.active_element(), Some("b"));
}

#[test]
fn test_shift_tab_from_modal_container_stays_inside() {
    let mut doc = page();
    let mut manager = OverlayManager::default();
    let dialog = OverlayId::from("dialog");
    manager
        .register(&mut doc, dialog.clone(), OverlayOptions::new())
        .unwrap();
    manager.show_backdrop(&mut doc, &dialog).unwrap();
    open(&mut manager, &mut doc, &dialog);
    assert_eq!(doc.active_element(), Some("dialog"));

    assert!(shift_tab(&mut manager, &mut doc));
    let active = doc.active_element().unwrap().to_string();
    assert!(doc.element_contains("dialog", &active));
    assert_eq!(active, "b");
}

#[test]
fn test_sentinel_focus_redirects() {
    let (mut manager, mut doc, _) = setup();

    manager.focus(&mut doc, "dialog-trap-intermediate").unwrap();
    assert_eq!(doc.active_element(), Some("a"));

    manager.focus(&mut doc, "dialog-trap-bottom").unwrap();
    assert_eq!(doc.active_element(), Some("b"));

    manager.focus(&mut doc, "dialog-trap-top").unwrap();
    assert_eq!(doc.active_element(), Some("b"));
}

#[test]
fn test_trap_with_no_tabbables_keeps_container_focused() {
    let mut doc = Document::with_children([Element::div()
        .id("notice")
        .child(Element::text("Saved"))])
    .unwrap();
    let mut manager = OverlayManager::default();
    let notice = OverlayId::from("notice");
    manager
        .register(&mut doc, notice.clone(), OverlayOptions::new())
        .unwrap();
    open(&mut manager, &mut doc, &notice);
    assert_eq!(doc.active_element(), Some("notice"));

    assert!(tab(&mut manager, &mut doc));
    assert_eq!(doc.active_element(), Some("notice"));
    assert!(shift_tab(&mut manager, &mut doc));
    assert_eq!(doc.active_element(), Some("notice"));

    manager.focus(&mut doc, "notice-trap-bottom").unwrap();
    assert_eq!(doc.active_element(), Some("notice"));
}

#[test]
fn test_closed_trap_does_not_redirect() {
    let (mut manager, mut doc, dialog) = setup();
    manager.set_open(&mut doc, &dialog, false).unwrap();
    manager.advance(&mut doc, Duration::from_millis(100));

    manager.focus(&mut doc, "trigger").unwrap();
    assert!(!tab(&mut manager, &mut doc));
    assert_eq!(doc.active_element(), Some("trigger"));
}

#[test]
fn test_content_change_restores_sentinels() {
    let (mut manager, mut doc, dialog) = setup();

    doc.append_child("dialog", Element::button("C").id("c")).unwrap();
    assert!(manager.on_content_changed(&mut doc, &dialog).unwrap());

    manager.focus(&mut doc, "dialog-trap-bottom").unwrap();
    assert_eq!(doc.active_element(), Some("c"));
}

struct Switchable {
    trap: Rc<Cell<bool>>,
}

impl Overlay for Switchable {
    fn trap_focus(&self) -> Toggle {
        Toggle::from(self.trap.get())
    }
}

#[test]
fn test_options_changed_toggles_trap() {
    let mut doc = page();
    let mut manager = OverlayManager::default();
    let dialog = OverlayId::from("dialog");
    let trap = Rc::new(Cell::new(true));
    manager
        .register(&mut doc, dialog.clone(), Switchable { trap: trap.clone() })
        .unwrap();
    assert!(doc.contains("dialog-trap-top"));

    trap.set(false);
    manager.options_changed(&mut doc, &dialog).unwrap();
    assert!(!doc.contains("dialog-trap-top"));
    assert!(manager.focus_trap(&dialog).is_none());
    assert_eq!(doc.attr("dialog", "trap-focus"), Some("off"));
    assert_eq!(doc.attr("dialog", "tabindex"), None);

    trap.set(true);
    manager.options_changed(&mut doc, &dialog).unwrap();
    assert!(manager.focus_trap(&dialog).unwrap().is_ordered(&doc));
}

// =============================================================================
// Document Tab Capture
// =============================================================================

#[test]
fn test_document_capture_enters_topmost_trap() {
    let mut doc = page();
    let mut manager = OverlayManager::default();
    let dialog = OverlayId::from("dialog");
    manager
        .register(&mut doc, dialog.clone(), OverlayOptions::new())
        .unwrap();
    manager.show_backdrop(&mut doc, &dialog).unwrap();
    open(&mut manager, &mut doc, &dialog);

    let capture = manager.backdrop().tab_capture();
    assert!(capture.is_active());
    let body = doc.body().child_ids();
    assert_eq!(body.first(), Some(&"veil-tab-capture-top"));
    assert_eq!(body.last(), Some(&"veil-tab-capture-bottom"));

    // Focus escaped to the page behind the backdrop.
    manager.focus(&mut doc, "trigger").unwrap();
    shift_tab(&mut manager, &mut doc);
    assert_eq!(doc.active_element(), Some("a"));

    manager.focus(&mut doc, "veil-tab-capture-bottom").unwrap();
    assert_eq!(doc.active_element(), Some("b"));
}

#[test]
fn test_document_capture_requires_trap_and_backdrop() {
    let mut doc = page();
    let mut manager = OverlayManager::default();
    let dialog = OverlayId::from("dialog");
    manager
        .register(
            &mut doc,
            dialog.clone(),
            OverlayOptions::new().trap_focus(Toggle::Off),
        )
        .unwrap();
    manager.show_backdrop(&mut doc, &dialog).unwrap();
    open(&mut manager, &mut doc, &dialog);

    assert!(!manager.backdrop().tab_capture().is_active());
    assert!(!doc.contains("veil-tab-capture-top"));
}

#[test]
fn test_document_capture_hidden_after_close() {
    let mut doc = page();
    let mut manager = OverlayManager::default();
    let dialog = OverlayId::from("dialog");
    manager
        .register(&mut doc, dialog.clone(), OverlayOptions::new())
        .unwrap();
    manager.show_backdrop(&mut doc, &dialog).unwrap();
    open(&mut manager, &mut doc, &dialog);

    manager.set_open(&mut doc, &dialog, false).unwrap();

    assert!(!manager.backdrop().tab_capture().is_active());
    assert!(doc.contains("veil-tab-capture-top"));
    assert!(!doc.is_rendered("veil-tab-capture-top"));
}
