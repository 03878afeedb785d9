use veil::{OverlayId, OverlayRegistry};
use veildom::{Document, Element};

fn page() -> Document {
    Document::with_children([
        Element::div().id("o1"),
        Element::div().id("o2"),
        Element::div().id("o3"),
    ])
    .unwrap()
}

fn id(name: &str) -> OverlayId {
    OverlayId::from(name)
}

// =============================================================================
// Stacking Order
// =============================================================================

#[test]
fn test_push_assigns_increasing_z_indices() {
    let mut doc = page();
    let mut registry = OverlayRegistry::new(10_000, 10);

    assert_eq!(registry.push(&mut doc, &id("o1")).z_index, 10_010);
    assert_eq!(registry.push(&mut doc, &id("o2")).z_index, 10_020);
    assert_eq!(registry.push(&mut doc, &id("o3")).z_index, 10_030);

    assert_eq!(doc.get("o1").unwrap().z_index, 10_010);
    assert_eq!(doc.get("o3").unwrap().z_index, 10_030);
    assert_eq!(registry.top().unwrap().instance, id("o3"));
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_push_after_pop_stays_above_remaining() {
    let mut doc = page();
    let mut registry = OverlayRegistry::new(10_000, 10);
    registry.push(&mut doc, &id("o1"));
    registry.push(&mut doc, &id("o2"));
    registry.push(&mut doc, &id("o3"));

    let popped = registry.pop(&id("o2")).unwrap();
    assert_eq!(popped.z_index, 10_020);

    let order: Vec<&str> = registry.iter().map(|h| h.instance.as_str()).collect();
    assert_eq!(order, vec!["o1", "o3"]);

    assert_eq!(registry.push(&mut doc, &id("o2")).z_index, 10_040);
    let z: Vec<i32> = registry.iter().map(|h| h.z_index).collect();
    assert!(z.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_pop_untracked_returns_none() {
    let mut doc = page();
    let mut registry = OverlayRegistry::new(10_000, 10);
    registry.push(&mut doc, &id("o1"));

    assert!(registry.pop(&id("o2")).is_none());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_highest_z_index_defaults_to_base() {
    let mut doc = page();
    let mut registry = OverlayRegistry::new(500, 5);
    assert_eq!(registry.highest_z_index(), 500);
    assert!(registry.is_empty());

    registry.push(&mut doc, &id("o1"));
    assert_eq!(registry.highest_z_index(), 505);
}

#[test]
fn test_repush_moves_to_top_and_keeps_backdrop_request() {
    let mut doc = page();
    let mut registry = OverlayRegistry::new(10_000, 10);
    registry.push(&mut doc, &id("o1"));
    registry.push(&mut doc, &id("o2"));
    assert!(registry.set_backdrop_requested(&id("o1"), true));

    let handle = registry.push(&mut doc, &id("o1"));

    assert_eq!(handle.z_index, 10_030);
    assert!(handle.backdrop_requested);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.top().unwrap().instance, id("o1"));
}

// =============================================================================
// Backdrop Requests
// =============================================================================

#[test]
fn test_topmost_backdrop_skips_non_modal_overlays() {
    let mut doc = page();
    let mut registry = OverlayRegistry::new(10_000, 10);
    registry.push(&mut doc, &id("o1"));
    registry.push(&mut doc, &id("o2"));
    registry.push(&mut doc, &id("o3"));
    registry.set_backdrop_requested(&id("o1"), true);

    assert_eq!(registry.topmost_backdrop().unwrap().instance, id("o1"));

    registry.set_backdrop_requested(&id("o3"), true);
    assert_eq!(registry.topmost_backdrop().unwrap().instance, id("o3"));

    registry.pop(&id("o3"));
    assert_eq!(registry.topmost_backdrop().unwrap().instance, id("o1"));
}

#[test]
fn test_backdrop_request_on_unstacked_overlay_fails() {
    let mut registry = OverlayRegistry::new(10_000, 10);
    assert!(!registry.set_backdrop_requested(&id("o1"), true));
    assert!(!registry.has_backdrop());
}
