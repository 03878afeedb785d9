//! Focusability rules and tab-order discovery.

use crate::document::Document;
use crate::element::{Display, Element};

/// Attribute marking focus-redirect sentinels. Sentinels take part in the
/// document tab order but are never reported as tabbable content.
pub const SENTINEL_ATTR: &str = "data-sentinel";

const FORM_CONTROLS: &[&str] = &["button", "input", "select", "textarea"];

/// Whether the element can receive focus at all (programmatically or by Tab).
pub fn is_focusable(element: &Element) -> bool {
    let tag = element.tag.as_str();
    let form_control = FORM_CONTROLS.contains(&tag);

    if form_control && element.has_attr("disabled") {
        return false;
    }
    if element.tab_index().is_some() {
        return true;
    }

    form_control || (tag == "a" && element.has_attr("href"))
}

/// Whether the element is natively focusable, ignoring any `tabindex`.
pub fn is_natively_focusable(element: &Element) -> bool {
    let tag = element.tag.as_str();
    (FORM_CONTROLS.contains(&tag) && !element.has_attr("disabled"))
        || (tag == "a" && element.has_attr("href"))
}

/// Whether the element participates in sequential (Tab) navigation.
pub fn is_tabbable(element: &Element) -> bool {
    is_focusable(element) && element.tab_index().is_none_or(|i| i >= 0)
}

pub fn is_sentinel(element: &Element) -> bool {
    element.has_attr(SENTINEL_ATTR)
}

/// Collect all tabbable element IDs in tree order, skipping hidden subtrees.
/// Sentinels are included: this is the order the document walks on Tab.
pub fn collect_tabbable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_tabbable_recursive(root, false, &mut result);
    result
}

fn collect_tabbable_recursive(element: &Element, skip_sentinels: bool, result: &mut Vec<String>) {
    if element.display == Display::None {
        return;
    }
    if is_tabbable(element) && !(skip_sentinels && is_sentinel(element)) {
        result.push(element.id.clone());
    }
    for child in &element.children {
        collect_tabbable_recursive(child, skip_sentinels, result);
    }
}

/// Rendered elements in tree order, flagged with whether each is tabbable.
/// Lets navigation start from a focused element that is not itself tabbable.
pub(crate) fn collect_tab_order(root: &Element) -> Vec<(String, bool)> {
    let mut result = Vec::new();
    collect_tab_order_recursive(root, &mut result);
    result
}

fn collect_tab_order_recursive(element: &Element, result: &mut Vec<(String, bool)>) {
    if element.display == Display::None {
        return;
    }
    result.push((element.id.clone(), is_tabbable(element)));
    for child in &element.children {
        collect_tab_order_recursive(child, result);
    }
}

/// Tabbable, rendered descendants of `container` in tree order, excluding
/// sentinels and the container itself. Empty if the container is hidden.
pub fn tabbable_within(doc: &Document, container: &str) -> Vec<String> {
    if !doc.is_rendered(container) {
        return Vec::new();
    }
    let Some(element) = doc.get(container) else {
        return Vec::new();
    };

    let mut result = Vec::new();
    for child in &element.children {
        collect_tabbable_recursive(child, true, &mut result);
    }
    result
}
