mod node;

pub use node::{Display, Element};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &root.children {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &mut root.children {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find the parent of the element with the given ID.
pub fn find_parent<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.children.iter().any(|c| c.id == id) {
        return Some(root);
    }

    root.children.iter().find_map(|child| find_parent(child, id))
}

pub(crate) fn find_parent_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.children.iter().any(|c| c.id == id) {
        return Some(root);
    }

    for child in &mut root.children {
        if let Some(found) = find_parent_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// Returns whether `id` is `root` itself or one of its descendants.
pub fn subtree_contains(root: &Element, id: &str) -> bool {
    find_element(root, id).is_some()
}

/// Collect every ID in the subtree, in tree order.
pub fn collect_ids(root: &Element) -> Vec<String> {
    let mut ids = Vec::new();
    collect_ids_recursive(root, &mut ids);
    ids
}

fn collect_ids_recursive(element: &Element, ids: &mut Vec<String>) {
    ids.push(element.id.clone());
    for child in &element.children {
        collect_ids_recursive(child, ids);
    }
}
