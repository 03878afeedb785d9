//! The document: an element tree rooted at `body`, plus the focused element.

use crate::element::{
    collect_ids, find_element, find_element_mut, find_parent, find_parent_mut, subtree_contains,
    Display, Element,
};
use crate::error::DomError;
use crate::event::Event;
use crate::focus::{collect_tab_order, is_focusable};
use crate::selector::Selector;

/// ID of the root element of every document.
pub const BODY_ID: &str = "body";

#[derive(Debug)]
pub struct Document {
    body: Element,
    focused: Option<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            body: Element::new("body").id(BODY_ID),
            focused: None,
        }
    }

    /// Create a document whose body holds `children`.
    pub fn with_children(children: impl IntoIterator<Item = Element>) -> Result<Self, DomError> {
        let mut doc = Self::new();
        for child in children {
            doc.append_child(BODY_ID, child)?;
        }
        Ok(doc)
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.body, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.body, id)
    }

    fn require_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        find_element_mut(&mut self.body, id).ok_or_else(|| DomError::NotFound(id.to_string()))
    }

    /// Whether an element with this ID is connected to the document.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Whether `id` is `ancestor` or lies inside it.
    pub fn element_contains(&self, ancestor: &str, id: &str) -> bool {
        self.get(ancestor)
            .is_some_and(|element| subtree_contains(element, id))
    }

    pub fn parent_of(&self, id: &str) -> Option<&Element> {
        find_parent(&self.body, id)
    }

    pub fn index_in_parent(&self, id: &str) -> Option<usize> {
        self.parent_of(id)?
            .children
            .iter()
            .position(|c| c.id == id)
    }

    // Tree mutation

    pub fn append_child(&mut self, parent: &str, child: Element) -> Result<(), DomError> {
        self.insert_child(parent, usize::MAX, child)
    }

    /// Insert `child` at `index` among `parent`'s children. Indices past the
    /// end append.
    pub fn insert_child(&mut self, parent: &str, index: usize, child: Element) -> Result<(), DomError> {
        self.check_ids(&child)?;
        let parent = self.require_mut(parent)?;
        let index = index.min(parent.children.len());
        log::trace!("[dom] insert {} into {} at {}", child.id, parent.id, index);
        parent.children.insert(index, child);
        Ok(())
    }

    pub fn insert_before(&mut self, reference: &str, child: Element) -> Result<(), DomError> {
        let not_found = || DomError::NotFound(reference.to_string());
        let parent = self.parent_of(reference).ok_or_else(not_found)?.id.clone();
        let index = self.index_in_parent(reference).ok_or_else(not_found)?;
        self.insert_child(&parent, index, child)
    }

    fn check_ids(&self, element: &Element) -> Result<(), DomError> {
        for id in collect_ids(element) {
            if self.contains(&id) {
                return Err(DomError::DuplicateId(id));
            }
        }
        Ok(())
    }

    /// Detach an element (and its subtree) from the document.
    /// If focus was inside the removed subtree it falls back to the body.
    pub fn remove(&mut self, id: &str) -> Result<Element, DomError> {
        if id == self.body.id {
            return Err(DomError::BodyImmutable);
        }

        let parent = find_parent_mut(&mut self.body, id)
            .ok_or_else(|| DomError::NotFound(id.to_string()))?;
        let index = parent
            .children
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| DomError::NotFound(id.to_string()))?;
        let removed = parent.children.remove(index);

        if let Some(focused) = &self.focused {
            if subtree_contains(&removed, focused) {
                log::debug!("[dom] focused element {} removed with {}", focused, id);
                self.focused = None;
            }
        }

        Ok(removed)
    }

    // Attributes and presentation

    pub fn attr(&self, id: &str, name: &str) -> Option<&str> {
        self.get(id)?.get_attr(name)
    }

    pub fn set_attr(&mut self, id: &str, name: &str, value: impl Into<String>) -> Result<(), DomError> {
        self.require_mut(id)?
            .attrs
            .insert(name.to_string(), value.into());
        Ok(())
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attr(&mut self, id: &str, name: &str) -> Result<Option<String>, DomError> {
        Ok(self.require_mut(id)?.attrs.remove(name))
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, id: &str, class: &str) -> Result<(), DomError> {
        let element = self.require_mut(id)?;
        if !element.has_class(class) {
            element.classes.push(class.to_string());
        }
        Ok(())
    }

    pub fn remove_class(&mut self, id: &str, class: &str) -> Result<(), DomError> {
        self.require_mut(id)?.classes.retain(|c| c != class);
        Ok(())
    }

    pub fn set_display(&mut self, id: &str, display: Display) -> Result<(), DomError> {
        self.require_mut(id)?.display = display;
        Ok(())
    }

    pub fn set_z_index(&mut self, id: &str, z_index: i32) -> Result<(), DomError> {
        self.require_mut(id)?.z_index = z_index;
        Ok(())
    }

    /// An element is rendered when it and all its ancestors are displayed.
    pub fn is_rendered(&self, id: &str) -> bool {
        path_rendered(&self.body, id).unwrap_or(false)
    }

    // Queries

    /// First element in the document matching `selector`.
    pub fn query(&self, selector: &str) -> Result<Option<&Element>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(selector.query(&self.body))
    }

    /// First descendant of `root` matching `selector`.
    pub fn query_within(&self, root: &str, selector: &str) -> Result<Option<&Element>, DomError> {
        let selector = Selector::parse(selector)?;
        let root = self
            .get(root)
            .ok_or_else(|| DomError::NotFound(root.to_string()))?;
        Ok(selector.query(root))
    }

    // Focus

    /// The focused element. `None` means focus is on the body.
    pub fn active_element(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element.
    /// Returns the resulting Blur/Focus events (empty if it was already focused).
    pub fn focus(&mut self, id: &str) -> Result<Vec<Event>, DomError> {
        let element = self
            .get(id)
            .ok_or_else(|| DomError::NotFound(id.to_string()))?;
        if !is_focusable(element) || !self.is_rendered(id) {
            return Err(DomError::NotFocusable(id.to_string()));
        }

        if self.focused.as_deref() == Some(id) {
            return Ok(Vec::new());
        }

        let mut events = Vec::new();
        if let Some(old) = self.focused.take() {
            events.push(Event::Blur {
                target: old,
                new_target: Some(id.to_string()),
            });
        }
        log::trace!("[focus] -> {}", id);
        self.focused = Some(id.to_string());
        events.push(Event::Focus {
            target: id.to_string(),
        });
        Ok(events)
    }

    /// Move focus back to the body.
    pub fn blur(&mut self) -> Vec<Event> {
        match self.focused.take() {
            Some(old) => vec![Event::Blur {
                target: old,
                new_target: None,
            }],
            None => Vec::new(),
        }
    }

    /// Default Tab behavior: focus the next tabbable element in tree order.
    pub fn focus_next(&mut self) -> Vec<Event> {
        self.focus_sequential(true)
    }

    /// Default Shift+Tab behavior.
    pub fn focus_prev(&mut self) -> Vec<Event> {
        self.focus_sequential(false)
    }

    fn focus_sequential(&mut self, forward: bool) -> Vec<Event> {
        let order = collect_tab_order(&self.body);
        let tabbable: Vec<usize> = order
            .iter()
            .enumerate()
            .filter(|(_, (_, tabbable))| *tabbable)
            .map(|(i, _)| i)
            .collect();
        let (Some(&first), Some(&last)) = (tabbable.first(), tabbable.last()) else {
            return Vec::new();
        };

        // Navigation is relative to the focused element's position in tree
        // order, so a focused element outside the tab order still works.
        let current = self
            .focused
            .as_ref()
            .and_then(|focused| order.iter().position(|(id, _)| id == focused));

        let next = match (current, forward) {
            (None, true) => first,
            (None, false) => last,
            (Some(pos), true) => tabbable.iter().copied().find(|&i| i > pos).unwrap_or(first),
            (Some(pos), false) => tabbable
                .iter()
                .rev()
                .copied()
                .find(|&i| i < pos)
                .unwrap_or(last),
        };

        let id = order[next].0.clone();
        self.focus(&id).unwrap_or_default()
    }
}

fn path_rendered(element: &Element, id: &str) -> Option<bool> {
    let displayed = element.display != Display::None;
    if element.id == id {
        return Some(displayed);
    }
    element
        .children
        .iter()
        .find_map(|child| path_rendered(child, id))
        .map(|child_rendered| child_rendered && displayed)
}
