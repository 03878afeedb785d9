use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::transitions::TransitionConfig;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Whether an element generates a box. `None` hides the element and its subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Markup
    pub attrs: BTreeMap<String, String>,
    pub classes: Vec<String>,
    pub children: Vec<Element>,
    pub text: Option<String>,

    // Visual
    pub display: Display,
    pub z_index: i32,
    /// Transition that runs when the element's classes change.
    /// `None` means state changes apply instantly.
    pub transition: Option<TransitionConfig>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            attrs: BTreeMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
            text: None,
            display: Display::Block,
            z_index: 0,
            transition: None,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            text: Some(label.into()),
            ..Self::new("button")
        }
    }

    pub fn input() -> Self {
        Self::new("input")
    }

    /// An anchor. Only anchors with an `href` are focusable.
    pub fn link(href: impl Into<String>) -> Self {
        Self::new("a").attr("href", href)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            ..Self::new("span")
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    // Visual
    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    /// Shorthand for `display(Display::None)`.
    pub fn hidden(self) -> Self {
        self.display(Display::None)
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = Some(transition);
        self
    }

    // Queries
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Parsed `tabindex` attribute, if present and numeric.
    pub fn tab_index(&self) -> Option<i32> {
        self.get_attr("tabindex")
            .and_then(|v| v.trim().parse::<i32>().ok())
    }

    pub fn child_ids(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.id.as_str()).collect()
    }
}
