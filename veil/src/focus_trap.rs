//! Keeps sequential focus inside an overlay container.
//!
//! Three sentinel elements are placed inside the container: one before all
//! content (top) and two after it (intermediate, then bottom). Tabbing off
//! either end lands on a sentinel, which immediately sends focus back to the
//! other end of the content.

use veildom::focus::{SENTINEL_ATTR, is_natively_focusable};
use veildom::{Document, DomError, Element, tabbable_within};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentinelKind {
    Top,
    Intermediate,
    Bottom,
}

impl SentinelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SentinelKind::Top => "top",
            SentinelKind::Intermediate => "intermediate",
            SentinelKind::Bottom => "bottom",
        }
    }
}

#[derive(Debug)]
pub struct FocusTrap {
    container: String,
    top: String,
    intermediate: String,
    bottom: String,
    /// The container was given `tabindex="-1"` by the trap.
    added_tabindex: bool,
}

impl FocusTrap {
    /// Insert the sentinels into `container` and make the container itself
    /// programmatically focusable.
    pub fn enable(doc: &mut Document, container: &str) -> Result<Self, DomError> {
        let element = doc
            .get(container)
            .ok_or_else(|| DomError::NotFound(container.to_string()))?;
        let added_tabindex = !is_natively_focusable(element) && element.tab_index().is_none();

        let trap = Self {
            container: container.to_string(),
            top: format!("{container}-trap-top"),
            intermediate: format!("{container}-trap-intermediate"),
            bottom: format!("{container}-trap-bottom"),
            added_tabindex,
        };
        trap.insert_sentinels(doc)?;
        if added_tabindex {
            doc.set_attr(container, "tabindex", "-1")?;
        }

        log::debug!("[trap] enabled on {}", container);
        Ok(trap)
    }

    /// Remove the sentinels and any tabindex the trap added.
    pub fn disable(self, doc: &mut Document) {
        self.remove_sentinels(doc);
        if self.added_tabindex && doc.contains(&self.container) {
            let _ = doc.remove_attr(&self.container, "tabindex");
        }
        log::debug!("[trap] disabled on {}", self.container);
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn sentinel_id(&self, kind: SentinelKind) -> &str {
        match kind {
            SentinelKind::Top => &self.top,
            SentinelKind::Intermediate => &self.intermediate,
            SentinelKind::Bottom => &self.bottom,
        }
    }

    pub fn sentinel_kind(&self, id: &str) -> Option<SentinelKind> {
        [SentinelKind::Top, SentinelKind::Intermediate, SentinelKind::Bottom]
            .into_iter()
            .find(|&kind| self.sentinel_id(kind) == id)
    }

    /// Whether the sentinels are the first, second-to-last and last children
    /// of the container.
    pub fn is_ordered(&self, doc: &Document) -> bool {
        let Some(container) = doc.get(&self.container) else {
            return false;
        };
        match container.child_ids().as_slice() {
            [first, .., intermediate, last] => {
                *first == self.top && *intermediate == self.intermediate && *last == self.bottom
            }
            _ => false,
        }
    }

    /// Put the sentinels back in place if the container's content moved them.
    /// Returns true if they had to be re-inserted.
    pub fn revalidate(&self, doc: &mut Document) -> Result<bool, DomError> {
        if self.is_ordered(doc) {
            return Ok(false);
        }
        log::debug!("[trap] sentinels out of order in {}", self.container);
        self.remove_sentinels(doc);
        self.insert_sentinels(doc)?;
        Ok(true)
    }

    pub fn first_tabbable(&self, doc: &Document) -> Option<String> {
        tabbable_within(doc, &self.container).into_iter().next()
    }

    pub fn last_tabbable(&self, doc: &Document) -> Option<String> {
        tabbable_within(doc, &self.container).pop()
    }

    /// Where focus goes when the sentinel of `kind` receives it.
    /// Falls back to the container when it has no tabbable content.
    pub fn redirect_target(&self, doc: &Document, kind: SentinelKind) -> String {
        let target = match kind {
            SentinelKind::Intermediate => self.first_tabbable(doc),
            SentinelKind::Top | SentinelKind::Bottom => self.last_tabbable(doc),
        };
        target.unwrap_or_else(|| self.container.clone())
    }

    /// Where focus goes on Tab while the container itself is focused.
    pub fn tab_from_container(&self, doc: &Document) -> String {
        self.first_tabbable(doc)
            .unwrap_or_else(|| self.container.clone())
    }

    /// Where focus goes on Shift+Tab while the container itself is focused.
    pub fn shift_tab_from_container(&self, doc: &Document) -> String {
        self.last_tabbable(doc)
            .unwrap_or_else(|| self.container.clone())
    }

    fn insert_sentinels(&self, doc: &mut Document) -> Result<(), DomError> {
        doc.insert_child(&self.container, 0, sentinel(&self.top, SentinelKind::Top))?;
        doc.append_child(
            &self.container,
            sentinel(&self.intermediate, SentinelKind::Intermediate),
        )?;
        doc.append_child(&self.container, sentinel(&self.bottom, SentinelKind::Bottom))
    }

    fn remove_sentinels(&self, doc: &mut Document) {
        for id in [&self.top, &self.intermediate, &self.bottom] {
            if doc.contains(id) {
                let _ = doc.remove(id);
            }
        }
    }
}

fn sentinel(id: &str, kind: SentinelKind) -> Element {
    Element::div()
        .id(id)
        .class("veil-sentinel")
        .attr("tabindex", "0")
        .attr(SENTINEL_ATTR, kind.as_str())
}
