//! Remembers where focus was before an overlay opened.

use veildom::{Document, DomError, is_focusable};

/// Whether the manager itself is currently moving focus. Focus events seen
/// while a programmatic focus is pending are not redirected by traps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPhase {
    #[default]
    Idle,
    ProgrammaticFocusPending,
}

/// Focus owner captured when an overlay opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusSnapshot {
    /// `None` when the body had focus; nothing is restored in that case.
    pub element: Option<String>,
}

#[derive(Debug, Default)]
pub struct ReturnFocus {
    snapshot: Option<FocusSnapshot>,
    /// Element given `tabindex="-1"` so it could receive returned focus.
    temporary_tabindex: Option<String>,
}

impl ReturnFocus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&FocusSnapshot> {
        self.snapshot.as_ref()
    }

    /// Capture the active element, once per open cycle.
    /// Returns false if a snapshot already exists.
    pub fn capture(&mut self, doc: &Document) -> bool {
        if self.snapshot.is_some() {
            return false;
        }
        let element = doc.active_element().map(String::from);
        log::trace!("[return-focus] captured {:?}", element);
        self.snapshot = Some(FocusSnapshot { element });
        true
    }

    /// Return focus to `element` instead of the captured one. An element that
    /// cannot take focus gets a temporary `tabindex="-1"`.
    pub fn override_target(&mut self, doc: &mut Document, element: &str) -> Result<(), DomError> {
        let target = doc
            .get(element)
            .ok_or_else(|| DomError::NotFound(element.to_string()))?;
        let focusable = is_focusable(target);

        if self.temporary_tabindex.as_deref() != Some(element) {
            self.release_tabindex(doc);
        }
        if !focusable {
            doc.set_attr(element, "tabindex", "-1")?;
            self.temporary_tabindex = Some(element.to_string());
        }

        log::debug!("[return-focus] override -> {}", element);
        self.snapshot = Some(FocusSnapshot {
            element: Some(element.to_string()),
        });
        Ok(())
    }

    /// Consume the snapshot. Returns the element to focus, if any.
    pub fn take(&mut self) -> Option<String> {
        self.snapshot.take().and_then(|s| s.element)
    }

    pub fn temporary_tabindex(&self) -> Option<&str> {
        self.temporary_tabindex.as_deref()
    }

    /// Strip a temporary tabindex added by [`ReturnFocus::override_target`].
    pub fn release_tabindex(&mut self, doc: &mut Document) {
        let Some(id) = self.temporary_tabindex.take() else {
            return;
        };
        if doc.contains(&id) {
            log::trace!("[return-focus] releasing tabindex on {}", id);
            let _ = doc.remove_attr(&id, "tabindex");
        }
    }
}
