//! Z-ordered stack of open overlays.
//!
//! # Invariants
//!
//! - Stack order is z-order: the last handle is the topmost overlay.
//! - Z-indices are strictly increasing along the stack.
//! - At most one handle per overlay.

use veildom::Document;

use crate::overlay::OverlayId;

/// Registry entry for a stacked overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayHandle {
    pub instance: OverlayId,
    pub z_index: i32,
    pub backdrop_requested: bool,
}

#[derive(Debug)]
pub struct OverlayRegistry {
    stack: Vec<OverlayHandle>,
    base_z_index: i32,
    z_index_step: i32,
}

impl OverlayRegistry {
    pub fn new(base_z_index: i32, z_index_step: i32) -> Self {
        Self {
            stack: Vec::new(),
            base_z_index,
            z_index_step,
        }
    }

    /// Put `instance` on top of the stack and apply its z-index to the
    /// container element. An instance that is already stacked is moved to the
    /// top, keeping its backdrop request.
    pub fn push(&mut self, doc: &mut Document, instance: &OverlayId) -> OverlayHandle {
        let backdrop_requested = self
            .pop(instance)
            .is_some_and(|handle| handle.backdrop_requested);

        let handle = OverlayHandle {
            instance: instance.clone(),
            z_index: self.highest_z_index() + self.z_index_step,
            backdrop_requested,
        };

        if let Err(err) = doc.set_z_index(instance.as_str(), handle.z_index) {
            log::debug!("[registry] cannot apply z-index to {}: {}", instance, err);
        }
        log::debug!("[registry] push {} z={}", instance, handle.z_index);

        self.stack.push(handle.clone());
        handle
    }

    /// Remove `instance` from the stack. Untracked instances return `None`.
    pub fn pop(&mut self, instance: &OverlayId) -> Option<OverlayHandle> {
        let index = self.index_of(instance)?;
        let handle = self.stack.remove(index);
        log::debug!("[registry] pop {} z={}", instance, handle.z_index);
        Some(handle)
    }

    pub fn top(&self) -> Option<&OverlayHandle> {
        self.stack.last()
    }

    /// Position in the stack, counted from the bottom.
    pub fn index_of(&self, instance: &OverlayId) -> Option<usize> {
        self.stack.iter().position(|h| &h.instance == instance)
    }

    pub fn get(&self, instance: &OverlayId) -> Option<&OverlayHandle> {
        self.stack.iter().find(|h| &h.instance == instance)
    }

    pub fn contains(&self, instance: &OverlayId) -> bool {
        self.get(instance).is_some()
    }

    /// Z-index of the topmost overlay, or the base value when empty.
    pub fn highest_z_index(&self) -> i32 {
        self.top().map_or(self.base_z_index, |h| h.z_index)
    }

    /// Mark whether `instance` wants the backdrop. Returns false if it is not stacked.
    pub fn set_backdrop_requested(&mut self, instance: &OverlayId, requested: bool) -> bool {
        match self.stack.iter_mut().find(|h| &h.instance == instance) {
            Some(handle) => {
                handle.backdrop_requested = requested;
                true
            }
            None => false,
        }
    }

    /// The topmost overlay that requested the backdrop. Non-modal overlays
    /// stacked above it do not move the backdrop.
    pub fn topmost_backdrop(&self) -> Option<&OverlayHandle> {
        self.stack.iter().rev().find(|h| h.backdrop_requested)
    }

    pub fn has_backdrop(&self) -> bool {
        self.topmost_backdrop().is_some()
    }

    /// Handles from bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &OverlayHandle> {
        self.stack.iter()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
