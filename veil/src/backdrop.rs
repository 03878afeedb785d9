//! The shared backdrop and the document-level tab-capture sentinels.
//!
//! There is one backdrop element per document. It is created on first use,
//! never removed, and always sits one z-index below the topmost overlay that
//! requested it. While it is shown, the other top-level elements of the body
//! are hidden from assistive technology.

use std::collections::BTreeMap;
use std::time::Duration;

use veildom::document::BODY_ID;
use veildom::focus::SENTINEL_ATTR;
use veildom::{Debounced, Display, Document, DomError, Element, Scheduler, TaskId, TransitionConfig};

use crate::config::OverlayConfig;
use crate::focus_trap::SentinelKind;
use crate::overlay::OverlayId;
use crate::registry::OverlayRegistry;
use crate::task::Task;

const VISIBLE_CLASS: &str = "visible";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackdropPhase {
    #[default]
    Hidden,
    /// Displayed, waiting for the next frame to start the opacity transition.
    FadingIn,
    Shown,
    /// Still displayed while the fade-out runs.
    FadingOut,
}

#[derive(Debug)]
pub struct BackdropController {
    element_id: String,
    z_index: i32,
    visible: bool,
    phase: BackdropPhase,
    phase_started: Duration,
    /// `aria-hidden` values of body children from before they were hidden.
    saved_aria: BTreeMap<String, Option<String>>,
    /// Pending fade-in frame or fade-out timer.
    pending: Debounced,
    fade: Duration,
    transition: TransitionConfig,
    tab_capture: TabCapture,
}

impl BackdropController {
    pub fn new(config: &OverlayConfig) -> Self {
        let (top, bottom) = &config.tab_capture_ids;
        Self {
            element_id: config.backdrop_id.clone(),
            z_index: config.base_z_index,
            visible: false,
            phase: BackdropPhase::Hidden,
            phase_started: Duration::ZERO,
            saved_aria: BTreeMap::new(),
            pending: Debounced::new(),
            fade: config.backdrop_fade,
            transition: config.backdrop_transition,
            tab_capture: TabCapture::new(top.clone(), bottom.clone()),
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    /// True from `show` until a fade-out has completed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn phase(&self) -> BackdropPhase {
        self.phase
    }

    /// The value saved for a body child before it was hidden.
    /// `Some(None)` means the attribute was absent.
    pub fn saved_aria_hidden(&self, id: &str) -> Option<Option<&str>> {
        self.saved_aria.get(id).map(|v| v.as_deref())
    }

    pub fn tab_capture(&self) -> &TabCapture {
        &self.tab_capture
    }

    pub(crate) fn tab_capture_mut(&mut self) -> &mut TabCapture {
        &mut self.tab_capture
    }

    /// Current backdrop opacity for renderers (0.0 to 1.0).
    pub fn opacity(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.phase_started);
        match self.phase {
            BackdropPhase::Hidden | BackdropPhase::FadingIn => 0.0,
            BackdropPhase::Shown => self.transition.progress(elapsed),
            BackdropPhase::FadingOut => 1.0 - self.transition.progress(elapsed),
        }
    }

    fn owns(&self, id: &str) -> bool {
        id == self.element_id || self.tab_capture.owns(id)
    }

    fn ensure_element(&self, doc: &mut Document) -> Result<(), DomError> {
        if doc.contains(&self.element_id) {
            return Ok(());
        }
        log::debug!("[backdrop] creating {}", self.element_id);
        doc.append_child(
            BODY_ID,
            Element::div()
                .id(self.element_id.clone())
                .class("veil-backdrop")
                .attr("aria-hidden", "true")
                .transition(self.transition)
                .hidden(),
        )
    }

    fn place(&mut self, doc: &mut Document, overlay_z_index: i32) {
        self.z_index = overlay_z_index - 1;
        log_dom(doc.set_z_index(&self.element_id, self.z_index));
    }

    /// Show the backdrop under the overlay at `z_index` and isolate that
    /// overlay for assistive technology. Cancels a running fade-out.
    pub(crate) fn show(
        &mut self,
        doc: &mut Document,
        scheduler: &mut Scheduler<Task>,
        z_index: i32,
        instance: &OverlayId,
    ) {
        if let Err(err) = self.ensure_element(doc) {
            log::warn!("[backdrop] cannot create backdrop element: {}", err);
            return;
        }

        self.place(doc, z_index);
        self.visible = true;
        log_dom(doc.set_display(&self.element_id, Display::Block));
        self.hide_everything_but(doc, instance);

        if matches!(self.phase, BackdropPhase::Hidden | BackdropPhase::FadingOut) {
            // The class toggle waits a frame so the opacity change animates
            // from the displayed-but-transparent state.
            self.phase = BackdropPhase::FadingIn;
            self.pending.schedule_frame(scheduler, Task::BackdropFadeIn);
        }
        log::debug!("[backdrop] show under {} z={}", instance, self.z_index);
    }

    /// Move the backdrop under the topmost overlay that requested it, or fade
    /// it out when none did.
    pub(crate) fn hide_or_reposition(
        &mut self,
        doc: &mut Document,
        scheduler: &mut Scheduler<Task>,
        registry: &OverlayRegistry,
    ) {
        let Some(handle) = registry.topmost_backdrop() else {
            self.fade_out(doc, scheduler);
            return;
        };

        if matches!(self.phase, BackdropPhase::Hidden | BackdropPhase::FadingOut) {
            self.show(doc, scheduler, handle.z_index, &handle.instance);
            return;
        }

        self.place(doc, handle.z_index);
        log_dom(doc.set_attr(handle.instance.as_str(), "aria-hidden", "false"));
        log::debug!("[backdrop] reposition under {} z={}", handle.instance, self.z_index);
    }

    fn fade_out(&mut self, doc: &mut Document, scheduler: &mut Scheduler<Task>) {
        if matches!(self.phase, BackdropPhase::Hidden | BackdropPhase::FadingOut) {
            return;
        }
        log::debug!("[backdrop] fade out");
        log_dom(doc.remove_class(&self.element_id, VISIBLE_CLASS));
        self.phase = BackdropPhase::FadingOut;
        self.phase_started = scheduler.now();
        self.pending.schedule(scheduler, self.fade, Task::BackdropFadeOut);
    }

    /// Mark a fade task as run. False if it was superseded.
    pub(crate) fn complete(&mut self, id: TaskId) -> bool {
        self.pending.complete(id)
    }

    pub(crate) fn finish_fade_in(&mut self, doc: &mut Document, now: Duration) {
        log_dom(doc.add_class(&self.element_id, VISIBLE_CLASS));
        self.phase = BackdropPhase::Shown;
        self.phase_started = now;
    }

    pub(crate) fn finish_fade_out(&mut self, doc: &mut Document) {
        log::debug!("[backdrop] hidden");
        self.visible = false;
        self.phase = BackdropPhase::Hidden;
        log_dom(doc.set_display(&self.element_id, Display::None));
        self.show_everything(doc);
    }

    /// Hide every body child except `instance` (and whatever contains it) from
    /// assistive technology, remembering each child's previous value the first
    /// time it is hidden.
    pub(crate) fn hide_everything_but(&mut self, doc: &mut Document, instance: &OverlayId) {
        let siblings: Vec<String> = doc.body().children.iter().map(|c| c.id.clone()).collect();

        for id in siblings {
            if id == instance.as_str()
                || self.owns(&id)
                || doc.element_contains(&id, instance.as_str())
            {
                continue;
            }
            let current = doc.attr(&id, "aria-hidden").map(String::from);
            self.saved_aria.entry(id.clone()).or_insert(current);
            log_dom(doc.set_attr(&id, "aria-hidden", "true"));
        }

        log_dom(doc.set_attr(instance.as_str(), "aria-hidden", "false"));
    }

    /// Restore the saved `aria-hidden` values ("false" where none existed).
    /// Saved values are kept: a later isolation does not re-read a sibling
    /// that already has one.
    pub(crate) fn show_everything(&mut self, doc: &mut Document) {
        for (id, saved) in &self.saved_aria {
            if !doc.contains(id) {
                continue;
            }
            let value = saved.as_deref().unwrap_or("false");
            log_dom(doc.set_attr(id, "aria-hidden", value));
        }
    }
}

/// Document-level sentinels at the very start and end of the body.
///
/// They exist while an open overlay is both modal and trapping focus, and
/// catch focus arriving from outside every overlay so it can be sent into
/// the topmost trapped one. Once created they are only hidden, never moved.
#[derive(Debug)]
pub struct TabCapture {
    top_id: String,
    bottom_id: String,
    active: bool,
}

impl TabCapture {
    pub fn new(top_id: impl Into<String>, bottom_id: impl Into<String>) -> Self {
        Self {
            top_id: top_id.into(),
            bottom_id: bottom_id.into(),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn top_id(&self) -> &str {
        &self.top_id
    }

    pub fn bottom_id(&self) -> &str {
        &self.bottom_id
    }

    pub fn owns(&self, id: &str) -> bool {
        id == self.top_id || id == self.bottom_id
    }

    /// Which edge of the document `id` guards, if it is one of these sentinels.
    pub fn edge_of(&self, id: &str) -> Option<SentinelKind> {
        if id == self.top_id {
            Some(SentinelKind::Top)
        } else if id == self.bottom_id {
            Some(SentinelKind::Bottom)
        } else {
            None
        }
    }

    pub(crate) fn sync(&mut self, doc: &mut Document, needed: bool) {
        if needed {
            if !doc.contains(&self.top_id) {
                log_dom(doc.insert_child(BODY_ID, 0, capture_sentinel(&self.top_id, "document-top")));
            }
            if !doc.contains(&self.bottom_id) {
                log_dom(doc.append_child(BODY_ID, capture_sentinel(&self.bottom_id, "document-bottom")));
            }
            if !self.active {
                log::debug!("[tab-capture] active");
                log_dom(doc.set_display(&self.top_id, Display::Block));
                log_dom(doc.set_display(&self.bottom_id, Display::Block));
                self.active = true;
            }
        } else if self.active {
            log::debug!("[tab-capture] inactive");
            log_dom(doc.set_display(&self.top_id, Display::None));
            log_dom(doc.set_display(&self.bottom_id, Display::None));
            self.active = false;
        }
    }
}

fn capture_sentinel(id: &str, edge: &str) -> Element {
    Element::div()
        .id(id)
        .class("veil-tab-capture")
        .attr("tabindex", "0")
        .attr(SENTINEL_ATTR, edge)
}

fn log_dom(result: Result<(), DomError>) {
    if let Err(err) = result {
        log::debug!("[backdrop] {}", err);
    }
}
