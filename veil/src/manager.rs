//! The overlay service.
//!
//! Every overlay is registered with an [`OverlayManager`], which owns the
//! shared z-order registry, the backdrop and each overlay's lifecycle. The
//! host drives it with three kinds of calls:
//!
//! - property changes ([`OverlayManager::set_open`], backdrop requests,
//!   option changes, attach/detach notifications),
//! - input ([`OverlayManager::dispatch_key`], [`OverlayManager::focus`] and
//!   [`OverlayManager::handle_events`] for focus changes made elsewhere),
//! - time ([`OverlayManager::advance`]), which runs deferred work such as
//!   frame callbacks, transition ends and debounced notifications.
//!
//! Notifications are collected and drained with
//! [`OverlayManager::take_events`].

use std::collections::HashMap;
use std::time::Duration;

use veildom::event::is_backward_tab;
use veildom::transitions::duration_of;
use veildom::{Display, Document, DomError, Event, Key, Modifiers, Scheduler, TaskId, is_focusable};

use crate::backdrop::BackdropController;
use crate::config::OverlayConfig;
use crate::error::OverlayError;
use crate::focus_trap::{FocusTrap, SentinelKind};
use crate::lifecycle::{Lifecycle, LifecycleState};
use crate::overlay::{FocusOnShow, Gate, Overlay, OverlayEvent, OverlayId};
use crate::registry::OverlayRegistry;
use crate::return_focus::{FocusPhase, FocusSnapshot, ReturnFocus};
use crate::task::Task;

/// Class added one frame after opening; styles key their transition on it.
const OPEN_CLASS: &str = "open";

struct Instance {
    widget: Box<dyn Overlay>,
    lifecycle: Lifecycle,
    trap: Option<FocusTrap>,
    return_focus: ReturnFocus,
    /// Survives closing and detaching, so the backdrop comes back whenever
    /// the overlay is stacked again.
    wants_backdrop: bool,
}

pub struct OverlayManager {
    config: OverlayConfig,
    scheduler: Scheduler<Task>,
    registry: OverlayRegistry,
    backdrop: BackdropController,
    instances: HashMap<OverlayId, Instance>,
    focus_phase: FocusPhase,
    events: Vec<OverlayEvent>,
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}

impl OverlayManager {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            scheduler: Scheduler::new(config.frame_interval),
            registry: OverlayRegistry::new(config.base_z_index, config.z_index_step),
            backdrop: BackdropController::new(&config),
            instances: HashMap::new(),
            focus_phase: FocusPhase::Idle,
            events: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn registry(&self) -> &OverlayRegistry {
        &self.registry
    }

    pub fn backdrop(&self) -> &BackdropController {
        &self.backdrop
    }

    /// Virtual time since the manager was created.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn focus_phase(&self) -> FocusPhase {
        self.focus_phase
    }

    pub fn state(&self, id: &OverlayId) -> Option<LifecycleState> {
        self.instances.get(id).map(|i| i.lifecycle.state())
    }

    pub fn is_open(&self, id: &OverlayId) -> bool {
        self.state(id).is_some_and(LifecycleState::is_open)
    }

    /// Whether the overlay has a transition step or notification still queued.
    pub fn has_pending(&self, id: &OverlayId) -> bool {
        self.instances
            .get(id)
            .is_some_and(|i| i.lifecycle.has_pending())
    }

    pub fn return_focus_snapshot(&self, id: &OverlayId) -> Option<&FocusSnapshot> {
        self.instances.get(id)?.return_focus.snapshot()
    }

    pub fn focus_trap(&self, id: &OverlayId) -> Option<&FocusTrap> {
        self.instances.get(id)?.trap.as_ref()
    }

    /// Drain the notifications emitted since the last call.
    pub fn take_events(&mut self) -> Vec<OverlayEvent> {
        std::mem::take(&mut self.events)
    }

    // Registration

    /// Take control of the element `id` as an overlay. It starts closed.
    pub fn register(
        &mut self,
        doc: &mut Document,
        id: impl Into<OverlayId>,
        widget: impl Overlay + 'static,
    ) -> Result<(), OverlayError> {
        let id = id.into();
        if self.instances.contains_key(&id) {
            return Err(OverlayError::AlreadyRegistered(id));
        }
        if !doc.contains(id.as_str()) {
            return Err(DomError::NotFound(id.to_string()).into());
        }

        let mut instance = Instance {
            widget: Box::new(widget),
            lifecycle: Lifecycle::default(),
            trap: None,
            return_focus: ReturnFocus::new(),
            wants_backdrop: false,
        };
        reflect_options(doc, &id, instance.widget.as_ref())?;
        reflect_state(doc, &id, LifecycleState::Closed)?;
        if instance.widget.trap_focus().is_on() {
            instance.trap = Some(FocusTrap::enable(doc, id.as_str())?);
        }

        log::debug!("[overlay] registered {}", id);
        self.instances.insert(id, instance);
        Ok(())
    }

    /// Forget an overlay, removing its trap and taking it off the stack.
    pub fn unregister(&mut self, doc: &mut Document, id: &OverlayId) -> Result<(), OverlayError> {
        let mut instance = self
            .instances
            .remove(id)
            .ok_or_else(|| OverlayError::UnknownOverlay(id.clone()))?;

        instance.lifecycle.cancel(&mut self.scheduler);
        if let Some(trap) = instance.trap.take() {
            trap.disable(doc);
        }
        instance.return_focus.release_tabindex(doc);
        if self.registry.pop(id).is_some() {
            self.sync_layers(doc);
        }

        log::debug!("[overlay] unregistered {}", id);
        Ok(())
    }

    /// Re-read the overlay's options after they changed.
    pub fn options_changed(&mut self, doc: &mut Document, id: &OverlayId) -> Result<(), OverlayError> {
        let instance = self
            .instances
            .get_mut(id)
            .ok_or_else(|| OverlayError::UnknownOverlay(id.clone()))?;

        reflect_options(doc, id, instance.widget.as_ref())?;
        match (instance.widget.trap_focus().is_on(), instance.trap.take()) {
            (true, Some(trap)) => instance.trap = Some(trap),
            (true, None) => instance.trap = Some(FocusTrap::enable(doc, id.as_str())?),
            (false, Some(trap)) => trap.disable(doc),
            (false, None) => {}
        }

        self.sync_layers(doc);
        Ok(())
    }

    // Open / close

    /// Set the `open` property. Returns false when nothing changed, either
    /// because the overlay is already headed that way or a before-hook
    /// cancelled.
    pub fn set_open(
        &mut self,
        doc: &mut Document,
        id: &OverlayId,
        open: bool,
    ) -> Result<bool, OverlayError> {
        let instance = self
            .instances
            .get_mut(id)
            .ok_or_else(|| OverlayError::UnknownOverlay(id.clone()))?;
        if instance.lifecycle.state().is_open() == open {
            return Ok(false);
        }

        let gate = if open {
            self.events.push(OverlayEvent::BeforeOpen(id.clone()));
            instance.widget.before_open(id)
        } else {
            self.events.push(OverlayEvent::BeforeClose(id.clone()));
            instance.widget.before_close(id)
        };
        if gate == Gate::Cancel {
            log::debug!("[overlay] {} cancelled {}", id, if open { "open" } else { "close" });
            return Ok(false);
        }

        instance.lifecycle.begin(open, &mut self.scheduler);
        if open {
            self.open_instance(doc, id);
        } else {
            self.close_instance(doc, id);
        }
        Ok(true)
    }

    fn open_instance(&mut self, doc: &mut Document, id: &OverlayId) {
        log::debug!("[overlay] opening {}", id);
        if doc.contains(id.as_str()) {
            log_dom(reflect_state(doc, id, LifecycleState::Opening));
            self.stack(doc, id);
        } else {
            log::debug!("[overlay] {} is detached; stacking deferred to attach", id);
        }

        if let Some(instance) = self.instances.get_mut(id) {
            instance
                .lifecycle
                .pending_mut()
                .schedule_frame(&mut self.scheduler, Task::Reveal(id.clone()));
        }
    }

    fn close_instance(&mut self, doc: &mut Document, id: &OverlayId) {
        log::debug!("[overlay] closing {}", id);
        log_dom(doc.remove_attr(id.as_str(), "open").map(|_| ()));
        log_dom(doc.remove_class(id.as_str(), OPEN_CLASS));

        if self.registry.pop(id).is_some() {
            self.sync_layers(doc);
        }
        self.restore_focus(doc, id);

        if transition_duration(doc, id).is_zero() {
            conceal(doc, id);
        }
        self.schedule_after_transition(doc, id);
    }

    /// Put an opening or open overlay on the stack and do its bookkeeping.
    fn stack(&mut self, doc: &mut Document, id: &OverlayId) {
        let Some(instance) = self.instances.get_mut(id) else {
            return;
        };

        let handle = self.registry.push(doc, id);
        if instance.widget.return_focus().is_on() {
            instance.return_focus.capture(doc);
        }
        if let Some(trap) = &instance.trap {
            if let Err(err) = trap.revalidate(doc) {
                log::warn!("[trap] cannot restore sentinels in {}: {}", id, err);
            }
        }

        if instance.wants_backdrop {
            self.registry.set_backdrop_requested(id, true);
            self.backdrop
                .show(doc, &mut self.scheduler, handle.z_index, id);
        }
        self.sync_layers(doc);
    }

    /// Reposition or hide the backdrop and update the document tab capture
    /// after the stack changed.
    fn sync_layers(&mut self, doc: &mut Document) {
        self.backdrop
            .hide_or_reposition(doc, &mut self.scheduler, &self.registry);

        let needed = self.registry.iter().any(|handle| {
            handle.backdrop_requested
                && self
                    .instances
                    .get(&handle.instance)
                    .is_some_and(|i| i.trap.is_some())
        });
        self.backdrop.tab_capture_mut().sync(doc, needed);
    }

    fn restore_focus(&mut self, doc: &mut Document, id: &OverlayId) {
        let Some(target) = self
            .instances
            .get_mut(id)
            .and_then(|i| i.return_focus.take())
        else {
            return;
        };
        if !doc.contains(&target) {
            log::debug!("[return-focus] {} is gone, not restoring", target);
            return;
        }

        self.focus_phase = FocusPhase::ProgrammaticFocusPending;
        match doc.focus(&target) {
            Ok(events) => self.handle_events(doc, events),
            Err(err) => log::debug!("[return-focus] cannot restore {}: {}", target, err),
        }
        self.focus_phase = FocusPhase::Idle;
    }

    fn schedule_after_transition(&mut self, doc: &Document, id: &OverlayId) {
        let duration = transition_duration(doc, id);
        let Some(instance) = self.instances.get_mut(id) else {
            return;
        };
        let pending = instance.lifecycle.pending_mut();
        if duration.is_zero() {
            pending.schedule(
                &mut self.scheduler,
                self.config.notify_debounce,
                Task::Settle(id.clone()),
            );
        } else {
            pending.schedule(&mut self.scheduler, duration, Task::TransitionEnd(id.clone()));
        }
    }

    fn reveal(&mut self, doc: &mut Document, id: &OverlayId) {
        log_dom(doc.add_class(id.as_str(), OPEN_CLASS));
        self.apply_focus_on_show(doc, id);
        self.schedule_after_transition(doc, id);
    }

    fn transition_end(&mut self, doc: &mut Document, id: &OverlayId) {
        let Some(instance) = self.instances.get_mut(id) else {
            return;
        };
        if instance.lifecycle.state() == LifecycleState::Closing {
            conceal(doc, id);
        }
        instance.lifecycle.pending_mut().schedule(
            &mut self.scheduler,
            self.config.notify_debounce,
            Task::Settle(id.clone()),
        );
    }

    fn settle(&mut self, id: &OverlayId) {
        let Some(instance) = self.instances.get_mut(id) else {
            return;
        };
        match instance.lifecycle.settle() {
            Some(LifecycleState::Open) => {
                log::debug!("[overlay] {} open", id);
                self.events.push(OverlayEvent::Open(id.clone()));
            }
            Some(LifecycleState::Closed) => {
                log::debug!("[overlay] {} closed", id);
                self.events.push(OverlayEvent::Close(id.clone()));
            }
            _ => {}
        }
    }

    fn apply_focus_on_show(&mut self, doc: &mut Document, id: &OverlayId) {
        let Some(instance) = self.instances.get(id) else {
            return;
        };
        let container = id.as_str();

        let target = match instance.widget.focus_on_show() {
            FocusOnShow::Off => return,
            FocusOnShow::On => None,
            FocusOnShow::Element(element) => {
                if doc.get(&element).is_some_and(is_focusable) {
                    Some(element)
                } else {
                    log::warn!("[overlay] focus-on-show target {} is not focusable", element);
                    None
                }
            }
            FocusOnShow::Selector(selector) => match doc.query_within(container, &selector) {
                Ok(Some(element)) if is_focusable(element) => Some(element.id.clone()),
                Ok(_) => {
                    log::warn!("[overlay] no focusable match for {} in {}", selector, container);
                    None
                }
                Err(err) => {
                    log::warn!("[overlay] focus-on-show selector: {}", err);
                    None
                }
            },
        };

        let target = match target {
            Some(target) => target,
            None => {
                if doc.get(container).is_some_and(|el| !is_focusable(el)) {
                    log_dom(doc.set_attr(container, "tabindex", "-1"));
                }
                container.to_string()
            }
        };
        self.move_focus(doc, &target);
    }

    // Backdrop

    /// Request the shared backdrop under this overlay. Takes effect now if
    /// the overlay is stacked, otherwise the next time it is.
    pub fn show_backdrop(&mut self, doc: &mut Document, id: &OverlayId) -> Result<(), OverlayError> {
        self.instances
            .get_mut(id)
            .ok_or_else(|| OverlayError::UnknownOverlay(id.clone()))?
            .wants_backdrop = true;

        if self.registry.set_backdrop_requested(id, true) {
            let z_index = self.registry.get(id).map_or(0, |h| h.z_index);
            self.backdrop.show(doc, &mut self.scheduler, z_index, id);
            self.sync_layers(doc);
        }
        Ok(())
    }

    pub fn hide_backdrop(&mut self, doc: &mut Document, id: &OverlayId) -> Result<(), OverlayError> {
        self.instances
            .get_mut(id)
            .ok_or_else(|| OverlayError::UnknownOverlay(id.clone()))?
            .wants_backdrop = false;

        if self.registry.set_backdrop_requested(id, false) {
            self.sync_layers(doc);
        }
        Ok(())
    }

    // Return focus

    /// Send focus to `element` when this overlay next closes, instead of to
    /// whatever was focused when it opened.
    pub fn return_focus_to(
        &mut self,
        doc: &mut Document,
        id: &OverlayId,
        element: &str,
    ) -> Result<(), OverlayError> {
        self.instances
            .get_mut(id)
            .ok_or_else(|| OverlayError::UnknownOverlay(id.clone()))?
            .return_focus
            .override_target(doc, element)?;
        Ok(())
    }

    // Attachment

    /// The overlay element was removed from the document.
    pub fn on_detach(&mut self, doc: &mut Document, id: &OverlayId) -> Result<(), OverlayError> {
        let instance = self
            .instances
            .get(id)
            .ok_or_else(|| OverlayError::UnknownOverlay(id.clone()))?;
        let wants_backdrop = instance.wants_backdrop;

        if self.registry.pop(id).is_some() {
            log::debug!(
                "[overlay] {} detached while open (backdrop on reattach: {})",
                id,
                wants_backdrop
            );
            self.sync_layers(doc);
        }
        Ok(())
    }

    /// The overlay element was (re)inserted into the document.
    pub fn on_attach(&mut self, doc: &mut Document, id: &OverlayId) -> Result<(), OverlayError> {
        let instance = self
            .instances
            .get(id)
            .ok_or_else(|| OverlayError::UnknownOverlay(id.clone()))?;
        if !doc.contains(id.as_str()) {
            return Err(DomError::NotFound(id.to_string()).into());
        }

        let state = instance.lifecycle.state();
        reflect_options(doc, id, instance.widget.as_ref())?;
        reflect_state(doc, id, state)?;
        if state.is_open() {
            log::debug!("[overlay] {} reattached while open", id);
            self.stack(doc, id);
        }
        Ok(())
    }

    /// The overlay's content changed; put trap sentinels back in place.
    /// Returns true if they had been displaced.
    pub fn on_content_changed(&mut self, doc: &mut Document, id: &OverlayId) -> Result<bool, OverlayError> {
        let instance = self
            .instances
            .get(id)
            .ok_or_else(|| OverlayError::UnknownOverlay(id.clone()))?;
        match &instance.trap {
            Some(trap) => Ok(trap.revalidate(doc)?),
            None => Ok(false),
        }
    }

    // Input

    /// Deliver a key press to the focused element. Tab handling in open
    /// traps runs first, and Tab in either direction on a trapped container
    /// never leaves it; other keys and unhandled Tabs get the document's
    /// default sequential navigation. Returns true if a trap handled the key.
    pub fn dispatch_key(&mut self, doc: &mut Document, key: Key, modifiers: Modifiers) -> bool {
        let backward = is_backward_tab(key, modifiers);
        if key == Key::Tab || backward {
            let redirect = doc
                .active_element()
                .and_then(|active| self.container_tab_target(doc, active, backward));
            if let Some(target) = redirect {
                log::trace!("[trap] tab from container -> {}", target);
                self.move_focus(doc, &target);
                return true;
            }
        }

        let events = if backward {
            doc.focus_prev()
        } else if key == Key::Tab {
            doc.focus_next()
        } else {
            Vec::new()
        };
        self.handle_events(doc, events);
        false
    }

    /// Focus an element on behalf of the user.
    pub fn focus(&mut self, doc: &mut Document, element: &str) -> Result<(), OverlayError> {
        let events = doc.focus(element)?;
        self.handle_events(doc, events);
        Ok(())
    }

    /// Process focus events produced by document operations made outside
    /// the manager.
    pub fn handle_events(&mut self, doc: &mut Document, events: impl IntoIterator<Item = Event>) {
        for event in events {
            match event {
                Event::Focus { target } => self.on_focus(doc, &target),
                Event::Blur { target, .. } => self.on_blur(&target),
                Event::Key { .. } => {}
            }
        }
    }

    fn on_focus(&mut self, doc: &mut Document, target: &str) {
        if self.focus_phase == FocusPhase::ProgrammaticFocusPending {
            return;
        }
        if let Some(redirect) = self.sentinel_redirect(doc, target) {
            log::trace!("[trap] {} -> {}", target, redirect);
            self.move_focus(doc, &redirect);
        }
    }

    fn on_blur(&mut self, target: &str) {
        let owners: Vec<OverlayId> = self
            .instances
            .iter()
            .filter(|(_, i)| i.return_focus.temporary_tabindex() == Some(target))
            .map(|(id, _)| id.clone())
            .collect();
        for id in owners {
            self.scheduler.next_frame(Task::ReleaseTabIndex(id));
        }
    }

    fn sentinel_redirect(&self, doc: &Document, target: &str) -> Option<String> {
        let capture = self.backdrop.tab_capture();
        if capture.is_active() {
            if let Some(edge) = capture.edge_of(target) {
                let trap = self.topmost_trap()?;
                let entry = match edge {
                    SentinelKind::Bottom => trap.last_tabbable(doc),
                    SentinelKind::Top | SentinelKind::Intermediate => trap.first_tabbable(doc),
                };
                return Some(entry.unwrap_or_else(|| trap.container().to_string()));
            }
        }

        self.open_traps()
            .find_map(|trap| Some(trap.redirect_target(doc, trap.sentinel_kind(target)?)))
    }

    fn container_tab_target(&self, doc: &Document, active: &str, backward: bool) -> Option<String> {
        let trap = self.open_traps().find(|trap| trap.container() == active)?;
        Some(if backward {
            trap.shift_tab_from_container(doc)
        } else {
            trap.tab_from_container(doc)
        })
    }

    fn open_traps(&self) -> impl Iterator<Item = &FocusTrap> {
        self.instances
            .values()
            .filter(|i| i.lifecycle.state().is_open())
            .filter_map(|i| i.trap.as_ref())
    }

    /// The trap of the topmost stacked overlay that has one.
    fn topmost_trap(&self) -> Option<&FocusTrap> {
        self.registry
            .iter()
            .rev()
            .find_map(|handle| self.instances.get(&handle.instance)?.trap.as_ref())
    }

    fn move_focus(&mut self, doc: &mut Document, target: &str) {
        match doc.focus(target) {
            Ok(events) => self.handle_events(doc, events),
            Err(err) => log::debug!("[overlay] cannot focus {}: {}", target, err),
        }
    }

    fn release_tabindex(&mut self, doc: &mut Document, id: &OverlayId) {
        let Some(element) = self
            .instances
            .get(id)
            .and_then(|i| i.return_focus.temporary_tabindex())
        else {
            return;
        };

        let keep = doc.active_element().is_some_and(|active| {
            active == element
                || self.instances.iter().any(|(overlay, i)| {
                    i.lifecycle.state().is_open() && doc.element_contains(overlay.as_str(), active)
                })
        });
        if keep {
            log::trace!("[return-focus] keeping tabindex on {}", element);
            return;
        }

        if let Some(instance) = self.instances.get_mut(id) {
            instance.return_focus.release_tabindex(doc);
        }
    }

    // Time

    /// Move the clock forward by `by`, running every task that falls due.
    pub fn advance(&mut self, doc: &mut Document, by: Duration) {
        let deadline = self.scheduler.now() + by;
        while let Some((task_id, task)) = self.scheduler.pop_due(deadline) {
            self.run(doc, task_id, task);
        }
        self.scheduler.settle(deadline);
    }

    fn run(&mut self, doc: &mut Document, task_id: TaskId, task: Task) {
        let current = match &task {
            Task::Reveal(id) | Task::TransitionEnd(id) | Task::Settle(id) => self
                .instances
                .get_mut(id)
                .is_some_and(|i| i.lifecycle.pending_mut().complete(task_id)),
            Task::BackdropFadeIn | Task::BackdropFadeOut => self.backdrop.complete(task_id),
            Task::ReleaseTabIndex(_) => true,
        };
        if !current {
            log::trace!("[overlay] dropping stale {:?}", task);
            return;
        }

        log::trace!("[overlay] {:?} at {:?}", task, self.scheduler.now());
        match task {
            Task::Reveal(id) => self.reveal(doc, &id),
            Task::TransitionEnd(id) => self.transition_end(doc, &id),
            Task::Settle(id) => self.settle(&id),
            Task::BackdropFadeIn => self.backdrop.finish_fade_in(doc, self.scheduler.now()),
            Task::BackdropFadeOut => self.backdrop.finish_fade_out(doc),
            Task::ReleaseTabIndex(id) => self.release_tabindex(doc, &id),
        }
    }
}

/// Mirror the overlay's options as attributes on its element.
fn reflect_options(doc: &mut Document, id: &OverlayId, widget: &dyn Overlay) -> Result<(), DomError> {
    let name = id.as_str();
    doc.set_attr(name, "trap-focus", widget.trap_focus().as_attr())?;
    doc.set_attr(name, "return-focus", widget.return_focus().as_attr())?;
    doc.set_attr(name, "focus-on-show", widget.focus_on_show().as_attr())
}

/// Bring the element's attributes and visibility in line with `state`.
fn reflect_state(doc: &mut Document, id: &OverlayId, state: LifecycleState) -> Result<(), DomError> {
    let name = id.as_str();
    match state {
        LifecycleState::Closed => {
            doc.remove_attr(name, "open")?;
            doc.remove_class(name, OPEN_CLASS)?;
            doc.set_attr(name, "aria-hidden", "true")?;
            doc.set_display(name, Display::None)
        }
        LifecycleState::Opening | LifecycleState::Open => {
            doc.set_attr(name, "open", "")?;
            // Announced before it becomes visible.
            doc.set_attr(name, "aria-hidden", "false")?;
            doc.set_display(name, Display::Block)?;
            if state == LifecycleState::Open {
                doc.add_class(name, OPEN_CLASS)?;
            }
            Ok(())
        }
        LifecycleState::Closing => {
            doc.remove_attr(name, "open")?;
            doc.remove_class(name, OPEN_CLASS)?;
            doc.set_attr(name, "aria-hidden", "false")?;
            doc.set_display(name, Display::Block)
        }
    }
}

fn conceal(doc: &mut Document, id: &OverlayId) {
    log_dom(doc.set_attr(id.as_str(), "aria-hidden", "true"));
    log_dom(doc.set_display(id.as_str(), Display::None));
}

fn transition_duration(doc: &Document, id: &OverlayId) -> Duration {
    doc.get(id.as_str())
        .map_or(Duration::ZERO, |el| duration_of(el.transition.as_ref()))
}

fn log_dom(result: Result<(), DomError>) {
    if let Err(err) = result {
        log::debug!("[overlay] {}", err);
    }
}
