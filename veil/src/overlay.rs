//! The overlay capability interface and its option types.

use std::fmt;

/// Identifies an overlay by the ID of its container element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub String);

impl OverlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OverlayId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for OverlayId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Two-valued option reflected as an `on`/`off` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Toggle {
    #[default]
    On,
    Off,
}

impl Toggle {
    pub fn is_on(self) -> bool {
        self == Toggle::On
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Toggle::On => "on",
            Toggle::Off => "off",
        }
    }
}

impl From<bool> for Toggle {
    fn from(on: bool) -> Self {
        if on { Toggle::On } else { Toggle::Off }
    }
}

/// Where focus goes when an overlay opens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FocusOnShow {
    /// Focus the overlay container.
    #[default]
    On,
    /// Leave focus where it is.
    Off,
    /// Focus the element with this ID.
    Element(String),
    /// Focus the first descendant of the overlay matching this selector.
    Selector(String),
}

impl FocusOnShow {
    pub fn as_attr(&self) -> &str {
        match self {
            FocusOnShow::On => "on",
            FocusOnShow::Off => "off",
            FocusOnShow::Element(id) => id,
            FocusOnShow::Selector(selector) => selector,
        }
    }
}

/// Outcome of a cancelable `beforeopen` / `beforeclose` notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gate {
    #[default]
    Proceed,
    Cancel,
}

/// Capability interface implemented by concrete overlay widgets (dialogs,
/// menus, popovers).
///
/// The manager reads the focus options when the overlay is registered, when it
/// opens, and whenever [`OverlayManager::options_changed`] is called. The
/// `before_*` hooks gate the corresponding transition.
///
/// Focus trapping, return focus and focus-on-show are all on unless a widget
/// overrides them; non-modal overlays opt out with [`Toggle::Off`].
///
/// [`OverlayManager::options_changed`]: crate::OverlayManager::options_changed
pub trait Overlay {
    fn trap_focus(&self) -> Toggle {
        Toggle::On
    }

    fn return_focus(&self) -> Toggle {
        Toggle::On
    }

    fn focus_on_show(&self) -> FocusOnShow {
        FocusOnShow::On
    }

    /// Called before the overlay opens. Returning [`Gate::Cancel`] leaves it closed.
    fn before_open(&mut self, _id: &OverlayId) -> Gate {
        Gate::Proceed
    }

    /// Called before the overlay closes. Returning [`Gate::Cancel`] keeps it open.
    fn before_close(&mut self, _id: &OverlayId) -> Gate {
        Gate::Proceed
    }
}

/// Plain option set for overlays that need no custom gating.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayOptions {
    pub trap_focus: Toggle,
    pub return_focus: Toggle,
    pub focus_on_show: FocusOnShow,
}

impl OverlayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trap_focus(mut self, trap_focus: Toggle) -> Self {
        self.trap_focus = trap_focus;
        self
    }

    pub fn return_focus(mut self, return_focus: Toggle) -> Self {
        self.return_focus = return_focus;
        self
    }

    pub fn focus_on_show(mut self, focus_on_show: FocusOnShow) -> Self {
        self.focus_on_show = focus_on_show;
        self
    }
}

impl Overlay for OverlayOptions {
    fn trap_focus(&self) -> Toggle {
        self.trap_focus
    }

    fn return_focus(&self) -> Toggle {
        self.return_focus
    }

    fn focus_on_show(&self) -> FocusOnShow {
        self.focus_on_show.clone()
    }
}

/// Notifications emitted by overlays, drained with
/// [`OverlayManager::take_events`](crate::OverlayManager::take_events).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    /// An open was requested. Recorded whether or not it was cancelled.
    BeforeOpen(OverlayId),
    /// A close was requested. Recorded whether or not it was cancelled.
    BeforeClose(OverlayId),
    /// The open transition settled.
    Open(OverlayId),
    /// The close transition settled.
    Close(OverlayId),
}

impl OverlayEvent {
    pub fn target(&self) -> &OverlayId {
        match self {
            OverlayEvent::BeforeOpen(id)
            | OverlayEvent::BeforeClose(id)
            | OverlayEvent::Open(id)
            | OverlayEvent::Close(id) => id,
        }
    }
}
