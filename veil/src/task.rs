//! Deferred work scheduled on the manager's clock.

use crate::overlay::OverlayId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Task {
    /// Apply the `open` class on the frame after an open.
    Reveal(OverlayId),
    /// The overlay's transition finished.
    TransitionEnd(OverlayId),
    /// Emit the debounced open/close notification.
    Settle(OverlayId),
    BackdropFadeIn,
    BackdropFadeOut,
    /// A return-focus target with a temporary tabindex lost focus on the
    /// previous frame.
    ReleaseTabIndex(OverlayId),
}
