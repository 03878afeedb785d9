//! Stacked overlays (popovers, menus, modal dialogs) over a `veildom` document.
//!
//! [`OverlayManager`] is the service that every overlay instance is driven
//! through. It composes the z-order registry, the shared backdrop, per-overlay
//! focus traps and return-focus bookkeeping, and runs each overlay's
//! open/close lifecycle on the document's virtual clock.

pub mod backdrop;
pub mod config;
pub mod error;
pub mod focus_trap;
pub mod lifecycle;
pub mod manager;
pub mod overlay;
pub mod registry;
pub mod return_focus;

mod task;

pub use backdrop::{BackdropController, BackdropPhase, TabCapture};
pub use config::OverlayConfig;
pub use error::OverlayError;
pub use focus_trap::{FocusTrap, SentinelKind};
pub use lifecycle::LifecycleState;
pub use manager::OverlayManager;
pub use overlay::{FocusOnShow, Gate, Overlay, OverlayEvent, OverlayId, OverlayOptions, Toggle};
pub use registry::{OverlayHandle, OverlayRegistry};
pub use return_focus::{FocusPhase, FocusSnapshot, ReturnFocus};

pub mod prelude {
    pub use crate::config::OverlayConfig;
    pub use crate::manager::OverlayManager;
    pub use crate::overlay::{
        FocusOnShow, Gate, Overlay, OverlayEvent, OverlayId, OverlayOptions, Toggle,
    };
    pub use veildom::{Document, Element, Key, Modifiers};
}
