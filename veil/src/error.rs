//! Overlay error types.

use thiserror::Error;
use veildom::DomError;

use crate::overlay::OverlayId;

/// Errors returned by the overlay manager's public API.
///
/// These only signal caller mistakes. Expected runtime edge cases (closing an
/// overlay that is not stacked, a trap with nothing to focus) are silent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    /// The overlay was never registered with this manager.
    #[error("overlay '{0}' is not registered")]
    UnknownOverlay(OverlayId),

    /// The overlay is already registered.
    #[error("overlay '{0}' is already registered")]
    AlreadyRegistered(OverlayId),

    #[error(transparent)]
    Dom(#[from] DomError),
}
