//! Overlay manager configuration.

use std::time::Duration;

use veildom::{Easing, TransitionConfig};

/// Configuration for an [`OverlayManager`](crate::OverlayManager).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use veil::OverlayConfig;
///
/// let config = OverlayConfig::default()
///     .with_base_z_index(500)
///     .with_backdrop_fade(Duration::from_millis(80));
/// assert_eq!(config.z_index_step, 10);
/// ```
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Z-index reported while no overlay is stacked. The first overlay gets
    /// `base_z_index + z_index_step`.
    ///
    /// Default: 10000
    pub base_z_index: i32,

    /// Gap between consecutive overlays. The backdrop sits one below the
    /// overlay it dims, inside this gap.
    ///
    /// Default: 10
    pub z_index_step: i32,

    /// Delay of a "next paint frame" callback.
    ///
    /// Default: 16ms
    pub frame_interval: Duration,

    /// Debounce delay between a transition settling and its open/close
    /// notification.
    ///
    /// Default: 10ms
    pub notify_debounce: Duration,

    /// How long the backdrop takes to fade out before it is hidden.
    ///
    /// Default: 150ms
    pub backdrop_fade: Duration,

    /// Opacity transition of the backdrop element.
    ///
    /// Default: 150ms, ease-out
    pub backdrop_transition: TransitionConfig,

    /// ID of the shared backdrop element.
    pub backdrop_id: String,

    /// IDs of the document-level tab-capture sentinels (top, bottom).
    pub tab_capture_ids: (String, String),
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            base_z_index: 10_000,
            z_index_step: 10,
            frame_interval: Duration::from_millis(16),
            notify_debounce: Duration::from_millis(10),
            backdrop_fade: Duration::from_millis(150),
            backdrop_transition: TransitionConfig::new(Duration::from_millis(150), Easing::EaseOut),
            backdrop_id: "veil-backdrop".to_string(),
            tab_capture_ids: (
                "veil-tab-capture-top".to_string(),
                "veil-tab-capture-bottom".to_string(),
            ),
        }
    }
}

impl OverlayConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_z_index(mut self, base: i32) -> Self {
        self.base_z_index = base;
        self
    }

    pub fn with_z_index_step(mut self, step: i32) -> Self {
        self.z_index_step = step;
        self
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn with_notify_debounce(mut self, delay: Duration) -> Self {
        self.notify_debounce = delay;
        self
    }

    pub fn with_backdrop_fade(mut self, fade: Duration) -> Self {
        self.backdrop_fade = fade;
        self
    }

    pub fn with_backdrop_transition(mut self, transition: TransitionConfig) -> Self {
        self.backdrop_transition = transition;
        self
    }

    pub fn with_backdrop_id(mut self, id: impl Into<String>) -> Self {
        self.backdrop_id = id.into();
        self
    }

    pub fn with_tab_capture_ids(mut self, top: impl Into<String>, bottom: impl Into<String>) -> Self {
        self.tab_capture_ids = (top.into(), bottom.into());
        self
    }

    /// Worst-case time from a state change until its notification is emitted
    /// for an overlay without a transition.
    pub fn settle_delay(&self) -> Duration {
        self.frame_interval + self.notify_debounce
    }
}
