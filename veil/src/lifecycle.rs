//! Open/close state of a single overlay.

use veildom::{Debounced, Scheduler};

use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl LifecycleState {
    /// The `open` property as seen by callers: true while opening or open.
    pub fn is_open(self) -> bool {
        matches!(self, LifecycleState::Opening | LifecycleState::Open)
    }

    pub fn is_settled(self) -> bool {
        matches!(self, LifecycleState::Open | LifecycleState::Closed)
    }
}

/// Per-overlay state plus the one pending step of its current transition.
/// Starting a new transition always discards the previous pending step.
#[derive(Debug, Default)]
pub(crate) struct Lifecycle {
    state: LifecycleState,
    pending: Debounced,
}

impl Lifecycle {
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_idle()
    }

    pub fn pending_mut(&mut self) -> &mut Debounced {
        &mut self.pending
    }

    /// Start moving towards `open`. Returns false if already headed there.
    pub fn begin(&mut self, open: bool, scheduler: &mut Scheduler<Task>) -> bool {
        if self.state.is_open() == open {
            return false;
        }
        self.pending.cancel(scheduler);
        self.state = if open {
            LifecycleState::Opening
        } else {
            LifecycleState::Closing
        };
        true
    }

    /// Drop the pending step without changing state.
    pub fn cancel(&mut self, scheduler: &mut Scheduler<Task>) {
        self.pending.cancel(scheduler);
    }

    /// Complete the transition. Returns the state reached, or `None` if the
    /// lifecycle was already settled.
    pub fn settle(&mut self) -> Option<LifecycleState> {
        self.state = match self.state {
            LifecycleState::Opening => LifecycleState::Open,
            LifecycleState::Closing => LifecycleState::Closed,
            LifecycleState::Open | LifecycleState::Closed => return None,
        };
        Some(self.state)
    }
}
