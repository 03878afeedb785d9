//! Deterministic single-threaded task scheduling on a virtual clock.
//!
//! Stands in for the host's paint-frame callbacks and timers. Nothing here
//! blocks: the owner drains due tasks with [`Scheduler::pop_due`] and then
//! moves the clock forward with [`Scheduler::settle`].

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle to a scheduled task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    frame_interval: Duration,
    next_seq: u64,
    /// Ordered by due time, then by scheduling order.
    queue: BTreeMap<(Duration, u64), T>,
    due: HashMap<u64, Duration>,
}

impl<T> Scheduler<T> {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            frame_interval,
            next_seq: 0,
            queue: BTreeMap::new(),
            due: HashMap::new(),
        }
    }

    /// Current virtual time since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Run `task` once `delay` has elapsed.
    pub fn after(&mut self, delay: Duration, task: T) -> TaskId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let at = self.now + delay;
        self.queue.insert((at, seq), task);
        self.due.insert(seq, at);
        TaskId(seq)
    }

    /// Run `task` on the next paint frame.
    pub fn next_frame(&mut self, task: T) -> TaskId {
        self.after(self.frame_interval, task)
    }

    /// Cancel a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.due.remove(&id.0) {
            Some(at) => self.queue.remove(&(at, id.0)).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.due.contains_key(&id.0)
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Remove and return the earliest task due at or before `deadline`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<(TaskId, T)> {
        let (&(at, seq), _) = self.queue.first_key_value()?;
        if at > deadline {
            return None;
        }
        let task = self.queue.remove(&(at, seq))?;
        self.due.remove(&seq);
        self.now = self.now.max(at);
        Some((TaskId(seq), task))
    }

    /// Move the clock forward to `deadline` (never backwards).
    pub fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}

/// A slot holding at most one live task.
///
/// Scheduling through the slot cancels whatever it held before, so a new
/// request always supersedes a stale one.
#[derive(Debug, Default)]
pub struct Debounced {
    current: Option<TaskId>,
}

impl Debounced {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<T>(&mut self, scheduler: &mut Scheduler<T>, delay: Duration, task: T) -> TaskId {
        self.cancel(scheduler);
        let id = scheduler.after(delay, task);
        self.current = Some(id);
        id
    }

    pub fn schedule_frame<T>(&mut self, scheduler: &mut Scheduler<T>, task: T) -> TaskId {
        self.cancel(scheduler);
        let id = scheduler.next_frame(task);
        self.current = Some(id);
        id
    }

    /// Cancel the held task, if any. Returns true if something was cancelled.
    pub fn cancel<T>(&mut self, scheduler: &mut Scheduler<T>) -> bool {
        match self.current.take() {
            Some(id) => scheduler.cancel(id),
            None => false,
        }
    }

    /// Mark `id` as run. Returns false if `id` is not the task this slot
    /// holds, in which case the caller should treat the task as stale.
    pub fn complete(&mut self, id: TaskId) -> bool {
        if self.current == Some(id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<TaskId> {
        self.current
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }
}
