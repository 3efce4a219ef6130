//! Cancellable delayed events driven by a caller-supplied clock
//!
//! Nothing here reads the system time. Callers pass `now` (milliseconds)
//! into every operation, the same way the browser binding passes
//! `Date.now()`, so tests can jump a virtual clock forward instead of
//! sleeping.

/// Milliseconds on the caller's clock
pub type Millis = f64;

/// Handle to a scheduled event, used to cancel it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// An event whose due time has passed
#[derive(Clone, Debug, PartialEq)]
pub struct Fired<E> {
    pub handle: TimerHandle,
    /// When the event was due (not when it was observed)
    pub due: Millis,
    pub event: E,
}

#[derive(Clone, Debug)]
struct Scheduled<E> {
    handle: TimerHandle,
    due: Millis,
    event: E,
}

/// Single-threaded queue of pending delayed events
#[derive(Clone, Debug)]
pub struct Scheduler<E> {
    pending: Vec<Scheduled<E>>,
    next_id: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `event` to fire `delay` ms after `now`
    pub fn schedule_after(&mut self, now: Millis, delay: Millis, event: E) -> TimerHandle {
        self.schedule_at(now + delay.max(0.0), event)
    }

    /// Schedule `event` at an absolute time
    pub fn schedule_at(&mut self, due: Millis, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled { handle, due, event });
        handle
    }

    /// Cancel a pending event. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.handle != handle);
        self.pending.len() != before
    }

    /// Cancel everything. Returns how many events were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Check if an event is still pending
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|s| s.handle == handle)
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the earliest pending event
    pub fn next_due(&self) -> Option<Millis> {
        self.pending.iter().map(|s| s.due).reduce(f64::min)
    }

    /// Remove and return the earliest event due at or before `now`
    ///
    /// Events with equal due times fire in scheduling order.
    pub fn pop_due(&mut self, now: Millis) -> Option<Fired<E>> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= now)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.handle.0.cmp(&b.handle.0)))
            .map(|(i, _)| i)?;

        let Scheduled { handle, due, event } = self.pending.remove(index);
        Some(Fired { handle, due, event })
    }
}
