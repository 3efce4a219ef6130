//! Timer-gated trash transitions

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::TrashState;
use crate::config::TrashTimings;
use crate::timer::{Millis, Scheduler};

/// Visitor actions the trash reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrashTrigger {
    /// Dock trash icon clicked
    Click,
    /// "Cancel" in the empty dialog
    Cancel,
    /// "Empty Trash" in the empty dialog
    Confirm,
    /// "Restore" in the delete dialog
    Restore,
    /// "Delete" in the delete dialog
    ConfirmDelete,
    /// Escape key or backdrop click on whichever dialog is open
    Dismiss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TrashTimer {
    /// emptying -> confirmDelete
    FinishEmptying,
    /// deletedTemp -> restoring
    BeginRestore,
    /// restoring -> idle
    FinishRestore,
}

/// The trash state machine
///
/// Every operation takes the caller's current time. Pending timers are
/// applied before a trigger is evaluated, so the machine always acts on the
/// state the visitor is actually looking at. Any user-driven transition
/// cancels timers left over from the previous state.
#[derive(Clone, Debug)]
pub struct TrashMachine {
    state: TrashState,
    timings: TrashTimings,
    timers: Scheduler<TrashTimer>,
}

impl Default for TrashMachine {
    fn default() -> Self {
        Self::new(TrashTimings::default())
    }
}

impl TrashMachine {
    /// Create a machine in the idle state
    pub fn new(timings: TrashTimings) -> Self {
        Self {
            state: TrashState::Idle,
            timings,
            timers: Scheduler::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> TrashState {
        self.state
    }

    /// See [`TrashState::desktop_visible`]
    pub fn desktop_visible(&self) -> bool {
        self.state.desktop_visible()
    }

    /// See [`TrashState::trash_disabled`]
    pub fn trash_disabled(&self) -> bool {
        self.state.trash_disabled()
    }

    /// Number of timers waiting to fire
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// When the next timed transition is due, if one is pending
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_due()
    }

    /// Apply a visitor action. Returns true if the state changed.
    ///
    /// Triggers that make no sense in the current state are ignored.
    pub fn handle(&mut self, trigger: TrashTrigger, now: Millis) -> bool {
        self.advance(now);

        match (self.state, trigger) {
            (TrashState::Idle, TrashTrigger::Click) => {
                self.enter(TrashState::ConfirmEmpty);
                true
            }
            (TrashState::ConfirmEmpty, TrashTrigger::Cancel | TrashTrigger::Dismiss) => {
                self.enter(TrashState::Idle);
                true
            }
            (TrashState::ConfirmEmpty, TrashTrigger::Confirm) => {
                self.enter(TrashState::Emptying);
                self.timers
                    .schedule_after(now, self.timings.empty_ms, TrashTimer::FinishEmptying);
                true
            }
            (TrashState::ConfirmDelete, TrashTrigger::Restore | TrashTrigger::Dismiss) => {
                self.enter(TrashState::Restoring);
                self.timers
                    .schedule_after(now, self.timings.restore_ms, TrashTimer::FinishRestore);
                true
            }
            (TrashState::ConfirmDelete, TrashTrigger::ConfirmDelete) => {
                self.enter(TrashState::DeletedTemp);
                self.timers
                    .schedule_after(now, self.timings.deleted_hold_ms, TrashTimer::BeginRestore);
                true
            }
            (state, trigger) => {
                trace!(state = state.id(), ?trigger, "ignoring trash trigger");
                false
            }
        }
    }

    /// Dock trash icon clicked
    pub fn click(&mut self, now: Millis) -> bool {
        self.handle(TrashTrigger::Click, now)
    }

    /// "Cancel" in the empty dialog
    pub fn cancel_empty(&mut self, now: Millis) -> bool {
        self.handle(TrashTrigger::Cancel, now)
    }

    /// "Empty Trash" in the empty dialog
    pub fn confirm_empty(&mut self, now: Millis) -> bool {
        self.handle(TrashTrigger::Confirm, now)
    }

    /// "Restore" in the delete dialog
    pub fn restore(&mut self, now: Millis) -> bool {
        self.handle(TrashTrigger::Restore, now)
    }

    /// "Delete" in the delete dialog
    pub fn confirm_delete(&mut self, now: Millis) -> bool {
        self.handle(TrashTrigger::ConfirmDelete, now)
    }

    /// Escape key or backdrop click
    pub fn dismiss(&mut self, now: Millis) -> bool {
        self.handle(TrashTrigger::Dismiss, now)
    }

    /// Fire every timer due at or before `now`. Returns true if the state
    /// changed.
    ///
    /// Follow-up timers are scheduled from the due time of the timer that
    /// fired, so one large jump lands in the same state as many small ones.
    pub fn advance(&mut self, now: Millis) -> bool {
        let before = self.state;

        while let Some(fired) = self.timers.pop_due(now) {
            trace!(due = fired.due, timer = ?fired.event, "trash timer fired");
            match fired.event {
                TrashTimer::FinishEmptying => self.set(TrashState::ConfirmDelete),
                TrashTimer::BeginRestore => {
                    self.set(TrashState::Restoring);
                    self.timers.schedule_at(
                        fired.due + self.timings.restore_ms,
                        TrashTimer::FinishRestore,
                    );
                }
                TrashTimer::FinishRestore => self.set(TrashState::Idle),
            }
        }

        self.state != before
    }

    /// Drop every pending timer; the view is going away
    pub fn unmount(&mut self) {
        let dropped = self.timers.cancel_all();
        if dropped > 0 {
            debug!(dropped, state = self.state.id(), "cancelled trash timers on unmount");
        }
    }

    /// User-driven transition: supersedes anything still pending
    fn enter(&mut self, to: TrashState) {
        self.timers.cancel_all();
        self.set(to);
    }

    fn set(&mut self, to: TrashState) {
        debug!(from = self.state.id(), to = to.id(), "trash transition");
        self.state = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let machine = TrashMachine::default();
        assert_eq!(machine.state(), TrashState::Idle);
        assert!(machine.desktop_visible());
        assert!(!machine.trash_disabled());
        assert_eq!(machine.pending_timers(), 0);
    }

    #[test]
    fn test_cancel_returns_to_idle_without_timers() {
        let mut machine = TrashMachine::default();
        assert!(machine.click(0.0));
        assert_eq!(machine.state(), TrashState::ConfirmEmpty);
        assert!(machine.desktop_visible());

        assert!(machine.cancel_empty(10.0));
        assert_eq!(machine.state(), TrashState::Idle);
        assert_eq!(machine.pending_timers(), 0);

        // Nothing left to fire, however far the clock moves
        assert!(!machine.advance(1_000_000.0));
        assert_eq!(machine.state(), TrashState::Idle);
    }

    #[test]
    fn test_full_delete_sequence() {
        let mut machine = TrashMachine::default();
        machine.click(0.0);
        machine.confirm_empty(100.0);
        assert_eq!(machine.state(), TrashState::Emptying);
        assert!(!machine.desktop_visible());
        assert!(machine.trash_disabled());

        machine.advance(100.0 + 1449.0);
        assert_eq!(machine.state(), TrashState::Emptying);
        machine.advance(100.0 + 1450.0);
        assert_eq!(machine.state(), TrashState::ConfirmDelete);
        assert!(!machine.desktop_visible());

        assert!(machine.confirm_delete(2000.0));
        assert_eq!(machine.state(), TrashState::DeletedTemp);
        assert!(machine.state().shows_error_screen());

        machine.advance(6999.0);
        assert_eq!(machine.state(), TrashState::DeletedTemp);
        machine.advance(7000.0);
        assert_eq!(machine.state(), TrashState::Restoring);
        assert!(machine.trash_disabled());

        machine.advance(8199.0);
        assert_eq!(machine.state(), TrashState::Restoring);
        machine.advance(8200.0);
        assert_eq!(machine.state(), TrashState::Idle);
        assert_eq!(machine.pending_timers(), 0);
    }

    #[test]
    fn test_single_jump_matches_small_steps() {
        let mut machine = TrashMachine::default();
        machine.click(0.0);
        machine.confirm_empty(0.0);
        machine.advance(1450.0);
        machine.confirm_delete(1450.0);

        // 5000ms hold plus 1200ms restore in one jump
        assert!(machine.advance(1450.0 + 6200.0));
        assert_eq!(machine.state(), TrashState::Idle);
    }

    #[test]
    fn test_restore_from_delete_dialog() {
        let mut machine = TrashMachine::default();
        machine.click(0.0);
        machine.confirm_empty(0.0);
        assert!(machine.restore(1500.0));
        assert_eq!(machine.state(), TrashState::Restoring);
        assert_eq!(machine.next_deadline(), Some(2700.0));

        machine.advance(2700.0);
        assert_eq!(machine.state(), TrashState::Idle);
    }

    #[test]
    fn test_triggers_see_elapsed_timers() {
        let mut machine = TrashMachine::default();
        machine.click(0.0);
        machine.confirm_empty(0.0);
        // No explicit advance: the emptying timer has elapsed by now
        assert!(machine.confirm_delete(2000.0));
        assert_eq!(machine.state(), TrashState::DeletedTemp);
    }

    #[test]
    fn test_invalid_triggers_are_noops() {
        let mut machine = TrashMachine::default();
        assert!(!machine.confirm_empty(0.0));
        assert!(!machine.confirm_delete(0.0));
        assert!(!machine.restore(0.0));
        assert!(!machine.cancel_empty(0.0));
        assert!(!machine.dismiss(0.0));
        assert_eq!(machine.state(), TrashState::Idle);

        machine.click(0.0);
        machine.confirm_empty(0.0);
        // Disabled while emptying
        assert!(!machine.click(10.0));
        assert!(!machine.dismiss(10.0));
        assert_eq!(machine.state(), TrashState::Emptying);
        assert_eq!(machine.pending_timers(), 1);
    }

    #[test]
    fn test_dismiss_acts_as_cancel() {
        let mut machine = TrashMachine::default();
        machine.click(0.0);
        assert!(machine.dismiss(1.0));
        assert_eq!(machine.state(), TrashState::Idle);

        machine.click(2.0);
        machine.confirm_empty(2.0);
        machine.advance(1452.0);
        assert!(machine.dismiss(1500.0));
        assert_eq!(machine.state(), TrashState::Restoring);
    }

    #[test]
    fn test_unmount_cancels_timers() {
        let mut machine = TrashMachine::default();
        machine.click(0.0);
        machine.confirm_empty(0.0);
        machine.unmount();
        assert_eq!(machine.pending_timers(), 0);

        assert!(!machine.advance(10_000.0));
        assert_eq!(machine.state(), TrashState::Emptying);
    }

    #[test]
    fn test_custom_timings() {
        let mut machine = TrashMachine::new(TrashTimings {
            empty_ms: 10.0,
            restore_ms: 20.0,
            deleted_hold_ms: 30.0,
        });
        machine.click(0.0);
        machine.confirm_empty(0.0);
        machine.advance(10.0);
        machine.confirm_delete(10.0);
        machine.advance(40.0);
        assert_eq!(machine.state(), TrashState::Restoring);
        machine.advance(60.0);
        assert_eq!(machine.state(), TrashState::Idle);
    }
}
