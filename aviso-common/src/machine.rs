//! Reveal state machine for a notification toast
//!
//! A trigger change hides the toast and schedules a delayed reveal. The
//! machine owns the handle of that pending reveal, so it can cancel it when a
//! newer trigger arrives or when the owning component goes away. How the
//! delay is actually waited on (a Dioxus task, a tokio task, a test fake) is
//! up to the caller through [`ScheduledTask`].

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::surface::DismissibleSurface;

/// Handle to a one-shot task that has not necessarily run yet.
pub trait ScheduledTask {
    /// Stop the task. It must not run its body after this returns.
    fn cancel(self);
}

/// Where the toast is in its reveal cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Hidden,
    /// A reveal is scheduled and waiting for its delay
    PendingReveal,
    Visible,
}

/// Identifies one scheduled reveal.
///
/// Handed to the scheduling closure and passed back to [`ToastMachine::reveal`]
/// when the delay elapses. Only the ticket of the currently pending reveal is
/// accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealTicket(u64);

/// Render-relevant toast state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastState {
    pub visible: bool,
    /// Captured when the toast is revealed
    pub event_timestamp: DateTime<Utc>,
}

/// Result of observing a trigger value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The value changed (or this was the first value and reveal-on-mount is on)
    Scheduled(RevealTicket),
    /// Same value as last time, nothing happened
    Unchanged,
    /// First value seen, remembered without scheduling a reveal
    Recorded,
}

/// Result of a reveal callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    Revealed,
    /// The ticket does not belong to the pending reveal
    Stale,
}

struct PendingReveal<H> {
    ticket: RevealTicket,
    task: H,
}

/// Toast visibility state plus the single pending-reveal slot.
pub struct ToastMachine<H: ScheduledTask> {
    state: ToastState,
    last_trigger: Option<bool>,
    reveal_on_first: bool,
    pending: Option<PendingReveal<H>>,
    next_ticket: u64,
}

impl<H: ScheduledTask> ToastMachine<H> {
    /// `created_at` seeds the timestamp shown before the first reveal.
    /// With `reveal_on_first`, the first observed trigger value counts as a change.
    pub fn new(created_at: DateTime<Utc>, reveal_on_first: bool) -> Self {
        Self {
            state: ToastState {
                visible: false,
                event_timestamp: created_at,
            },
            last_trigger: None,
            reveal_on_first,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn phase(&self) -> ToastPhase {
        if self.pending.is_some() {
            ToastPhase::PendingReveal
        } else if self.state.visible {
            ToastPhase::Visible
        } else {
            ToastPhase::Hidden
        }
    }

    pub fn state(&self) -> ToastState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn event_timestamp(&self) -> DateTime<Utc> {
        self.state.event_timestamp
    }

    pub fn has_pending_reveal(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed the current trigger value.
    ///
    /// On a change the toast is hidden at once, the previous pending reveal is
    /// cancelled, and `schedule` is called to start a new one.
    pub fn observe_trigger(
        &mut self,
        trigger: bool,
        schedule: impl FnOnce(RevealTicket) -> H,
    ) -> TriggerOutcome {
        let previous = self.last_trigger.replace(trigger);
        match previous {
            Some(last) if last == trigger => return TriggerOutcome::Unchanged,
            None if !self.reveal_on_first => return TriggerOutcome::Recorded,
            _ => {}
        }

        self.state.visible = false;
        self.cancel_pending();

        let ticket = RevealTicket(self.next_ticket);
        self.next_ticket += 1;
        let task = schedule(ticket);
        self.pending = Some(PendingReveal { ticket, task });

        debug!(?ticket, trigger, "Toast reveal scheduled");
        TriggerOutcome::Scheduled(ticket)
    }

    /// Called by the scheduled task once its delay has elapsed.
    pub fn reveal(&mut self, ticket: RevealTicket, at: DateTime<Utc>) -> RevealOutcome {
        match self.pending.take() {
            Some(pending) if pending.ticket == ticket => {
                self.state.event_timestamp = at;
                self.state.visible = true;
                debug!(?ticket, %at, "Toast revealed");
                RevealOutcome::Revealed
            }
            other => {
                self.pending = other;
                debug!(?ticket, "Ignoring reveal for a replaced ticket");
                RevealOutcome::Stale
            }
        }
    }

    /// Hide the toast. Does not schedule anything. Returns whether it was visible.
    pub fn dismiss(&mut self) -> bool {
        let was_visible = self.state.visible;
        self.state.visible = false;
        if was_visible {
            debug!("Toast dismissed");
        }
        was_visible
    }

    /// Cancel the pending reveal, if any. Called when the owner goes away.
    pub fn teardown(&mut self) {
        self.cancel_pending();
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(ticket = ?pending.ticket, "Cancelling pending toast reveal");
            pending.task.cancel();
        }
    }
}

impl<H: ScheduledTask> DismissibleSurface for ToastMachine<H> {
    fn is_open(&self) -> bool {
        self.state.visible
    }

    fn set_open(&mut self, open: bool) {
        if open {
            // Only a scheduled reveal may open the toast, so the timestamp stays
            // tied to the reveal.
            debug!("Ignoring external request to open toast");
        } else {
            self.dismiss();
        }
    }
}

impl<H: ScheduledTask> Drop for ToastMachine<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Records cancellation instead of running anything
    struct FakeTask {
        cancelled: Rc<Cell<bool>>,
    }

    impl ScheduledTask for FakeTask {
        fn cancel(self) {
            self.cancelled.set(true);
        }
    }

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 17, 5, secs).unwrap()
    }

    fn schedule_fake(flag: &Rc<Cell<bool>>) -> impl FnOnce(RevealTicket) -> FakeTask {
        let cancelled = Rc::clone(flag);
        move |_| FakeTask { cancelled }
    }

    fn machine() -> ToastMachine<FakeTask> {
        ToastMachine::new(at(0), true)
    }

    #[test]
    fn test_starts_hidden() {
        let m = machine();
        assert_eq!(m.phase(), ToastPhase::Hidden);
        assert!(!m.is_visible());
        assert_eq!(m.event_timestamp(), at(0));
    }

    #[test]
    fn test_first_trigger_schedules_when_reveal_on_first() {
        let mut m = machine();
        let flag = Rc::new(Cell::new(false));
        let outcome = m.observe_trigger(false, schedule_fake(&flag));
        assert!(matches!(outcome, TriggerOutcome::Scheduled(_)));
        assert_eq!(m.phase(), ToastPhase::PendingReveal);
    }

    #[test]
    fn test_first_trigger_only_recorded_without_reveal_on_first() {
        let mut m: ToastMachine<FakeTask> = ToastMachine::new(at(0), false);
        let flag = Rc::new(Cell::new(false));
        assert_eq!(
            m.observe_trigger(false, schedule_fake(&flag)),
            TriggerOutcome::Recorded
        );
        assert_eq!(m.phase(), ToastPhase::Hidden);

        let outcome = m.observe_trigger(true, schedule_fake(&flag));
        assert!(matches!(outcome, TriggerOutcome::Scheduled(_)));
    }

    #[test]
    fn test_same_value_is_unchanged() {
        let mut m = machine();
        let flag = Rc::new(Cell::new(false));
        m.observe_trigger(true, schedule_fake(&flag));
        assert_eq!(
            m.observe_trigger(true, schedule_fake(&flag)),
            TriggerOutcome::Unchanged
        );
        assert!(!flag.get());
    }

    #[test]
    fn test_never_visible_right_after_trigger_change() {
        let mut m = machine();
        let flag = Rc::new(Cell::new(false));
        let TriggerOutcome::Scheduled(ticket) = m.observe_trigger(true, schedule_fake(&flag))
        else {
            panic!("expected a scheduled reveal");
        };
        assert_eq!(m.reveal(ticket, at(1)), RevealOutcome::Revealed);
        assert!(m.is_visible());

        // Toggling back still counts as a change and hides synchronously
        m.observe_trigger(false, schedule_fake(&flag));
        assert!(!m.is_visible());
        assert_eq!(m.phase(), ToastPhase::PendingReveal);
    }

    #[test]
    fn test_reveal_captures_timestamp() {
        let mut m = machine();
        let flag = Rc::new(Cell::new(false));
        let TriggerOutcome::Scheduled(ticket) = m.observe_trigger(true, schedule_fake(&flag))
        else {
            panic!("expected a scheduled reveal");
        };
        m.reveal(ticket, at(42));
        assert_eq!(m.phase(), ToastPhase::Visible);
        assert_eq!(m.event_timestamp(), at(42));
    }

    #[test]
    fn test_rapid_triggers_cancel_previous_and_reject_its_ticket() {
        let mut m = machine();
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));

        let TriggerOutcome::Scheduled(old) = m.observe_trigger(true, schedule_fake(&first)) else {
            panic!("expected a scheduled reveal");
        };
        let TriggerOutcome::Scheduled(new) = m.observe_trigger(false, schedule_fake(&second))
        else {
            panic!("expected a scheduled reveal");
        };

        assert!(first.get(), "first timer must be cancelled");
        assert!(!second.get());
        assert_ne!(old, new);

        assert_eq!(m.reveal(old, at(10)), RevealOutcome::Stale);
        assert!(!m.is_visible());
        assert_eq!(m.reveal(new, at(20)), RevealOutcome::Revealed);
        assert_eq!(m.event_timestamp(), at(20));
    }

    #[test]
    fn test_dismiss_hides_without_rescheduling() {
        let mut m = machine();
        let flag = Rc::new(Cell::new(false));
        let TriggerOutcome::Scheduled(ticket) = m.observe_trigger(true, schedule_fake(&flag))
        else {
            panic!("expected a scheduled reveal");
        };
        m.reveal(ticket, at(1));

        assert!(m.dismiss());
        assert_eq!(m.phase(), ToastPhase::Hidden);
        assert!(!m.has_pending_reveal());
        assert!(!m.dismiss());
    }

    #[test]
    fn test_set_open_true_does_not_reveal() {
        let mut m = machine();
        m.set_open(true);
        assert!(!m.is_open());
    }

    #[test]
    fn test_set_open_false_dismisses() {
        let mut m = machine();
        let flag = Rc::new(Cell::new(false));
        let TriggerOutcome::Scheduled(ticket) = m.observe_trigger(true, schedule_fake(&flag))
        else {
            panic!("expected a scheduled reveal");
        };
        m.reveal(ticket, at(1));
        m.set_open(false);
        assert!(!m.is_open());
    }

    #[test]
    fn test_teardown_cancels_pending_reveal() {
        let mut m = machine();
        let flag = Rc::new(Cell::new(false));
        let TriggerOutcome::Scheduled(ticket) = m.observe_trigger(true, schedule_fake(&flag))
        else {
            panic!("expected a scheduled reveal");
        };
        m.teardown();
        assert!(flag.get());
        assert_eq!(m.reveal(ticket, at(1)), RevealOutcome::Stale);
        assert!(!m.is_visible());
    }

    #[test]
    fn test_drop_cancels_pending_reveal() {
        let flag = Rc::new(Cell::new(false));
        {
            let mut m = machine();
            m.observe_trigger(true, schedule_fake(&flag));
        }
        assert!(flag.get());
    }
}
