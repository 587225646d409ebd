//! Auto-dismiss countdown with pause/resume
//!
//! The surface asks the countdown how long to wait, schedules that itself,
//! and closes when the wait completes. Hovering or focusing the viewport
//! pauses; the remaining time is carried over to the resume.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CountdownState {
    Idle,
    Running { since: DateTime<Utc> },
    Paused,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DismissCountdown {
    duration_ms: u64,
    remaining_ms: u64,
    state: CountdownState,
}

impl DismissCountdown {
    /// A `duration_ms` of zero never dismisses.
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            remaining_ms: duration_ms,
            state: CountdownState::Idle,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.duration_ms > 0
    }

    pub fn is_idle(&self) -> bool {
        self.state == CountdownState::Idle
    }

    pub fn is_paused(&self) -> bool {
        self.state == CountdownState::Paused
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    /// Start a fresh countdown. Returns the delay to schedule, if enabled.
    pub fn start(&mut self, now: DateTime<Utc>) -> Option<u64> {
        self.remaining_ms = self.duration_ms;
        self.state = CountdownState::Running { since: now };
        self.is_enabled().then_some(self.remaining_ms)
    }

    /// Freeze the countdown. Returns whether a running countdown was paused.
    pub fn pause(&mut self, now: DateTime<Utc>) -> bool {
        let CountdownState::Running { since } = self.state else {
            return false;
        };
        let elapsed = (now - since).num_milliseconds().max(0) as u64;
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed);
        self.state = CountdownState::Paused;
        self.is_enabled()
    }

    /// Continue a paused countdown. Returns the remaining delay to schedule.
    pub fn resume(&mut self, now: DateTime<Utc>) -> Option<u64> {
        if self.state != CountdownState::Paused {
            return None;
        }
        self.state = CountdownState::Running { since: now };
        self.is_enabled().then_some(self.remaining_ms)
    }

    pub fn stop(&mut self) {
        self.state = CountdownState::Idle;
        self.remaining_ms = self.duration_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_start_returns_full_duration() {
        let mut c = DismissCountdown::new(5000);
        assert!(c.is_idle());
        assert_eq!(c.start(t0()), Some(5000));
        assert!(!c.is_idle());
    }

    #[test]
    fn test_pause_and_resume_keep_remaining_time() {
        let mut c = DismissCountdown::new(5000);
        c.start(t0());
        assert!(c.pause(t0() + Duration::milliseconds(1200)));
        assert!(c.is_paused());
        assert_eq!(c.remaining_ms(), 3800);

        // Time spent paused does not count
        assert_eq!(c.resume(t0() + Duration::seconds(60)), Some(3800));
        assert!(c.pause(t0() + Duration::milliseconds(60_800)));
        assert_eq!(c.remaining_ms(), 3000);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut c = DismissCountdown::new(5000);
        c.start(t0());
        assert!(c.pause(t0()));
        assert!(!c.pause(t0() + Duration::seconds(1)));
        assert_eq!(c.remaining_ms(), 5000);
    }

    #[test]
    fn test_resume_without_pause_does_nothing() {
        let mut c = DismissCountdown::new(5000);
        assert_eq!(c.resume(t0()), None);
        c.start(t0());
        assert_eq!(c.resume(t0()), None);
    }

    #[test]
    fn test_remaining_never_underflows() {
        let mut c = DismissCountdown::new(1000);
        c.start(t0());
        c.pause(t0() + Duration::seconds(10));
        assert_eq!(c.remaining_ms(), 0);
        assert_eq!(c.resume(t0() + Duration::seconds(11)), Some(0));
    }

    #[test]
    fn test_disabled_countdown_schedules_nothing() {
        let mut c = DismissCountdown::new(0);
        assert!(!c.is_enabled());
        assert_eq!(c.start(t0()), None);
        assert!(!c.is_idle());
        assert!(!c.pause(t0()));
        assert_eq!(c.resume(t0()), None);
    }

    #[test]
    fn test_stop_resets() {
        let mut c = DismissCountdown::new(5000);
        c.start(t0());
        c.pause(t0() + Duration::seconds(2));
        c.stop();
        assert!(c.is_idle());
        assert_eq!(c.remaining_ms(), 5000);
    }
}
