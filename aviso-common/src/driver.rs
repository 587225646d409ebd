//! Headless toast driver on tokio
//!
//! Runs a [`ToastMachine`] with tokio tasks as the pending-reveal handles.
//! Used outside the browser, e.g. by native integration tests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone, Utc};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::ToastConfig;
use crate::content::ToastContent;
use crate::machine::{ScheduledTask, ToastMachine, ToastPhase, ToastState, TriggerOutcome};

impl ScheduledTask for JoinHandle<()> {
    fn cancel(self) {
        self.abort();
    }
}

/// Source of the reveal timestamp
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

type SharedMachine = Arc<Mutex<ToastMachine<JoinHandle<()>>>>;

/// Point-in-time view of a driven toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSnapshot {
    pub phase: ToastPhase,
    pub state: ToastState,
}

pub struct ToastDriver {
    machine: SharedMachine,
    config: ToastConfig,
    clock: Arc<dyn Clock>,
}

impl ToastDriver {
    pub fn new(config: ToastConfig, clock: Arc<dyn Clock>) -> Self {
        let machine = ToastMachine::new(clock.now(), config.reveal_on_mount);
        Self {
            machine: Arc::new(Mutex::new(machine)),
            config,
            clock,
        }
    }

    pub fn with_system_clock(config: ToastConfig) -> Self {
        Self::new(config, Arc::new(SystemClock))
    }

    /// Feed the trigger value. Must be called from within a tokio runtime.
    pub fn set_trigger(&self, trigger: bool) -> TriggerOutcome {
        let delay = Duration::from_millis(self.config.reveal_delay_ms);
        let policy = self.config.timestamp_policy;
        let machine = Arc::clone(&self.machine);
        let clock = Arc::clone(&self.clock);

        lock(&self.machine).observe_trigger(trigger, move |ticket| {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let at = policy.event_timestamp(clock.now());
                let outcome = lock(&machine).reveal(ticket, at);
                debug!(?ticket, ?outcome, "Reveal delay elapsed");
            })
        })
    }

    pub fn dismiss(&self) -> bool {
        lock(&self.machine).dismiss()
    }

    pub fn snapshot(&self) -> ToastSnapshot {
        let machine = lock(&self.machine);
        ToastSnapshot {
            phase: machine.phase(),
            state: machine.state(),
        }
    }

    /// Content to render for `message`, or `None` while hidden.
    pub fn render_in<Tz: TimeZone>(&self, message: &str, tz: &Tz) -> Option<ToastContent> {
        let state = lock(&self.machine).state();
        state
            .visible
            .then(|| ToastContent::new(message, state.event_timestamp, tz))
    }

    pub fn render(&self, message: &str) -> Option<ToastContent> {
        self.render_in(message, &Local)
    }
}

impl Drop for ToastDriver {
    fn drop(&mut self) {
        lock(&self.machine).teardown();
    }
}

fn lock(machine: &SharedMachine) -> MutexGuard<'_, ToastMachine<JoinHandle<()>>> {
    machine.lock().unwrap_or_else(PoisonError::into_inner)
}
