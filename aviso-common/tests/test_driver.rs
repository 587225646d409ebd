#![cfg(not(target_arch = "wasm32"))]
//! Reveal timing through the tokio driver, with paused time.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use aviso_common::driver::{Clock, ToastDriver};
use aviso_common::{TimestampPolicy, ToastConfig, ToastPhase, TriggerOutcome};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("aviso_common=debug".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

/// Each call returns one second later than the previous one and counts calls
struct ManualClock {
    base: DateTime<Utc>,
    calls: AtomicU32,
}

impl ManualClock {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            base: Utc.with_ymd_and_hms(2026, 10, 19, 17, 5, 0).unwrap(),
            calls: AtomicU32::new(0),
        })
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    fn instant(&self, call: u32) -> DateTime<Utc> {
        self.base + chrono::Duration::seconds(call as i64)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.instant(call)
    }
}

fn driver(clock: &Arc<ManualClock>) -> ToastDriver {
    driver_with(clock, ToastConfig::default())
}

fn driver_with(clock: &Arc<ManualClock>, config: ToastConfig) -> ToastDriver {
    ToastDriver::new(config, Arc::clone(clock) as Arc<dyn Clock>)
}

async fn wait_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn test_reveal_after_delay() {
    init_tracing();
    let clock = ManualClock::new();
    let toast = driver(&clock);

    assert!(matches!(toast.set_trigger(true), TriggerOutcome::Scheduled(_)));
    assert_eq!(toast.snapshot().phase, ToastPhase::PendingReveal);
    assert!(!toast.snapshot().state.visible);

    wait_ms(99).await;
    assert!(!toast.snapshot().state.visible);

    wait_ms(2).await;
    let snapshot = toast.snapshot();
    assert_eq!(snapshot.phase, ToastPhase::Visible);
    // Call 0 seeded the machine, call 1 is the reveal
    assert_eq!(snapshot.state.event_timestamp, clock.instant(1));
}

#[tokio::test(start_paused = true)]
async fn test_hello_title_and_description() {
    init_tracing();
    let clock = ManualClock::new();
    let toast = driver(&clock);
    let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();

    toast.set_trigger(true);
    assert_eq!(toast.render_in("Hello", &brasilia), None);

    wait_ms(150).await;
    let content = toast.render_in("Hello", &brasilia).unwrap();
    assert_eq!(content.title, "Hello");
    assert_eq!(
        content.description,
        "segunda-feira, 19 de outubro de 2026 às 14:05"
    );
    assert_eq!(content.datetime, "2026-10-19T17:05:01.000Z");
}

#[tokio::test(start_paused = true)]
async fn test_rapid_triggers_reveal_once_with_last_timestamp() {
    init_tracing();
    let clock = ManualClock::new();
    let toast = driver(&clock);

    toast.set_trigger(true);
    wait_ms(50).await;
    toast.set_trigger(false);
    wait_ms(60).await;
    // The first timer would have fired by now had it not been aborted
    assert!(!toast.snapshot().state.visible);

    wait_ms(100).await;
    assert!(toast.snapshot().state.visible);
    // Seed + exactly one reveal: the aborted task never read the clock
    assert_eq!(clock.calls(), 2);
    assert_eq!(toast.snapshot().state.event_timestamp, clock.instant(1));
}

#[tokio::test(start_paused = true)]
async fn test_drop_before_delay_prevents_reveal() {
    init_tracing();
    let clock = ManualClock::new();
    {
        let toast = driver(&clock);
        toast.set_trigger(true);
        wait_ms(10).await;
    }
    wait_ms(500).await;
    assert_eq!(clock.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_does_not_reschedule() {
    init_tracing();
    let clock = ManualClock::new();
    let toast = driver(&clock);

    toast.set_trigger(true);
    wait_ms(150).await;
    assert!(toast.dismiss());
    assert_eq!(toast.snapshot().phase, ToastPhase::Hidden);

    wait_ms(1000).await;
    assert!(!toast.snapshot().state.visible);
    assert_eq!(clock.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_trigger_toggle_hides_visible_toast_immediately() {
    init_tracing();
    let clock = ManualClock::new();
    let toast = driver(&clock);

    toast.set_trigger(true);
    wait_ms(150).await;
    assert!(toast.snapshot().state.visible);

    toast.set_trigger(false);
    assert!(!toast.snapshot().state.visible);
    wait_ms(150).await;
    assert!(toast.snapshot().state.visible);
    assert_eq!(toast.snapshot().state.event_timestamp, clock.instant(2));
}

#[tokio::test(start_paused = true)]
async fn test_one_week_ahead_policy() {
    init_tracing();
    let clock = ManualClock::new();
    let config = ToastConfig {
        timestamp_policy: TimestampPolicy::OneWeekAhead,
        ..Default::default()
    };
    let toast = driver_with(&clock, config);

    toast.set_trigger(true);
    wait_ms(150).await;
    assert_eq!(
        toast.snapshot().state.event_timestamp,
        clock.instant(1) + chrono::Duration::days(7)
    );
}

#[tokio::test(start_paused = true)]
async fn test_without_reveal_on_mount_first_value_is_only_recorded() {
    init_tracing();
    let clock = ManualClock::new();
    let config = ToastConfig {
        reveal_on_mount: false,
        ..Default::default()
    };
    let toast = driver_with(&clock, config);

    assert_eq!(toast.set_trigger(false), TriggerOutcome::Recorded);
    wait_ms(150).await;
    assert!(!toast.snapshot().state.visible);

    assert_eq!(toast.set_trigger(false), TriggerOutcome::Unchanged);
    assert!(matches!(toast.set_trigger(true), TriggerOutcome::Scheduled(_)));
    wait_ms(150).await;
    assert!(toast.snapshot().state.visible);
}
