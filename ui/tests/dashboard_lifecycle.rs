//! Timer-level behavior of the demo dashboard, driven with an instant fake sleeper.

use std::cell::RefCell;
use std::future::ready;

use futures::executor::block_on;
use time::OffsetDateTime;

use ui::config::DashboardConfig;
use ui::core::locale::Locale;
use ui::core::random::{MidpointSource, RandomSource};
use ui::demo::{drive, initial_metrics, DashboardEngine, DashboardEvent, EventOutcome, Phase, Trend};

/// Alternates between the top and bottom of the jitter range.
struct Seesaw(bool);

impl RandomSource for Seesaw {
    fn int_in(&mut self, min: i64, max: i64) -> i64 {
        min + (max - min) / 2
    }

    fn unit(&mut self) -> f64 {
        self.0 = !self.0;
        if self.0 {
            0.99
        } else {
            0.0
        }
    }
}

fn engine(run_id: u64) -> DashboardEngine {
    DashboardEngine::new(
        run_id,
        DashboardConfig::default(),
        initial_metrics(Locale::En, |id| id.key().to_string()),
    )
}

#[test]
fn teardown_after_three_ticks_stops_the_timer() {
    let state = RefCell::new(engine(7));
    let sleeps = RefCell::new(Vec::new());
    let events = RefCell::new(Vec::new());
    let snapshot = RefCell::new(None);

    block_on(drive(
        DashboardConfig::default(),
        |ms| {
            sleeps.borrow_mut().push(ms);
            ready(())
        },
        |event| {
            let mut engine = state.borrow_mut();
            let outcome = engine.handle(7, event, &mut Seesaw(false), OffsetDateTime::UNIX_EPOCH);
            events.borrow_mut().push((event, outcome));
            if engine.ticks == 3 && engine.phase == Phase::Live {
                *snapshot.borrow_mut() = Some(engine.metrics.clone());
                engine.teardown();
            }
            outcome
        },
    ));

    assert_eq!(*sleeps.borrow(), vec![1400, 4000, 4000, 4000, 4000]);

    let events = events.into_inner();
    assert_eq!(events[0], (DashboardEvent::Ready, EventOutcome::WentLive));
    assert!(events[1..4]
        .iter()
        .all(|e| *e == (DashboardEvent::Tick, EventOutcome::Refreshed)));
    assert_eq!(events[4], (DashboardEvent::Tick, EventOutcome::Ignored));
    assert_eq!(events.len(), 5);

    let state = state.into_inner();
    assert_eq!(state.phase, Phase::TornDown);
    assert_eq!(state.ticks, 3);
    assert_eq!(Some(state.metrics), snapshot.into_inner());
}

#[test]
fn loading_precedes_live() {
    let mut engine = engine(1);
    let now = OffsetDateTime::UNIX_EPOCH;

    assert!(engine.is_loading());
    assert!(engine.metrics.is_empty());
    assert_eq!(
        engine.handle(1, DashboardEvent::Tick, &mut MidpointSource, now),
        EventOutcome::Ignored
    );
    assert!(engine.metrics.is_empty());
    assert_eq!(engine.ticks, 0);

    assert_eq!(
        engine.handle(1, DashboardEvent::Ready, &mut MidpointSource, now),
        EventOutcome::WentLive
    );
    assert_eq!(engine.metrics.len(), 4);
    assert_eq!(engine.series.len(), 12);
    assert_eq!(
        engine.handle(1, DashboardEvent::Ready, &mut MidpointSource, now),
        EventOutcome::Ignored
    );
}

#[test]
fn replaced_session_ignores_its_predecessor() {
    let mut engine = engine(2);
    let now = OffsetDateTime::UNIX_EPOCH;

    assert_eq!(
        engine.handle(1, DashboardEvent::Ready, &mut MidpointSource, now),
        EventOutcome::Ignored
    );
    assert!(engine.is_loading());
}

#[test]
fn trend_tracks_sign_over_many_ticks() {
    let mut engine = engine(3);
    let mut rng = Seesaw(true);
    let now = OffsetDateTime::UNIX_EPOCH;
    engine.handle(3, DashboardEvent::Ready, &mut rng, now);

    for _ in 0..200 {
        engine.handle(3, DashboardEvent::Tick, &mut rng, now);
        for metric in &engine.metrics {
            assert_eq!(metric.trend == Trend::Up, metric.change > 0.0, "{metric:?}");
            assert_eq!(metric.trend == Trend::Down, metric.change < 0.0, "{metric:?}");
            assert!(metric.change.abs() <= 99.9);
        }
    }
    assert_eq!(engine.ticks, 200);
}
