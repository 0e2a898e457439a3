//! Live metric refresher for the demo dashboard.
//!
//! The engine is a small state machine: `Loading` until the one-shot ready event,
//! `Live` while refresh ticks arrive, `TornDown` once the owning view goes away.
//! Events are tagged with the run id they were scheduled for; anything stale or
//! arriving in the wrong phase is ignored without touching state.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use time::OffsetDateTime;

use crate::config::DashboardConfig;
use crate::core::format::{format_currency, format_number};
use crate::core::locale::Locale;
use crate::core::random::RandomSource;

use super::series::{generate_series, RevenuePoint};

static RUN_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Fresh id for a dashboard session.
pub fn next_run_id() -> u64 {
    RUN_COUNTER.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Self::Up
        } else if change < 0.0 {
            Self::Down
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Neutral => "neutral",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Up => "↗",
            Self::Down => "↘",
            Self::Neutral => "→",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricId {
    Revenue,
    Users,
    Conversion,
    Latency,
}

impl MetricId {
    pub const ALL: [MetricId; 4] = [
        MetricId::Revenue,
        MetricId::Users,
        MetricId::Conversion,
        MetricId::Latency,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Revenue => "rev",
            Self::Users => "users",
            Self::Conversion => "conv",
            Self::Latency => "lat",
        }
    }

    fn starting_change(self) -> f64 {
        match self {
            Self::Revenue => 12.4,
            Self::Users => 8.1,
            Self::Conversion => 0.4,
            Self::Latency => -8.2,
        }
    }

    fn display_value(self, locale: Locale) -> String {
        match self {
            Self::Revenue => format_currency(284_190, locale),
            Self::Users => format_number(48_293, locale),
            Self::Conversion => "3.24%".to_string(),
            Self::Latency => "42ms".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetric {
    pub id: MetricId,
    pub label: String,
    pub value: String,
    /// Percentage change, one decimal.
    pub change: f64,
    pub trend: Trend,
}

impl DashboardMetric {
    /// Nudge `change` by `delta`, round to one decimal, clamp to `bound` if set, and
    /// re-derive the trend from the stored value.
    pub fn apply_delta(&mut self, delta: f64, bound: Option<f64>) {
        let mut next = round_tenths(self.change + delta);
        if let Some(limit) = bound {
            next = next.clamp(-limit, limit);
        }
        self.change = next;
        self.trend = Trend::from_change(next);
    }
}

/// The four starting metrics, labelled through `label`.
pub fn initial_metrics(locale: Locale, label: impl Fn(MetricId) -> String) -> Vec<DashboardMetric> {
    MetricId::ALL
        .iter()
        .map(|&id| {
            let change = id.starting_change();
            DashboardMetric {
                id,
                label: label(id),
                value: id.display_value(locale),
                change,
                trend: Trend::from_change(change),
            }
        })
        .collect()
}

/// Per-tick delta: uniform over `[-0.225, 0.275)`, slightly biased upward.
pub fn jitter(rng: &mut impl RandomSource) -> f64 {
    (rng.unit() - 0.45) * 0.5
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Live,
    TornDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    Ready,
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    WentLive,
    Refreshed,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct DashboardEngine {
    pub run_id: u64,
    pub phase: Phase,
    pub config: DashboardConfig,
    pub metrics: Vec<DashboardMetric>,
    pub series: Vec<RevenuePoint>,
    pub ticks: u64,
    pub last_refresh: Option<OffsetDateTime>,
    pending: Vec<DashboardMetric>,
}

impl DashboardEngine {
    pub fn new(run_id: u64, config: DashboardConfig, initial: Vec<DashboardMetric>) -> Self {
        Self {
            run_id,
            phase: Phase::Loading,
            config,
            metrics: Vec::new(),
            series: Vec::new(),
            ticks: 0,
            last_refresh: None,
            pending: initial,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn handle(
        &mut self,
        run_id: u64,
        event: DashboardEvent,
        rng: &mut impl RandomSource,
        now: OffsetDateTime,
    ) -> EventOutcome {
        if run_id != self.run_id {
            return EventOutcome::Ignored;
        }

        match (self.phase, event) {
            (Phase::Loading, DashboardEvent::Ready) => {
                self.metrics = std::mem::take(&mut self.pending);
                self.series = generate_series(self.config.series_months, rng);
                self.phase = Phase::Live;
                self.last_refresh = Some(now);
                EventOutcome::WentLive
            }
            (Phase::Live, DashboardEvent::Tick) => {
                let bound = self.config.change_bound();
                for metric in &mut self.metrics {
                    metric.apply_delta(jitter(rng), bound);
                }
                self.ticks += 1;
                self.last_refresh = Some(now);
                EventOutcome::Refreshed
            }
            _ => EventOutcome::Ignored,
        }
    }

    /// Stop accepting events. Idempotent.
    pub fn teardown(&mut self) {
        self.phase = Phase::TornDown;
    }
}

/// Timer loop feeding a dashboard session: one ready event after the loading delay,
/// then a tick every refresh interval. Returns as soon as an event is ignored, which
/// is how a torn-down or replaced session stops its own timer.
pub async fn drive<S, F, A>(config: DashboardConfig, mut sleep: S, mut apply: A)
where
    S: FnMut(u64) -> F,
    F: Future<Output = ()>,
    A: FnMut(DashboardEvent) -> EventOutcome,
{
    sleep(config.loading_delay_ms).await;
    if apply(DashboardEvent::Ready) == EventOutcome::Ignored {
        return;
    }
    loop {
        sleep(config.refresh_interval_ms).await;
        if apply(DashboardEvent::Tick) == EventOutcome::Ignored {
            return;
        }
    }
}
