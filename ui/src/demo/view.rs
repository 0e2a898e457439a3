use dioxus::prelude::*;
use time::OffsetDateTime;
use tracing::debug;

use crate::components::MetricCard;
use crate::config;
use crate::content::{alerts, traffic_sources};
use crate::core::format::format_number;
use crate::core::locale::Locale;
use crate::core::random::RngSource;
use crate::core::timing::{clock_label, sleep_ms};
use crate::t;

use super::chart::{EventsBarChart, RevenueAreaChart};
use super::engine::{
    drive, initial_metrics, next_run_id, DashboardEngine, EventOutcome, MetricId,
};

/// Bars in the events chart: the most recent points of the series.
const EVENT_BARS: usize = 7;

fn metric_label(id: MetricId, locale: Locale) -> String {
    match id {
        MetricId::Revenue => t!(locale, "demo-revenue"),
        MetricId::Users => t!(locale, "demo-users"),
        MetricId::Conversion => t!(locale, "demo-conversion"),
        MetricId::Latency => t!(locale, "demo-latency"),
    }
}

#[component]
pub fn DemoDashboard(locale: Locale) -> Element {
    let mut engine = use_signal(|| {
        DashboardEngine::new(
            next_run_id(),
            config::site().dashboard.clone(),
            initial_metrics(locale, |id| metric_label(id, locale)),
        )
    });

    // Scoped to this component: unmounting drops the future and its pending timer.
    use_future(move || async move {
        let (run_id, cfg) = {
            let state = engine.peek();
            (state.run_id, state.config.clone())
        };
        debug!(run_id, "demo dashboard timers started");
        drive(cfg, sleep_ms, move |event| {
            let outcome = engine.with_mut(|state| {
                state.handle(
                    run_id,
                    event,
                    &mut RngSource::thread(),
                    OffsetDateTime::now_utc(),
                )
            });
            if outcome == EventOutcome::WentLive {
                debug!(run_id, "demo dashboard live");
            }
            outcome
        })
        .await;
        debug!(run_id, "demo dashboard timers stopped");
    });

    use_drop(move || {
        if let Ok(mut state) = engine.try_write() {
            state.teardown();
        }
    });

    let state = engine.read();
    if state.is_loading() {
        return rsx! {
            div { class: "demo demo--loading", aria_busy: "true",
                div { class: "demo__metrics",
                    for i in 0..MetricId::ALL.len() {
                        div { key: "{i}", class: "metric-card metric-card--skeleton" }
                    }
                }
                div { class: "demo__skeleton-chart" }
                p { class: "demo__loading-label", {t!(locale, "demo-loading")} }
            }
        };
    }

    let metrics = state.metrics.clone();
    let series = state.series.clone();
    let recent: Vec<_> = series
        .iter()
        .skip(series.len().saturating_sub(EVENT_BARS))
        .cloned()
        .collect();
    let updated = state
        .last_refresh
        .map(|stamp| t!(locale, "demo-updated", time = clock_label(stamp)));
    drop(state);

    rsx! {
        div { class: "demo",
            div { class: "demo__status",
                span { class: "demo__live",
                    span { class: "demo__live-dot", aria_hidden: "true" }
                    {t!(locale, "demo-live")}
                }
                if let Some(updated) = updated {
                    span { class: "demo__updated", "{updated}" }
                }
            }

            div { class: "demo__metrics",
                for (index, metric) in metrics.into_iter().enumerate() {
                    MetricCard { key: "{index}", metric, locale, index }
                }
            }

            div { class: "demo__charts",
                div { class: "demo-panel demo-panel--wide",
                    h3 { class: "demo-panel__title", {t!(locale, "demo-revenue-chart")} }
                    RevenueAreaChart { points: series, locale, target_label: t!(locale, "demo-target") }
                }
                div { class: "demo-panel",
                    h3 { class: "demo-panel__title", {t!(locale, "demo-events-chart")} }
                    EventsBarChart { points: recent, locale }
                }
            }

            div { class: "demo__lists",
                div { class: "demo-panel",
                    h3 { class: "demo-panel__title", {t!(locale, "demo-top-sources")} }
                    ul { class: "traffic-list",
                        for source in traffic_sources(locale).iter() {
                            li { key: "{source.source}", class: "traffic-list__row",
                                div { class: "traffic-list__head",
                                    span { "{source.source}" }
                                    span { class: "traffic-list__sessions", {format_number(source.sessions, locale)} }
                                }
                                div { class: "progress",
                                    div { class: "progress__fill", style: "width: {source.share}%" }
                                }
                            }
                        }
                    }
                }
                div { class: "demo-panel",
                    h3 { class: "demo-panel__title", {t!(locale, "demo-recent-alerts")} }
                    ul { class: "alert-list",
                        for alert in alerts(locale).iter() {
                            li { key: "{alert.id}", class: "alert-list__item alert-list__item--{alert.kind.as_str()}",
                                span { class: "alert-list__icon", aria_hidden: "true", "{alert.kind.icon()}" }
                                div {
                                    p { class: "alert-list__message", "{alert.message}" }
                                    span { class: "alert-list__time", "{alert.time}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_labels_follow_locale() {
        assert_eq!(metric_label(MetricId::Revenue, Locale::En), "Revenue");
        assert_ne!(
            metric_label(MetricId::Users, Locale::Ar),
            metric_label(MetricId::Users, Locale::En)
        );
    }
}
