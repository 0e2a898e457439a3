use dioxus::prelude::*;

use crate::core::format::format_change;
use crate::core::locale::Locale;
use crate::demo::DashboardMetric;
use crate::t;

#[component]
pub fn MetricCard(metric: DashboardMetric, locale: Locale, index: usize) -> Element {
    let trend = metric.trend;
    let change = format_change(metric.change);
    let delay = format!("animation-delay: {}ms", index * 100);

    rsx! {
        div { class: "metric-card", style: "{delay}",
            span { class: "metric-card__label", "{metric.label}" }
            strong { class: "metric-card__value", "{metric.value}" }
            div { class: "metric-card__change metric-card__change--{trend.as_str()}",
                span { class: "metric-card__trend", aria_hidden: "true", "{trend.glyph()}" }
                span { "{change} " {t!(locale, "demo-vs-last-month")} }
            }
        }
    }
}
