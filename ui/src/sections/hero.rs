use dioxus::prelude::*;

use crate::content::TRUSTED_LOGOS;
use crate::core::format::{format_change, format_currency, format_number};
use crate::core::locale::Locale;
use crate::routes::Route;
use crate::t;

const PREVIEW_BARS: usize = 24;

/// Heights (percent) of the decorative bars in the hero preview card. A fixed
/// wave so the landing page renders the same on every load.
fn preview_bar_heights() -> Vec<u32> {
    (0..PREVIEW_BARS)
        .map(|i| {
            let wave = ((i as f64) * 0.55).sin() * 18.0;
            let rise = i as f64 * 2.2;
            (30.0 + wave + rise).clamp(12.0, 100.0).round() as u32
        })
        .collect()
}

#[component]
pub fn HeroSection(locale: Locale) -> Element {
    let previews = [
        (t!(locale, "hero-preview-revenue"), format_currency(284_190, locale), 12.4),
        (t!(locale, "hero-preview-users"), format_number(48_293, locale), 8.1),
        (t!(locale, "hero-preview-conversion"), "3.24%".to_string(), 0.4),
    ];

    rsx! {
        section { class: "hero", id: "top",
            div { class: "hero__copy",
                span { class: "hero__badge",
                    span { class: "hero__badge-dot", aria_hidden: "true" }
                    {t!(locale, "hero-badge")}
                }
                h1 { class: "hero__headline",
                    {t!(locale, "hero-headline-lead")}
                    " "
                    span { class: "hero__accent", {t!(locale, "hero-headline-accent")} }
                }
                p { class: "hero__subheadline", {t!(locale, "hero-subheadline")} }
                div { class: "hero__actions",
                    a { class: "button button--primary button--large", href: "#pricing",
                        {t!(locale, "hero-cta")}
                    }
                    Link { class: "button button--ghost button--large", to: Route::demo(locale),
                        {t!(locale, "hero-cta-secondary")}
                    }
                }
            }

            div { class: "hero__preview", aria_hidden: "true",
                div { class: "hero__preview-metrics",
                    for (label, value, change) in previews {
                        div { key: "{label}", class: "hero__preview-metric",
                            span { class: "hero__preview-label", "{label}" }
                            strong { class: "hero__preview-value", "{value}" }
                            span { class: "hero__preview-change", {format_change(change)} }
                        }
                    }
                }
                div { class: "hero__preview-bars",
                    for (i, height) in preview_bar_heights().into_iter().enumerate() {
                        span {
                            key: "{i}",
                            class: "hero__preview-bar",
                            style: "height: {height}%",
                        }
                    }
                }
            }

            div { class: "hero__trusted",
                span { class: "hero__trusted-label", {t!(locale, "hero-trusted-by")} }
                ul { class: "hero__logos",
                    for logo in TRUSTED_LOGOS.iter() {
                        li { key: "{logo}", class: "hero__logo", "{logo}" }
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
    fn preview_bars_stay_in_range() {
        let bars = preview_bar_heights();
        assert_eq!(bars.len(), PREVIEW_BARS);
        assert!(bars.iter().all(|h| (12..=100).contains(h)));
        assert_eq!(bars, preview_bar_heights());
    }
}
