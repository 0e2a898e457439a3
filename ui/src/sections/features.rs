use dioxus::prelude::*;

use crate::components::SectionBadge;
use crate::core::locale::Locale;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Feature {
    Realtime,
    Prediction,
    Collaboration,
    Integrations,
    Security,
    Api,
}

impl Feature {
    const ALL: [Feature; 6] = [
        Feature::Realtime,
        Feature::Prediction,
        Feature::Collaboration,
        Feature::Integrations,
        Feature::Security,
        Feature::Api,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Realtime => "realtime",
            Self::Prediction => "prediction",
            Self::Collaboration => "collaboration",
            Self::Integrations => "integrations",
            Self::Security => "security",
            Self::Api => "api",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Realtime => "⚡",
            Self::Prediction => "◆",
            Self::Collaboration => "◎",
            Self::Integrations => "⇄",
            Self::Security => "⛨",
            Self::Api => "</>",
        }
    }

    // Literal keys keep `fl!` able to check them at compile time.
    fn copy(self, locale: Locale) -> (String, String) {
        match self {
            Self::Realtime => (
                t!(locale, "feature-realtime-title"),
                t!(locale, "feature-realtime-description"),
            ),
            Self::Prediction => (
                t!(locale, "feature-prediction-title"),
                t!(locale, "feature-prediction-description"),
            ),
            Self::Collaboration => (
                t!(locale, "feature-collaboration-title"),
                t!(locale, "feature-collaboration-description"),
            ),
            Self::Integrations => (
                t!(locale, "feature-integrations-title"),
                t!(locale, "feature-integrations-description"),
            ),
            Self::Security => (
                t!(locale, "feature-security-title"),
                t!(locale, "feature-security-description"),
            ),
            Self::Api => (
                t!(locale, "feature-api-title"),
                t!(locale, "feature-api-description"),
            ),
        }
    }
}

#[component]
pub fn FeaturesSection(locale: Locale) -> Element {
    rsx! {
        section { class: "section features", id: "features",
            header { class: "section__header",
                SectionBadge { {t!(locale, "features-badge")} }
                h2 { class: "section__headline", {t!(locale, "features-headline")} }
                p { class: "section__subheadline", {t!(locale, "features-subheadline")} }
            }
            div { class: "features__grid",
                for feature in Feature::ALL {
                    {
                        let (title, description) = feature.copy(locale);
                        rsx! {
                            article { key: "{feature.key()}", class: "feature-card feature-card--{feature.key()}",
                                span { class: "feature-card__icon", aria_hidden: "true", "{feature.icon()}" }
                                h3 { class: "feature-card__title", "{title}" }
                                p { class: "feature-card__description", "{description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
