use dioxus::prelude::*;

use crate::components::SectionBadge;
use crate::config;
use crate::content::{plans, Billing, PlanKey, PricingPlan};
use crate::core::format::format_number;
use crate::core::locale::Locale;
use crate::t;

struct PlanCopy {
    name: String,
    period: String,
    description: String,
}

fn plan_copy(key: PlanKey, locale: Locale) -> PlanCopy {
    match key {
        PlanKey::Starter => PlanCopy {
            name: t!(locale, "plan-starter-name"),
            period: t!(locale, "plan-starter-period"),
            description: t!(locale, "plan-starter-description"),
        },
        PlanKey::Growth => PlanCopy {
            name: t!(locale, "plan-growth-name"),
            period: t!(locale, "plan-growth-period"),
            description: t!(locale, "plan-growth-description"),
        },
        PlanKey::Enterprise => PlanCopy {
            name: t!(locale, "plan-enterprise-name"),
            period: t!(locale, "plan-enterprise-period"),
            description: t!(locale, "plan-enterprise-description"),
        },
    }
}

/// Price label for a plan card: `$99`, `$79`, or the localized "Custom".
fn price_label(plan: &PricingPlan, billing: Billing, locale: Locale) -> String {
    match plan.price(billing, config::site().pricing.yearly_discount) {
        Some(price) => format!("${}", format_number(i64::from(price), locale)),
        None => t!(locale, "pricing-custom"),
    }
}

#[component]
pub fn PricingSection(locale: Locale) -> Element {
    let mut billing = use_signal(Billing::default);
    let current = billing();

    let toggle_class = |option: Billing| {
        if option == current {
            "pricing__toggle-option pricing__toggle-option--active"
        } else {
            "pricing__toggle-option"
        }
    };

    rsx! {
        section { class: "section pricing", id: "pricing",
            header { class: "section__header",
                SectionBadge { {t!(locale, "pricing-badge")} }
                h2 { class: "section__headline", {t!(locale, "pricing-headline")} }
                p { class: "section__subheadline", {t!(locale, "pricing-subheadline")} }
            }

            div { class: "pricing__toggle", role: "group",
                button {
                    r#type: "button",
                    class: toggle_class(Billing::Monthly),
                    aria_pressed: "{current == Billing::Monthly}",
                    onclick: move |_| billing.set(Billing::Monthly),
                    {t!(locale, "pricing-monthly")}
                }
                button {
                    r#type: "button",
                    class: toggle_class(Billing::Yearly),
                    aria_pressed: "{current == Billing::Yearly}",
                    onclick: move |_| billing.set(Billing::Yearly),
                    {t!(locale, "pricing-yearly")}
                    span { class: "pricing__save", {t!(locale, "pricing-save")} }
                }
            }

            div { class: "pricing__grid",
                for plan in plans(locale).iter() {
                    {
                        let copy = plan_copy(plan.key, locale);
                        let featured = plan.key.is_featured();
                        let card_class = if featured {
                            "plan-card plan-card--featured"
                        } else {
                            "plan-card"
                        };
                        let cta = if plan.monthly_price.is_some() {
                            t!(locale, "pricing-cta")
                        } else {
                            t!(locale, "pricing-cta-enterprise")
                        };
                        let price = price_label(plan, current, locale);
                        let button_class = if featured {
                            "button button--primary"
                        } else {
                            "button button--ghost"
                        };
                        rsx! {
                            article { key: "{plan.key.as_str()}", class: "{card_class}",
                                if featured {
                                    span { class: "plan-card__popular", {t!(locale, "pricing-popular")} }
                                }
                                h3 { class: "plan-card__name", "{copy.name}" }
                                p { class: "plan-card__description", "{copy.description}" }
                                div { class: "plan-card__price",
                                    strong { "{price}" }
                                    span { class: "plan-card__period", "{copy.period}" }
                                }
                                ul { class: "plan-card__features",
                                    for feature in plan.features.iter() {
                                        li { key: "{feature}", "{feature}" }
                                    }
                                }
                                a { class: "{button_class}", href: "#", "{cta}" }
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

    fn plan(key: PlanKey) -> &'static PricingPlan {
        plans(Locale::En).iter().find(|p| p.key == key).unwrap()
    }

    #[test]
    fn growth_is_discounted_yearly() {
        assert_eq!(price_label(plan(PlanKey::Growth), Billing::Monthly, Locale::En), "$99");
        assert_eq!(price_label(plan(PlanKey::Growth), Billing::Yearly, Locale::En), "$79");
        assert_eq!(price_label(plan(PlanKey::Starter), Billing::Yearly, Locale::En), "$0");
    }

    #[test]
    fn enterprise_is_custom() {
        assert_eq!(
            price_label(plan(PlanKey::Enterprise), Billing::Monthly, Locale::En),
            "Custom"
        );
    }
}
