use dioxus::prelude::*;

use crate::config;
use crate::core::locale::Locale;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
struct FooterColumn {
    title: String,
    links: Vec<(String, String)>,
}

fn columns(locale: Locale) -> Vec<FooterColumn> {
    vec![
        FooterColumn {
            title: t!(locale, "footer-product"),
            links: vec![
                (t!(locale, "footer-link-features"), format!("/{locale}#features")),
                (t!(locale, "footer-link-pricing"), format!("/{locale}#pricing")),
                (t!(locale, "footer-link-demo"), format!("/{locale}/demo")),
                (t!(locale, "footer-link-changelog"), "#".to_string()),
            ],
        },
        FooterColumn {
            title: t!(locale, "footer-company"),
            links: vec![
                (t!(locale, "footer-link-about"), "#".to_string()),
                (t!(locale, "footer-link-blog"), format!("/{locale}/blog")),
                (t!(locale, "footer-link-careers"), "#".to_string()),
                (t!(locale, "footer-link-contact"), "#".to_string()),
            ],
        },
        FooterColumn {
            title: t!(locale, "footer-legal"),
            links: vec![
                (t!(locale, "footer-link-privacy"), "#".to_string()),
                (t!(locale, "footer-link-terms"), "#".to_string()),
                (t!(locale, "footer-link-security"), "#".to_string()),
            ],
        },
    ]
}

#[component]
pub fn SiteFooter(locale: Locale) -> Element {
    let brand = config::site().brand.to_lowercase();

    rsx! {
        footer { class: "footer", role: "contentinfo",
            div { class: "footer__grid",
                div { class: "footer__brand",
                    div { class: "footer__brand-row",
                        span { class: "navbar__brand-mark", aria_hidden: "true" }
                        span { class: "footer__brand-name", "{brand}" }
                    }
                    p { class: "footer__tagline", {t!(locale, "footer-tagline")} }
                }
                for column in columns(locale) {
                    div { key: "{column.title}", class: "footer__column",
                        h3 { class: "footer__column-title", "{column.title}" }
                        for (label, href) in column.links {
                            a { key: "{label}", class: "footer__link", href: "{href}", "{label}" }
                        }
                    }
                }
            }
            div { class: "footer__bottom",
                span { {t!(locale, "footer-copyright")} }
                span { class: "footer__status",
                    span { class: "footer__status-dot", aria_hidden: "true" }
                    {t!(locale, "footer-status")}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_links_are_locale_prefixed() {
        let cols = columns(Locale::Ar);
        assert_eq!(cols.len(), 3);
        assert!(cols[0].links.iter().any(|(_, href)| href == "/ar/demo"));
        assert!(cols[1].links.iter().any(|(_, href)| href == "/ar/blog"));
    }
}
