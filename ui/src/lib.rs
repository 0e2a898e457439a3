//! Shared UI crate for the Nexora site. Views, content, localization and the demo
//! dashboard engine live here; the platform crates only launch the router.

pub mod config;
pub mod content;
pub mod core;
pub mod demo;
pub mod error;
pub mod i18n;
pub mod routes;
pub mod sections;
pub mod views;

pub mod components {
    mod language_switcher;
    mod metric_card;
    mod section_badge;
    mod site_footer;
    mod site_header;
    mod site_root;
    mod theme_toggle;

    pub use language_switcher::LanguageSwitcher;
    pub use metric_card::MetricCard;
    pub use section_badge::SectionBadge;
    pub use site_footer::SiteFooter;
    pub use site_header::SiteHeader;
    pub use site_root::SiteRoot;
    pub use theme_toggle::ThemeToggle;
}

pub use error::SiteError;
pub use routes::Route;
