use dioxus::prelude::*;

use crate::core::theme::{use_color_scheme_provider, ColorScheme};
use crate::routes::Route;

/// Root of the site: installs shared state and mounts the router.
/// Platform crates render this after their own stylesheets.
#[component]
pub fn SiteRoot() -> Element {
    use_color_scheme_provider(ColorScheme::default());

    rsx! {
        Router::<Route> {}
    }
}
