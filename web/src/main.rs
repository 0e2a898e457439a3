use dioxus::logger::tracing::{warn, Level};
use dioxus::prelude::*;

use ui::components::SiteRoot;

const FAVICON: Asset = asset!("/assets/favicon.svg");
// Shared theme lives in the ui crate; inject it directly so web and desktop stay identical.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    if ui::i18n::available_languages().is_empty() {
        warn!("no embedded message catalogs found");
    }

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Style { "{MAIN_CSS_INLINE}" }

        SiteRoot {}
    }
}
