use dioxus::prelude::*;

#[component]
pub fn SectionBadge(children: Element) -> Element {
    rsx! {
        span { class: "section-badge", {children} }
    }
}
