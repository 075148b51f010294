use dioxus::prelude::*;

/// Page banner with the hub title behind a fixed gamepad prefix.
#[component]
pub fn Header(title: String) -> Element {
    rsx! {
        header { class: "header", role: "banner",
            div { class: "header-content",
                h1 { class: "title", "🎮 {title}" }
            }
        }
    }
}
