use super::Footer;
use crate::context::SiteClock;
use dioxus::prelude::*;
use games_hub_core::{FooterLink, Language};

/// Wraps page content in the `main` landmark and appends the footer. The
/// footer year is read from the clock in context on every render.
#[component]
pub fn Layout(
    developer: String,
    links: Vec<FooterLink>,
    language: Language,
    children: Element,
) -> Element {
    let clock = use_hook(SiteClock::from_context);
    let year = clock.current_year();

    rsx! {
        div { class: "layout",
            main { class: "main", {children} }
            Footer {
                developer,
                links,
                year,
                language,
            }
        }
    }
}
