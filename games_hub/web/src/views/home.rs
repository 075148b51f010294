use crate::components::{About, GamesGrid, Header, Layout};
use dioxus::prelude::*;
use games_hub_core::SiteConfig;

/// Catalog compiled into the bundle.
const CATALOG: &str = include_str!("../../catalog.toml");

/// The hub landing page, built from the embedded catalog.
#[component]
pub fn Home() -> Element {
    let site = use_hook(|| SiteConfig::from_toml_or_seed(CATALOG));

    rsx! {
        document::Title { "{site.document_title}" }
        HubPage { site }
    }
}

/// Banner, game grid, about section and footer for a given catalog.
#[component]
pub fn HubPage(site: SiteConfig) -> Element {
    let language = site.language;

    rsx! {
        Header { title: site.title.clone() }
        Layout {
            developer: site.developer.clone(),
            links: site.links.clone(),
            language,

            GamesGrid { games: site.games.clone(), language }
            About { language, paragraphs: site.about.clone() }
        }
    }
}
