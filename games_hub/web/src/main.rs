use dioxus::prelude::*;

mod browser;
mod components;
mod context;
mod views;

use views::Home;

// We can import assets in dioxus with the `asset!` macro. This macro takes a path to an asset relative to the crate root.
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // `launch` installs the default tracing subscriber before mounting the app.
    dioxus::launch(App);
}

/// Root of the hub. Provides the browser-backed capabilities the page
/// components read from context.
#[component]
fn App() -> Element {
    use_context_provider(context::Opener::browser);
    use_context_provider(context::SiteClock::system);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Home {}
    }
}
