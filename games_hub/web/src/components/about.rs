use dioxus::prelude::*;
use games_hub_core::Language;

#[component]
pub fn About(language: Language, paragraphs: Vec<String>) -> Element {
    rsx! {
        section { class: "about-section",
            div { class: "about-content",
                h2 { "{language.about_heading()}" }
                {paragraphs.iter().enumerate().map(|(index, paragraph)| rsx! {
                    p { key: "{index}", "{paragraph}" }
                })}
            }
        }
    }
}
