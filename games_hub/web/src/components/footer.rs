use dioxus::prelude::*;
use games_hub_core::{FooterLink, Language};

/// Page footer with the developer attribution and outbound links. Links
/// open in a new tab without opener or referrer.
#[component]
pub fn Footer(developer: String, links: Vec<FooterLink>, year: i32, language: Language) -> Element {
    rsx! {
        footer { class: "footer",
            p {
                "{language.developed_by()} "
                strong { "{developer}" }
                " | {year}"
            }
            div { class: "footer-links",
                {links.iter().map(|link| rsx! {
                    a {
                        key: "{link.href}",
                        href: "{link.href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{link.label}"
                    }
                })}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{opening_tags, render_with};

    #[derive(Props, Clone, PartialEq)]
    struct Harness {
        year: i32,
        language: Language,
    }

    fn harness(props: Harness) -> Element {
        rsx! {
            Footer {
                developer: "Javier Sánchez".to_string(),
                links: vec![
                    FooterLink::new("GitHub", "https://github.com/jsanchezdaza"),
                    FooterLink::new("Portfolio", "https://javisan.dev"),
                ],
                year: props.year,
                language: props.language,
            }
        }
    }

    #[test]
    fn renders_attribution_with_year() {
        let html = render_with(
            harness,
            Harness {
                year: 2031,
                language: Language::En,
            },
        );

        assert!(html.contains("Developed by "), "{html}");
        assert!(html.contains("<strong>Javier Sánchez</strong>"), "{html}");
        assert!(html.contains(" | 2031"), "{html}");
    }

    #[test]
    fn renders_spanish_attribution() {
        let html = render_with(
            harness,
            Harness {
                year: 2025,
                language: Language::Es,
            },
        );

        assert!(html.contains("Desarrollado por "), "{html}");
        assert!(html.contains(" | 2025"), "{html}");
    }

    #[test]
    fn outbound_links_open_without_opener_or_referrer() {
        let html = render_with(
            harness,
            Harness {
                year: 2031,
                language: Language::En,
            },
        );

        let anchors = opening_tags(&html, "a");
        assert_eq!(anchors.len(), 2);
        for anchor in anchors {
            assert!(anchor.contains(r#"target="_blank""#), "{anchor}");
            assert!(anchor.contains(r#"rel="noopener noreferrer""#), "{anchor}");
        }
        assert!(html.contains(r#"href="https://github.com/jsanchezdaza""#));
        assert!(html.contains(r#"href="https://javisan.dev""#));
        assert!(html.contains(">GitHub</a>"));
        assert!(html.contains(">Portfolio</a>"));
    }

    #[test]
    fn links_sit_in_footer_links_container() {
        let html = render_with(
            harness,
            Harness {
                year: 2031,
                language: Language::En,
            },
        );

        assert!(html.contains(r#"<footer class="footer">"#));
        assert!(html.contains(r#"<div class="footer-links"><a "#), "{html}");
    }
}
