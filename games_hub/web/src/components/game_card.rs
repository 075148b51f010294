use crate::context::Opener;
use dioxus::prelude::*;
use games_hub_core::{Activation, GameRecord, Language, StatusBadge, Trigger};

/// Card for a single game. Live games open in a new tab on click, `Enter`
/// or `Space`; every other status renders as plain, unfocusable content.
#[component]
pub fn GameCard(game: GameRecord, language: Language) -> Element {
    let opener = use_hook(Opener::from_context);
    let activation = Activation::for_game(&game);
    let badge = StatusBadge::new(game.status, language);

    let body = rsx! {
        div { class: "game-card-header",
            span { class: "game-emoji", "{game.emoji}" }
            div { class: "game-status", style: "background-color: {badge.color}",
                "{badge.label}"
            }
        }

        div { class: "game-card-content",
            h3 { class: "game-title", "{game.title}" }
            p { class: "game-description", "{game.description}" }

            div { class: "game-technologies",
                {game.technologies.iter().enumerate().map(|(index, tech)| rsx! {
                    span { key: "{index}", class: "tech-tag", "{tech}" }
                })}
            }
        }
    };

    if !activation.is_interactive() {
        return rsx! {
            div { class: "game-card", {body} }
        };
    }

    let on_click = {
        let activation = activation.clone();
        let opener = opener.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            activation.activate(Trigger::Click, opener.get());
        }
    };

    let on_keydown = move |evt: KeyboardEvent| {
        let key = evt.key().to_string();
        let Some(trigger) = Trigger::from_keydown(&key, evt.is_auto_repeating()) else {
            return;
        };
        if trigger.suppresses_default() {
            evt.prevent_default();
        }
        activation.activate(trigger, opener.get());
    };

    let play_label = language.play_label(&game.title);

    rsx! {
        div {
            class: "game-card clickable",
            role: "button",
            tabindex: "0",
            aria_label: "{play_label}",
            onclick: on_click,
            onkeydown: on_keydown,

            {body}

            div { class: "game-card-footer",
                span { class: "play-text", "{language.call_to_action()}" }
            }
        }
    }
}
