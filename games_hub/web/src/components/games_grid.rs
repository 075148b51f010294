use super::GameCard;
use dioxus::prelude::*;
use games_hub_core::{GameRecord, Language};

/// Grid of game cards in catalog order, keyed by position.
#[component]
pub fn GamesGrid(games: Vec<GameRecord>, language: Language) -> Element {
    rsx! {
        section { class: "games-section",
            div { class: "games-grid",
                {games.iter().enumerate().map(|(index, game)| rsx! {
                    GameCard { key: "{index}", game: game.clone(), language }
                })}
            }
        }
    }
}
