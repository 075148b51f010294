//! Fixed page copy in the languages the hub is published in.

use crate::game::GameStatus;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn status_label(self, status: GameStatus) -> &'static str {
        match (self, status) {
            (Language::En, GameStatus::Live) => "🟢 Available",
            (Language::En, GameStatus::Dev) => "🟡 In Development",
            (Language::En, GameStatus::ComingSoon) => "⚪ Coming Soon",
            (Language::En, GameStatus::Unrecognized) => "Unknown status",
            (Language::Es, GameStatus::Live) => "🟢 Disponible",
            (Language::Es, GameStatus::Dev) => "🟡 En desarrollo",
            (Language::Es, GameStatus::ComingSoon) => "⚪ Próximamente",
            (Language::Es, GameStatus::Unrecognized) => "Estado desconocido",
        }
    }

    /// Accessible name of a live card, e.g. `Play Connect 4`.
    pub fn play_label(self, title: &str) -> String {
        let verb = match self {
            Language::En => "Play",
            Language::Es => "Jugar",
        };
        format!("{verb} {title}")
    }

    pub fn call_to_action(self) -> &'static str {
        match self {
            Language::En => "Play now! →",
            Language::Es => "¡Jugar ahora! →",
        }
    }

    pub fn developed_by(self) -> &'static str {
        match self {
            Language::En => "Developed by",
            Language::Es => "Desarrollado por",
        }
    }

    pub fn about_heading(self) -> &'static str {
        match self {
            Language::En => "About this Hub",
            Language::Es => "Sobre este Hub",
        }
    }
}
