use std::fmt;
use std::str::FromStr;
use thiserror::Error;

mod badge;

pub use badge::StatusBadge;

/// Publication status of a game listed on the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Live,
    Dev,
    ComingSoon,
    /// Fallback for catalog values outside the known set. Never interactive.
    Unrecognized,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown game status `{0}`")]
pub struct StatusParseError(pub String);

impl GameStatus {
    /// Only live games can be opened from their card.
    pub fn is_live(self) -> bool {
        matches!(self, GameStatus::Live)
    }

    /// Decodes a catalog value, degrading to [`GameStatus::Unrecognized`]
    /// instead of failing.
    pub fn decode(raw: &str) -> Self {
        raw.parse().unwrap_or(GameStatus::Unrecognized)
    }
}

impl FromStr for GameStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "live" => Ok(GameStatus::Live),
            "dev" => Ok(GameStatus::Dev),
            "coming-soon" => Ok(GameStatus::ComingSoon),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Live => "live",
            GameStatus::Dev => "dev",
            GameStatus::ComingSoon => "coming-soon",
            GameStatus::Unrecognized => "unrecognized",
        };
        f.write_str(name)
    }
}

/// A single game shown as a card on the hub. Built once from the catalog and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub title: String,
    pub description: String,
    pub url: String,
    pub emoji: String,
    pub status: GameStatus,
    /// Technology tags in display order. Duplicates are kept.
    pub technologies: Vec<String>,
}

impl GameRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        emoji: impl Into<String>,
        status: GameStatus,
        technologies: &[&str],
    ) -> Self {
        GameRecord {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            emoji: emoji.into(),
            status,
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn is_live(&self) -> bool {
        self.status.is_live()
    }
}
