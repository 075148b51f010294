use super::GameStatus;
use crate::locale::Language;

/// Badge colors keyed by status.
const LIVE_COLOR: &str = "#10b981";
const DEV_COLOR: &str = "#f59e0b";
const MUTED_COLOR: &str = "#6b7280";

/// Label and background color shown in a card's status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: &'static str,
}

impl StatusBadge {
    pub fn new(status: GameStatus, language: Language) -> Self {
        StatusBadge {
            label: language.status_label(status),
            color: status.color(),
        }
    }
}

impl GameStatus {
    pub fn color(self) -> &'static str {
        match self {
            GameStatus::Live => LIVE_COLOR,
            GameStatus::Dev => DEV_COLOR,
            GameStatus::ComingSoon | GameStatus::Unrecognized => MUTED_COLOR,
        }
    }
}
