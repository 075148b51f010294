//! Core domain models and behaviour for the Games Hub landing page.
pub mod activation;
pub mod catalog;
pub mod clock;
pub mod game;
pub mod locale;

pub use activation::{Activation, Outcome, OpenError, Trigger, UrlOpener};
pub use catalog::{CatalogError, FooterLink, SiteConfig};
pub use clock::{Clock, FixedClock, SystemClock};
pub use game::{GameRecord, GameStatus, StatusBadge};
pub use locale::Language;
