mod about;
mod footer;
mod game_card;
mod games_grid;
mod header;
mod layout;

pub use about::About;
pub use footer::Footer;
pub use game_card::GameCard;
pub use games_grid::GamesGrid;
pub use header::Header;
pub use layout::Layout;
