//! Site content: page copy, footer links and the list of games.
//!
//! The catalog is TOML embedded by the front end and loaded through
//! `config`. [`SiteConfig::load`] additionally lets `GAMES_HUB_*`
//! environment variables override scalar values on platforms that have an
//! environment; [`SiteConfig::from_toml`] reads the TOML alone.

use crate::game::{GameRecord, GameStatus};
use crate::locale::Language;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

const ENV_PREFIX: &str = "GAMES_HUB";
/// The footer always shows the source-code profile and the personal site.
pub const FOOTER_LINK_COUNT: usize = 2;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Game #{index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
    #[error("Footer needs exactly 2 links, found {0}")]
    FooterLinks(usize),
}

/// An outbound link rendered in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

impl FooterLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        FooterLink {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Shown in the page banner after the decorative prefix.
    pub title: String,
    /// Browser tab title.
    pub document_title: String,
    pub language: Language,
    pub developer: String,
    pub about: Vec<String>,
    pub links: Vec<FooterLink>,
    pub games: Vec<GameRecord>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    title: String,
    document_title: String,
    #[serde(default)]
    language: Language,
    developer: String,
    #[serde(default)]
    about: Vec<String>,
    links: Vec<FooterLink>,
    #[serde(default)]
    games: Vec<GameEntry>,
}

#[derive(Debug, Deserialize)]
struct GameEntry {
    title: String,
    description: String,
    url: String,
    emoji: String,
    status: String,
    #[serde(default)]
    technologies: Vec<String>,
}

impl GameEntry {
    fn into_record(self, index: usize) -> Result<GameRecord, CatalogError> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                index,
                field: "title",
            });
        }
        if self.description.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                index,
                field: "description",
            });
        }

        let status = GameStatus::decode(&self.status);
        if status == GameStatus::Unrecognized {
            warn!(
                title = %self.title,
                status = %self.status,
                "Unrecognized game status, rendering as non-interactive"
            );
        }

        Ok(GameRecord {
            title: self.title,
            description: self.description,
            url: self.url,
            emoji: self.emoji,
            status,
            technologies: self.technologies,
        })
    }
}

impl SiteConfig {
    /// Loads the catalog from TOML text alone.
    pub fn from_toml(toml: &str) -> Result<Self, CatalogError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::from_settings(settings)
    }

    /// Loads the catalog from TOML text with `GAMES_HUB_*` environment
    /// variables layered on top.
    pub fn load(toml: &str) -> Result<Self, CatalogError> {
        Self::load_with(toml, Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads the catalog, falling back to [`SiteConfig::seed`] when it is
    /// malformed.
    pub fn from_toml_or_seed(toml: &str) -> Self {
        Self::load(toml).unwrap_or_else(|err| {
            warn!(%err, "Failed to load game catalog, using built-in seed");
            Self::seed()
        })
    }

    fn load_with(toml: &str, environment: Environment) -> Result<Self, CatalogError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .add_source(environment)
            .build()?;

        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self, CatalogError> {
        let file: CatalogFile = settings.try_deserialize()?;
        Self::from_file(file)
    }

    fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        if file.links.len() != FOOTER_LINK_COUNT {
            return Err(CatalogError::FooterLinks(file.links.len()));
        }

        let games = file
            .games
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_record(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SiteConfig {
            title: file.title,
            document_title: file.document_title,
            language: file.language,
            developer: file.developer,
            about: file.about,
            links: file.links,
            games,
        })
    }

    /// Built-in catalog used when no valid catalog is available.
    pub fn seed() -> Self {
        SiteConfig {
            title: "Javi's Games Hub".to_string(),
            document_title: "Games Hub - Javi Sánchez".to_string(),
            language: Language::En,
            developer: "Javier Sánchez".to_string(),
            about: vec![
                "Welcome to my personal collection of web games. Each project is developed \
                 with modern technologies and designed to offer a fun and challenging experience."
                    .to_string(),
                "The games are constantly evolving, adding new features and improving the \
                 user experience."
                    .to_string(),
            ],
            links: vec![
                FooterLink::new("GitHub", "https://github.com/jsanchezdaza"),
                FooterLink::new("Portfolio", "https://javisan.dev"),
            ],
            games: vec![
                GameRecord::new(
                    "Connect 4",
                    "Classic strategy game where you must connect 4 pieces in a row. \
                     Challenge the AI or play with a friend!",
                    "/connect4",
                    "🔴",
                    GameStatus::Live,
                    &["React", "TypeScript", "CSS"],
                ),
                GameRecord::new(
                    "Quest Forge",
                    "Classic text-based role-playing game. Create your story, level up \
                     and embark on an epic adventure.",
                    "/quest-forge",
                    "⚔️",
                    GameStatus::Dev,
                    &["React", "TypeScript", "Tailwind CSS"],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
        title = "Test Hub"
        document_title = "Test Hub - Tester"
        language = "es"
        developer = "Tester"
        about = ["First paragraph.", "Second paragraph."]

        [[links]]
        label = "GitHub"
        href = "https://github.com/tester"

        [[links]]
        label = "Portfolio"
        href = "https://tester.dev"

        [[games]]
        title = "Connecta 4"
        description = "Juego clásico de estrategia"
        url = "/connecta4"
        emoji = "🔴"
        status = "live"
        technologies = ["React", "TypeScript", "CSS"]

        [[games]]
        title = "Quest Forge"
        description = "Herramienta para crear y gestionar aventuras"
        url = "/quest-forge"
        emoji = "⚔️"
        status = "coming-soon"
    "#;

    fn with_games(games: &str) -> String {
        format!(
            r#"
            title = "Hub"
            document_title = "Hub"
            developer = "Dev"

            [[links]]
            label = "GitHub"
            href = "https://github.com/dev"

            [[links]]
            label = "Portfolio"
            href = "https://dev.example"

            {games}
            "#
        )
    }

    #[test]
    fn can_load_catalog_from_toml() {
        // Act
        let site = SiteConfig::from_toml(CATALOG).unwrap();

        // Assert
        assert_eq!(site.title, "Test Hub");
        assert_eq!(site.document_title, "Test Hub - Tester");
        assert_eq!(site.language, Language::Es);
        assert_eq!(site.developer, "Tester");
        assert_eq!(site.about, vec!["First paragraph.", "Second paragraph."]);
        assert_eq!(
            site.links,
            vec![
                FooterLink::new("GitHub", "https://github.com/tester"),
                FooterLink::new("Portfolio", "https://tester.dev"),
            ]
        );
        assert_eq!(
            site.games,
            vec![
                GameRecord::new(
                    "Connecta 4",
                    "Juego clásico de estrategia",
                    "/connecta4",
                    "🔴",
                    GameStatus::Live,
                    &["React", "TypeScript", "CSS"],
                ),
                GameRecord::new(
                    "Quest Forge",
                    "Herramienta para crear y gestionar aventuras",
                    "/quest-forge",
                    "⚔️",
                    GameStatus::ComingSoon,
                    &[],
                ),
            ]
        );
    }

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn environment_overrides_scalar_values() {
        // Arrange
        let environment = environment(&[
            ("GAMES_HUB_TITLE", "Overridden Hub"),
            ("GAMES_HUB_DEVELOPER", "Someone Else"),
        ]);

        // Act
        let site = SiteConfig::load_with(CATALOG, environment).unwrap();

        // Assert
        assert_eq!(site.title, "Overridden Hub");
        assert_eq!(site.developer, "Someone Else");
        assert_eq!(site.document_title, "Test Hub - Tester");
        assert_eq!(site.games.len(), 2);
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let environment = environment(&[("OTHER_TITLE", "Nope"), ("TITLE", "Nope")]);

        let site = SiteConfig::load_with(CATALOG, environment).unwrap();

        assert_eq!(site, SiteConfig::from_toml(CATALOG).unwrap());
    }

    #[test]
    fn language_defaults_to_english() {
        let site = SiteConfig::from_toml(&with_games("")).unwrap();

        assert_eq!(site.language, Language::En);
        assert!(site.games.is_empty());
        assert!(site.about.is_empty());
    }

    #[test]
    fn unknown_status_degrades_instead_of_failing() {
        let toml = with_games(
            r#"
            [[games]]
            title = "Retro"
            description = "Old game"
            url = "/retro"
            emoji = "👾"
            status = "archived"
            "#,
        );

        let site = SiteConfig::from_toml(&toml).unwrap();

        assert_eq!(site.games[0].status, GameStatus::Unrecognized);
        assert!(!site.games[0].is_live());
    }

    #[test]
    fn rejects_game_with_empty_title() {
        let toml = with_games(
            r#"
            [[games]]
            title = "Fine"
            description = "A game"
            url = "/fine"
            emoji = "🙂"
            status = "dev"

            [[games]]
            title = "   "
            description = "A game"
            url = "/blank"
            emoji = "🙂"
            status = "dev"
            "#,
        );

        let result = SiteConfig::from_toml(&toml);

        assert!(matches!(
            result,
            Err(CatalogError::EmptyField {
                index: 1,
                field: "title"
            })
        ));
    }

    #[test]
    fn rejects_game_with_empty_description() {
        let toml = with_games(
            r#"
            [[games]]
            title = "Blank"
            description = ""
            url = "/blank"
            emoji = "🙂"
            status = "live"
            "#,
        );

        let result = SiteConfig::from_toml(&toml);

        assert!(matches!(
            result,
            Err(CatalogError::EmptyField {
                index: 0,
                field: "description"
            })
        ));
    }

    #[test]
    fn rejects_wrong_number_of_footer_links() {
        let toml = r#"
            title = "Hub"
            document_title = "Hub"
            developer = "Dev"

            [[links]]
            label = "GitHub"
            href = "https://github.com/dev"
        "#;

        let result = SiteConfig::from_toml(toml);

        assert!(matches!(result, Err(CatalogError::FooterLinks(1))));
    }

    #[test]
    fn rejects_missing_fields() {
        let result = SiteConfig::from_toml(r#"title = "Hub""#);

        assert!(matches!(result, Err(CatalogError::Config(_))));
    }

    #[test]
    fn falls_back_to_seed_on_malformed_catalog() {
        let site = SiteConfig::from_toml_or_seed("this is = = not toml");

        assert_eq!(site, SiteConfig::seed());
    }

    #[test]
    fn seed_lists_connect_4_then_quest_forge() {
        let site = SiteConfig::seed();

        let titles: Vec<&str> = site.games.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Connect 4", "Quest Forge"]);
        assert!(site.games[0].is_live());
        assert_eq!(site.games[0].url, "/connect4");
        assert_eq!(site.games[1].status, GameStatus::Dev);
        assert_eq!(
            site.games[1].technologies,
            vec!["React", "TypeScript", "Tailwind CSS"]
        );
        assert_eq!(site.links.len(), FOOTER_LINK_COUNT);
    }
}
