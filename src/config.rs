use crate::{Bonuses, ConfigError, PLAYER_CAPACITY};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// The default number of [tiles](crate::Tile) dealt to each player.
pub const DEFAULT_HAND_LEN: usize = 6;

/// The default number of copies of each [tile](crate::Tile) in the bag.
pub const DEFAULT_UNIQUE_TILE_COPIED_COUNT: usize = 3;

/// Parameters of one game run by a [Referee](crate::Referee).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RefereeConfig {
    /// The fewest players a game starts with.
    pub min_players: usize,
    /// The most players a game starts with.
    pub max_players: usize,
    /// The time budget of [Player::take_turn](crate::Player::take_turn),
    /// [Player::new_tiles](crate::Player::new_tiles) and [Player::win](crate::Player::win).
    pub turn_timeout: Duration,
    /// The time budget of [Player::name](crate::Player::name) and
    /// [Player::set_up](crate::Player::set_up).
    pub setup_timeout: Duration,
    /// The time budget of each [observer](crate::Observer) call.
    pub observer_timeout: Duration,
    /// The number of [tiles](crate::Tile) dealt to each player.
    pub hand_len: usize,
    /// The number of copies of each [tile](crate::Tile) in the bag.
    pub unique_tile_copied_count: usize,
    /// The game ends with no winners when fewer players survive setup.
    pub min_active_players: usize,
    /// Extra points on top of one point per [tile](crate::Tile).
    pub bonuses: Bonuses,
    /// Shuffles the bag deterministically when present.
    pub seed: Option<u64>,
}

impl Default for RefereeConfig {
    fn default() -> Self {
        RefereeConfig {
            min_players: 2,
            max_players: PLAYER_CAPACITY,
            turn_timeout: Duration::from_secs(6),
            setup_timeout: Duration::from_secs(6),
            observer_timeout: Duration::from_secs(6),
            hand_len: DEFAULT_HAND_LEN,
            unique_tile_copied_count: DEFAULT_UNIQUE_TILE_COPIED_COUNT,
            min_active_players: 1,
            bonuses: Bonuses::default(),
            seed: None,
        }
    }
}

/// Parameters of the sign-up phase followed by one game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ServerConfig {
    /// How long one sign-up attempt waits for players.
    pub sign_up_wait: Duration,
    /// How many sign-up attempts are made before giving up.
    pub sign_up_retries: usize,
    /// Whether the [server](crate::Server) attaches its observers to the game.
    pub observe: bool,
    /// Parameters of the game, including the player bounds applied during sign-up.
    pub referee: RefereeConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            sign_up_wait: Duration::from_secs(20),
            sign_up_retries: 2,
            observe: false,
            referee: RefereeConfig::default(),
        }
    }
}

/// Top-level TOML file structure. Every field is optional.
#[derive(Debug, Default, Deserialize)]
struct ServerConfigFile {
    min_players: Option<usize>,
    max_players: Option<usize>,
    sign_up_wait_ms: Option<u64>,
    sign_up_retries: Option<usize>,
    observe: Option<bool>,
    #[serde(default)]
    referee: RefereeConfigFile,
}

#[derive(Debug, Default, Deserialize)]
struct RefereeConfigFile {
    turn_timeout_ms: Option<u64>,
    setup_timeout_ms: Option<u64>,
    observer_timeout_ms: Option<u64>,
    hand_len: Option<usize>,
    unique_tile_copied_count: Option<usize>,
    min_active_players: Option<usize>,
    bonuses: Option<Bonuses>,
    seed: Option<u64>,
}

impl ServerConfigFile {
    fn into_config(self) -> ServerConfig {
        let d = ServerConfig::default();
        let r = self.referee;
        ServerConfig {
            sign_up_wait: self
                .sign_up_wait_ms
                .map_or(d.sign_up_wait, Duration::from_millis),
            sign_up_retries: self.sign_up_retries.unwrap_or(d.sign_up_retries),
            observe: self.observe.unwrap_or(d.observe),
            referee: RefereeConfig {
                min_players: self.min_players.unwrap_or(d.referee.min_players),
                max_players: self.max_players.unwrap_or(d.referee.max_players),
                turn_timeout: r
                    .turn_timeout_ms
                    .map_or(d.referee.turn_timeout, Duration::from_millis),
                setup_timeout: r
                    .setup_timeout_ms
                    .map_or(d.referee.setup_timeout, Duration::from_millis),
                observer_timeout: r
                    .observer_timeout_ms
                    .map_or(d.referee.observer_timeout, Duration::from_millis),
                hand_len: r.hand_len.unwrap_or(d.referee.hand_len),
                unique_tile_copied_count: r
                    .unique_tile_copied_count
                    .unwrap_or(d.referee.unique_tile_copied_count),
                min_active_players: r
                    .min_active_players
                    .unwrap_or(d.referee.min_active_players),
                bonuses: r.bonuses.unwrap_or(d.referee.bonuses),
                seed: r.seed.or(d.referee.seed),
            },
        }
    }
}

impl ServerConfig {
    /// Parses a TOML document, using defaults for any unspecified fields.
    ///
    /// # Errors
    ///
    /// * [ConfigError::Parse] The document is not valid TOML or has mistyped fields.
    pub fn from_toml(content: &str) -> Result<ServerConfig, ConfigError> {
        let file: ServerConfigFile = toml::from_str(content)?;
        Ok(file.into_config())
    }

    /// Loads a TOML file at `path`, using defaults for any unspecified fields.
    ///
    /// # Errors
    ///
    /// * [ConfigError::Read] The file cannot be read.
    /// * [ConfigError::Parse] The file is not valid TOML or has mistyped fields.
    pub fn load(path: &Path) -> Result<ServerConfig, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = ServerConfig::from_toml(&content)?;
        tracing::info!(
            path = %path.display(),
            min_players = config.referee.min_players,
            max_players = config.referee.max_players,
            "loaded server config"
        );
        Ok(config)
    }
}
