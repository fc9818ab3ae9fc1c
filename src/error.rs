use crate::{Coordinate, PlacementError, Tile};
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

/// A submitted [turn action](crate::TurnAction) broke the rules. The player is at fault and
/// gets eliminated.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum RuleViolation {
    /// The placed [tiles](Tile) cannot be put on the board.
    #[error("illegal placement: {0:?}")]
    IllegalPlacement(HashSet<PlacementError>),
    /// The placed [tiles](Tile) are not all held by the player.
    #[error("placed tiles not held in hand: {tiles:?}")]
    TilesNotInHand {
        /// [Tiles](Tile) placed without a matching [tile](Tile) in the hand.
        tiles: Vec<Tile>,
    },
    /// The bag does not hold enough [tiles](Tile) to replace the hand.
    #[error("cannot exchange {hand_len} tiles with {bag_len} tiles left in the bag")]
    CannotExchange {
        /// The number of [tiles](Tile) in the player's hand.
        hand_len: usize,
        /// The number of [tiles](Tile) left in the bag.
        bag_len: usize,
    },
}

/// A failure reported by a [player](crate::Player) implementation, whatever its transport.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum PlayerError {
    /// The connection to the player is gone.
    #[error("player disconnected")]
    Disconnected,
    /// The player answered with data that cannot be understood.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// Anything else that went wrong on the player's side.
    #[error("{0}")]
    Other(String),
}

/// The player capability that was being called.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Call {
    /// [Player::name](crate::Player::name)
    Name,
    /// [Player::set_up](crate::Player::set_up)
    SetUp,
    /// [Player::take_turn](crate::Player::take_turn)
    TakeTurn,
    /// [Player::new_tiles](crate::Player::new_tiles)
    NewTiles,
    /// [Player::win](crate::Player::win)
    Win,
}

/// A call into a [player](crate::Player) failed or did not return in time. The player is at
/// fault and gets eliminated.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ProtocolFault {
    /// The call returned an error.
    #[error("{call:?} failed: {source}")]
    Failed {
        /// The capability being called.
        call: Call,
        /// The error returned by the player.
        source: PlayerError,
    },
    /// The call did not return within its time budget.
    #[error("{call:?} timed out after {}ms", .after.as_millis())]
    TimedOut {
        /// The capability being called.
        call: Call,
        /// The time budget of the call.
        after: Duration,
    },
}

/// Why a player was eliminated.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Fault {
    /// See [RuleViolation].
    #[error(transparent)]
    Rule(#[from] RuleViolation),
    /// See [ProtocolFault].
    #[error(transparent)]
    Protocol(#[from] ProtocolFault),
}

/// A failure reported by an [observer](crate::Observer). It is logged and otherwise ignored.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("observer failed: {0}")]
pub struct ObserverError(pub String);

/// Describes the reason why a [Referee](crate::Referee) could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum NewError {
    /// Attempting to start with no players.
    EmptyPlayers,
    /// Attempting to start with fewer players than required.
    NotEnoughPlayers {
        /// The number of registered players.
        players_len: usize,
        /// The minimum number of players.
        min_players: usize,
    },
    /// Attempting to start with more players than allowed.
    TooManyPlayers {
        /// The number of registered players.
        players_len: usize,
        /// The maximum number of players.
        max_players: usize,
    },
    /// Attempting to start with an empty bag.
    EmptyBag,
    /// Attempting to start with empty hands.
    EmptyHands,
    /// Attempting to request more [tiles](Tile) than [tiles](Tile) in the bag.
    NotEnoughTiles {
        /// The number of [tiles](Tile) requested for hands and the first board tile.
        requested_tiles: usize,
        /// The number of available [tiles](Tile) in the bag.
        tiles_in_bag: usize,
    },
    /// Attempting to create more [tiles](Tile) than the [tile limit](crate::TILE_LIMIT).
    TooManyTiles {
        /// The number of [tiles](Tile) being created in the bag.
        tiles_in_bag: usize,
    },
    /// A received state holds a different number of player records than players.
    PlayerRecordsMismatch {
        /// The number of registered players.
        players_len: usize,
        /// The number of player records.
        records_len: usize,
    },
    /// A received board names the same cell twice.
    RepeatedCells {
        /// The cells named more than once, sorted.
        coordinates: Vec<Coordinate>,
    },
}

/// Describes the reason why a configuration file could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),
    /// The file is not valid TOML for a [ServerConfig](crate::ServerConfig).
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
