//! A referee for a matching tile game played by untrusted players, with the rulebook it
//! enforces and the sign-up phase that gathers its players.
//!
//! ## Summary
//!
//! Players take turns to place [tiles](Tile) on an unbounded grid so that every line of
//! [tiles](Tile) shares either a [color](Color) or a [shape](Shape) and never repeats a
//! [tile](Tile). A turn is either a [pass](TurnAction::Pass), an
//! [exchange](TurnAction::Exchange) of the whole hand with the bag, or a
//! [placement](TurnAction::Place) of one or more [tiles](Tile) in a single row or column.
//! Players earn a point for every [tile](Tile) they place. The active players with the most
//! points win.
//!
//! Players are untrusted. Every call into a [Player] runs under a timeout, and a call that
//! fails, times out or answers with a [broken rule](RuleViolation) eliminates the player.
//! The [tiles](Tile) of an eliminated player return to the bag.
//!
//! ## What are the phases of the game?
//!
//! * `Setup`: Each player is asked for its name and receives the board and its hand.
//! Represented by [Referee].
//! * `Turns`: Active players take turns in registration order. Represented by [Turns].
//! * `Over`: The game has ended. Every player learns whether it won and observers receive
//! the final state. Represented by [GameOver].
//!
//! Each phase is consumed to produce either the next phase or [GameOver], so a finished game
//! cannot be advanced. [Referee::run] drives a game from setup to its [result](GameResult).
//!
//! ## How is the game created?
//!
//! [Referee::new] checks the players and the supply of [tiles](Tile), shuffles the bag, deals
//! every hand and places one [tile](Tile) at `(0, 0)`. [Referee::from_record] restores a game
//! from a [StateRecord] instead.
//!
//! [Server] gathers players from a channel during a bounded number of sign-up attempts and
//! runs one game with them when enough players signed up.
//!
//! ## How are tiles placed?
//!
//! [check_action] accepts a placement when the player holds its [tiles](Tile), they lie in a
//! single row or column on empty cells, every [tile](Tile) touches the board, and every line
//! touching the placement stays a line of one [color](Color) or one [shape](Shape) without
//! duplicates. The placed [tiles](Tile) leave the hand and the hand is refilled from the bag.
//!
//! ## How are points calculated?
//!
//! [score] counts [POINTS_PER_TILE] for each [tile](Tile) placed, whatever the lines it
//! extends. Emptying the hand adds the [hand emptied bonus](Bonuses::hand_emptied) and ending
//! the game adds the [last placement bonus](Bonuses::last_placement).
//!
//! ## How is the game ended?
//!
//! The game ends when a placement empties the hand of its player, when a full round of active
//! players passes or exchanges, when nobody can place any [tile](Tile) and the bag is empty,
//! or when every player is eliminated.
//!
//! ## How is the game observed?
//!
//! [Observers](Observer) receive a [GameSnapshot] after setup and after every turn and the
//! [result](GameResult) once at the end, each call under a timeout. Failing or silent observers
//! are logged and ignored.
//!
//! ## How are players and observers tested?
//!
//! The `test` build configuration adds a [player](Player) that follows a script and
//! misbehaves on demand, an [observer](Observer) that records everything, and helpers that
//! generate random [tiles](Tile), hands and [coordinates](Coordinate).

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_debug_implementations,
    unsafe_code
)]

pub use action::*;
pub use config::*;
pub use consts::*;
pub use coordinate::*;
pub use error::*;
pub use line::*;
pub use observer::*;
pub use player::*;
pub use player_state::*;
#[cfg(test)]
pub use random::*;
pub use record::*;
pub use referee::*;
pub use rulebook::*;
#[cfg(test)]
pub use scripted::*;
pub use sign_up::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod action;
mod config;
mod consts;
mod coordinate;
mod error;
mod line;
mod observer;
mod player;
mod player_state;
#[cfg(test)]
mod random;
mod record;
mod referee;
mod rulebook;
#[cfg(test)]
mod scripted;
mod sign_up;
mod snapshot;
mod tile;
mod types;
