use crate::{
    has_legal_placement, send_state, Bag, Board, Call, Fault, GameSnapshot, Hand, Observer,
    PlayerError, PlayerState, ProtocolFault, RefereeConfig,
};
use std::collections::BTreeSet;
use std::fmt;
use std::future::Future;
use std::time::Duration;
use tokio::time;
use tracing::Span;

pub use game_over::*;
pub use setup::*;
pub use turn::*;

mod game_over;
mod setup;
mod turn;

/// The outcome of one game, produced once when the game is over.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct GameResult {
    /// The names of the active players with the maximum score.
    pub winners: BTreeSet<String>,
    /// The names of the players eliminated for a fault.
    pub eliminated: BTreeSet<String>,
}

impl GameResult {
    /// The result of a game that never started: no winners and no eliminated players.
    pub fn empty() -> GameResult {
        GameResult::default()
    }
}

/// State shared by every phase of one game. Only the referee mutates it, one turn at a time.
struct Game {
    config: RefereeConfig,
    board: Board,
    bag: Bag,
    players: Vec<PlayerState>,
    observers: Vec<Box<dyn Observer>>,
    span: Span,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("board", &self.board)
            .field("bag", &self.bag)
            .field("players", &self.players)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Game {
    fn active_len(&self) -> usize {
        self.players
            .iter()
            .filter(|player| !player.is_eliminated())
            .count()
    }

    /// The index of the first active player after `index` in registration order, wrapping
    /// around and ending at `index` itself.
    fn next_active_player(&self, index: usize) -> Option<usize> {
        let players_len = self.players.len();
        (1..=players_len)
            .map(|offset| (index + offset) % players_len)
            .find(|&next| !self.players[next].is_eliminated())
    }

    /// Removes up to `tiles_len` [tiles](crate::Tile) from the end of the bag.
    fn draw(&mut self, tiles_len: usize) -> Hand {
        self.bag
            .drain(self.bag.len().saturating_sub(tiles_len)..)
            .collect()
    }

    /// Puts `tiles` at the front of the bag so that they are drawn last.
    fn return_to_bag(&mut self, tiles: Hand) {
        self.bag.splice(0..0, tiles);
    }

    fn eliminate(&mut self, index: usize, fault: &Fault) {
        let player = &mut self.players[index];
        if player.is_eliminated() {
            unreachable!("an eliminated player is never called.");
        }
        tracing::warn!(player = player.name(), %fault, "eliminating player");
        let hand = player.eliminate();
        self.return_to_bag(hand);
    }

    /// Whether the bag is empty and no active player can place any [tile](crate::Tile).
    fn is_deadlocked(&self) -> bool {
        self.bag.is_empty()
            && !self
                .players
                .iter()
                .filter(|player| !player.is_eliminated())
                .any(|player| has_legal_placement(&self.board, player.hand()))
    }

    fn snapshot(&self, current_player: Option<usize>) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            bag: self.bag.clone(),
            players: self.players.iter().map(PlayerState::snapshot).collect(),
            current_player,
        }
    }

    async fn broadcast(&self, current_player: Option<usize>) {
        if self.observers.is_empty() {
            return;
        }
        if let Err(errors) = send_state(
            &self.observers,
            &self.snapshot(current_player),
            self.config.observer_timeout,
        )
        .await
        {
            for error in errors {
                tracing::warn!(%error, "observer failed to receive state");
            }
        }
    }
}

/// Awaits one player call for at most `after`.
///
/// # Errors
///
/// * [ProtocolFault::Failed] The call returned an error.
/// * [ProtocolFault::TimedOut] The call did not return in time. It is dropped.
async fn call_with_timeout<T>(
    call: Call,
    after: Duration,
    future: impl Future<Output = Result<T, PlayerError>>,
) -> Result<T, ProtocolFault> {
    match time::timeout(after, future).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(source)) => Err(ProtocolFault::Failed { call, source }),
        Err(_) => Err(ProtocolFault::TimedOut { call, after }),
    }
}
