use crate::{Board, PlayerError, Points, Tile, TurnAction};
use async_trait::async_trait;

/// What the player whose turn it is may know about the game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PublicState {
    /// Every [tile](Tile) placed so far.
    pub board: Board,
    /// The number of [tiles](Tile) left in the bag.
    pub remaining_tiles: usize,
    /// The [tiles](Tile) held by the player.
    pub hand: Vec<Tile>,
    /// The scores of every active player in turn order, starting with the player itself.
    pub scores: Points,
}

/// The capabilities the [referee](crate::Referee) calls into, implemented in-process or on top
/// of any transport.
///
/// Every call is bounded by a timeout. Returning an error or running out of time is a fault
/// and eliminates the player for the rest of the game; the referee never retries.
#[async_trait]
pub trait Player: Send + Sync {
    /// The name the player is reported under.
    async fn name(&self) -> Result<String, PlayerError>;

    /// Sends the board and the dealt [tiles](Tile) before the first turn.
    async fn set_up(&self, board: &Board, tiles: &[Tile]) -> Result<(), PlayerError>;

    /// Asks for the action of the player's turn.
    async fn take_turn(&self, state: PublicState) -> Result<TurnAction, PlayerError>;

    /// Sends the player's whole hand after an exchange or a placement.
    async fn new_tiles(&self, tiles: &[Tile]) -> Result<(), PlayerError>;

    /// Tells the player whether it won once the game is over.
    async fn win(&self, won: bool) -> Result<(), PlayerError>;
}
