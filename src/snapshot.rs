use crate::{Bag, Board, Hand, Tile};

/// An immutable copy of one player's state at one point in time.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayerSnapshot {
    /// The name of the player.
    pub name: String,
    /// The points earned so far.
    pub score: usize,
    /// The [tiles](Tile) held.
    pub hand: Hand,
    /// Whether the player has been eliminated.
    pub eliminated: bool,
}

/// An immutable copy of the whole game at one point in time, sent to
/// [observers](crate::Observer).
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct GameSnapshot {
    /// Every [tile](Tile) placed so far.
    pub board: Board,
    /// Every [tile](Tile) not dealt yet, drawn from the end.
    pub bag: Bag,
    /// Every registered player in turn order.
    pub players: Vec<PlayerSnapshot>,
    /// The index of the player whose turn comes next, if any.
    pub current_player: Option<usize>,
}

impl GameSnapshot {
    /// # Returns
    ///
    /// The number of [tiles](Tile) in the bag, in every hand and on the board together.
    pub fn tiles_len(&self) -> usize {
        self.bag.len()
            + self.board.len()
            + self
                .players
                .iter()
                .map(|player| player.hand.len())
                .sum::<usize>()
    }
}
