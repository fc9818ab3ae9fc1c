use crate::{Coordinate, Tile};
use serde::{Deserialize, Serialize};

/// One [tile](Tile) put down at one [coordinate](Coordinate) during a
/// [placement](TurnAction::Place).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The tile taken from the player's hand.
    pub tile: Tile,
    /// The empty cell receiving the tile.
    pub coordinate: Coordinate,
}

impl Placement {
    /// A new [`Placement`] of `tile` at `coordinate`.
    #[inline]
    pub const fn new(tile: Tile, coordinate: Coordinate) -> Placement {
        Placement { tile, coordinate }
    }
}

/// What a player does on its turn.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "placements", rename_all = "lowercase")]
pub enum TurnAction {
    /// Do nothing this turn.
    Pass,
    /// Return the whole hand to the bag and draw as many new [tiles](Tile).
    Exchange,
    /// Put [tiles](Tile) from the hand on the board. The placements are validated together as
    /// one extension of a single row or column.
    Place(Vec<Placement>),
}

impl TurnAction {
    /// # Returns
    ///
    /// The [tiles](Tile) consumed from the hand by a [placement](TurnAction::Place), in order,
    /// or nothing for any other action.
    pub fn placed_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        let placements: &[Placement] = match self {
            TurnAction::Place(placements) => placements,
            TurnAction::Pass | TurnAction::Exchange => &[],
        };
        placements.iter().map(|placement| placement.tile)
    }
}
