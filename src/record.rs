use crate::{Board, Coordinate, GameSnapshot, NewError, Tile};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;

/// The state of a game as exchanged with the outside: board rows, the bag and each player's
/// score and [tiles](Tile). Any serde format can carry it.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    /// Every occupied row, ordered by row.
    pub board: Vec<RowRecord>,
    /// Every [tile](Tile) not dealt yet, drawn from the end.
    pub bag: Vec<Tile>,
    /// Every player in turn order.
    pub players: Vec<PlayerRecord>,
}

/// The occupied cells of one row of the board.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    /// The row index.
    pub row: isize,
    /// Every occupied cell of the row, ordered by column.
    pub cells: Vec<CellRecord>,
}

/// One occupied cell of a [row](RowRecord).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRecord {
    /// The column index.
    pub column: isize,
    /// The [tile](Tile) placed in the cell.
    pub tile: Tile,
}

/// The part of a player's state that is exchanged with the outside.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// The points earned so far.
    pub score: usize,
    /// The [tiles](Tile) held.
    pub tiles: Vec<Tile>,
}

impl From<&GameSnapshot> for StateRecord {
    fn from(snapshot: &GameSnapshot) -> Self {
        let cells = snapshot
            .board
            .iter()
            .map(|(&coordinate, &tile)| (coordinate, tile))
            .sorted();
        let rows = cells.group_by(|&((row, _), _)| row);
        let board = rows
            .into_iter()
            .map(|(row, cells)| RowRecord {
                row,
                cells: cells
                    .map(|((_, column), tile)| CellRecord { column, tile })
                    .collect(),
            })
            .collect();

        StateRecord {
            board,
            bag: snapshot.bag.clone(),
            players: snapshot
                .players
                .iter()
                .map(|player| PlayerRecord {
                    score: player.score,
                    tiles: player.hand.to_vec(),
                })
                .collect(),
        }
    }
}

impl StateRecord {
    /// # Returns
    ///
    /// The board described by the rows.
    ///
    /// # Errors
    ///
    /// * [NewError::RepeatedCells] Some cell is named more than once.
    pub fn board(&self) -> Result<Board, NewError> {
        let mut board = Board::with_capacity(self.tiles_on_board());
        let mut repeated: Vec<Coordinate> = Vec::new();

        for row in &self.board {
            for cell in &row.cells {
                match board.entry((row.row, cell.column)) {
                    Entry::Occupied(entry) => repeated.push(*entry.key()),
                    Entry::Vacant(entry) => {
                        entry.insert(cell.tile);
                    }
                }
            }
        }

        if !repeated.is_empty() {
            repeated.sort_unstable();
            repeated.dedup();
            return Err(NewError::RepeatedCells {
                coordinates: repeated,
            });
        }

        Ok(board)
    }

    fn tiles_on_board(&self) -> usize {
        self.board.iter().map(|row| row.cells.len()).sum()
    }
}
