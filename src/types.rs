use crate::{Coordinate, Tile, HAND_CAPACITY, PLAYER_CAPACITY};
use bimap::BiBTreeMap;
use smallvec::SmallVec;
use std::collections::HashMap;

/// A bimap of indexes into a sequence of [placements](crate::Placement) to the
/// [coordinates](Coordinate) they target. Both sides are unique.
///
/// # See Also
///
/// * [check_placement](crate::check_placement)
/// * [PlacementError](crate::PlacementError)
pub type Plays = BiBTreeMap<usize, Coordinate>;

/// This is a bag of all the [tiles](Tile) that have not been dealt yet. Tiles are drawn
/// from the end.
///
/// # See Also
///
/// * [Tile]
/// * [Referee](crate::Referee)
pub type Bag = Vec<Tile>;
/// This is a map of [coordinates](Coordinate) to [tiles](Tile) that have been placed.
///
/// # See Also
///
/// * [Coordinate]
/// * [Tile]
/// * [check_placement](crate::check_placement)
pub type Board = HashMap<Coordinate, Tile>;
/// A vector of points for each player.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [PublicState](crate::PublicState)
pub type Points = SmallVec<[usize; PLAYER_CAPACITY]>;
/// A vector of [tiles](Tile) for one player.
///
/// # See Also
///
/// * [Tile]
/// * [HAND_CAPACITY]
/// * [PlayerState](crate::PlayerState)
pub type Hand = SmallVec<[Tile; HAND_CAPACITY]>;
