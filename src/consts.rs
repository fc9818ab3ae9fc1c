use crate::{Color, Shape, TILES_LEN};
use konst::primitive::{parse_isize, parse_usize};
use konst::{option, result};

/// The number of points earned for each [tile](crate::Tile) placed on the board. `1` point.
///
/// # See Also
///
/// * [score](crate::score)
/// * [Bonuses](crate::Bonuses)
pub const POINTS_PER_TILE: usize = 1;
/// The default amount of extra points given when a placement consumes every
/// [tile](crate::Tile) in the player's hand. `6` additional points.
///
/// # See Also
///
/// * [score](crate::score)
/// * [Bonuses](crate::Bonuses)
pub const HAND_EMPTIED_BONUS: usize = 6;
/// The default amount of extra points given for the placement that ends the game.
/// `6` additional points.
///
/// # See Also
///
/// * [score](crate::score)
/// * [Bonuses](crate::Bonuses)
pub const LAST_PLACEMENT_BONUS: usize = 6;
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. If the environment
/// variable named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into
/// a `usize`, set to the value of the environment variable. Otherwise, it is set to `4`.
///
/// # See Also
///
/// * [Points](crate::Points)
/// * [Referee](crate::Referee)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
/// All hands will be stored on the stack until the number of [tiles](crate::Tile) in a hand
/// becomes greater than `HAND_CAPACITY`. If the environment variable named `HAND_CAPACITY` is
/// present at compile time and is able to be parsed into a `usize`, set to the value of the
/// environment variable. Otherwise, it is set to the maximum of
/// the [number of colors](Color::COLORS_LEN) and the [number of shapes](Shape::SHAPES_LEN).
pub const HAND_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("HAND_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    if Color::COLORS_LEN >= Shape::SHAPES_LEN {
        Color::COLORS_LEN
    } else {
        Shape::SHAPES_LEN
    }
);
/// The maximum number of [tiles](crate::Tile) allowed in the bag. If the environment variable
/// named `TILE_LIMIT` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `10_000`.
///
/// # Panics
///
/// * When the given value is less than the [number of tile variants](TILES_LEN)
/// * When ([isize::MAX] / [COORDINATE_LIMIT] >= [TILE_LIMIT] as `isize`) is false
///
/// # See Also
///
/// * [Referee::new](crate::Referee::new)
pub const TILE_LIMIT: usize = option::unwrap_or!(
    option::and_then!(option_env!("TILE_LIMIT"), |str| result::ok!(parse_usize(
        str
    ))),
    10_000
);
const _: () = assert!(TILE_LIMIT >= TILES_LEN);
/// The exclusive maximum absolute value of a component in a [coordinate](crate::Coordinate).
/// If the environment variable named `COORDINATE_LIMIT` is present at compile time
/// and is able to be parsed into an `isize`, set to the saturating absolute value of the
/// environment variable. Otherwise, it is set to `10_000`.
///
/// Placements on or beyond the limit are rejected, which keeps the walks along rows and
/// columns of the board from overflowing.
///
/// # See Also
///
/// * [PlacementError::CoordinatesOutOfBounds](crate::PlacementError::CoordinatesOutOfBounds)
pub const COORDINATE_LIMIT: isize = option::unwrap_or!(
    option::and_then!(option_env!("COORDINATE_LIMIT"), |str| result::ok!(
        parse_isize(str)
    )),
    10_000
)
.saturating_abs();
const _: () = assert!(COORDINATE_LIMIT > 0);
// cannot use assert_ne! in a const context
//noinspection RsAssertEqual
const _: () = assert!(COORDINATE_LIMIT != isize::MAX);
const _: () = assert!(isize::MAX / COORDINATE_LIMIT >= TILE_LIMIT as isize);
/// The maximum number of holes that can be returned in an error. If the environment variable
/// named `HOLES_LIMIT` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `100`.
///
/// # See Also
///
/// * [PlacementError::Holes](crate::PlacementError::Holes)
pub const HOLES_LIMIT: usize = option::unwrap_or!(
    option::and_then!(option_env!("HOLES_LIMIT"), |str| result::ok!(parse_usize(
        str
    ))),
    100
);
