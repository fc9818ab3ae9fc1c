//! Pure predicates and scoring over a [board](Board), a [turn action](TurnAction) and the
//! number of [tiles](Tile) left in the bag. Nothing here mutates game state.

use crate::{
    adjacent_coordinates, check_line, find_component_minimums_and_maximums,
    next_consecutive_run, offset_coordinate, partition_in_bounds, Board, Coordinate, Hand,
    LineErrors, Placement, Plays, RuleViolation, Tile, TurnAction, ALONG_COLUMN, ALONG_ROW,
    HAND_EMPTIED_BONUS, HOLES_LIMIT, LAST_PLACEMENT_BONUS, POINTS_PER_TILE,
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::iter;

/// Describes the reason why some [placements](Placement) cannot be put on the board.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum PlacementError {
    /// Attempting to place no [tiles](Tile).
    EmptyPlacements,
    /// Attempting to place several [tiles](Tile) at the same [coordinate](Coordinate).
    CoordinatesRepeated {
        /// [Coordinates](Coordinate) targeted more than once.
        coordinates_repeated: BTreeSet<Coordinate>,
    },
    /// Attempting to place [tiles](Tile) too far away from the center of the board.
    CoordinatesOutOfBounds {
        /// [Plays] where the absolute value of a component in a [coordinate](Coordinate) is
        /// greater than or equal to the [coordinate limit](crate::COORDINATE_LIMIT).
        coordinates_out_of_bounds: Plays,
    },
    /// Attempting to place [tiles](Tile) at already occupied [coordinates](Coordinate).
    CoordinatesOccupied {
        /// [Plays] where the board already contains a [tile](Tile) at the
        /// [coordinate](Coordinate).
        coordinates_occupied: Plays,
    },
    /// Attempting to place [tiles](Tile) not connected to the board.
    NotConnected {
        /// [Plays] with no adjacent [tile](Tile) on the board and no path through other
        /// connected [plays](Plays) to a [tile](Tile) on the board.
        not_connected: Plays,
    },
    /// Every placement was rejected for another reason.
    NoLegalPlays,
    /// Not placing a single [tile](Tile) or [tiles](Tile) in one row or one column.
    NoLegalLines,
    /// Placing [tiles](Tile) in one row or column but with empty cells in between.
    Holes {
        /// Ranges of empty [coordinates](Coordinate) between the placements.
        holes: BTreeSet<(Coordinate, Coordinate)>,
    },
    /// Creating a line with duplicate [tiles](Tile).
    Duplicates {
        /// Groups of [coordinates](Coordinate) where [tiles](Tile) are the same.
        duplicates: BTreeSet<BTreeSet<Coordinate>>,
    },
    /// Creating a line where [tiles](Tile) are not either the same [shape](crate::Shape)
    /// or the same [color](crate::Color).
    MultipleMatching {
        /// Groups of [coordinates](Coordinate) where [tiles](Tile) match each other
        /// but not other groups.
        multiple_matching: BTreeSet<BTreeSet<Coordinate>>,
    },
}

/// Extra points awarded on top of [one point per tile](POINTS_PER_TILE).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bonuses {
    /// Earned when a placement consumes every [tile](Tile) in the player's hand.
    pub hand_emptied: usize,
    /// Earned by the placement that ends the game.
    pub last_placement: usize,
}

impl Default for Bonuses {
    fn default() -> Self {
        Bonuses {
            hand_emptied: HAND_EMPTIED_BONUS,
            last_placement: LAST_PLACEMENT_BONUS,
        }
    }
}

/// Checks a whole [turn action](TurnAction) for the player holding `hand` when `bag_len`
/// [tiles](Tile) are left in the bag.
///
/// # Errors
///
/// * [RuleViolation::TilesNotInHand] Placing [tiles](Tile) the player does not hold.
/// * [RuleViolation::IllegalPlacement] Placing [tiles](Tile) against
/// [the placement rules](check_placement).
/// * [RuleViolation::CannotExchange] Exchanging with too few [tiles](Tile) in the bag.
pub fn check_action(
    board: &Board,
    hand: &[Tile],
    bag_len: usize,
    action: &TurnAction,
) -> Result<(), RuleViolation> {
    match action {
        TurnAction::Pass => Ok(()),
        TurnAction::Exchange if can_exchange(hand, bag_len) => Ok(()),
        TurnAction::Exchange => Err(RuleViolation::CannotExchange {
            hand_len: hand.len(),
            bag_len,
        }),
        TurnAction::Place(placements) => {
            let tiles = missing_tiles(hand, action.placed_tiles());
            if !tiles.is_empty() {
                return Err(RuleViolation::TilesNotInHand { tiles });
            }
            check_placement(board, placements).map_err(RuleViolation::IllegalPlacement)
        }
    }
}

/// # Returns
///
/// Whether `placements` can be put on `board`.
///
/// # See Also
///
/// * [check_placement]
#[inline]
pub fn is_legal_placement(board: &Board, placements: &[Placement]) -> bool {
    check_placement(board, placements).is_ok()
}

/// Checks if `placements` form one legal extension of `board`: every
/// [coordinate](Coordinate) is new, inside the [coordinate limit](crate::COORDINATE_LIMIT)
/// and unoccupied, the placements are connected to the board, lie in a single row or column
/// without holes, and every line they touch holds unique [tiles](Tile) that all share either
/// their [shape](crate::Shape) or their [color](crate::Color).
///
/// On an empty board, the placements only need to form such a line by themselves.
///
/// # Errors
///
/// Every [PlacementError] found. When an error makes further checks meaningless, the
/// errors found so far are returned.
pub fn check_placement(
    board: &Board,
    placements: &[Placement],
) -> Result<(), HashSet<PlacementError>> {
    let mut errors = HashSet::with_capacity(10);

    if placements.is_empty() {
        errors.insert(PlacementError::EmptyPlacements);
        return Err(errors);
    }

    let mut plays = Plays::new();
    let mut coordinates_repeated = BTreeSet::new();
    for (index, placement) in placements.iter().enumerate() {
        if plays.insert_no_overwrite(index, placement.coordinate).is_err() {
            coordinates_repeated.insert(placement.coordinate);
        }
    }
    if !coordinates_repeated.is_empty() {
        errors.insert(PlacementError::CoordinatesRepeated {
            coordinates_repeated,
        });
    }

    let (coordinates_in_bounds, coordinates_out_of_bounds) = partition_in_bounds(plays);
    if !coordinates_out_of_bounds.is_empty() {
        errors.insert(PlacementError::CoordinatesOutOfBounds {
            coordinates_out_of_bounds,
        });
    }

    let (coordinates_unoccupied, coordinates_occupied): (Plays, Plays) = coordinates_in_bounds
        .into_iter()
        .partition(|(_, coordinate)| !board.contains_key(coordinate));
    if !coordinates_occupied.is_empty() {
        errors.insert(PlacementError::CoordinatesOccupied {
            coordinates_occupied,
        });
    }

    let (connected, not_connected) = partition_connected(board, coordinates_unoccupied);
    if !not_connected.is_empty() {
        errors.insert(PlacementError::NotConnected { not_connected });
    }

    let Some((min_row, min_column, max_row, max_column)) =
        find_component_minimums_and_maximums(connected.right_values().copied())
    else {
        errors.insert(PlacementError::NoLegalPlays);
        return Err(errors);
    };

    let (along, across) = if min_row == max_row {
        (ALONG_ROW, ALONG_COLUMN)
    } else if min_column == max_column {
        (ALONG_COLUMN, ALONG_ROW)
    } else {
        errors.insert(PlacementError::NoLegalLines);
        return Err(errors);
    };

    let tile_at = |coordinate: Coordinate| -> Option<Tile> {
        connected
            .get_by_right(&coordinate)
            .map(|&index| placements[index].tile)
            .or_else(|| board.get(&coordinate).copied())
    };

    let first = (min_row, min_column);
    // one of the two differences is always 0
    let span = (max_row - min_row) + (max_column - min_column);
    let holes: BTreeSet<(Coordinate, Coordinate)> = (0..=span)
        .filter(|&step| tile_at(offset_coordinate(first, along, step)).is_none())
        .take(HOLES_LIMIT.max(1))
        .peekable()
        .batching(next_consecutive_run)
        .map(|(start, end)| {
            (
                offset_coordinate(first, along, start),
                offset_coordinate(first, along, end),
            )
        })
        .collect();
    if !holes.is_empty() {
        errors.insert(PlacementError::Holes { holes });
    }

    let run = |start: Coordinate, direction: Coordinate| -> Board {
        let forward = (0..)
            .map(|step| offset_coordinate(start, direction, step))
            .map(|coordinate| tile_at(coordinate).map(|tile| (coordinate, tile)))
            .while_some();
        let backward = (1..)
            .map(|step| offset_coordinate(start, direction, -step))
            .map(|coordinate| tile_at(coordinate).map(|tile| (coordinate, tile)))
            .while_some();
        forward.chain(backward).collect()
    };

    let lines = iter::once(run(first, along)).chain(
        connected
            .right_values()
            .map(|&coordinate| run(coordinate, across))
            .filter(|line| line.len() > 1),
    );

    for line in lines {
        if let Err(LineErrors {
            duplicates,
            multiple_matching,
        }) = check_line(&line)
        {
            if !duplicates.is_empty() {
                errors.insert(PlacementError::Duplicates { duplicates });
            }
            if !multiple_matching.is_empty() {
                errors.insert(PlacementError::MultipleMatching { multiple_matching });
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}

/// Partitions `possibly_connected` by whether the [coordinate](Coordinate) is connected
/// to the board. A [coordinate](Coordinate) can be connected either directly
/// by an adjacent [tile](Tile) on the board or indirectly by a path of adjacent,
/// connected [coordinates](Coordinate). On an empty board everything is connected.
///
/// # Returns
///
/// A tuple of connected and not connected [plays](Plays).
pub fn partition_connected(board: &Board, possibly_connected: Plays) -> (Plays, Plays) {
    if board.is_empty() {
        return (possibly_connected, Plays::new());
    }

    let capacity = possibly_connected.len();
    let mut connected = HashSet::with_capacity(capacity);

    for &stack_coordinate in possibly_connected.right_values() {
        if connected.contains(&stack_coordinate) {
            continue;
        }

        // DFS
        let mut stack = Vec::with_capacity(capacity);
        stack.push(stack_coordinate);
        let mut visited = HashSet::with_capacity(capacity);

        while let Some(coordinate) = stack.pop() {
            if !visited.insert(coordinate) {
                continue;
            }

            // overflow should not occur since coordinates are inside the coordinate limit
            for adjacent_coordinate in adjacent_coordinates(coordinate) {
                if board.contains_key(&adjacent_coordinate)
                    || connected.contains(&adjacent_coordinate)
                {
                    connected.extend(visited.iter().copied());
                    break;
                } else if possibly_connected.contains_right(&adjacent_coordinate) {
                    stack.push(adjacent_coordinate);
                }
            }
        }
    }

    possibly_connected
        .into_iter()
        .partition(|(_, coordinate)| connected.contains(coordinate))
}

/// The points earned by `placements`: [one point](POINTS_PER_TILE) per [tile](Tile), plus
/// the [hand emptied bonus](Bonuses::hand_emptied) when the hand holds `0`
/// [tiles](Tile) right after the placement and before drawing, plus the
/// [last placement bonus](Bonuses::last_placement) when the placement `ends_game`.
pub fn score(
    placements: &[Placement],
    hand_len_after: usize,
    ends_game: bool,
    bonuses: &Bonuses,
) -> usize {
    let mut points = placements.len() * POINTS_PER_TILE;
    if hand_len_after == 0 {
        points += bonuses.hand_emptied;
    }
    if ends_game {
        points += bonuses.last_placement;
    }
    points
}

/// # Returns
///
/// Whether the bag holds enough [tiles](Tile) to replace the whole `hand`.
#[inline]
pub fn can_exchange(hand: &[Tile], bag_len: usize) -> bool {
    bag_len >= hand.len()
}

/// # Returns
///
/// Whether some single [tile](Tile) of `hand` can be placed anywhere on `board`.
pub fn has_legal_placement(board: &Board, hand: &[Tile]) -> bool {
    if hand.is_empty() {
        return false;
    }
    if board.is_empty() {
        return true;
    }

    let frontier: HashSet<Coordinate> = board
        .keys()
        .flat_map(|&coordinate| adjacent_coordinates(coordinate))
        .filter(|coordinate| !board.contains_key(coordinate))
        .collect();

    hand.iter().unique().any(|&tile| {
        frontier
            .iter()
            .filter(|&&coordinate| {
                adjacent_coordinates(coordinate)
                    .iter()
                    .filter_map(|adjacent| board.get(adjacent))
                    .all(|neighbor| tile.matches(neighbor))
            })
            .any(|&coordinate| is_legal_placement(board, &[Placement::new(tile, coordinate)]))
    })
}

/// Matches each of `tiles` against a distinct [tile](Tile) of `hand` by value.
///
/// # Returns
///
/// The [tiles](Tile) left without a match, in order.
pub fn missing_tiles(hand: &[Tile], tiles: impl IntoIterator<Item = Tile>) -> Vec<Tile> {
    let mut remaining: Hand = hand.iter().copied().collect();
    tiles
        .into_iter()
        .filter(|tile| match remaining.iter().position(|held| held == tile) {
            Some(index) => {
                remaining.swap_remove(index);
                false
            }
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        random_different_color_same_shape, random_different_shape_same_color, Color, Shape,
        COORDINATE_LIMIT,
    };
    use map_macro::{btree_set, hash_map, hash_set};
    use rand::Rng;

    const RED_SQUARE: Tile = Tile::new(Shape::Square, Color::Red);
    const BLUE_SQUARE: Tile = Tile::new(Shape::Square, Color::Blue);
    const GREEN_SQUARE: Tile = Tile::new(Shape::Square, Color::Green);
    const GREEN_CIRCLE: Tile = Tile::new(Shape::Circle, Color::Green);
    const RED_CLOVER: Tile = Tile::new(Shape::Clover, Color::Red);
    const RED_STAR: Tile = Tile::new(Shape::Star, Color::Red);

    fn single_red_square() -> Board {
        hash_map! { (0, 0) => RED_SQUARE }
    }

    #[test]
    fn matching_shape_is_legal_and_scores_one() {
        let placements = [Placement::new(BLUE_SQUARE, (0, 1))];

        assert!(is_legal_placement(&single_red_square(), &placements));
        assert_eq!(1, score(&placements, 5, false, &Bonuses::default()));
    }

    #[test]
    fn matching_nothing_is_illegal() {
        test_check_placement_errors(
            &single_red_square(),
            &[Placement::new(GREEN_CIRCLE, (0, 1))],
            hash_set! { PlacementError::MultipleMatching {
                multiple_matching: btree_set! { btree_set! { (0, 0) }, btree_set! { (0, 1) } },
            }},
        );
    }

    #[test]
    fn empty_placements() {
        test_check_placement_errors(
            &single_red_square(),
            &[],
            hash_set! { PlacementError::EmptyPlacements },
        );
    }

    #[test]
    fn occupied_coordinate_is_never_legal() {
        let mut rng = rand::thread_rng();
        let board = single_red_square();
        let tile: Tile = rng.gen();
        let placements = [
            Placement::new(tile, (0, 0)),
            Placement::new(BLUE_SQUARE, (0, 1)),
        ];

        assert!(!is_legal_placement(&board, &placements));
        let errors = check_placement(&board, &placements).expect_err("should be occupied");
        assert!(errors.contains(&PlacementError::CoordinatesOccupied {
            coordinates_occupied: [(0, (0, 0))].into_iter().collect(),
        }));
    }

    #[test]
    fn repeated_coordinates() {
        let errors = check_placement(
            &single_red_square(),
            &[
                Placement::new(BLUE_SQUARE, (0, 1)),
                Placement::new(GREEN_SQUARE, (0, 1)),
            ],
        )
        .expect_err("check_placement should return Err");

        assert!(errors.contains(&PlacementError::CoordinatesRepeated {
            coordinates_repeated: btree_set! { (0, 1) },
        }));
    }

    #[test]
    fn not_connected() {
        test_check_placement_errors(
            &single_red_square(),
            &[
                Placement::new(BLUE_SQUARE, (0, 1)),
                Placement::new(GREEN_SQUARE, (5, 5)),
            ],
            hash_set! {
                PlacementError::NotConnected {
                    not_connected: [(1, (5, 5))].into_iter().collect(),
                },
            },
        );
    }

    #[test]
    fn out_of_bounds() {
        let errors = check_placement(
            &single_red_square(),
            &[Placement::new(BLUE_SQUARE, (0, COORDINATE_LIMIT))],
        )
        .expect_err("check_placement should return Err");

        assert!(errors.contains(&PlacementError::CoordinatesOutOfBounds {
            coordinates_out_of_bounds: [(0, (0, COORDINATE_LIMIT))].into_iter().collect(),
        }));
        assert!(errors.contains(&PlacementError::NoLegalPlays));
    }

    #[test]
    fn no_legal_lines() {
        test_check_placement_errors(
            &single_red_square(),
            &[
                Placement::new(BLUE_SQUARE, (0, 1)),
                Placement::new(RED_CLOVER, (1, 0)),
            ],
            hash_set! { PlacementError::NoLegalLines },
        );
    }

    #[test]
    fn holes() {
        let board = hash_map! {
            (0, 0) => RED_SQUARE,
            (0, 4) => Tile::new(Shape::Diamond, Color::Red),
        };

        test_check_placement_errors(
            &board,
            &[
                Placement::new(RED_CLOVER, (0, 1)),
                Placement::new(RED_STAR, (0, 3)),
            ],
            hash_set! { PlacementError::Holes { holes: btree_set! { ((0, 2), (0, 2)) } } },
        );
    }

    #[test]
    fn gap_filled_by_board_is_not_a_hole() {
        let board = hash_map! {
            (0, 0) => RED_SQUARE,
            (0, 1) => RED_CLOVER,
        };

        assert!(is_legal_placement(
            &board,
            &[
                Placement::new(RED_STAR, (0, -1)),
                Placement::new(Tile::new(Shape::Diamond, Color::Red), (0, 2)),
            ],
        ));
    }

    #[test]
    fn duplicates_along_the_line() {
        let board = hash_map! {
            (0, 0) => RED_SQUARE,
            (0, 1) => RED_CLOVER,
        };

        test_check_placement_errors(
            &board,
            &[Placement::new(RED_SQUARE, (0, 2))],
            hash_set! {
                PlacementError::Duplicates {
                    duplicates: btree_set! { btree_set! { (0, 0), (0, 2) } },
                },
            },
        );
    }

    #[test]
    fn crossing_line_is_checked() {
        let board = hash_map! {
            (0, 0) => RED_SQUARE,
            (0, 2) => RED_STAR,
            (1, 1) => GREEN_CIRCLE,
        };

        test_check_placement_errors(
            &board,
            &[Placement::new(RED_CLOVER, (0, 1))],
            hash_set! {
                PlacementError::MultipleMatching {
                    multiple_matching: btree_set! { btree_set! { (0, 1) }, btree_set! { (1, 1) } },
                },
            },
        );
    }

    #[test]
    fn column_extension() {
        let board = single_red_square();

        assert!(is_legal_placement(
            &board,
            &[
                Placement::new(BLUE_SQUARE, (1, 0)),
                Placement::new(GREEN_SQUARE, (2, 0)),
                Placement::new(Tile::new(Shape::Square, Color::Purple), (-1, 0)),
            ],
        ));
    }

    #[test]
    fn empty_board_needs_a_line() {
        let board = Board::new();

        assert!(is_legal_placement(
            &board,
            &[
                Placement::new(RED_SQUARE, (3, 3)),
                Placement::new(RED_CLOVER, (3, 4)),
            ],
        ));
        assert!(!is_legal_placement(
            &board,
            &[
                Placement::new(RED_SQUARE, (3, 3)),
                Placement::new(RED_CLOVER, (3, 5)),
            ],
        ));
    }

    #[test]
    fn score_counts_a_corner_tile_once() {
        let board = hash_map! {
            (0, 0) => RED_SQUARE,
            (0, 1) => RED_CLOVER,
            (1, 0) => BLUE_SQUARE,
        };
        let placements = [Placement::new(RED_STAR, (1, 1))];

        assert!(!is_legal_placement(&board, &placements));
        let placements = [Placement::new(Tile::new(Shape::Clover, Color::Blue), (1, 1))];
        assert!(is_legal_placement(&board, &placements));
        assert_eq!(
            POINTS_PER_TILE,
            score(&placements, 1, false, &Bonuses::default())
        );
    }

    #[test]
    fn score_bonuses() {
        let placements = [
            Placement::new(BLUE_SQUARE, (0, 1)),
            Placement::new(GREEN_SQUARE, (0, 2)),
        ];
        let bonuses = Bonuses {
            hand_emptied: 4,
            last_placement: 7,
        };

        assert_eq!(2, score(&placements, 1, false, &bonuses));
        assert_eq!(6, score(&placements, 0, false, &bonuses));
        assert_eq!(9, score(&placements, 1, true, &bonuses));
        assert_eq!(13, score(&placements, 0, true, &bonuses));
    }

    #[test]
    fn can_exchange_needs_a_full_hand_in_the_bag() {
        let hand = [RED_SQUARE, BLUE_SQUARE, GREEN_SQUARE];

        assert!(can_exchange(&hand, 3));
        assert!(can_exchange(&hand, 10));
        assert!(!can_exchange(&hand, 2));
    }

    #[test]
    fn check_action_tiles_not_in_hand() {
        let action = TurnAction::Place(vec![
            Placement::new(BLUE_SQUARE, (0, 1)),
            Placement::new(BLUE_SQUARE, (0, 2)),
        ]);

        assert_eq!(
            Err(RuleViolation::TilesNotInHand {
                tiles: vec![BLUE_SQUARE],
            }),
            check_action(&single_red_square(), &[BLUE_SQUARE, RED_STAR], 10, &action)
        );
    }

    #[test]
    fn check_action_exchange() {
        let hand = [BLUE_SQUARE, RED_STAR];

        assert_eq!(
            Ok(()),
            check_action(&single_red_square(), &hand, 2, &TurnAction::Exchange)
        );
        assert_eq!(
            Err(RuleViolation::CannotExchange {
                hand_len: 2,
                bag_len: 1,
            }),
            check_action(&single_red_square(), &hand, 1, &TurnAction::Exchange)
        );
    }

    #[test]
    fn check_action_pass() {
        assert_eq!(
            Ok(()),
            check_action(&single_red_square(), &[], 0, &TurnAction::Pass)
        );
    }

    #[test]
    fn has_legal_placement_some() {
        assert!(has_legal_placement(
            &single_red_square(),
            &[GREEN_CIRCLE, BLUE_SQUARE]
        ));
    }

    #[test]
    fn has_legal_placement_none() {
        assert!(!has_legal_placement(&single_red_square(), &[GREEN_CIRCLE]));
        assert!(!has_legal_placement(&single_red_square(), &[]));
    }

    #[test]
    fn has_legal_placement_needs_a_matching_neighbor() {
        let board = hash_map! { (0, 0) => GREEN_CIRCLE, (0, 1) => GREEN_SQUARE };

        assert!(!has_legal_placement(&board, &[RED_STAR, RED_CLOVER]));
        assert!(has_legal_placement(&board, &[RED_STAR, RED_SQUARE]));
    }

    #[test]
    fn missing_tiles_counts_copies() {
        assert_eq!(
            vec![RED_SQUARE],
            missing_tiles(&[RED_SQUARE, BLUE_SQUARE], [BLUE_SQUARE, RED_SQUARE, RED_SQUARE])
        );
        assert!(missing_tiles(&[RED_SQUARE, RED_SQUARE], [RED_SQUARE, RED_SQUARE]).is_empty());
    }

    #[test]
    fn random_lines_of_one_attribute_are_legal() {
        let mut rng = rand::thread_rng();
        let tile: Tile = rng.gen();
        let board = hash_map! { (0, 0) => tile };

        let same_color = random_different_shape_same_color(&mut rng, tile);
        let same_shape = random_different_color_same_shape(&mut rng, tile);

        assert!(is_legal_placement(
            &board,
            &[Placement::new(same_color, (0, 1))]
        ));
        assert!(is_legal_placement(
            &board,
            &[Placement::new(same_shape, (1, 0))]
        ));
        assert!(!is_legal_placement(
            &board,
            &[Placement::new(tile, (0, -1))]
        ));
    }

    fn test_check_placement_errors(
        board: &Board,
        placements: &[Placement],
        expected_errors: HashSet<PlacementError>,
    ) {
        let actual_errors =
            check_placement(board, placements).expect_err("check_placement should return Err");

        assert_eq!(expected_errors, actual_errors);
    }
}
