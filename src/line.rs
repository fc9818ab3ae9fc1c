//! Checks over single lines of the board and the bounds of [coordinates](Coordinate).

use crate::{Board, Coordinate, Plays, Tile, COORDINATE_LIMIT};
use itertools::Itertools;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;
use std::iter::Peekable;

/// Groups of [coordinates](Coordinate) that break a line.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct LineErrors {
    /// Groups of [coordinates](Coordinate) holding the same [tile](crate::Tile).
    pub duplicates: BTreeSet<BTreeSet<Coordinate>>,
    /// Groups of [coordinates](Coordinate) whose [tiles](crate::Tile) share an attribute
    /// with each other but not with the rest of the line.
    pub multiple_matching: BTreeSet<BTreeSet<Coordinate>>,
}

/// # Returns
///
/// Whether both components of `coordinate` lie strictly between -[COORDINATE_LIMIT] and
/// [COORDINATE_LIMIT].
#[inline]
pub fn is_in_bounds((row, column): Coordinate) -> bool {
    (-COORDINATE_LIMIT + 1..COORDINATE_LIMIT).contains(&row)
        && (-COORDINATE_LIMIT + 1..COORDINATE_LIMIT).contains(&column)
}

/// Splits `plays` into the [plays](Plays) [in bounds](is_in_bounds) and the rest.
pub fn partition_in_bounds(plays: Plays) -> (Plays, Plays) {
    plays
        .into_iter()
        .partition(|&(_, coordinate)| is_in_bounds(coordinate))
}

/// Groups the [coordinates](Coordinate) of `line` by a key of their [tile](crate::Tile).
fn group_coordinates<K, F>(line: &Board, key: F) -> Vec<BTreeSet<Coordinate>>
where
    K: Eq + Hash,
    F: Fn(&Tile) -> K,
{
    line.iter()
        .map(|(&coordinate, tile)| (key(tile), coordinate))
        .into_group_map()
        .into_values()
        .map(BTreeSet::from_iter)
        .collect()
}

/// Checks one maximal straight `line` of [tiles](crate::Tile). A legal line repeats no
/// [tile](crate::Tile) and all of its [tiles](crate::Tile) share either their
/// [shape](crate::Shape) or their [color](crate::Color).
///
/// # Errors
///
/// The [LineErrors] found, at least one group of which is not empty.
pub fn check_line(line: &Board) -> Result<(), LineErrors> {
    let duplicates: BTreeSet<_> = group_coordinates(line, |&tile| tile)
        .into_iter()
        .filter(|group| group.len() > 1)
        .collect();

    // a group inside a group of the other attribute is not a separate match
    let by_color = group_coordinates(line, |tile| tile.color);
    let by_shape = group_coordinates(line, |tile| tile.shape);
    let colors: HashSet<_> = by_color
        .into_iter()
        .filter(|group| !by_shape.iter().any(|shapes| group.is_subset(shapes)))
        .collect();
    let shapes: HashSet<_> = by_shape
        .into_iter()
        .filter(|group| !colors.iter().any(|colors| group.is_subset(colors)))
        .collect();
    let multiple_matching = if colors.len() + shapes.len() > 1 {
        colors.into_iter().chain(shapes).collect()
    } else {
        BTreeSet::new()
    };

    if duplicates.is_empty() && multiple_matching.is_empty() {
        return Ok(());
    }
    Err(LineErrors {
        duplicates,
        multiple_matching,
    })
}

/// Takes the next run of consecutive integers from `steps`.
///
/// # Returns
///
/// The first and last values of the run, equal when the run has one value, or [None] when
/// `steps` is exhausted.
///
/// # See Also
///
/// * [Itertools::batching]
pub fn next_consecutive_run<I>(steps: &mut Peekable<I>) -> Option<(isize, isize)>
where
    I: Iterator<Item = isize>,
{
    let start = steps.next()?;
    let mut end = start;
    while let Some(next) = end
        .checked_add(1)
        .and_then(|expected| steps.next_if_eq(&expected))
    {
        end = next;
    }
    Some((start, end))
}
