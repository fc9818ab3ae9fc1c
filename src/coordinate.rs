use std::cmp;

/// A tuple with two integer components for the row and the column of a cell on the board.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [Placement](crate::Placement)
pub type Coordinate = (isize, isize);

/// The offset between two neighbouring cells of the same row.
pub const ALONG_ROW: Coordinate = (0, 1);
/// The offset between two neighbouring cells of the same column.
pub const ALONG_COLUMN: Coordinate = (1, 0);

/// Finds the minimum and maximum components from [coordinates](Coordinate) for each component.
/// If `coordinates` is empty, [None] is returned.
///
/// # Arguments
///
/// * `coordinates`: An [iterator](Iterator) of [coordinates](Coordinate).
///
/// # Returns
///
/// A tuple with `4` different bounds in the following order:
///
/// * The minimum row
/// * The minimum column
/// * The maximum row
/// * The maximum column
pub fn find_component_minimums_and_maximums(
    mut coordinates: impl Iterator<Item = Coordinate>,
) -> Option<(isize, isize, isize, isize)> {
    let (row, column) = coordinates.next()?;

    let (mut min_row, mut min_column, mut max_row, mut max_column) = (row, column, row, column);

    for (row, column) in coordinates {
        (min_row, min_column) = (cmp::min(min_row, row), cmp::min(min_column, column));
        (max_row, max_column) = (cmp::max(max_row, row), cmp::max(max_column, column));
    }

    Some((min_row, min_column, max_row, max_column))
}

/// Finds the adjacent [coordinates](Coordinate) from the argument [coordinate](Coordinate)
/// where adjacent is 4 directional and not diagonal.
///
/// # Returns
///
/// An array of 4 [coordinates](Coordinate) in natural lexicographic order.
pub fn adjacent_coordinates((row, column): Coordinate) -> [Coordinate; 4] {
    [
        (row - 1, column),
        (row, column - 1),
        (row, column + 1),
        (row + 1, column),
    ]
}

/// The [coordinate](Coordinate) `steps` offsets away from `coordinate`. Negative `steps` walk
/// in the opposite direction.
#[inline]
pub fn offset_coordinate(
    (row, column): Coordinate,
    (row_offset, column_offset): Coordinate,
    steps: isize,
) -> Coordinate {
    (row + row_offset * steps, column + column_offset * steps)
}
