use crate::{Color, Coordinate, Hand, Shape, Tile, COORDINATE_LIMIT, HAND_CAPACITY};
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;

/// A hand of a random, small, non-zero number of random [tiles](Tile).
pub fn random_hand<R: Rng + ?Sized>(rng: &mut R) -> Hand {
    let hand_len = rng.gen_range(1..=HAND_CAPACITY);
    (0..hand_len).map(|_| rng.gen::<Tile>()).collect()
}

/// A new [tile](Tile) with a random, different [shape](Shape) but the same [color](Color).
pub fn random_different_shape_same_color<R: Rng + ?Sized>(rng: &mut R, tile: Tile) -> Tile {
    let possible_indexes = Uniform::from(0..Shape::SHAPES_LEN - 1);
    let random_index = possible_indexes.sample(rng);
    // skipping the shape at its own index in the array shapes
    let random_different_index =
        random_index + usize::from(random_index >= tile.shape as usize);
    Tile::new(Shape::shapes()[random_different_index], tile.color)
}

/// A new [tile](Tile) with a random, different [color](Color) but the same [shape](Shape).
pub fn random_different_color_same_shape<R: Rng + ?Sized>(rng: &mut R, tile: Tile) -> Tile {
    let possible_indexes = Uniform::from(0..Color::COLORS_LEN - 1);
    let random_index = possible_indexes.sample(rng);
    // skipping the color at its own index in the array colors
    let random_different_index =
        random_index + usize::from(random_index >= tile.color as usize);
    Tile::new(tile.shape, Color::colors()[random_different_index])
}

/// An [iterator](Iterator) of [coordinates](Coordinate) where the values of both components lie
/// inside the range -[COORDINATE_LIMIT] exclusive to [COORDINATE_LIMIT] exclusive.
pub fn random_legal_coordinates<R: Rng + ?Sized>(rng: &mut R) -> impl Iterator<Item = Coordinate> {
    let possible_legal_coordinates = Uniform::from(0..COORDINATE_LIMIT);
    [(-1, -1), (-1, 1), (1, -1), (1, 1)]
        .map(|(row_sign, column_sign)| {
            (
                row_sign * possible_legal_coordinates.sample(rng),
                column_sign * possible_legal_coordinates.sample(rng),
            )
        })
        .tap_mut(|coordinates| coordinates.shuffle(rng))
        .into_iter()
}

/// An [iterator](Iterator) of [coordinates](Coordinate) where the value of some component lies
/// outside the range -[COORDINATE_LIMIT] exclusive to [COORDINATE_LIMIT] exclusive.
pub fn random_illegal_coordinates<R: Rng + ?Sized>(
    rng: &mut R,
) -> impl Iterator<Item = Coordinate> {
    let possible_coordinates = Uniform::from(0..isize::MAX);
    let possible_illegal_coordinates = Uniform::from(COORDINATE_LIMIT..isize::MAX);
    [
        (
            -possible_coordinates.sample(rng),
            -possible_illegal_coordinates.sample(rng),
        ),
        (
            -possible_illegal_coordinates.sample(rng),
            possible_coordinates.sample(rng),
        ),
        (
            possible_illegal_coordinates.sample(rng),
            -possible_coordinates.sample(rng),
        ),
        (
            possible_coordinates.sample(rng),
            possible_illegal_coordinates.sample(rng),
        ),
    ]
    .tap_mut(|coordinates| coordinates.shuffle(rng))
    .into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_hand_fits_capacity() {
        let hand = random_hand(&mut rand::thread_rng());

        assert!((1..=HAND_CAPACITY).contains(&hand.len()));
        assert!(!hand.spilled());
    }

    #[test]
    fn random_different_shape_same_color_single_sample() {
        let mut rng = rand::thread_rng();
        let tile: Tile = rng.gen();

        let other = random_different_shape_same_color(&mut rng, tile);

        assert_eq!(tile.color, other.color);
        assert_ne!(tile.shape, other.shape);
    }

    #[test]
    fn random_different_color_same_shape_single_sample() {
        let mut rng = rand::thread_rng();
        let tile: Tile = rng.gen();

        let other = random_different_color_same_shape(&mut rng, tile);

        assert_ne!(tile.color, other.color);
        assert_eq!(tile.shape, other.shape);
    }

    #[test]
    fn random_legal_coordinates_all_legal() {
        for (row, column) in random_legal_coordinates(&mut rand::thread_rng()) {
            assert!(
                -COORDINATE_LIMIT < row
                    && row < COORDINATE_LIMIT
                    && -COORDINATE_LIMIT < column
                    && column < COORDINATE_LIMIT
            );
        }
    }

    #[test]
    fn random_illegal_coordinates_all_illegal() {
        for (row, column) in random_illegal_coordinates(&mut rand::thread_rng()) {
            assert!(
                -COORDINATE_LIMIT >= row
                    || row >= COORDINATE_LIMIT
                    || -COORDINATE_LIMIT >= column
                    || column >= COORDINATE_LIMIT
            );
        }
    }
}
