use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::array;
use std::fmt;

/// The number of [`Tile`] variants. 36 tiles from 6 colors and 6 shapes.
pub const TILES_LEN: usize = Color::COLORS_LEN * Shape::SHAPES_LEN;

/// Describes a tile with a [`Shape`] and a [`Color`]. Two tiles are equal when both
/// attributes are equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// The shape printed on the tile.
    pub shape: Shape,
    /// The color of the shape printed on the tile.
    pub color: Color,
}

impl Tile {
    /// A new [`Tile`] from its two attributes.
    #[inline]
    pub const fn new(shape: Shape, color: Color) -> Tile {
        Tile { shape, color }
    }

    /// # Returns
    ///
    /// Whether both tiles have the same shape or the same color.
    #[inline]
    pub fn matches(&self, other: &Tile) -> bool {
        self.shape == other.shape || self.color == other.color
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.shape)
    }
}

/// # Returns
///
/// An array of all [`Tile`] variants in color then shape order.
#[inline]
pub fn tiles() -> [Tile; TILES_LEN] {
    array::from_fn(|index| {
        Tile::new(
            Shape::shapes()[index % Shape::SHAPES_LEN],
            Color::colors()[index / Shape::SHAPES_LEN],
        )
    })
}

impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        Tile::new(rng.gen(), rng.gen())
    }
}

/// Describes the color on a [`Tile`].
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    FromPrimitive,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// `0`.
    Red = 0,
    /// `1`.
    Green = 1,
    /// `2`.
    Blue = 2,
    /// `3`.
    Yellow = 3,
    /// `4`.
    Orange = 4,
    /// `5`.
    Purple = 5,
}

impl Color {
    /// The number of [`Color`] variants. 6 colors.
    pub const COLORS_LEN: usize = 6;

    /// # Returns
    ///
    /// An array of all [`Color`] variants in order.
    #[inline]
    pub fn colors() -> [Color; Color::COLORS_LEN] {
        [
            Color::Red,
            Color::Green,
            Color::Blue,
            Color::Yellow,
            Color::Orange,
            Color::Purple,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Purple => "purple",
        };
        f.write_str(name)
    }
}

impl Distribution<Color> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let index = rng.gen_range(0..Color::COLORS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            unreachable!(
                "index ({:?}) should be matched since colors cover all indexes \
                in range 0..Color::COLORS_LEN (0..{:?}).",
                index,
                Color::COLORS_LEN
            );
        })
    }
}

/// Describes the shape on a [`Tile`].
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    FromPrimitive,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    /// `0`.
    Star = 0,
    /// `1`.
    EightStar = 1,
    /// `2`.
    Square = 2,
    /// `3`.
    Circle = 3,
    /// `4`.
    Clover = 4,
    /// `5`.
    Diamond = 5,
}

impl Shape {
    /// The number of [`Shape`] variants. 6 shapes.
    pub const SHAPES_LEN: usize = 6;

    /// # Returns
    ///
    /// An array of all [`Shape`] variants in order.
    #[inline]
    pub fn shapes() -> [Shape; Shape::SHAPES_LEN] {
        [
            Shape::Star,
            Shape::EightStar,
            Shape::Square,
            Shape::Circle,
            Shape::Clover,
            Shape::Diamond,
        ]
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Star => "star",
            Shape::EightStar => "8star",
            Shape::Square => "square",
            Shape::Circle => "circle",
            Shape::Clover => "clover",
            Shape::Diamond => "diamond",
        };
        f.write_str(name)
    }
}

impl Distribution<Shape> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
        let index = rng.gen_range(0..Shape::SHAPES_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            unreachable!(
                "index ({:?}) should be matched since shapes cover all indexes \
                in range 0..Shape::SHAPES_LEN (0..{:?}).",
                index,
                Shape::SHAPES_LEN
            );
        })
    }
}
