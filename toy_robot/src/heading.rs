//! Compass headings

use std::{fmt::Display, str::FromStr};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid heading: {0}")]
pub struct ParseHeadingError(String);

/// The direction the robot is facing.
///
/// Variants are ordered clockwise starting from north, which is also the order of their angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}
impl Heading {
    pub const ALL: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    /// The heading as a clockwise angle from north, in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Heading::North => 0,
            Heading::East => 90,
            Heading::South => 180,
            Heading::West => 270,
        }
    }

    /// Maps an angle back onto the compass. The angle is taken modulo 360, and must land on a
    /// multiple of 90.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        let degrees = degrees.rem_euclid(360);
        Self::ALL
            .into_iter()
            .find(|h| i32::from(h.degrees()) == degrees)
    }

    fn rotate(self, delta: i32) -> Self {
        // Every quarter turn from a compass point lands on another compass point.
        Self::from_degrees(i32::from(self.degrees()) + delta).unwrap_or(self)
    }

    /// Rotates 90 degrees counter-clockwise.
    #[must_use]
    pub fn left(self) -> Self {
        self.rotate(-90)
    }

    /// Rotates 90 degrees clockwise.
    #[must_use]
    pub fn right(self) -> Self {
        self.rotate(90)
    }

    /// The unit step taken when moving forward, as `(dx, dy)`.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        }
    }
}
impl Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for Heading {
    type Err = ParseHeadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let heading = match s {
            "NORTH" => Heading::North,
            "EAST" => Heading::East,
            "SOUTH" => Heading::South,
            "WEST" => Heading::West,
            _ => return Err(ParseHeadingError(s.to_string())),
        };
        Ok(heading)
    }
}
