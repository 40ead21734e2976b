//! The tabletop

use std::{fmt::Display, str::FromStr, sync::LazyLock};

use color_eyre::eyre::{self, OptionExt};
use regex::Regex;

use crate::heading::Heading;

/// The bounds of the tabletop. Valid positions are `[0, max_x] x [0, max_y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub max_x: u32,
    pub max_y: u32,
}
impl Default for Board {
    fn default() -> Self {
        Self { max_x: 4, max_y: 4 }
    }
}
impl Board {
    pub fn new(max_x: u32, max_y: u32) -> Self {
        Self { max_x, max_y }
    }

    pub fn width(&self) -> u64 {
        u64::from(self.max_x) + 1
    }

    pub fn height(&self) -> u64 {
        u64::from(self.max_y) + 1
    }

    /// Returns true if the coordinates are on the board. Accepts signed coordinates so that
    /// negative candidates can be checked without a separate branch.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..=i64::from(self.max_x)).contains(&x) && (0..=i64::from(self.max_y)).contains(&y)
    }

    /// Returns the cell one step away from `(x, y)` in the direction of `heading`, if that cell
    /// is on the board.
    pub fn step(&self, x: u32, y: u32, heading: Heading) -> Option<(u32, u32)> {
        let (dx, dy) = heading.delta();
        let nx = i64::from(x) + i64::from(dx);
        let ny = i64::from(y) + i64::from(dy);
        if self.contains(nx, ny) {
            Some((u32::try_from(nx).ok()?, u32::try_from(ny).ok()?))
        } else {
            None
        }
    }
}
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}
impl FromStr for Board {
    type Err = eyre::Error;

    /// Parses board dimensions of the form `<width>x<height>`, e.g. `5x5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static REGEX: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"^(?<w>[0-9]+)[xX](?<h>[0-9]+)$").unwrap());
        let cap = REGEX
            .captures(s.trim())
            .ok_or_eyre("must be of the form <width>x<height>, e.g. 5x5")?;
        let width: u32 = cap["w"].parse()?;
        let height: u32 = cap["h"].parse()?;
        if width == 0 || height == 0 {
            eyre::bail!("board dimensions must be at least 1x1");
        }
        Ok(Self::new(width - 1, height - 1))
    }
}
