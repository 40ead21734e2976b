//! Command parsing
//!
//! Lines are trimmed, then matched against two grammars: a bare command (`MOVE`, `LEFT`, `RIGHT`,
//! `REPORT`) or a placement (`PLACE <x>,<y>,<heading>`). Keywords and headings are
//! case-sensitive. Whitespace is tolerated around the placement arguments, but nothing may trail
//! a command.

use std::{fmt::Display, sync::LazyLock};

use regex::Regex;

use crate::{board::Board, heading::Heading};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("unrecognized command: {0:?}")]
    Unrecognized(String),
    #[error("placement ({x}, {y}) is off the board")]
    OutOfRange { x: String, y: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place { x: u32, y: u32, heading: Heading },
    Move,
    Left,
    Right,
    Report,
}
impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Place { x, y, heading } => write!(f, "PLACE {x},{y},{heading}"),
            Command::Move => f.write_str("MOVE"),
            Command::Left => f.write_str("LEFT"),
            Command::Right => f.write_str("RIGHT"),
            Command::Report => f.write_str("REPORT"),
        }
    }
}
impl Command {
    /// Parses a single input line. Placement coordinates must lie on `board`.
    pub fn parse(line: &str, board: &Board) -> Result<Self, ParseCommandError> {
        static BARE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"^(?<cmd>MOVE|LEFT|RIGHT|REPORT)\s*$").unwrap());
        static PLACE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(
                r"(?x)
                ^PLACE\s+
                (?<x>-?(?:0|[1-9][0-9]*))\s*,\s*
                (?<y>-?(?:0|[1-9][0-9]*))\s*,\s*
                (?<heading>NORTH|SOUTH|EAST|WEST)
                $",
            )
            .unwrap()
        });

        // Files saved with a byte order mark carry it on the first line.
        let line = line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        if let Some(cap) = BARE.captures(line) {
            return bare(&cap["cmd"])
                .ok_or_else(|| ParseCommandError::Unrecognized(line.to_string()));
        }

        let cap = PLACE
            .captures(line)
            .ok_or_else(|| ParseCommandError::Unrecognized(line.to_string()))?;
        let x = parse_coord(&cap["x"], board.max_x);
        let y = parse_coord(&cap["y"], board.max_y);
        let heading = cap["heading"]
            .parse::<Heading>()
            .map_err(|_| ParseCommandError::Unrecognized(line.to_string()))?;
        match (x, y) {
            (Some(x), Some(y)) => Ok(Command::Place { x, y, heading }),
            _ => Err(ParseCommandError::OutOfRange {
                x: cap["x"].to_string(),
                y: cap["y"].to_string(),
            }),
        }
    }

    /// Whether the command may be applied before the robot has been placed.
    pub fn is_place(&self) -> bool {
        matches!(self, Command::Place { .. })
    }
}

fn bare(keyword: &str) -> Option<Command> {
    let cmd = match keyword {
        "MOVE" => Command::Move,
        "LEFT" => Command::Left,
        "RIGHT" => Command::Right,
        "REPORT" => Command::Report,
        _ => return None,
    };
    Some(cmd)
}

/// Negative and oversized values fail to parse, and are treated the same as values past `max`.
fn parse_coord(s: &str, max: u32) -> Option<u32> {
    s.parse::<u32>().ok().filter(|v| *v <= max)
}
