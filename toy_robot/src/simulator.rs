//! The robot state machine.

use std::fmt::Display;

use crate::{
    board::Board,
    command::{Command, ParseCommandError},
    heading::Heading,
};

/// Where the robot is, and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: u32,
    pub y: u32,
    pub heading: Heading,
}
impl Position {
    pub fn new(x: u32, y: u32, heading: Heading) -> Self {
        Self { x, y, heading }
    }
}
impl Display for Position {
    /// Formats the position as a report line, e.g. `Position: 2, 3, 90, EAST`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Position: {x}, {y}, {deg}, {name}",
            x = self.x,
            y = self.y,
            deg = self.heading.degrees(),
            name = self.heading.name(),
        )
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RobotState {
    /// No valid placement has been made yet.
    #[default]
    Unplaced,
    Placed(Position),
}
impl RobotState {
    pub fn position(&self) -> Option<Position> {
        match self {
            RobotState::Unplaced => None,
            RobotState::Placed(pos) => Some(*pos),
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, RobotState::Placed(_))
    }
}

/// A single robot on a board.
#[derive(Debug, Default, Clone)]
pub struct Simulator {
    board: Board,
    state: RobotState,
}
impl Simulator {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: RobotState::Unplaced,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> RobotState {
        self.state
    }

    /// Places the robot, if the coordinates are on the board. Returns true if the placement was
    /// applied.
    pub fn place(&mut self, x: u32, y: u32, heading: Heading) -> bool {
        if self.board.contains(x.into(), y.into()) {
            self.state = RobotState::Placed(Position::new(x, y, heading));
            true
        } else {
            tracing::debug!(x, y, %heading, "placement off the board");
            false
        }
    }

    /// Moves the robot one step forward. A step that would leave the board is dropped. Returns
    /// true if the robot moved.
    pub fn move_forward(&mut self) -> bool {
        let RobotState::Placed(pos) = self.state else {
            return false;
        };
        match self.board.step(pos.x, pos.y, pos.heading) {
            Some((x, y)) => self.place(x, y, pos.heading),
            None => {
                tracing::debug!(x = pos.x, y = pos.y, heading = %pos.heading, "move blocked");
                false
            }
        }
    }

    pub fn turn_left(&mut self) {
        if let RobotState::Placed(pos) = &mut self.state {
            pos.heading = pos.heading.left();
        }
    }

    pub fn turn_right(&mut self) {
        if let RobotState::Placed(pos) = &mut self.state {
            pos.heading = pos.heading.right();
        }
    }

    pub fn report(&self) -> Option<Position> {
        self.state.position()
    }

    /// Applies a parsed command. Until the robot has been placed, anything other than a
    /// placement is dropped. Returns the position to display for `REPORT`.
    pub fn execute(&mut self, cmd: Command) -> Option<Position> {
        if !cmd.is_place() && !self.state.is_placed() {
            tracing::debug!(%cmd, "ignoring command until the robot is placed");
            return None;
        }
        match cmd {
            Command::Place { x, y, heading } => {
                self.place(x, y, heading);
            }
            Command::Move => {
                self.move_forward();
            }
            Command::Left => self.turn_left(),
            Command::Right => self.turn_right(),
            Command::Report => return self.report(),
        }
        None
    }

    /// Parses and applies a single input line. Lines that don't parse are dropped.
    pub fn run_line(&mut self, line: &str) -> Option<Position> {
        match Command::parse(line, &self.board) {
            Ok(cmd) => self.execute(cmd),
            Err(err) => {
                log_rejected(&err);
                None
            }
        }
    }
}

fn log_rejected(err: &ParseCommandError) {
    match err {
        ParseCommandError::Unrecognized(line) if line.is_empty() => (),
        _ => tracing::debug!("ignoring line: {err}"),
    }
}
