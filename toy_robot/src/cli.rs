//! Command-line interface

use std::{io, path::PathBuf};

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::{board::Board, repl, replay, simulator::Simulator};

/// Simulates a toy robot on a square tabletop.
///
/// Commands are read one per line, either from FILE or interactively:
///
///   PLACE X,Y,NORTH|SOUTH|EAST|WEST
///   MOVE
///   LEFT
///   RIGHT
///   REPORT
///
/// Everything before the first valid PLACE, and any line that isn't a valid command, is ignored.
#[derive(Parser, Debug)]
#[command(version, about, verbatim_doc_comment)]
pub struct Cli {
    /// A file of commands to replay. If not given, commands are read from an interactive prompt.
    pub file: Option<PathBuf>,

    /// Board dimensions, as <width>x<height>.
    #[arg(short, long, default_value = "5x5")]
    pub board: Board,

    /// Log filter to use when RUST_LOG is not set (e.g. debug, info, warn).
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(&self.log_level);
        let mut sim = Simulator::new(self.board);
        match self.file {
            Some(path) => {
                if let Err(err) = replay::run_file(&mut sim, &path, io::stdout().lock()) {
                    tracing::error!(path = %path.display(), "{err}");
                    eprintln!("error: {err}");
                }
                Ok(())
            }
            None => repl::run(&mut sim),
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::Cli;
    use crate::board::Board;

    #[test]
    fn test_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["toy_robot"]).unwrap();
        assert_eq!(cli.file, None);
        assert_eq!(cli.board, Board::default());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_args() {
        let cli = Cli::try_parse_from([
            "toy_robot",
            "--board",
            "8x3",
            "--log-level",
            "debug",
            "cmds.txt",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("cmds.txt")));
        assert_eq!(cli.board, Board::new(7, 2));
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_bad_board() {
        assert!(Cli::try_parse_from(["toy_robot", "-b", "0x5"]).is_err());
        assert!(Cli::try_parse_from(["toy_robot", "-b", "five"]).is_err());
    }
}
