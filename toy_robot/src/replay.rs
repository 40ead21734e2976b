//! Command file replay

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use crate::simulator::Simulator;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("couldn't read file '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("error reading line {line}: {source}")]
    Read { line: usize, source: io::Error },
    #[error("error writing report: {0}")]
    Write(#[source] io::Error),
}

/// Feeds every line of `reader` to the simulator, writing reports to `out`. Returns the number of
/// lines read.
pub fn run(
    sim: &mut Simulator,
    reader: impl BufRead,
    mut out: impl Write,
) -> Result<usize, ReplayError> {
    let mut count = 0;
    for (n, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ReplayError::Read { line: n + 1, source })?;
        if let Some(pos) = sim.run_line(&line) {
            writeln!(out, "{pos}").map_err(ReplayError::Write)?;
        }
        count += 1;
    }
    out.flush().map_err(ReplayError::Write)?;
    Ok(count)
}

/// Replays a command file.
pub fn run_file(
    sim: &mut Simulator,
    path: impl AsRef<Path>,
    out: impl Write,
) -> Result<usize, ReplayError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReplayError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "replaying commands");
    let count = run(sim, BufReader::new(file), out)?;
    tracing::info!(lines = count, "replay finished");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use assert_matches::assert_matches;

    use super::{ReplayError, run, run_file};
    use crate::{
        heading::Heading,
        simulator::{Position, RobotState, Simulator},
    };

    fn replay(input: &str) -> (Simulator, String) {
        let mut sim = Simulator::default();
        let mut out = vec![];
        run(&mut sim, Cursor::new(input), &mut out).unwrap();
        (sim, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_reports_in_order() {
        let (_, out) = replay("PLACE 0,0,NORTH\nREPORT\nMOVE\nREPORT\nRIGHT\nREPORT\n");
        assert_eq!(
            out,
            "Position: 0, 0, 0, NORTH\nPosition: 0, 1, 0, NORTH\nPosition: 0, 1, 90, EAST\n"
        );
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let (sim, out) = replay("\r\nPLACE 1,2,EAST\r\n\r\nMOVE\r\nREPORT\r\n");
        assert_eq!(out, "Position: 2, 2, 90, EAST\n");
        assert_eq!(
            sim.state(),
            RobotState::Placed(Position::new(2, 2, Heading::East))
        );
    }

    #[test]
    fn test_byte_order_mark() {
        let (_, out) = replay("\u{feff}PLACE 3,1,WEST\nREPORT\n");
        assert_eq!(out, "Position: 3, 1, 270, WEST\n");
    }

    #[test]
    fn test_no_output_until_placed() {
        let (sim, out) = replay("REPORT\nMOVE\nPLACE 9,9,NORTH\nREPORT");
        assert_eq!(out, "");
        assert_eq!(sim.state(), RobotState::Unplaced);
    }

    #[test]
    fn test_invalid_utf8() {
        let mut sim = Simulator::default();
        let input: &[u8] = b"PLACE 0,0,NORTH\n\xff\xfe\nMOVE\n";
        let result = run(&mut sim, input, std::io::sink());
        assert_matches!(result, Err(ReplayError::Read { line: 2, .. }));
        assert_eq!(sim.report(), Some(Position::new(0, 0, Heading::North)));
    }

    #[test]
    fn test_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "PLACE 1,2,EAST").unwrap();
        writeln!(file, "MOVE").unwrap();
        writeln!(file, "MOVE").unwrap();
        writeln!(file, "LEFT").unwrap();
        writeln!(file, "MOVE").unwrap();
        writeln!(file, "REPORT").unwrap();
        file.flush().unwrap();

        let mut sim = Simulator::default();
        let mut out = vec![];
        let count = run_file(&mut sim, file.path(), &mut out).unwrap();
        assert_eq!(count, 6);
        assert_eq!(String::from_utf8(out).unwrap(), "Position: 3, 3, 0, NORTH\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let mut sim = Simulator::default();
        let err = run_file(&mut sim, &path, std::io::sink()).unwrap_err();
        assert_matches!(&err, ReplayError::Open { path: p, .. } if *p == path);
        assert!(err.to_string().starts_with("couldn't read file '"));
        assert_eq!(sim.state(), RobotState::Unplaced);
    }
}
