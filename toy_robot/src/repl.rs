use color_eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::simulator::Simulator;

pub fn run(sim: &mut Simulator) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    tracing::info!(board = %sim.board(), "starting interactive session");
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(&line).ok();
                }
                if let Some(pos) = sim.run_line(&line) {
                    println!("{pos}");
                }
            }
            Err(ReadlineError::Interrupted) => (),
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("error: {err}");
                break;
            }
        }
    }
    Ok(())
}
