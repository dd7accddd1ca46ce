use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use janggi::{MoveOutcome, Side, Square};
use serde::Serialize;

/// Accumulates the move log of one game and writes it out as a JSON
/// file into the chosen directory.
pub struct Recorder {
    directory: PathBuf,
    moves: Vec<MoveRecord>,
}

#[derive(Serialize)]
struct MoveRecord {
    side: Side,
    from: String,
    to: String,
    outcome: &'static str,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            directory,
            moves: Vec::new(),
        })
    }

    pub fn store_move(&mut self, side: Side, from: Square, to: Square, outcome: MoveOutcome) {
        self.moves.push(MoveRecord {
            side,
            from: from.to_string(),
            to: to.to_string(),
            outcome: match outcome {
                MoveOutcome::Moved => "moved",
                MoveOutcome::Passed => "passed",
                MoveOutcome::MovedAndWon(_) => "won",
            },
        });
    }

    pub fn write_game_recording(&mut self) -> anyhow::Result<()> {
        let filepath = self.directory.join("game.json");
        let writer = BufWriter::new(File::create(filepath)?);
        serde_json::to_writer_pretty(writer, &self.moves)?;
        self.moves.clear();
        Ok(())
    }
}
