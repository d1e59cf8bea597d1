use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::piles::PileKind;

/// Records a single move by its engine coordinates.
/// Replaying the records against the recorded deck reproduces the game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Kind of the source pile
    pub source: PileKind,
    /// Zero-based source pile number
    pub source_pile: usize,
    /// Zero-based index of the first moved card in the source pile
    pub card_index: usize,
    /// Kind of the destination pile
    pub dest: PileKind,
    /// Zero-based destination pile number
    pub dest_pile: usize,
}

/// Complete record of one game: the deal, every move, and the outcome.
/// Serialized to JSONL format for game history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// RNG seed the engine was built with (enables deterministic replay)
    pub seed: Option<u64>,
    /// The deck exactly as it was passed to `start_game`
    pub deck: Vec<Card>,
    /// Chronological list of all moves
    pub moves: Vec<MoveRecord>,
    /// Result summary (won, abandoned, etc.)
    pub result: Option<String>,
    /// Timestamp when the game was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSONL append writer for [`GameRecord`]s, driven by the external
/// controller. The engine itself never logs.
pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: "19700101".to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
