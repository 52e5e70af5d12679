use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::TurnOutcome;
use crate::turn::TurnStatus;

/// One finalized turn, serialized as a JSONL line for turn history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Unique identifier for this turn (format: YYYYMMDD-NNNNNN)
    pub turn_id: String,
    /// Deck seed of the match (enables deterministic replay)
    pub seed: Option<u64>,
    pub player_index: usize,
    pub player_name: String,
    /// Cards in hand when the turn ended, bust card included
    pub cards: Vec<Card>,
    pub status: TurnStatus,
    pub round_score: u32,
    pub awarded: u32,
    pub total_after: u32,
    /// Timestamp when the turn ended (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Set on the record of the turn that ended the match
    #[serde(default)]
    pub winner: Option<usize>,
}

impl TurnRecord {
    pub fn from_outcome(
        turn_id: String,
        seed: Option<u64>,
        player_name: &str,
        outcome: &TurnOutcome,
    ) -> Self {
        Self {
            turn_id,
            seed,
            player_index: outcome.player_index,
            player_name: player_name.to_string(),
            cards: outcome.turn.cards.clone(),
            status: outcome.turn.status,
            round_score: outcome.turn.round_score,
            awarded: outcome.turn.awarded,
            total_after: outcome.total_after,
            ts: None,
            winner: outcome.winner,
        }
    }
}

pub fn format_turn_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub struct TurnLogger {
    writer: BufWriter<File>,
    date: String,
    seq: u32,
}

impl TurnLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_turn_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &TurnRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}
