use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::actions::{HandResult, PlayerAction, Street};
use crate::cards::Card;
use crate::player::PlayerId;
use crate::pot::SidePot;

/// Records a single player action during a hand.
/// Associates the action with the player and the street when it occurred.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player_id: PlayerId,
    /// The betting street when this action occurred
    pub street: Street,
    /// The action as it was applied, after leniency and all-in conversion
    pub action: PlayerAction,
}

/// Information about the showdown phase when hands are revealed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub winners: Vec<PlayerId>,
    /// Rank descriptions per showdown player, e.g. "Flush Ah Jh 9h 6h 2h"
    #[serde(default)]
    pub hands: Vec<(PlayerId, String)>,
}

/// Complete record of a poker hand including all actions, board cards, and outcome.
/// Serialized to JSONL format for hand history storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Deck seed of the table that played the hand
    pub seed: Option<u64>,
    /// Chronological list of all player actions
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    #[serde(default)]
    pub pots: Vec<SidePot>,
    #[serde(default)]
    pub payouts: Vec<(PlayerId, u32)>,
    /// Timestamp when the hand was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Showdown information if hand went to showdown
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

impl HandRecord {
    pub fn from_result(
        hand_id: String,
        seed: Option<u64>,
        actions: &[ActionRecord],
        result: &HandResult,
    ) -> Self {
        let showdown = (!result.showdown.is_empty()).then(|| ShowdownInfo {
            winners: result.winners.clone(),
            hands: result
                .showdown
                .iter()
                .map(|h| (h.player_id, h.value.to_string()))
                .collect(),
        });
        Self {
            hand_id,
            seed,
            actions: actions.to_vec(),
            board: result.board.clone(),
            pots: result.pots.clone(),
            payouts: result.payouts.clone(),
            ts: None,
            showdown,
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends hand records to a JSONL file, one record per line.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that numbers hands but writes nothing.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
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
