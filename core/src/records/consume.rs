use serde::{Deserialize, Serialize};

use super::RecordFamily;
use crate::combat_log::{Family, Fields, TaggedLine, log_timestamp};

const HEADER_FIELDS: usize = 8;
const PLAYER_FIELDS: usize = 6;

/// One pull of a raid encounter, with every player's consumable score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pull {
    /// 1-based position of this pull among the pulls found in the log.
    pub pull_index: usize,
    /// Game-local `MM/DD HH:MM:SS.mmm` stamp written in front of the header.
    pub log_timestamp: String,
    pub timestamp: u64,
    pub date: String,
    pub time: String,
    pub raid: String,
    pub encounter: String,
    pub pull_number: u32,
    pub requester: String,
    pub group_size: u32,
    players: Vec<PullPlayer>,
    /// Header timestamp exactly as written; the end marker repeats it.
    #[serde(skip)]
    end_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullPlayer {
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub role: String,
    pub score: u32,
    pub actual_points: u32,
    pub possible_points: u32,
}

impl Pull {
    pub fn players(&self) -> &[PullPlayer] {
        &self.players
    }

    /// `"<raid> - <encounter>"`, the key pulls are grouped by.
    pub fn encounter_key(&self) -> String {
        format!("{} - {}", self.raid, self.encounter)
    }

    /// Mean score of this pull's players, `None` for a pull without players.
    pub fn average_score(&self) -> Option<f64> {
        if self.players.is_empty() {
            return None;
        }
        let total: u64 = self.players.iter().map(|p| u64::from(p.score)).sum();
        Some(total as f64 / self.players.len() as f64)
    }
}

pub struct ConsumeFamily;

impl RecordFamily for ConsumeFamily {
    type Record = Pull;
    type Detail = PullPlayer;

    const FAMILY: Family = Family::Consume;

    // timestamp&date&time&raid&encounter&pullNumber&requester&groupSize
    fn parse_header(line: &TaggedLine<'_>, ordinal: usize) -> Option<Pull> {
        let log_timestamp = log_timestamp(line.prefix)?;
        let f = Fields::with_min(line.payload, HEADER_FIELDS)?;
        Some(Pull {
            pull_index: ordinal,
            log_timestamp: log_timestamp.to_string(),
            timestamp: f.int(0),
            date: f.text(1),
            time: f.text(2),
            raid: f.text(3),
            encounter: f.text(4),
            pull_number: f.int(5),
            requester: f.text(6),
            group_size: f.int(7),
            players: Vec::new(),
            end_token: f.text(0),
        })
    }

    // playerName&class&role&score&actualPoints&possiblePoints
    fn parse_detail(payload: &str) -> Option<PullPlayer> {
        let f = Fields::with_min(payload, PLAYER_FIELDS)?;
        Some(PullPlayer {
            name: f.text(0),
            class_name: f.text(1),
            role: f.text(2),
            score: f.int(3),
            actual_points: f.int(4),
            possible_points: f.int(5),
        })
    }

    fn push_detail(record: &mut Pull, detail: PullPlayer) {
        record.players.push(detail);
    }

    fn end_token(record: &Pull) -> &str {
        &record.end_token
    }
}
