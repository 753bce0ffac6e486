use serde::{Deserialize, Serialize};

use super::RecordFamily;
use crate::combat_log::{Family, Fields, TaggedLine};

const HEADER_FIELDS: usize = 10;
const PLAYER_FIELDS: usize = 6;

/// A raid/encounter performance snapshot saved by the addon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub segment_id: String,
    pub name: String,
    pub timestamp: String,
    pub created_at: String,
    pub raid_name: String,
    pub raid_index: u32,
    pub encounter_name: String,
    pub encounter_index: u32,
    /// Seconds in combat.
    pub combat_time: f64,
    /// Player count declared by the header; may differ from `players().len()`
    /// when lines were lost.
    pub player_count: u32,
    players: Vec<SegmentPlayer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentPlayer {
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub role: String,
    pub damage: u64,
    pub effective_healing: u64,
    pub total_healing: u64,
}

impl Segment {
    pub fn players(&self) -> &[SegmentPlayer] {
        &self.players
    }

    /// Encounter name, or `N/A` when the segment covers no specific encounter.
    pub fn encounter_label(&self) -> &str {
        if self.encounter_name.is_empty() {
            "N/A"
        } else {
            &self.encounter_name
        }
    }
}

pub struct SegmentFamily;

impl RecordFamily for SegmentFamily {
    type Record = Segment;
    type Detail = SegmentPlayer;

    const FAMILY: Family = Family::Segment;

    // segmentId&name&timestamp&createdAt&raidName&raidIndex&encounterName&encounterIndex&combatTime&playerCount
    fn parse_header(line: &TaggedLine<'_>, _ordinal: usize) -> Option<Segment> {
        let f = Fields::with_min(line.payload, HEADER_FIELDS)?;
        Some(Segment {
            segment_id: f.text(0),
            name: f.text(1),
            timestamp: f.text(2),
            created_at: f.text(3),
            raid_name: f.text(4),
            raid_index: f.int(5),
            encounter_name: f.text(6),
            encounter_index: f.int(7),
            combat_time: f.float(8),
            player_count: f.int(9),
            players: Vec::new(),
        })
    }

    // playerName&class&role&damage&effectiveHealing&totalHealing
    fn parse_detail(payload: &str) -> Option<SegmentPlayer> {
        let f = Fields::with_min(payload, PLAYER_FIELDS)?;
        Some(SegmentPlayer {
            name: f.text(0),
            class_name: f.text(1),
            role: f.text(2),
            damage: f.int(3),
            effective_healing: f.int(4),
            total_healing: f.int(5),
        })
    }

    fn push_detail(record: &mut Segment, detail: SegmentPlayer) {
        record.players.push(detail);
    }

    fn end_token(record: &Segment) -> &str {
        &record.segment_id
    }
}
