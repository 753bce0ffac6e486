use std::collections::BTreeSet;

use hashbrown::HashMap;
use serde::Serialize;

use crate::records::{Pull, PullPlayer};

/// One player's consumable scores across every pull they appear in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAggregate {
    pub name: String,
    /// Last class seen for this player.
    #[serde(rename = "class")]
    pub class_name: String,
    /// Last role seen for this player.
    pub role: String,
    pub pulls: u32,
    pub total_score: u64,
    pub avg_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub total_actual_points: u64,
    pub total_possible_points: u64,
    pub raids: Vec<String>,
    pub encounters: Vec<String>,
}

#[derive(Debug, Default)]
struct PlayerAccumulator {
    name: String,
    class_name: String,
    role: String,
    total_score: u64,
    total_actual_points: u64,
    total_possible_points: u64,
    scores: Vec<u32>,
    raids: BTreeSet<String>,
    encounters: BTreeSet<String>,
}

impl PlayerAccumulator {
    fn add(&mut self, pull: &Pull, player: &PullPlayer) {
        self.class_name.clone_from(&player.class_name);
        self.role.clone_from(&player.role);
        self.total_score += u64::from(player.score);
        self.total_actual_points += u64::from(player.actual_points);
        self.total_possible_points += u64::from(player.possible_points);
        self.scores.push(player.score);
        self.raids.insert(pull.raid.clone());
        self.encounters.insert(pull.encounter.clone());
    }

    fn finish(self) -> PlayerAggregate {
        // Accumulators are created on a player's first line, so never empty.
        let pulls = self.scores.len() as u32;
        PlayerAggregate {
            name: self.name,
            class_name: self.class_name,
            role: self.role,
            pulls,
            total_score: self.total_score,
            avg_score: self.total_score as f64 / f64::from(pulls),
            min_score: self.scores.iter().copied().min().unwrap_or_default(),
            max_score: self.scores.iter().copied().max().unwrap_or_default(),
            total_actual_points: self.total_actual_points,
            total_possible_points: self.total_possible_points,
            raids: self.raids.into_iter().collect(),
            encounters: self.encounters.into_iter().collect(),
        }
    }
}

/// Group every pull player line by player name.
///
/// Rows come back as a leaderboard: highest average score first, ties in
/// order of each player's first appearance.
pub fn aggregate_by_player(pulls: &[Pull]) -> Vec<PlayerAggregate> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<PlayerAccumulator> = Vec::new();

    for pull in pulls {
        for player in pull.players() {
            let slot = *index.entry(player.name.as_str()).or_insert_with(|| {
                rows.push(PlayerAccumulator {
                    name: player.name.clone(),
                    ..Default::default()
                });
                rows.len() - 1
            });
            rows[slot].add(pull, player);
        }
    }

    let mut players: Vec<PlayerAggregate> =
        rows.into_iter().map(PlayerAccumulator::finish).collect();
    players.sort_by(|a, b| b.avg_score.total_cmp(&a.avg_score));
    players
}
