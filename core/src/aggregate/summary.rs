use std::collections::BTreeSet;

use hashbrown::HashSet;
use serde::Serialize;

use crate::records::Pull;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreRange {
    pub avg: f64,
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPull {
    pub date: String,
    pub time: String,
    pub raid: String,
    pub encounter: String,
    pub pull_number: u32,
    pub requester: String,
    pub group_size: u32,
    pub avg_score: Option<f64>,
}

/// Overview of every pull found in a log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullSummary {
    pub total_pulls: usize,
    /// Earliest and latest non-empty date, compared as text.
    pub date_range: Option<(String, String)>,
    pub raids: Vec<String>,
    pub unique_encounters: usize,
    pub unique_players: usize,
    /// Flat statistics over every player line (not per pull).
    pub scores: Option<ScoreRange>,
    /// The last `recent` pulls in log order.
    pub recent: Vec<RecentPull>,
}

pub fn summarize_pulls(pulls: &[Pull], recent: usize) -> PullSummary {
    let date_range = pulls
        .iter()
        .map(|p| p.date.as_str())
        .filter(|d| !d.is_empty())
        .fold(None, |range: Option<(&str, &str)>, d| match range {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
        .map(|(lo, hi)| (lo.to_string(), hi.to_string()));

    let raids: BTreeSet<&str> = pulls.iter().map(|p| p.raid.as_str()).collect();
    let encounters: HashSet<&str> = pulls.iter().map(|p| p.encounter.as_str()).collect();

    let mut players: HashSet<&str> = HashSet::new();
    let mut total: u64 = 0;
    let mut count: u64 = 0;
    let mut min = u32::MAX;
    let mut max = 0;
    for player in pulls.iter().flat_map(|p| p.players()) {
        players.insert(&player.name);
        total += u64::from(player.score);
        count += 1;
        min = min.min(player.score);
        max = max.max(player.score);
    }
    let scores = (count > 0).then(|| ScoreRange {
        avg: total as f64 / count as f64,
        min,
        max,
    });

    let recent = pulls[pulls.len().saturating_sub(recent)..]
        .iter()
        .map(|p| RecentPull {
            date: p.date.clone(),
            time: p.time.clone(),
            raid: p.raid.clone(),
            encounter: p.encounter.clone(),
            pull_number: p.pull_number,
            requester: p.requester.clone(),
            group_size: p.group_size,
            avg_score: p.average_score(),
        })
        .collect();

    PullSummary {
        total_pulls: pulls.len(),
        date_range,
        raids: raids.into_iter().map(str::to_string).collect(),
        unique_encounters: encounters.len(),
        unique_players: players.len(),
        scores,
        recent,
    }
}
