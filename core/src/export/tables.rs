use std::path::Path;

use serde::Serialize;

use super::join_list;
use crate::aggregate::{EncounterAggregate, PlayerAggregate};
use crate::error::ExportError;
use crate::records::Pull;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct PullRow<'a> {
    log_timestamp: &'a str,
    date: &'a str,
    time: &'a str,
    raid: &'a str,
    encounter: &'a str,
    pull_number: u32,
    requester: &'a str,
    group_size: u32,
    player_name: &'a str,
    class: &'a str,
    role: &'a str,
    score: u32,
    actual_points: u32,
    possible_points: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct PlayerRow<'a> {
    player_name: &'a str,
    class: &'a str,
    role: &'a str,
    pulls: u32,
    avg_score: String,
    min_score: u32,
    max_score: u32,
    total_actual_points: u64,
    total_possible_points: u64,
    raids: String,
    encounters: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct EncounterRow<'a> {
    encounter: &'a str,
    raid: &'a str,
    pulls: u32,
    avg_group_size: String,
    avg_score: String,
    dates: String,
    requesters: String,
}

fn write_rows<T: Serialize>(
    path: &Path,
    rows: impl IntoIterator<Item = T>,
) -> Result<usize, ExportError> {
    let csv_err = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    let mut count = 0;
    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
        count += 1;
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(count)
}

/// One row per player per pull, pull header fields repeated on each row.
pub fn write_pull_rows(pulls: &[Pull], path: &Path) -> Result<usize, ExportError> {
    if pulls.iter().all(|p| p.players().is_empty()) {
        tracing::warn!(path = %path.display(), "No pull rows to export");
        return Ok(0);
    }

    let rows = pulls.iter().flat_map(|pull| {
        pull.players().iter().map(move |player| PullRow {
            log_timestamp: &pull.log_timestamp,
            date: &pull.date,
            time: &pull.time,
            raid: &pull.raid,
            encounter: &pull.encounter,
            pull_number: pull.pull_number,
            requester: &pull.requester,
            group_size: pull.group_size,
            player_name: &player.name,
            class: &player.class_name,
            role: &player.role,
            score: player.score,
            actual_points: player.actual_points,
            possible_points: player.possible_points,
        })
    });
    let count = write_rows(path, rows)?;
    tracing::info!(path = %path.display(), pulls = pulls.len(), rows = count, "Exported pull rows");
    Ok(count)
}

/// Player statistics, in the order given (leaderboard order from
/// [`crate::aggregate::aggregate_by_player`]).
pub fn write_player_stats(players: &[PlayerAggregate], path: &Path) -> Result<usize, ExportError> {
    if players.is_empty() {
        tracing::warn!(path = %path.display(), "No player statistics to export");
        return Ok(0);
    }

    let rows = players.iter().map(|p| PlayerRow {
        player_name: &p.name,
        class: &p.class_name,
        role: &p.role,
        pulls: p.pulls,
        avg_score: format!("{:.1}", p.avg_score),
        min_score: p.min_score,
        max_score: p.max_score,
        total_actual_points: p.total_actual_points,
        total_possible_points: p.total_possible_points,
        raids: join_list(&p.raids),
        encounters: join_list(&p.encounters),
    });
    let count = write_rows(path, rows)?;
    tracing::info!(path = %path.display(), count, "Exported player statistics");
    Ok(count)
}

/// Encounter statistics, in the order given (most pulls first from
/// [`crate::aggregate::aggregate_by_encounter`]).
pub fn write_encounter_stats(
    encounters: &[EncounterAggregate],
    path: &Path,
) -> Result<usize, ExportError> {
    if encounters.is_empty() {
        tracing::warn!(path = %path.display(), "No encounter statistics to export");
        return Ok(0);
    }

    let rows = encounters.iter().map(|e| EncounterRow {
        encounter: &e.encounter,
        raid: &e.raid,
        pulls: e.pulls,
        avg_group_size: format!("{:.1}", e.avg_group_size),
        avg_score: format!("{:.1}", e.avg_score),
        dates: join_list(&e.dates),
        requesters: join_list(&e.requesters),
    });
    let count = write_rows(path, rows)?;
    tracing::info!(path = %path.display(), count, "Exported encounter statistics");
    Ok(count)
}
