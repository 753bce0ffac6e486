//! Console reports. Every printer writes to any `io::Write` so the output
//! can be checked in tests.

use std::io::{self, Write};

use ogrh_core::aggregate::{PlayerAggregate, PullSummary};
use ogrh_core::export::render_segment_import;
use ogrh_core::records::Segment;
use ogrh_types::formatting::{
    format_combat_time, format_compact, format_duration, format_pct, format_score,
    format_thousands,
};

const RULE_WIDTH: usize = 80;

fn rule(out: &mut impl Write, c: char) -> io::Result<()> {
    writeln!(out, "{}", c.to_string().repeat(RULE_WIDTH))
}

/// Each segment's details followed by its import block.
pub fn print_segments(out: &mut impl Write, segments: &[Segment], european: bool) -> io::Result<()> {
    writeln!(out, "Found {} segment(s) in combat log", segments.len())?;
    writeln!(out)?;

    for (i, segment) in segments.iter().enumerate() {
        rule(out, '=')?;
        writeln!(out, "SEGMENT {}: {}", i + 1, segment.name)?;
        rule(out, '=')?;
        writeln!(out, "Created:     {}", segment.created_at)?;
        writeln!(out, "Raid:        {} (index {})", segment.raid_name, segment.raid_index)?;
        writeln!(
            out,
            "Encounter:   {} (index {})",
            segment.encounter_label(),
            segment.encounter_index
        )?;
        writeln!(
            out,
            "Combat time: {} ({})",
            format_combat_time(segment.combat_time, european),
            format_duration(segment.combat_time)
        )?;
        writeln!(
            out,
            "Players:     {} declared, {} recovered",
            segment.player_count,
            segment.players().len()
        )?;
        for p in segment.players() {
            writeln!(
                out,
                "  {:<20} {:<10} {:<8} dmg {:>9}  eff heal {:>9}  total heal {:>9}",
                p.name,
                p.class_name,
                p.role,
                format_compact(p.damage, european),
                format_compact(p.effective_healing, european),
                format_compact(p.total_healing, european)
            )?;
        }
        writeln!(out)?;
        writeln!(out, "Import data (copy from START to END):")?;
        write!(out, "{}", render_segment_import(segment))?;
        writeln!(out)?;
    }

    writeln!(out, "To import: open /ogrh roster in game, click 'Import Ranking Data'")?;
    writeln!(out, "and paste one block. The segment appears under Pending Segments.")
}

pub fn print_pull_summary(out: &mut impl Write, summary: &PullSummary, european: bool) -> io::Result<()> {
    rule(out, '=')?;
    writeln!(out, "Consume Tracking Summary")?;
    rule(out, '=')?;
    writeln!(out, "Total pulls:     {}", summary.total_pulls)?;
    if let Some((first, last)) = &summary.date_range {
        writeln!(out, "Date range:      {first} to {last}")?;
    }
    writeln!(out, "Raids:           {}", summary.raids.join(", "))?;
    writeln!(out, "Encounters:      {}", summary.unique_encounters)?;
    writeln!(out, "Unique players:  {}", summary.unique_players)?;
    if let Some(scores) = &summary.scores {
        writeln!(
            out,
            "Average score:   {} (min {}%, max {}%)",
            format_pct(scores.avg, european),
            scores.min,
            scores.max
        )?;
    }

    if summary.recent.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "Recent pulls (last {}):", summary.recent.len())?;
    rule(out, '-')?;
    for pull in &summary.recent {
        writeln!(out, "{} {} | {} - {}", pull.date, pull.time, pull.raid, pull.encounter)?;
        writeln!(
            out,
            "  Pull #{} by {} ({} players)",
            pull.pull_number, pull.requester, pull.group_size
        )?;
        if let Some(avg) = pull.avg_score {
            writeln!(out, "  Average score: {}", format_pct(avg, european))?;
        }
    }
    Ok(())
}

/// Top `top` players, already sorted best first.
pub fn print_leaderboard(
    out: &mut impl Write,
    players: &[PlayerAggregate],
    top: usize,
    european: bool,
) -> io::Result<()> {
    if players.is_empty() {
        return writeln!(out, "No player statistics available.");
    }

    writeln!(out)?;
    rule(out, '=')?;
    writeln!(out, "Top {top} Players by Average Score")?;
    rule(out, '=')?;
    writeln!(
        out,
        "{:<6} {:<20} {:<10} {:<8} {:<7} {:<7} {:<7} {:<7} {}",
        "Rank", "Player", "Class", "Role", "Pulls", "Avg", "Min", "Max", "Points"
    )?;
    rule(out, '-')?;
    for (rank, p) in players.iter().take(top).enumerate() {
        writeln!(
            out,
            "{:<6} {:<20} {:<10} {:<8} {:<7} {:<7} {:<7} {:<7} {}/{}",
            rank + 1,
            p.name,
            p.class_name,
            p.role,
            p.pulls,
            format_score(p.avg_score, european),
            p.min_score,
            p.max_score,
            format_thousands(p.total_actual_points, european),
            format_thousands(p.total_possible_points, european)
        )?;
    }
    Ok(())
}
