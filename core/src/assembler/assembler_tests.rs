//! Tests for the record assembler
//!
//! Drives both record families through open, close, implicit close and
//! stray-marker scenarios.

use super::RecordAssembler;
use crate::combat_log::classify_line;
use crate::records::{ConsumeFamily, Pull, RecordFamily, Segment, SegmentFamily};

/// Feed lines to one assembler, collecting records as a scan would.
fn assemble<F: RecordFamily>(lines: &[&str]) -> (Vec<F::Record>, RecordAssembler<F>) {
    let mut assembler = RecordAssembler::<F>::new();
    let mut out = Vec::new();
    for line in lines {
        let Some(tagged) = classify_line(line) else {
            continue;
        };
        if tagged.family != F::FAMILY {
            continue;
        }
        out.extend(assembler.process(&tagged));
    }
    out.extend(assembler.finish());
    (out, assembler)
}

fn segments(lines: &[&str]) -> (Vec<Segment>, RecordAssembler<SegmentFamily>) {
    assemble::<SegmentFamily>(lines)
}

fn pulls(lines: &[&str]) -> (Vec<Pull>, RecordAssembler<ConsumeFamily>) {
    assemble::<ConsumeFamily>(lines)
}

const SEG_S1: &str = "OGRH_SEGMENT_HEADER: S1&Boss&100&2024-01-01&MC&0&Boss1&0&120.5&2";
const SEG_S2: &str = "OGRH_SEGMENT_HEADER: S2&Trash&200&2024-01-01&MC&0&&0&30&1";

fn pull_header(ts: u32, encounter: &str) -> String {
    format!(
        "12/25 20:{:02}:00.000  OGRH_CONSUME_PULL: {ts}&2024-12-25&20:00:00&Molten Core&{encounter}&1&Kargoz&40",
        ts % 60
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Segments
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_segment_closed_by_matching_end() {
    let (out, assembler) = segments(&[
        SEG_S1,
        "OGRH_SEGMENT_PLAYER: Tank&Warrior&TANK&500&0&0",
        "OGRH_SEGMENT_END: S1",
    ]);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].combat_time, 120.5);
    assert_eq!(out[0].players().len(), 1);
    assert_eq!(out[0].players()[0].damage, 500);
    assert!(!assembler.is_open());
    assert_eq!(assembler.stats().closed_by_end, 1);
    assert_eq!(assembler.stats().closed_at_eof, 0);
}

#[test]
fn test_segment_non_numeric_raid_index_still_finalizes() {
    let (out, _) = segments(&[
        "OGRH_SEGMENT_HEADER: S1&Boss&100&2024-01-01&MC&abc&Boss1&0&120.5&2",
        "OGRH_SEGMENT_END: S1",
    ]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].raid_index, 0);
}

#[test]
fn test_mismatched_end_keeps_record_open() {
    let mut assembler = RecordAssembler::<SegmentFamily>::new();
    let header = classify_line(SEG_S1).unwrap();
    let stray = classify_line("OGRH_SEGMENT_END: S9").unwrap();
    let player = classify_line("OGRH_SEGMENT_PLAYER: Heals&Priest&HEALER&0&900&1200").unwrap();
    let end = classify_line("OGRH_SEGMENT_END: S1").unwrap();

    assert!(assembler.process(&header).is_none());
    assert!(assembler.process(&stray).is_none());
    assert!(assembler.is_open());

    // Still collecting after the stray marker
    assert!(assembler.process(&player).is_none());
    let seg = assembler.process(&end).unwrap();
    assert_eq!(seg.players().len(), 1);
    assert_eq!(seg.players()[0].total_healing, 1200);
    assert_eq!(assembler.stats().stray_ends, 1);
}

#[test]
fn test_unterminated_segment_kept_at_end_of_stream() {
    let (out, assembler) = segments(&[
        SEG_S1,
        "OGRH_SEGMENT_PLAYER: Tank&Warrior&TANK&500&0&0",
        "12/25 20:15:32.123  Kargoz hits Lucifron for 812.",
        "OGRH_SEGMENT_PLAYER: Heals&Priest&HEALER&0&900&1200",
    ]);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].players().len(), 2);
    assert_eq!(assembler.stats().closed_at_eof, 1);
    assert_eq!(assembler.stats().unterminated(), 1);
}

#[test]
fn test_detail_before_any_header_is_discarded() {
    let (out, assembler) = segments(&[
        "OGRH_SEGMENT_PLAYER: Ghost&Rogue&DPS&999&0&0",
        SEG_S1,
        "OGRH_SEGMENT_END: S1",
    ]);

    assert_eq!(out.len(), 1);
    assert!(out[0].players().is_empty());
    assert_eq!(assembler.stats().orphan_details, 1);
}

#[test]
fn test_detail_after_end_is_not_attached() {
    let (out, assembler) = segments(&[
        SEG_S1,
        "OGRH_SEGMENT_END: S1",
        "OGRH_SEGMENT_PLAYER: Late&Mage&DPS&10&0&0",
        "OGRH_SEGMENT_END: S1",
    ]);

    assert_eq!(out.len(), 1);
    assert!(out[0].players().is_empty());
    assert_eq!(assembler.stats().orphan_details, 1);
    assert_eq!(assembler.stats().orphan_ends, 1);
}

#[test]
fn test_malformed_header_does_not_close_open_record() {
    let (out, assembler) = segments(&[
        SEG_S1,
        "OGRH_SEGMENT_HEADER: S2&Trash&200",
        "OGRH_SEGMENT_PLAYER: Tank&Warrior&TANK&500&0&0",
        "OGRH_SEGMENT_END: S1",
    ]);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].segment_id, "S1");
    assert_eq!(out[0].players().len(), 1);
    assert_eq!(assembler.stats().malformed_headers, 1);
}

#[test]
fn test_malformed_detail_is_skipped() {
    let (out, assembler) = segments(&[
        SEG_S1,
        "OGRH_SEGMENT_PLAYER: Tank&Warrior&TANK",
        "OGRH_SEGMENT_PLAYER: Heals&Priest&HEALER&0&900&1200",
    ]);

    assert_eq!(out[0].players().len(), 1);
    assert_eq!(out[0].players()[0].name, "Heals");
    assert_eq!(assembler.stats().malformed_details, 1);
}

#[test]
fn test_duplicate_player_lines_are_appended() {
    let (out, _) = segments(&[
        SEG_S1,
        "OGRH_SEGMENT_PLAYER: Tank&Warrior&TANK&500&0&0",
        "OGRH_SEGMENT_PLAYER: Tank&Warrior&TANK&700&0&0",
        "OGRH_SEGMENT_END: S1",
    ]);

    let damage: Vec<u64> = out[0].players().iter().map(|p| p.damage).collect();
    assert_eq!(damage, vec![500, 700]);
}

#[test]
fn test_record_count_matches_accepted_headers() {
    let (out, assembler) = segments(&[
        "unrelated",
        SEG_S1,
        "unrelated",
        SEG_S2,
        "OGRH_SEGMENT_HEADER: broken",
        "OGRH_SEGMENT_END: S2",
        SEG_S1,
        "unrelated",
    ]);

    assert_eq!(out.len(), 3);
    assert_eq!(assembler.stats().headers, 3);
    assert_eq!(assembler.stats().finalized(), 3);
    let ids: Vec<&str> = out.iter().map(|s| s.segment_id.as_str()).collect();
    assert_eq!(ids, vec!["S1", "S2", "S1"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Pulls
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_second_pull_header_closes_first() {
    let first = pull_header(101, "Lucifron");
    let second = pull_header(102, "Magmadar");

    let mut assembler = RecordAssembler::<ConsumeFamily>::new();
    let player = "12/25 20:00:01.000  OGRH_CONSUME_PLAYER: Tank&Warrior&TANK&95&19&20";

    assert!(assembler.process(&classify_line(&first).unwrap()).is_none());
    assert!(assembler.process(&classify_line(player).unwrap()).is_none());

    let closed = assembler.process(&classify_line(&second).unwrap()).unwrap();
    assert_eq!(closed.encounter, "Lucifron");
    assert_eq!(closed.players().len(), 1);

    // The second pull opened only after the first was handed back
    assert_eq!(assembler.current().unwrap().encounter, "Magmadar");
    assert!(assembler.current().unwrap().players().is_empty());
    assert_eq!(assembler.stats().closed_by_header, 1);
}

#[test]
fn test_pull_closed_by_matching_end() {
    let header = pull_header(1735157732, "Ragnaros");
    let (out, assembler) = pulls(&[
        header.as_str(),
        "12/25 20:00:01.000  OGRH_CONSUME_PLAYER: Tank&Warrior&TANK&95&19&20",
        "12/25 20:00:01.000  OGRH_CONSUME_PLAYER: Heals&Priest&HEALER&80&16&20",
        "12/25 20:00:01.000  OGRH_CONSUME_END: 1735157732",
    ]);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].players().len(), 2);
    assert_eq!(assembler.stats().closed_by_end, 1);
}

#[test]
fn test_pull_ignores_end_for_other_pull() {
    let header = pull_header(500, "Ragnaros");
    let (out, assembler) = pulls(&[
        header.as_str(),
        "12/25 20:00:01.000  OGRH_CONSUME_END: 499",
        "12/25 20:00:01.000  OGRH_CONSUME_PLAYER: Tank&Warrior&TANK&95&19&20",
    ]);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].players().len(), 1);
    assert_eq!(assembler.stats().stray_ends, 1);
    assert_eq!(assembler.stats().closed_at_eof, 1);
}

#[test]
fn test_pull_index_counts_accepted_headers_only() {
    let first = pull_header(1, "Lucifron");
    let second = pull_header(2, "Magmadar");
    let (out, assembler) = pulls(&[
        first.as_str(),
        "OGRH_CONSUME_PULL: 9&2024-12-25&20:00:00&Molten Core&Gehennas&1&Kargoz&40",
        second.as_str(),
    ]);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].pull_index, 1);
    assert_eq!(out[1].pull_index, 2);
    assert_eq!(assembler.stats().malformed_headers, 1);
}

#[test]
fn test_families_do_not_interfere() {
    let header = pull_header(7, "Ragnaros");
    let lines = [
        SEG_S1,
        header.as_str(),
        "OGRH_SEGMENT_PLAYER: Tank&Warrior&TANK&500&0&0",
        "12/25 20:00:01.000  OGRH_CONSUME_PLAYER: Tank&Warrior&TANK&95&19&20",
        "OGRH_SEGMENT_END: S1",
        "12/25 20:00:01.000  OGRH_CONSUME_END: 7",
    ];

    let (segs, _) = segments(&lines);
    let (pulls, _) = pulls(&lines);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].players()[0].damage, 500);
    assert_eq!(pulls.len(), 1);
    assert_eq!(pulls[0].players()[0].score, 95);
}
