use std::collections::BTreeSet;

use hashbrown::HashMap;
use serde::Serialize;

use crate::records::Pull;

/// Pull statistics for one raid encounter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterAggregate {
    /// `"<raid> - <encounter>"`
    pub encounter: String,
    pub raid: String,
    pub pulls: u32,
    pub avg_group_size: f64,
    /// Mean of per-pull average scores: every pull weighs the same no matter
    /// how many players it had.
    pub avg_score: f64,
    pub dates: Vec<String>,
    pub requesters: Vec<String>,
}

#[derive(Debug, Default)]
struct EncounterAccumulator {
    key: String,
    raid: String,
    pulls: u32,
    total_group_size: u64,
    pull_averages: Vec<f64>,
    dates: BTreeSet<String>,
    requesters: BTreeSet<String>,
}

impl EncounterAccumulator {
    fn add(&mut self, pull: &Pull) {
        self.pulls += 1;
        self.raid.clone_from(&pull.raid);
        self.total_group_size += u64::from(pull.group_size);
        self.dates.insert(pull.date.clone());
        self.requesters.insert(pull.requester.clone());
        // Pulls without players carry no score
        if let Some(avg) = pull.average_score() {
            self.pull_averages.push(avg);
        }
    }

    fn finish(self) -> EncounterAggregate {
        let avg_score = if self.pull_averages.is_empty() {
            0.0
        } else {
            self.pull_averages.iter().sum::<f64>() / self.pull_averages.len() as f64
        };
        EncounterAggregate {
            encounter: self.key,
            raid: self.raid,
            pulls: self.pulls,
            avg_group_size: self.total_group_size as f64 / f64::from(self.pulls),
            avg_score,
            dates: self.dates.into_iter().collect(),
            requesters: self.requesters.into_iter().collect(),
        }
    }
}

/// Group pulls by raid and encounter name.
///
/// Rows come back with the most-pulled encounter first, ties in order of
/// first appearance.
pub fn aggregate_by_encounter(pulls: &[Pull]) -> Vec<EncounterAggregate> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<EncounterAccumulator> = Vec::new();

    for pull in pulls {
        let key = pull.encounter_key();
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                rows.push(EncounterAccumulator {
                    key: key.clone(),
                    ..Default::default()
                });
                index.insert(key, rows.len() - 1);
                rows.len() - 1
            }
        };
        rows[slot].add(pull);
    }

    let mut encounters: Vec<EncounterAggregate> =
        rows.into_iter().map(EncounterAccumulator::finish).collect();
    encounters.sort_by(|a, b| b.pulls.cmp(&a.pulls));
    encounters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::scan_reader;
    use std::io::Cursor;

    fn encounters(log: &str) -> Vec<EncounterAggregate> {
        aggregate_by_encounter(&scan_reader(Cursor::new(log)).pulls)
    }

    #[test]
    fn test_average_is_mean_of_pull_means() {
        // One player at 100, then two players at 0: 50.0, not 33.3
        let rows = encounters(
            "\
1/1 20:00:00.000 OGRH_CONSUME_PULL: 1&2024-01-01&20:00:00&MC&Rag&1&Kargoz&1
1/1 20:00:00.000 OGRH_CONSUME_PLAYER: A&Mage&DPS&100&10&10
1/1 20:00:00.000 OGRH_CONSUME_END: 1
1/1 20:10:00.000 OGRH_CONSUME_PULL: 2&2024-01-01&20:10:00&MC&Rag&2&Kargoz&2
1/1 20:10:00.000 OGRH_CONSUME_PLAYER: B&Mage&DPS&0&0&10
1/1 20:10:00.000 OGRH_CONSUME_PLAYER: C&Mage&DPS&0&0&10
1/1 20:10:00.000 OGRH_CONSUME_END: 2
",
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].encounter, "MC - Rag");
        assert_eq!(rows[0].pulls, 2);
        assert_eq!(rows[0].avg_score, 50.0);
        assert_eq!(rows[0].avg_group_size, 1.5);
    }

    #[test]
    fn test_empty_pull_counts_but_has_no_score() {
        let rows = encounters(
            "\
1/1 20:00:00.000 OGRH_CONSUME_PULL: 1&2024-01-01&20:00:00&MC&Rag&1&Kargoz&40
1/1 20:00:00.000 OGRH_CONSUME_END: 1
1/1 20:10:00.000 OGRH_CONSUME_PULL: 2&2024-01-02&20:10:00&MC&Rag&2&Thrall&20
1/1 20:10:00.000 OGRH_CONSUME_PLAYER: B&Mage&DPS&80&8&10
1/1 20:10:00.000 OGRH_CONSUME_END: 2
",
        );

        assert_eq!(rows[0].pulls, 2);
        assert_eq!(rows[0].avg_score, 80.0);
        assert_eq!(rows[0].avg_group_size, 30.0);
        assert_eq!(rows[0].dates, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(rows[0].requesters, vec!["Kargoz", "Thrall"]);
    }

    #[test]
    fn test_only_empty_pulls_score_zero() {
        let rows = encounters(
            "1/1 20:00:00.000 OGRH_CONSUME_PULL: 1&2024-01-01&20:00:00&MC&Rag&1&Kargoz&40\n",
        );
        assert_eq!(rows[0].pulls, 1);
        assert_eq!(rows[0].avg_score, 0.0);
    }

    #[test]
    fn test_sorted_by_pull_count() {
        let rows = encounters(
            "\
1/1 20:00:00.000 OGRH_CONSUME_PULL: 1&d&t&MC&Lucifron&1&K&40
1/1 20:00:00.000 OGRH_CONSUME_PULL: 2&d&t&MC&Magmadar&1&K&40
1/1 20:00:00.000 OGRH_CONSUME_PULL: 3&d&t&MC&Magmadar&2&K&40
1/1 20:00:00.000 OGRH_CONSUME_PULL: 4&d&t&BWL&Razorgore&1&K&40
",
        );
        let keys: Vec<&str> = rows.iter().map(|r| r.encounter.as_str()).collect();
        assert_eq!(keys, vec!["MC - Magmadar", "MC - Lucifron", "BWL - Razorgore"]);
    }
}
