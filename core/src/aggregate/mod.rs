//! Cross-pull statistics.
//!
//! Every function here is a pure pass over finished pulls and rebuilds its
//! tables from scratch; nothing is carried between calls.

mod encounter;
mod player;
mod summary;

pub use encounter::{EncounterAggregate, aggregate_by_encounter};
pub use player::{PlayerAggregate, aggregate_by_player};
pub use summary::{PullSummary, RecentPull, ScoreRange, summarize_pulls};
