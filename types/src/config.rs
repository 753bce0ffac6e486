//! User configuration for the `ogrh` binary.
//!
//! Stored as TOML in the platform config directory. Every field has a
//! default so a partial or missing file still loads.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_PATH: &str = "WoWCombatLog.txt";
pub const DEFAULT_TOP_PLAYERS: usize = 20;
pub const DEFAULT_RECENT_PULLS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Combat log read when no path is given on the command line.
    pub log_path: String,
    /// Directory exports are written to.
    pub output_dir: String,
    /// Rows shown in the player leaderboard.
    pub top_players: usize,
    /// Pulls listed in the "recent pulls" section of the summary.
    pub recent_pulls: usize,
    /// Swap `.` and `,` in printed numbers.
    pub european_format: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: DEFAULT_LOG_PATH.to_string(),
            output_dir: ".".to_string(),
            top_players: DEFAULT_TOP_PLAYERS,
            recent_pulls: DEFAULT_RECENT_PULLS,
            european_format: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
log_path = "C:\\Games\\TurtleWow\\Logs\\WoWCombatLog.txt"
top_players = 10
"#,
        )
        .unwrap();

        assert_eq!(config.log_path, "C:\\Games\\TurtleWow\\Logs\\WoWCombatLog.txt");
        assert_eq!(config.top_players, 10);
        assert_eq!(config.output_dir, ".");
        assert_eq!(config.recent_pulls, DEFAULT_RECENT_PULLS);
        assert!(!config.european_format);
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let config = AppConfig {
            output_dir: "exports".to_string(),
            european_format: true,
            ..Default::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
