use std::path::Path;

use ogrh_types::AppConfig;

pub const APP_NAME: &str = "ogrh";

/// Load the user config from `path`, or from the platform config directory
/// when no path is given. Unreadable or invalid files fall back to defaults.
pub fn load_config(path: Option<&Path>) -> AppConfig {
    let loaded: Result<AppConfig, confy::ConfyError> = match path {
        Some(path) => confy::load_path(path),
        None => confy::load(APP_NAME, None),
    };
    match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        }
    }
}
