mod cache;
mod config;

pub use cache::{CacheDb, SCHEDULE_DATA_KEY, STUDY_DATA_KEY};
pub use config::Config;

use std::path::PathBuf;

/// Returns `~/.config/studyai[-dev]/` based on STUDYAI_ENV.
///
/// Set STUDYAI_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDYAI_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("studyai-dev")
    } else {
        base_dir.join("studyai")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
