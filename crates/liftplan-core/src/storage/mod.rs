mod config;
mod snapshot;

pub use config::Config;
pub use snapshot::SnapshotStore;

use std::path::PathBuf;

/// Returns `~/.config/liftplan[-dev]/` based on LIFTPLAN_ENV.
///
/// Set LIFTPLAN_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LIFTPLAN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("liftplan-dev")
    } else {
        base_dir.join("liftplan")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
