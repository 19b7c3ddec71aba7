use crate::errors::AppError;
use crate::ledger::Ledger;
use chrono::Utc;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/contest.json"))
}

/// Loads the ledger snapshot, falling back to an empty ledger when the file
/// is missing or unreadable. The process keeps running either way.
pub async fn load_data(path: &Path) -> Ledger {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(stored) => Ledger::from_stored(stored),
            Err(err) => {
                error!("failed to parse data file: {err}");
                Ledger::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ledger::new(),
        Err(err) => {
            error!("failed to read data file: {err}");
            Ledger::new()
        }
    }
}

/// Writes the full snapshot. Called after every mutation while the ledger
/// lock is still held, so writes never interleave.
pub async fn persist_data(path: &Path, ledger: &Ledger) -> Result<(), AppError> {
    let stored = ledger.to_stored(Utc::now());
    let payload = serde_json::to_vec_pretty(&stored).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
