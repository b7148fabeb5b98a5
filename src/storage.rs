use crate::errors::AppError;
use crate::models::Habit;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/habits.json"))
}

/// Load the habit collection, substituting `fallback()` for a missing or
/// unparseable file. Corrupt data is never surfaced as an error.
pub async fn load_habits<F>(path: &Path, fallback: F) -> Vec<Habit>
where
    F: FnOnce() -> Vec<Habit>,
{
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(habits) => habits,
            Err(err) => {
                error!("failed to parse habits file: {err}");
                fallback()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!("no habits file at {}, starting from fallback", path.display());
            fallback()
        }
        Err(err) => {
            error!("failed to read habits file: {err}");
            fallback()
        }
    }
}

pub async fn persist_habits(path: &Path, habits: &[Habit]) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(habits).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
