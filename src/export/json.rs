use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use std::path::Path;

/// Writes the sessions as pretty-printed JSON.
pub fn write_json(path: &Path, sessions: &[Session]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(sessions)
        .map_err(|e| AppError::Export(format!("failed to serialize sessions: {e}")))?;
    std::fs::write(path, json)?;
    Ok(())
}
