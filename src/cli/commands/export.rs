use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{self, ExportFormat};
use crate::store::SessionStore;
use crate::utils::date::parse_period;
use std::path::Path;

/// Export recorded sessions to a file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        //
        // 1. Load and filter
        //
        let store = SessionStore::new(cfg.log_path());
        let mut sessions = store.load()?;

        if let Some(r) = range {
            let interval = parse_period(r)?;
            sessions.retain(|s| interval.contains(s.date));
        }

        //
        // 2. Refuse to clobber an existing file without confirmation
        //
        let path = Path::new(file);
        export::ensure_writable(path, *force)?;

        //
        // 3. Write
        //
        match format {
            ExportFormat::Csv => export::csv::write_csv(path, &sessions)?,
            ExportFormat::Json => export::json::write_json(path, &sessions)?,
        }

        export::notify_export_success(format.as_str(), path);
    }

    Ok(())
}
