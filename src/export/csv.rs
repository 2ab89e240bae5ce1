use crate::errors::AppResult;
use crate::models::session::Session;
use csv::Writer;
use std::path::Path;

/// Writes the sessions as CSV to the given file.
pub fn write_csv(path: &Path, sessions: &[Session]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["date", "subject", "seconds", "start_time"])?;

    for s in sessions {
        wtr.write_record([
            s.date_str(),
            s.subject.clone(),
            s.seconds.to_string(),
            s.start_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
