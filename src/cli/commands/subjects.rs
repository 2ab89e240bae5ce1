use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::ui::messages::info;

/// Numbered listing of the subjects seen so far.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = SessionStore::new(cfg.log_path());
    let subjects = store.distinct_subjects()?;

    if subjects.is_empty() {
        info("No subjects recorded yet.");
        return Ok(());
    }

    println!("📚 Known subjects:\n");
    for (i, subject) in subjects.iter().enumerate() {
        println!("{}. {}", i + 1, subject);
    }

    Ok(())
}
