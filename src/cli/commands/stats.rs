use crate::config::Config;
use crate::core::aggregate::{overall_total, totals_by_day, totals_by_subject};
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_duration;
use crate::utils::date;
use crate::utils::table::Table;
use crate::utils::time::format_duration;

/// Aggregated statistics: per subject, per day (gap-filled), overall.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = SessionStore::new(cfg.log_path());
    let sessions = store.load()?;

    if sessions.is_empty() {
        info("No study data yet.");
        return Ok(());
    }

    header("📊 Study statistics 📊");

    //
    // 1. Total time per subject
    //
    println!("Total time per subject:\n");
    let mut table = Table::new(vec!["Subject", "Time"]);
    for (subject, secs) in totals_by_subject(&sessions) {
        table.add_row(vec![subject, format_duration(secs)?]);
    }
    print!("{}", table.render());

    //
    // 2. Total time per day, first recorded day through today
    //
    println!("\nTotal time per day:\n");
    let mut table = Table::new(vec!["Date", "Time"]);
    for (day, secs) in totals_by_day(&sessions, date::today()) {
        table.add_row(vec![
            day.format("%Y-%m-%d").to_string(),
            colorize_duration(&format_duration(secs)?),
        ]);
    }
    print!("{}", table.render());

    //
    // 3. Overall total
    //
    println!(
        "\nOverall study time: {}",
        format_duration(overall_total(&sessions))?
    );

    Ok(())
}
