use crate::config::Config;
use crate::core::aggregate::weekly_totals;
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::ui::messages::header;
use crate::utils::colors::colorize_duration;
use crate::utils::date;
use crate::utils::table::Table;
use crate::utils::time::format_duration;

/// Trailing 7-day totals with the daily mean over the window.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = SessionStore::new(cfg.log_path());
    let sessions = store.load()?;

    let report = weekly_totals(&sessions, date::today());

    header("📅 Last 7 days 📅");

    let mut table = Table::new(vec!["Date", "Time"]);
    for (day, secs) in &report.days {
        table.add_row(vec![
            day.format("%Y-%m-%d").to_string(),
            colorize_duration(&format_duration(*secs)?),
        ]);
    }
    print!("{}", table.render());

    println!("\nAverage per day: {:.1} h", report.mean_daily_hours);

    Ok(())
}
