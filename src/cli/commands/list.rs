use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::ui::messages::info;
use crate::utils::date::parse_period;
use crate::utils::time::format_duration;
use ansi_term::Colour;
use chrono::Datelike;
use unicode_width::UnicodeWidthStr;

const PALETTE: [Colour; 6] = [
    Colour::Green,
    Colour::Cyan,
    Colour::Yellow,
    Colour::Blue,
    Colour::Purple,
    Colour::Red,
];

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Each subject keeps the same color across the listing, keyed by its
/// first-seen position in the log.
fn colour_for_subject(subjects: &[String], subject: &str) -> Colour {
    let idx = subjects.iter().position(|s| s == subject).unwrap_or(0);
    PALETTE[idx % PALETTE.len()]
}

/// List recorded sessions, optionally filtered by period and subject.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, subject } = cmd {
        let store = SessionStore::new(cfg.log_path());
        let mut sessions = store.load()?;
        let subjects = store.distinct_subjects()?;

        //
        // 1. Apply the period filter
        //
        if let Some(p) = period {
            let interval = parse_period(p)?;
            sessions.retain(|s| interval.contains(s.date));
        }

        //
        // 2. Apply the subject filter (case-insensitive)
        //
        if let Some(subj) = subject {
            let needle = subj.to_lowercase();
            sessions.retain(|s| s.subject.to_lowercase() == needle);
        }

        if sessions.is_empty() {
            info("No sessions recorded for this selection.");
            return Ok(());
        }

        //
        // 3. Render, with a separator line between months
        //
        let subj_w = sessions
            .iter()
            .map(|s| s.subject.width())
            .max()
            .unwrap_or(0)
            .max("Subject".width());

        println!("📅 Recorded sessions:\n");
        println!(
            "{:<10}  {:<subj_w$}  {:<5}  {}",
            "Date", "Subject", "Start", "Duration"
        );

        let mut prev_month: Option<(i32, u32)> = None;
        for s in &sessions {
            let month = (s.date.year(), s.date.month());
            if let Some(prev) = prev_month
                && prev != month
            {
                println!("{}", cfg.separator_char.repeat(25));
            }
            prev_month = Some(month);

            let colored = colour_for_subject(&subjects, &s.subject)
                .paint(s.subject.as_str())
                .to_string();
            let pad = subj_w.saturating_sub(strip_ansi(&colored).width());

            println!(
                "{}  {}{}  {:<5}  {}",
                s.date_str(),
                colored,
                " ".repeat(pad),
                s.start_str(),
                format_duration(s.seconds)?
            );
        }
    }

    Ok(())
}
