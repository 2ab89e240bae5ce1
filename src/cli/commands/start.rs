use std::io::{self, BufRead, Write};

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timer::SessionTimer;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::store::SessionStore;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::format_duration;

/// Run one interactive study session: pick a subject, run the stopwatch,
/// persist the completed session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { subject } = cmd {
        let store = SessionStore::new(cfg.log_path());

        //
        // 1. Resolve the subject (argument or interactive menu)
        //
        let subject = match subject {
            Some(s) if !s.trim().is_empty() => s.trim().to_string(),
            Some(_) => {
                return Err(AppError::InvalidSubject(
                    "subject must not be empty".to_string(),
                ));
            }
            None => {
                let known = store.distinct_subjects()?;
                let mut lines = io::stdin().lock().lines();
                match select_subject(&known, &mut lines)? {
                    Some(s) => s,
                    None => {
                        warning("No subject selected, nothing started.");
                        return Ok(());
                    }
                }
            }
        };

        //
        // 2. Run the stopwatch until the user stops it
        //
        let mut timer = SessionTimer::start();

        println!("Stopwatch started for {subject}!");
        println!("Commands:");
        println!("  [c]  check elapsed time");
        println!("  [s]  stop and save session");

        let (elapsed, start_time) = loop {
            print!("Enter command (c/s): ");
            io::stdout().flush()?;

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                // stdin closed before a stop: nothing is persisted
                warning("Input closed, session discarded.");
                return Ok(());
            }

            match line.trim().to_ascii_lowercase().as_str() {
                "c" => {
                    let secs = timer.check()?;
                    println!("You've studied for {}\n", format_duration(secs)?);
                }
                "s" => break timer.stop()?,
                _ => println!("Invalid command. Use c/s.\n"),
            }
        };

        //
        // 3. Persist the completed session
        //
        let session = Session::new(date::today(), &subject, elapsed, start_time.time())?;
        store.append(&session)?;

        success(format!(
            "You have just studied {} for {}.",
            subject,
            format_duration(elapsed)?
        ));
    }

    Ok(())
}

/// Numbered subject menu with an "add a new subject" entry, re-prompting on
/// invalid input.
fn select_subject<I>(known: &[String], lines: &mut I) -> AppResult<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        println!("What subject are you studying?");
        for (i, subj) in known.iter().enumerate() {
            println!("{}. {}", i + 1, subj);
        }
        println!("{}. Add a new subject", known.len() + 1);
        print!("Select a number: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;

        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=known.len()).contains(&choice) => {
                return Ok(Some(known[choice - 1].clone()));
            }
            Ok(choice) if choice == known.len() + 1 => {
                print!("Enter new subject name: ");
                io::stdout().flush()?;
                let Some(name) = lines.next() else {
                    return Ok(None);
                };
                let name = name?.trim().to_string();
                if name.is_empty() {
                    println!("Subject name must not be empty.\n");
                    continue;
                }
                println!("Added new subject: {name}");
                return Ok(Some(name));
            }
            _ => println!("Invalid choice.\n"),
        }
    }
}
