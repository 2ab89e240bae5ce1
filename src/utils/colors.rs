/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// Grays out zero durations ("0 min 0 sec") so gap-filled days recede
/// visually in the daily timeline.
pub fn colorize_duration(value: &str) -> String {
    if value.trim() == "0 min 0 sec" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
