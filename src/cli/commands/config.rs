use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Print the active configuration.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("failed to serialize configuration: {e}")))?;
            println!("{yaml}");
        } else {
            println!("Nothing to do. Try '--print'.");
        }
    }
    Ok(())
}
