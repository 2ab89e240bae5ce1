use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Initialize the configuration and the session log.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.log.clone(), cli.test)
}
