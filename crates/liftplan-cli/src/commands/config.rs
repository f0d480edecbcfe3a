//! Configuration management commands for CLI.

use clap::Subcommand;
use liftplan_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the configuration
    Show,
    /// Print the config file path
    Path,
    /// Set a configuration value
    Set {
        /// One of: default_title, confirm_destructive, interval.author,
        /// interval.sport_type
        key: String,
        value: String,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            println!("{key} = {value}");
        }
    }
    Ok(())
}
