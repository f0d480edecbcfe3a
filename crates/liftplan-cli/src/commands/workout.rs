//! Workout-level commands: title, clear, export and import.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use liftplan_core::codec::{schema, zwo};
use liftplan_core::Config;

use crate::common;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The versioned JSON workout document
    Json,
    /// The third-party interval XML format (lossy)
    Zwo,
}

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Show the workout summary
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rename the workout
    Title { title: String },
    /// Remove every block from the timeline
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Export the workout to a document
    Export {
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "json")]
        format: Format,
    },
    /// Import a document, replacing the current workout
    Import {
        file: PathBuf,
        #[arg(long, value_enum, default_value = "json")]
        format: Format,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: WorkoutAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, snapshots) = common::open_store()?;

    match action {
        WorkoutAction::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.workout())?);
            } else {
                println!("title:    {}", store.title());
                println!("version:  {}", store.workout().version);
                println!("blocks:   {}", store.len());
                println!("planned:  {} min", store.workout().total_minutes());
                println!("selected: {}", store.selection().len());
            }
        }
        WorkoutAction::Title { title } => {
            store.set_title(title);
            common::persist_and_report(&mut store, &snapshots)?;
        }
        WorkoutAction::Clear { yes } => {
            if store.is_empty() {
                println!("Timeline is already empty.");
                return Ok(());
            }
            let prompt = format!("Remove all {} blocks?", store.len());
            if !common::confirm(&prompt, yes)? {
                println!("Aborted.");
                return Ok(());
            }
            store.clear_all();
            common::persist_and_report(&mut store, &snapshots)?;
        }
        WorkoutAction::Export { output, format } => {
            let document = match format {
                Format::Json => schema::encode_json(store.workout())?,
                Format::Zwo => {
                    zwo::encode_with(store.workout(), &Config::load_or_default().zwo_options())?
                }
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, document)?;
                    println!("Exported to {}.", path.display());
                }
                None => println!("{document}"),
            }
        }
        WorkoutAction::Import { file, format, yes } => {
            let content = std::fs::read_to_string(&file)?;
            let (title, blocks) = match format {
                Format::Json => {
                    let document = schema::decode(&content)?;
                    (document.title, document.cards)
                }
                Format::Zwo => zwo::decode(&content)?,
            };
            if !store.is_empty() {
                let prompt = format!("Replace the current workout ({} blocks)?", store.len());
                if !common::confirm(&prompt, yes)? {
                    println!("Aborted.");
                    return Ok(());
                }
            }
            store.import_workout(title, blocks);
            common::persist_and_report(&mut store, &snapshots)?;
        }
    }
    Ok(())
}
