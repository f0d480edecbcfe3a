//! Palette template commands for CLI.

use clap::Subcommand;
use liftplan_core::{reconcile, DragEnd, DragLocation, DropOutcome, Template};

use crate::common;

#[derive(Subcommand)]
pub enum TemplateAction {
    /// List palette templates
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the block a template materializes
    Show {
        /// Template key, e.g. strength-set
        key: String,
        #[arg(long)]
        json: bool,
    },
    /// Drop a template onto the timeline (simulates a palette drag)
    Drop {
        /// Template key, e.g. cardio-interval
        key: String,
        /// Drop position (defaults to the end)
        #[arg(long)]
        at: Option<usize>,
    },
}

pub fn run(action: TemplateAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TemplateAction::List { json } => {
            if json {
                let entries: Vec<serde_json::Value> = Template::ALL
                    .iter()
                    .map(|t| {
                        serde_json::json!({
                            "key": t.key(),
                            "category": t.category(),
                            "name": t.display_name(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for template in Template::ALL {
                    println!(
                        "{:<16} {:<9} {}",
                        template.key(),
                        template.category(),
                        template.display_name()
                    );
                }
            }
        }
        TemplateAction::Show { key, json } => {
            let template = Template::parse(&key)
                .ok_or_else(|| format!("unknown template '{key}'"))?;
            let block = template.materialize();
            if json {
                println!("{}", serde_json::to_string_pretty(&block)?);
            } else {
                println!("{:<16} {}", template.key(), template.display_name());
                println!("defaults: {}", serde_json::to_string(&block.kind)?);
            }
        }
        TemplateAction::Drop { key, at } => {
            let (mut store, snapshots) = common::open_store()?;
            let index = at.unwrap_or(store.len());
            let drag = DragEnd {
                source: DragLocation::new(format!("palette-{key}"), 0),
                destination: Some(DragLocation::timeline(index)),
            };
            match reconcile(&mut store, &drag) {
                Some(DropOutcome::Inserted { .. }) => {
                    common::persist_and_report(&mut store, &snapshots)?;
                }
                _ => println!("Drop cancelled (unknown template '{key}')."),
            }
        }
    }
    Ok(())
}
