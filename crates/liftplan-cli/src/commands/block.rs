//! Block management commands for CLI.

use clap::{Args, Subcommand, ValueEnum};
use liftplan_core::{Block, BlockKind, FieldEdit, Template};

use crate::common;

#[derive(Subcommand)]
pub enum BlockAction {
    /// List timeline blocks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one block
    Show {
        /// Block id (unique prefix accepted)
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Add a block from a palette template
    Add {
        /// Template key, e.g. cardio-interval or strength-set
        template: String,
        /// Insert position (defaults to the end)
        #[arg(long)]
        at: Option<usize>,
    },
    /// Edit fields on one block
    Update {
        /// Block id (unique prefix accepted)
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Edit fields on every selected block
    Batch {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete blocks
    Delete {
        /// Block ids (unique prefixes accepted)
        #[arg(required = true)]
        ids: Vec<String>,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Duplicate blocks, keeping their relative order
    Duplicate {
        /// Block ids (unique prefixes accepted)
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Move a block to a new position
    Move { from: usize, to: usize },
    /// Replace the selection (no ids clears it)
    Select { ids: Vec<String> },
}

#[derive(Args)]
pub struct FieldArgs {
    #[arg(long)]
    description: Option<String>,
    /// Cue text shown while the block is active
    #[arg(long)]
    message: Option<String>,
    /// Duration in minutes
    #[arg(long)]
    duration: Option<u32>,
    /// Intensity zone (1-6)
    #[arg(long)]
    zone: Option<u8>,
    /// Target heart rate (bpm)
    #[arg(long)]
    heart_rate: Option<u32>,
    /// Target cadence (rpm)
    #[arg(long)]
    cadence: Option<u32>,
    #[arg(long)]
    reps: Option<u32>,
    #[arg(long)]
    weight: Option<u32>,
    /// Clear a field instead of setting it (repeatable)
    #[arg(long, value_enum)]
    unset: Vec<FieldName>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FieldName {
    Description,
    Message,
    Duration,
    Zone,
    HeartRate,
    Cadence,
    Reps,
    Weight,
}

impl FieldArgs {
    fn edits(&self) -> Vec<FieldEdit> {
        let mut edits = Vec::new();
        if let Some(v) = &self.description {
            edits.push(FieldEdit::Description(v.clone()));
        }
        if let Some(v) = &self.message {
            edits.push(FieldEdit::Message(Some(v.clone())));
        }
        if let Some(v) = self.duration {
            edits.push(FieldEdit::Duration(Some(v)));
        }
        if let Some(v) = self.zone {
            edits.push(FieldEdit::Zone(Some(v)));
        }
        if let Some(v) = self.heart_rate {
            edits.push(FieldEdit::HeartRate(Some(v)));
        }
        if let Some(v) = self.cadence {
            edits.push(FieldEdit::Cadence(Some(v)));
        }
        if let Some(v) = self.reps {
            edits.push(FieldEdit::Reps(Some(v)));
        }
        if let Some(v) = self.weight {
            edits.push(FieldEdit::Weight(Some(v)));
        }
        for field in &self.unset {
            edits.push(match field {
                FieldName::Description => FieldEdit::Description(String::new()),
                FieldName::Message => FieldEdit::Message(None),
                FieldName::Duration => FieldEdit::Duration(None),
                FieldName::Zone => FieldEdit::Zone(None),
                FieldName::HeartRate => FieldEdit::HeartRate(None),
                FieldName::Cadence => FieldEdit::Cadence(None),
                FieldName::Reps => FieldEdit::Reps(None),
                FieldName::Weight => FieldEdit::Weight(None),
            });
        }
        edits
    }
}

pub fn run(action: BlockAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, snapshots) = common::open_store()?;

    match action {
        BlockAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.blocks())?);
            } else if store.is_empty() {
                println!("Timeline is empty. Try 'liftplan block add cardio-warmup'.");
            } else {
                for (index, block) in store.blocks().iter().enumerate() {
                    let marker = if store.selection().contains(&block.id) {
                        "*"
                    } else {
                        " "
                    };
                    println!(
                        "{marker} {index:>2}  {}  {:<8} {:<9} {}",
                        common::short(&block.id),
                        block.category(),
                        block.subtype(),
                        summarize(block)
                    );
                }
                println!(
                    "{} block(s), {} min planned",
                    store.len(),
                    store.workout().total_minutes()
                );
            }
        }
        BlockAction::Show { id, json } => {
            let id = common::resolve_id(&store, &id)?;
            let block = store.block(&id).ok_or("block not found")?;
            if json {
                println!("{}", serde_json::to_string_pretty(block)?);
            } else {
                println!("id:          {}", block.id);
                println!("kind:        {} / {}", block.category(), block.subtype());
                println!("description: {}", block.description);
                if let Some(message) = &block.message {
                    println!("message:     {message}");
                }
                println!("summary:     {}", summarize(block));
            }
        }
        BlockAction::Add { template, at } => {
            let template = Template::parse(&template).ok_or_else(|| {
                format!("unknown template '{template}' (try 'liftplan template list')")
            })?;
            let block = template.materialize();
            match at {
                Some(index) => store.insert_block_at(block, index),
                None => store.add_block(block),
            }
            common::persist_and_report(&mut store, &snapshots)?;
        }
        BlockAction::Update { id, fields } => {
            let edits = fields.edits();
            if edits.is_empty() {
                return Err("no field edits given".into());
            }
            let id = common::resolve_id(&store, &id)?;
            for edit in &edits {
                store.update_field(&id, edit);
            }
            common::persist_and_report(&mut store, &snapshots)?;
        }
        BlockAction::Batch { fields } => {
            let edits = fields.edits();
            if edits.is_empty() {
                return Err("no field edits given".into());
            }
            if store.selection().is_empty() {
                return Err("no blocks selected (see 'liftplan block select')".into());
            }
            for edit in &edits {
                store.update_selection(edit);
            }
            common::persist_and_report(&mut store, &snapshots)?;
        }
        BlockAction::Delete { ids, yes } => {
            let resolved = resolve_all(&store, &ids)?;
            if resolved.len() > 1
                && !common::confirm(&format!("Delete {} blocks?", resolved.len()), yes)?
            {
                println!("Aborted.");
                return Ok(());
            }
            store.delete_blocks(&resolved);
            common::persist_and_report(&mut store, &snapshots)?;
        }
        BlockAction::Duplicate { ids } => {
            let resolved = resolve_all(&store, &ids)?;
            store.duplicate_blocks(&resolved);
            common::persist_and_report(&mut store, &snapshots)?;
        }
        BlockAction::Move { from, to } => {
            if from >= store.len() {
                return Err(format!(
                    "position {from} is out of range ({} blocks)",
                    store.len()
                )
                .into());
            }
            store.reorder(from, to);
            common::persist_and_report(&mut store, &snapshots)?;
        }
        BlockAction::Select { ids } => {
            let resolved = resolve_all(&store, &ids)?;
            store.set_selection(resolved);
            common::persist_and_report(&mut store, &snapshots)?;
        }
    }
    Ok(())
}

fn resolve_all(
    store: &liftplan_core::WorkoutStore,
    ids: &[String],
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    ids.iter().map(|id| common::resolve_id(store, id)).collect()
}

fn summarize(block: &Block) -> String {
    let mut parts = Vec::new();
    if let Some(minutes) = block.duration() {
        parts.push(format!("{minutes} min"));
    }
    match &block.kind {
        BlockKind::Cardio {
            zone,
            heart_rate,
            cadence,
            ..
        } => {
            if let Some(zone) = zone {
                parts.push(format!("Z{zone}"));
            }
            if let Some(bpm) = heart_rate {
                parts.push(format!("{bpm} bpm"));
            }
            if let Some(rpm) = cadence {
                parts.push(format!("{rpm} rpm"));
            }
        }
        BlockKind::Strength { reps, weight, .. } => {
            if let Some(reps) = reps {
                parts.push(format!("{reps} reps"));
            }
            if let Some(weight) = weight {
                parts.push(format!("x{weight}"));
            }
        }
    }
    if parts.is_empty() {
        block.description.clone()
    } else {
        parts.join(", ")
    }
}
