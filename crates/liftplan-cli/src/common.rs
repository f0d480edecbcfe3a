//! Shared helpers for CLI commands.

use std::error::Error;
use std::io::Write;

use liftplan_core::{Config, SnapshotStore, StoreEvent, WorkoutStore};

/// Load the persisted store, or start fresh with the configured title.
pub fn open_store() -> Result<(WorkoutStore, SnapshotStore), Box<dyn Error>> {
    let snapshots = SnapshotStore::open()?;
    let store = match snapshots.load() {
        Some(snapshot) => WorkoutStore::from_snapshot(snapshot),
        None => WorkoutStore::with_title(Config::load_or_default().default_title),
    };
    Ok((store, snapshots))
}

/// Persist the store and print what the mutation did.
///
/// A command whose store calls all no-opped drains no events; nothing is
/// written in that case.
pub fn persist_and_report(
    store: &mut WorkoutStore,
    snapshots: &SnapshotStore,
) -> Result<(), Box<dyn Error>> {
    let events = store.drain_events();
    if events.is_empty() {
        println!("Nothing changed.");
        return Ok(());
    }
    snapshots.save(&store.to_snapshot())?;
    for event in &events {
        println!("{}", describe(event));
    }
    Ok(())
}

fn describe(event: &StoreEvent) -> String {
    match event {
        StoreEvent::BlockAdded { id, index, .. } => {
            format!("Added block {} at position {index}.", short(id))
        }
        StoreEvent::BlockUpdated { id, .. } => format!("Updated block {}.", short(id)),
        StoreEvent::BlocksDeleted { ids, .. } => format!("Deleted {} block(s).", ids.len()),
        StoreEvent::BlocksDuplicated { new_ids, .. } => {
            format!("Duplicated {} block(s).", new_ids.len())
        }
        StoreEvent::Reordered { from, to, .. } => format!("Moved block {from} -> {to}."),
        StoreEvent::Cleared { .. } => "Cleared the timeline.".to_string(),
        StoreEvent::Imported {
            title, block_count, ..
        } => format!("Imported '{title}' ({block_count} blocks)."),
        StoreEvent::SelectionChanged { ids, .. } => format!("Selected {} block(s).", ids.len()),
        StoreEvent::TitleChanged { title, .. } => format!("Renamed workout to '{title}'."),
    }
}

/// Leading characters of a block id, for display.
pub fn short(id: &str) -> &str {
    &id[..id.len().min(8)]
}

/// Ask before a destructive operation. `--yes` and the
/// `confirm_destructive = false` config setting both skip the prompt.
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool, Box<dyn Error>> {
    if assume_yes || !Config::load_or_default().confirm_destructive {
        return Ok(true);
    }
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "YES"))
}

/// Resolve a possibly abbreviated block id against the store.
pub fn resolve_id(store: &WorkoutStore, needle: &str) -> Result<String, Box<dyn Error>> {
    if store.block(needle).is_some() {
        return Ok(needle.to_string());
    }
    let matches: Vec<&str> = store
        .blocks()
        .iter()
        .map(|b| b.id.as_str())
        .filter(|id| id.starts_with(needle))
        .collect();
    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(format!("no block matches id '{needle}'").into()),
        n => Err(format!("id '{needle}' is ambiguous ({n} matches)").into()),
    }
}
