//! Drag-end reconciliation.
//!
//! Translates a drag-end descriptor pair into a store mutation. Two cases
//! matter: a palette entry dropped onto the timeline (materialize a template
//! at the drop index) and a timeline block dropped elsewhere on the timeline
//! (single-item reorder). Every other source/destination pairing -- and any
//! drop without a destination -- cancels silently.
//!
//! The drop position is always honored literally, and reorder uses
//! remove-then-insert semantics, matching what drag-and-drop UI libraries
//! report.

use serde::{Deserialize, Serialize};

use crate::store::WorkoutStore;
use crate::template::Template;

/// Droppable id of the timeline.
pub const TIMELINE: &str = "timeline";

/// Prefix of palette droppable ids; the remainder is the template key.
pub const PALETTE_PREFIX: &str = "palette-";

/// One end of a drag: which droppable, and the position within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub droppable_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }

    /// Location on the timeline at `index`.
    pub fn timeline(index: usize) -> Self {
        Self::new(TIMELINE, index)
    }

    /// Location of a palette entry.
    pub fn palette(template: Template) -> Self {
        Self::new(format!("{PALETTE_PREFIX}{}", template.key()), 0)
    }
}

/// A finished drag as reported by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub source: DragLocation,
    /// `None` when the drop landed outside every droppable.
    pub destination: Option<DragLocation>,
}

/// What a reconciled drop did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// A template was materialized and inserted.
    Inserted { id: String, index: usize },
    /// An existing block moved within the timeline.
    Reordered { from: usize, to: usize },
}

/// Reconcile a drag-end against the store.
///
/// Returns `None` when the drag is cancelled: no destination, a destination
/// other than the timeline, an unknown template key, or a source that is
/// neither palette nor timeline. Cancelled drags leave the store untouched.
pub fn reconcile(store: &mut WorkoutStore, drag: &DragEnd) -> Option<DropOutcome> {
    let destination = drag.destination.as_ref()?;
    if destination.droppable_id != TIMELINE {
        return None;
    }

    if let Some(key) = drag.source.droppable_id.strip_prefix(PALETTE_PREFIX) {
        let template = Template::parse(key)?;
        let block = template.materialize();
        let id = block.id.clone();
        let index = destination.index.min(store.len());
        store.insert_block_at(block, index);
        return Some(DropOutcome::Inserted { id, index });
    }

    if drag.source.droppable_id == TIMELINE {
        let from = drag.source.index;
        if from >= store.len() {
            return None;
        }
        let to = destination.index.min(store.len().saturating_sub(1));
        store.reorder(from, to);
        return Some(DropOutcome::Reordered { from, to });
    }

    None
}
