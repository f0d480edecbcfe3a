//! The block store.
//!
//! Owns the workout and the multi-selection; every mutation goes through the
//! operation set here. Operations are atomic -- callers observe either the
//! pre-state or the fully applied post-state -- and each one preserves the
//! sequence invariants: unique ids, clamped zones, selection a subset of live
//! ids.
//!
//! Operations addressing an id that is not present are silent no-ops.
//!
//! ## Usage
//!
//! ```
//! use liftplan_core::{Template, WorkoutStore};
//!
//! let mut store = WorkoutStore::new();
//! store.add_block(Template::CardioWarmup.materialize());
//! store.add_block(Template::StrengthSet.materialize());
//! assert_eq!(store.len(), 2);
//! ```

use std::collections::BTreeSet;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::block::{Block, FieldEdit};
use crate::events::StoreEvent;
use crate::workout::{Workout, DEFAULT_TITLE};

/// Persisted shape of the full store: workout plus selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub workout: Workout,
    #[serde(default)]
    pub selection: Vec<String>,
}

/// Exclusive owner of the workout and the selection.
#[derive(Debug, Clone)]
pub struct WorkoutStore {
    workout: Workout,
    selection: BTreeSet<String>,
    events: Vec<StoreEvent>,
}

impl WorkoutStore {
    /// Create an empty store with the default title.
    pub fn new() -> Self {
        Self::with_title(DEFAULT_TITLE)
    }

    /// Create an empty store with the given title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            workout: Workout::new(title),
            selection: BTreeSet::new(),
            events: Vec::new(),
        }
    }

    /// Rebuild a store from a persisted snapshot.
    ///
    /// Selection entries that no longer match a live block are dropped so the
    /// subset invariant holds even for snapshots edited out-of-band.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let live: BTreeSet<&str> = snapshot.workout.blocks.iter().map(|b| b.id.as_str()).collect();
        let selection = snapshot
            .selection
            .into_iter()
            .filter(|id| live.contains(id.as_str()))
            .collect();
        Self {
            workout: snapshot.workout,
            selection,
            events: Vec::new(),
        }
    }

    /// Capture the full store shape for persistence.
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            workout: self.workout.clone(),
            selection: self.selection.iter().cloned().collect(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    pub fn title(&self) -> &str {
        &self.workout.title
    }

    pub fn blocks(&self) -> &[Block] {
        &self.workout.blocks
    }

    pub fn len(&self) -> usize {
        self.workout.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workout.blocks.is_empty()
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.workout.blocks.iter().find(|b| b.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.workout.blocks.iter().position(|b| b.id == id)
    }

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    /// Selected blocks in sequence order.
    pub fn selected_blocks(&self) -> Vec<&Block> {
        self.workout
            .blocks
            .iter()
            .filter(|b| self.selection.contains(&b.id))
            .collect()
    }

    /// Drain the events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Append a block; the selection collapses to the new block.
    ///
    /// The caller is responsible for supplying a conforming block (the
    /// reconciler and the import path both do).
    pub fn add_block(&mut self, block: Block) {
        let index = self.workout.blocks.len();
        self.insert_block_at(block, index);
    }

    /// Insert a block at an index clamped to `[0, len]`; the selection
    /// collapses to the new block.
    pub fn insert_block_at(&mut self, block: Block, index: usize) {
        let index = index.min(self.workout.blocks.len());
        let id = block.id.clone();
        self.workout.blocks.insert(index, block);
        self.selection.clear();
        self.selection.insert(id.clone());
        self.touch();
        self.events.push(StoreEvent::BlockAdded {
            id,
            index,
            at: Utc::now(),
        });
    }

    /// Replace a single field on the matching block.
    ///
    /// No-op when the id is absent or the field is not meaningful for the
    /// block's kind.
    pub fn update_field(&mut self, id: &str, edit: &FieldEdit) {
        let Some(block) = self.workout.blocks.iter_mut().find(|b| b.id == id) else {
            return;
        };
        if block.apply(edit) {
            let id = id.to_string();
            self.touch();
            self.events.push(StoreEvent::BlockUpdated { id, at: Utc::now() });
        }
    }

    /// Apply an edit to every selected block where the field is meaningful.
    pub fn update_selection(&mut self, edit: &FieldEdit) {
        let mut changed = Vec::new();
        for block in &mut self.workout.blocks {
            if self.selection.contains(&block.id) && block.apply(edit) {
                changed.push(block.id.clone());
            }
        }
        if !changed.is_empty() {
            self.touch();
            let at = Utc::now();
            self.events
                .extend(changed.into_iter().map(|id| StoreEvent::BlockUpdated { id, at }));
        }
    }

    /// Remove a block; its id leaves the selection in the same mutation.
    pub fn delete_block(&mut self, id: &str) {
        self.delete_blocks(std::slice::from_ref(&id.to_string()));
    }

    /// Remove every block whose id is in `ids`; the selection is recomputed
    /// as `selection - ids` atomically.
    pub fn delete_blocks(&mut self, ids: &[String]) {
        let doomed: BTreeSet<&str> = ids.iter().map(String::as_str).collect();
        let removed: Vec<String> = self
            .workout
            .blocks
            .iter()
            .filter(|b| doomed.contains(b.id.as_str()))
            .map(|b| b.id.clone())
            .collect();
        if removed.is_empty() {
            return;
        }
        self.workout.blocks.retain(|b| !doomed.contains(b.id.as_str()));
        self.selection.retain(|id| !doomed.contains(id.as_str()));
        self.touch();
        self.events.push(StoreEvent::BlocksDeleted {
            ids: removed,
            at: Utc::now(),
        });
    }

    /// Clone a block under a fresh id, inserted immediately after the
    /// original; the selection collapses to the clone.
    pub fn duplicate_block(&mut self, id: &str) {
        self.duplicate_blocks(std::slice::from_ref(&id.to_string()));
    }

    /// Clone every block whose id is in `ids`, preserving their relative
    /// sequence order. The clones land contiguously immediately after the
    /// block with the maximum original index, and become the new selection.
    pub fn duplicate_blocks(&mut self, ids: &[String]) {
        let wanted: BTreeSet<&str> = ids.iter().map(String::as_str).collect();
        let originals: Vec<(usize, Block)> = self
            .workout
            .blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| wanted.contains(b.id.as_str()))
            .map(|(i, b)| (i, b.clone()))
            .collect();
        let Some(&(last_index, _)) = originals.last() else {
            return;
        };

        let source_ids: Vec<String> = originals.iter().map(|(_, b)| b.id.clone()).collect();
        let clones: Vec<Block> = originals.iter().map(|(_, b)| b.duplicate()).collect();
        let new_ids: Vec<String> = clones.iter().map(|b| b.id.clone()).collect();

        for (offset, clone) in clones.into_iter().enumerate() {
            self.workout.blocks.insert(last_index + 1 + offset, clone);
        }
        self.selection = new_ids.iter().cloned().collect();
        self.touch();
        self.events.push(StoreEvent::BlocksDuplicated {
            source_ids,
            new_ids,
            at: Utc::now(),
        });
    }

    /// Move the block at `from` to `to`: remove-then-reinsert, with `to`
    /// resolved against the shortened list. Out-of-range `from` is a no-op.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from >= self.workout.blocks.len() {
            return;
        }
        let block = self.workout.blocks.remove(from);
        let to = to.min(self.workout.blocks.len());
        self.workout.blocks.insert(to, block);
        self.touch();
        self.events.push(StoreEvent::Reordered {
            from,
            to,
            at: Utc::now(),
        });
    }

    /// Empty the sequence and the selection. The title is unchanged.
    pub fn clear_all(&mut self) {
        self.workout.blocks.clear();
        self.selection.clear();
        self.touch();
        self.events.push(StoreEvent::Cleared { at: Utc::now() });
    }

    /// Wholesale replace title and sequence; the selection is cleared.
    /// No merge with prior state.
    pub fn import_workout(&mut self, title: impl Into<String>, blocks: Vec<Block>) {
        self.workout.title = title.into();
        self.workout.blocks = blocks;
        self.selection.clear();
        self.touch();
        self.events.push(StoreEvent::Imported {
            title: self.workout.title.clone(),
            block_count: self.workout.blocks.len(),
            at: Utc::now(),
        });
    }

    /// Replace the selection verbatim. Membership against live blocks is not
    /// validated here; only deletion enforces the subset invariant.
    pub fn set_selection(&mut self, ids: Vec<String>) {
        self.selection = ids.into_iter().collect();
        self.events.push(StoreEvent::SelectionChanged {
            ids: self.selection.iter().cloned().collect(),
            at: Utc::now(),
        });
    }

    /// Rename the workout.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.workout.title = title.into();
        self.touch();
        self.events.push(StoreEvent::TitleChanged {
            title: self.workout.title.clone(),
            at: Utc::now(),
        });
    }

    fn touch(&mut self) {
        self.workout.updated_at = Utc::now();
    }
}

impl Default for WorkoutStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockKind, CardioKind, StrengthKind};
    use crate::template::Template;

    fn store_with(templates: &[Template]) -> WorkoutStore {
        let mut store = WorkoutStore::new();
        for template in templates {
            store.add_block(template.materialize());
        }
        store
    }

    fn ids(store: &WorkoutStore) -> Vec<String> {
        store.blocks().iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn add_block_appends_and_selects() {
        let mut store = WorkoutStore::new();
        let block = Template::CardioWarmup.materialize();
        let id = block.id.clone();
        store.add_block(block);
        assert_eq!(store.len(), 1);
        assert_eq!(store.selection().len(), 1);
        assert!(store.selection().contains(&id));
    }

    #[test]
    fn insert_clamps_index_to_sequence_bounds() {
        let mut store = store_with(&[Template::CardioWarmup, Template::CardioCooldown]);
        let block = Template::StrengthSet.materialize();
        let id = block.id.clone();
        store.insert_block_at(block, 99);
        assert_eq!(store.blocks()[2].id, id);

        let block = Template::StrengthRest.materialize();
        let id = block.id.clone();
        store.insert_block_at(block, 0);
        assert_eq!(store.blocks()[0].id, id);
    }

    #[test]
    fn update_field_on_unknown_id_is_a_silent_no_op() {
        let mut store = store_with(&[Template::CardioInterval]);
        store.drain_events();
        let before = store.blocks().to_vec();
        store.update_field("no-such-id", &FieldEdit::Duration(Some(10)));
        assert_eq!(store.blocks(), &before[..]);
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn update_field_replaces_only_the_named_field() {
        let mut store = store_with(&[Template::CardioInterval]);
        let id = ids(&store).remove(0);
        store.update_field(&id, &FieldEdit::Zone(Some(4)));
        let block = store.block(&id).unwrap();
        assert!(matches!(
            block.kind,
            BlockKind::Cardio {
                subtype: CardioKind::Interval,
                duration: Some(4),
                zone: Some(4),
                ..
            }
        ));
        assert_eq!(block.description, "Interval");
    }

    #[test]
    fn delete_blocks_recomputes_selection() {
        let mut store = store_with(&[
            Template::CardioWarmup,
            Template::CardioInterval,
            Template::CardioCooldown,
        ]);
        let all = ids(&store);
        store.set_selection(all.clone());
        store.delete_blocks(&all[..2]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.selection().len(), 1);
        assert!(store.selection().contains(&all[2]));
    }

    #[test]
    fn delete_unknown_ids_changes_nothing() {
        let mut store = store_with(&[Template::CardioWarmup]);
        store.drain_events();
        store.delete_blocks(&["ghost".to_string()]);
        assert_eq!(store.len(), 1);
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn duplicate_block_lands_right_after_the_original() {
        let mut store = store_with(&[Template::CardioWarmup, Template::CardioCooldown]);
        let first = ids(&store).remove(0);
        store.duplicate_block(&first);
        assert_eq!(store.len(), 3);

        let original = store.blocks()[0].clone();
        let clone = store.blocks()[1].clone();
        assert_ne!(clone.id, original.id);
        assert_eq!(clone.kind, original.kind);
        assert_eq!(clone.description, original.description);
        assert!(store.selection().contains(&clone.id));
        assert_eq!(store.selection().len(), 1);
    }

    #[test]
    fn duplicate_blocks_preserves_order_and_lands_after_the_last_original() {
        let mut store = store_with(&[
            Template::CardioWarmup,   // a
            Template::StrengthSet,    // b
            Template::CardioCooldown, // c
        ]);
        let seq = ids(&store);
        let (a, b) = (seq[0].clone(), seq[1].clone());
        // Pass ids in reverse; sequence order must still win.
        store.duplicate_blocks(&[b.clone(), a.clone()]);

        assert_eq!(store.len(), 5);
        let clone_a = store.blocks()[2].clone();
        let clone_b = store.blocks()[3].clone();
        assert_eq!(clone_a.kind, store.block(&a).unwrap().kind);
        assert_eq!(clone_b.kind, store.block(&b).unwrap().kind);
        // c is untouched at the end.
        assert_eq!(store.blocks()[4].id, seq[2]);

        let new_ids: Vec<String> = vec![clone_a.id, clone_b.id];
        assert_eq!(store.selection().len(), 2);
        for id in &new_ids {
            assert!(store.selection().contains(id));
        }
    }

    #[test]
    fn reorder_uses_remove_then_insert_semantics() {
        let mut store = store_with(&[
            Template::CardioWarmup,
            Template::CardioInterval,
            Template::CardioCooldown,
        ]);
        let seq = ids(&store);
        store.reorder(0, 2);
        assert_eq!(ids(&store), vec![seq[1].clone(), seq[2].clone(), seq[0].clone()]);
    }

    #[test]
    fn reorder_inverse_restores_the_pair() {
        let mut store = store_with(&[
            Template::CardioWarmup,
            Template::CardioInterval,
            Template::CardioCooldown,
            Template::StrengthRest,
        ]);
        let before = ids(&store);
        let moved = before[1].clone();
        store.reorder(1, 3);
        let now = store.index_of(&moved).unwrap();
        store.reorder(now, 1);
        assert_eq!(ids(&store), before);
    }

    #[test]
    fn reorder_out_of_range_source_is_a_no_op() {
        let mut store = store_with(&[Template::CardioWarmup]);
        store.drain_events();
        store.reorder(5, 0);
        assert_eq!(store.len(), 1);
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn clear_all_keeps_the_title() {
        let mut store = store_with(&[Template::CardioWarmup, Template::StrengthSet]);
        store.set_title("Leg day");
        store.clear_all();
        assert!(store.is_empty());
        assert!(store.selection().is_empty());
        assert_eq!(store.title(), "Leg day");
    }

    #[test]
    fn import_replaces_everything_and_clears_selection() {
        let mut store = store_with(&[Template::CardioWarmup]);
        let blocks = vec![
            Template::StrengthSet.materialize(),
            Template::StrengthRest.materialize(),
        ];
        let expected: Vec<String> = blocks.iter().map(|b| b.id.clone()).collect();
        store.import_workout("Imported", blocks);
        assert_eq!(store.title(), "Imported");
        assert_eq!(ids(&store), expected);
        assert!(store.selection().is_empty());
    }

    #[test]
    fn set_selection_is_verbatim() {
        let mut store = store_with(&[Template::CardioWarmup]);
        store.set_selection(vec!["not-a-block".to_string()]);
        assert!(store.selection().contains("not-a-block"));
    }

    #[test]
    fn update_selection_touches_only_meaningful_fields() {
        let mut store = store_with(&[
            Template::CardioInterval,
            Template::StrengthSet,
            Template::StrengthRest,
        ]);
        store.set_selection(ids(&store));
        store.drain_events();
        store.update_selection(&FieldEdit::Reps(Some(5)));

        // Reps lands on the strength blocks; the cardio interval is skipped.
        let reps: Vec<Option<u32>> = store
            .blocks()
            .iter()
            .map(|b| match b.kind {
                BlockKind::Strength { reps, .. } => reps,
                BlockKind::Cardio { .. } => None,
            })
            .collect();
        assert_eq!(reps, vec![None, Some(5), Some(5)]);
        // Cardio interval untouched.
        assert!(matches!(
            store.blocks()[0].kind,
            BlockKind::Cardio { zone: Some(1), .. }
        ));
        assert_eq!(store.drain_events().len(), 2);
    }

    #[test]
    fn update_selection_applies_common_fields_across_kinds() {
        let mut store = store_with(&[Template::CardioInterval, Template::StrengthSet]);
        store.set_selection(ids(&store));
        store.update_selection(&FieldEdit::Message(Some("Push!".into())));
        let selected = store.selected_blocks();
        assert_eq!(selected.len(), 2);
        for block in selected {
            assert_eq!(block.message.as_deref(), Some("Push!"));
        }
    }

    #[test]
    fn mutations_emit_events() {
        let mut store = WorkoutStore::new();
        store.add_block(Template::CardioWarmup.materialize());
        store.set_title("T");
        store.clear_all();
        let events = store.drain_events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], StoreEvent::BlockAdded { .. }));
        assert!(matches!(events[1], StoreEvent::TitleChanged { .. }));
        assert!(matches!(events[2], StoreEvent::Cleared { .. }));
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn snapshot_roundtrip_preserves_store_shape() {
        let mut store = store_with(&[Template::CardioInterval, Template::StrengthSet]);
        store.set_title("Snapshot me");
        store.set_selection(ids(&store));
        let snapshot = store.to_snapshot();
        let restored = WorkoutStore::from_snapshot(snapshot);
        assert_eq!(restored.title(), "Snapshot me");
        assert_eq!(ids(&restored), ids(&store));
        assert_eq!(restored.selection(), store.selection());
    }

    #[test]
    fn from_snapshot_drops_stale_selection_entries() {
        let mut store = store_with(&[Template::CardioWarmup]);
        let live = ids(&store).remove(0);
        let mut snapshot = store.to_snapshot();
        snapshot.selection = vec![live.clone(), "stale".to_string()];
        let restored = WorkoutStore::from_snapshot(snapshot);
        assert_eq!(restored.selection().len(), 1);
        assert!(restored.selection().contains(&live));
    }

    #[test]
    fn strength_rest_takes_duration_edits() {
        let mut store = store_with(&[Template::StrengthRest]);
        let id = ids(&store).remove(0);
        store.update_field(&id, &FieldEdit::Duration(Some(3)));
        assert!(matches!(
            store.block(&id).unwrap().kind,
            BlockKind::Strength {
                subtype: StrengthKind::Rest,
                duration: Some(3),
                ..
            }
        ));
    }
}
