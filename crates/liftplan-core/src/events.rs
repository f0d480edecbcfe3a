use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every store mutation produces an Event.
/// UI layers poll and drain these instead of diffing snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreEvent {
    BlockAdded {
        id: String,
        index: usize,
        at: DateTime<Utc>,
    },
    BlockUpdated {
        id: String,
        at: DateTime<Utc>,
    },
    BlocksDeleted {
        ids: Vec<String>,
        at: DateTime<Utc>,
    },
    BlocksDuplicated {
        source_ids: Vec<String>,
        new_ids: Vec<String>,
        at: DateTime<Utc>,
    },
    Reordered {
        from: usize,
        to: usize,
        at: DateTime<Utc>,
    },
    Cleared {
        at: DateTime<Utc>,
    },
    Imported {
        title: String,
        block_count: usize,
        at: DateTime<Utc>,
    },
    SelectionChanged {
        ids: Vec<String>,
        at: DateTime<Utc>,
    },
    TitleChanged {
        title: String,
        at: DateTime<Utc>,
    },
}
