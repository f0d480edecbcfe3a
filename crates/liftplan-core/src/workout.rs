//! The workout document: a titled, ordered block sequence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::block::Block;

/// Version stamped onto export documents. Currently constant.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Title used for a fresh workout and for imports that carry none.
pub const DEFAULT_TITLE: &str = "Untitled Workout";

/// A planned workout: title plus the temporal sequence of blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub title: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_version() -> String {
    SCHEMA_VERSION.to_string()
}

impl Workout {
    /// Create an empty workout with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: SCHEMA_VERSION.to_string(),
            blocks: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Sum of the planned minutes across blocks that carry a duration.
    pub fn total_minutes(&self) -> u32 {
        self.blocks.iter().filter_map(Block::duration).sum()
    }
}

impl Default for Workout {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockKind, CardioKind, StrengthKind};

    #[test]
    fn new_workout_is_empty_and_versioned() {
        let workout = Workout::new("Tuesday ride");
        assert_eq!(workout.title, "Tuesday ride");
        assert_eq!(workout.version, SCHEMA_VERSION);
        assert!(workout.blocks.is_empty());
    }

    #[test]
    fn total_minutes_skips_blocks_without_duration() {
        let mut workout = Workout::default();
        workout.blocks.push(Block::new(BlockKind::Cardio {
            subtype: CardioKind::Warmup,
            duration: Some(4),
            zone: None,
            heart_rate: None,
            cadence: None,
        }));
        workout.blocks.push(Block::new(BlockKind::Strength {
            subtype: StrengthKind::Set,
            duration: None,
            reps: Some(10),
            weight: Some(100),
        }));
        workout.blocks.push(Block::new(BlockKind::Strength {
            subtype: StrengthKind::Rest,
            duration: Some(1),
            reps: None,
            weight: None,
        }));
        assert_eq!(workout.total_minutes(), 5);
    }
}
