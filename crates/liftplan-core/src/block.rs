//! Workout block types.
//!
//! A block is one unit on the workout timeline: a cardio segment or a
//! strength segment/rest. The kind-specific fields live in a tagged union so
//! that a field which is not meaningful for a block's kind (reps on a cardio
//! block, zone on a strength set) is unrepresentable rather than zero-filled.
//!
//! Serialized blocks keep the flat shape of the export document: the common
//! fields plus a `type` tag and the kind's own optional fields, absent fields
//! omitted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest valid cardio intensity zone.
pub const ZONE_MIN: u8 = 1;
/// Highest valid cardio intensity zone.
pub const ZONE_MAX: u8 = 6;

/// Clamp a zone value into the valid [`ZONE_MIN`]..=[`ZONE_MAX`] range.
pub fn clamp_zone(zone: u8) -> u8 {
    zone.clamp(ZONE_MIN, ZONE_MAX)
}

/// Cardio block subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardioKind {
    Warmup,
    Cooldown,
    Interval,
}

impl CardioKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warmup => "warmup",
            Self::Cooldown => "cooldown",
            Self::Interval => "interval",
        }
    }
}

/// Strength block subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthKind {
    Set,
    Rest,
}

impl StrengthKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Rest => "rest",
        }
    }
}

/// Kind-specific payload of a block.
///
/// Durations are whole minutes, heart rate is bpm, cadence is rpm, weight is
/// in whatever unit the user plans in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockKind {
    Cardio {
        subtype: CardioKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        zone: Option<u8>,
        #[serde(
            default,
            rename = "heartRate",
            skip_serializing_if = "Option::is_none"
        )]
        heart_rate: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cadence: Option<u32>,
    },
    Strength {
        subtype: StrengthKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reps: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        weight: Option<u32>,
    },
}

/// One unit on the workout timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Unique within the sequence, stable for the block's lifetime.
    pub id: String,
    #[serde(default)]
    pub description: String,
    /// Optional cue text shown while the block is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    /// Create a block with a freshly minted id and empty text fields.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: String::new(),
            message: None,
            kind,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the cue message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Clone this block under a freshly minted id.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ..self.clone()
        }
    }

    /// Category name of the block's kind.
    pub fn category(&self) -> &'static str {
        match self.kind {
            BlockKind::Cardio { .. } => "cardio",
            BlockKind::Strength { .. } => "strength",
        }
    }

    /// Subtype name of the block's kind.
    pub fn subtype(&self) -> &'static str {
        match &self.kind {
            BlockKind::Cardio { subtype, .. } => subtype.as_str(),
            BlockKind::Strength { subtype, .. } => subtype.as_str(),
        }
    }

    /// Planned duration in minutes, if the block has one.
    pub fn duration(&self) -> Option<u32> {
        match self.kind {
            BlockKind::Cardio { duration, .. } | BlockKind::Strength { duration, .. } => duration,
        }
    }

    /// Apply a single field edit.
    ///
    /// Returns `false` when the field is not meaningful for this block's
    /// kind; the block is left untouched in that case. Zone writes are
    /// clamped into the valid range.
    pub fn apply(&mut self, edit: &FieldEdit) -> bool {
        match edit {
            FieldEdit::Description(text) => {
                self.description = text.clone();
                return true;
            }
            FieldEdit::Message(message) => {
                self.message = message.clone();
                return true;
            }
            _ => {}
        }

        match (&mut self.kind, edit) {
            (BlockKind::Cardio { duration, .. }, FieldEdit::Duration(value)) => {
                *duration = *value;
                true
            }
            (BlockKind::Cardio { zone, .. }, FieldEdit::Zone(value)) => {
                *zone = value.map(clamp_zone);
                true
            }
            (BlockKind::Cardio { heart_rate, .. }, FieldEdit::HeartRate(value)) => {
                *heart_rate = *value;
                true
            }
            (BlockKind::Cardio { cadence, .. }, FieldEdit::Cadence(value)) => {
                *cadence = *value;
                true
            }
            (BlockKind::Strength { duration, .. }, FieldEdit::Duration(value)) => {
                *duration = *value;
                true
            }
            (BlockKind::Strength { reps, .. }, FieldEdit::Reps(value)) => {
                *reps = *value;
                true
            }
            (BlockKind::Strength { weight, .. }, FieldEdit::Weight(value)) => {
                *weight = *value;
                true
            }
            _ => false,
        }
    }
}

/// A single-field edit, as produced by an inspector panel.
///
/// `None` payloads clear the field. Edits carry their target field so a
/// multi-select batch edit can be replayed across heterogeneous blocks,
/// applying only where the field exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldEdit {
    Description(String),
    Message(Option<String>),
    Duration(Option<u32>),
    Zone(Option<u8>),
    HeartRate(Option<u32>),
    Cadence(Option<u32>),
    Reps(Option<u32>),
    Weight(Option<u32>),
}
