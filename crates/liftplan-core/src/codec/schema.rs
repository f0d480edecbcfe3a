//! The versioned JSON export/import document.
//!
//! Wire shape: `{ "version": "1.0.0", "title": ..., "cards": [...] }`.
//! Decoding is tolerant about everything except the cards: a missing or
//! non-string title falls back to the default placeholder and the version is
//! accepted as-is, but `cards` must be an array and every card must match a
//! block shape. A document that fails either check is rejected whole so the
//! caller's state is never half-replaced.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::error::ImportError;
use crate::workout::{Workout, DEFAULT_TITLE, SCHEMA_VERSION};

/// The export document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutDocument {
    pub version: String,
    pub title: String,
    pub cards: Vec<Block>,
}

/// Build the export document for a workout.
pub fn encode(workout: &Workout) -> WorkoutDocument {
    WorkoutDocument {
        version: SCHEMA_VERSION.to_string(),
        title: workout.title.clone(),
        cards: workout.blocks.clone(),
    }
}

/// Serialize a workout to the pretty-printed document string.
pub fn encode_json(workout: &Workout) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&encode(workout))
}

/// Decode a document string.
///
/// # Errors
///
/// [`ImportError::Parse`] for unparseable JSON, [`ImportError::CardsNotAnArray`]
/// when the `cards` field is absent or not an array, and
/// [`ImportError::MalformedCard`] when an individual card does not decode as a
/// block.
pub fn decode(json: &str) -> Result<WorkoutDocument, ImportError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    let cards = value
        .get("cards")
        .and_then(|c| c.as_array())
        .ok_or(ImportError::CardsNotAnArray)?;

    let title = value
        .get("title")
        .and_then(|t| t.as_str())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    let version = value
        .get("version")
        .and_then(|v| v.as_str())
        .unwrap_or(SCHEMA_VERSION)
        .to_string();

    let blocks = cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            serde_json::from_value(card.clone())
                .map_err(|source| ImportError::MalformedCard { index, source })
        })
        .collect::<Result<Vec<Block>, ImportError>>()?;

    Ok(WorkoutDocument {
        version,
        title,
        cards: blocks,
    })
}
