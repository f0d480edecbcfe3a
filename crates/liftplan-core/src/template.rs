//! Palette templates.
//!
//! A template is the `category-subtype` descriptor a palette entry is dragged
//! under. Dropping one onto the timeline materializes a new block with
//! kind-appropriate defaults.

use serde::{Deserialize, Serialize};

use crate::block::{Block, BlockKind, CardioKind, StrengthKind};

/// The five palette entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    CardioWarmup,
    CardioCooldown,
    CardioInterval,
    StrengthSet,
    StrengthRest,
}

impl Template {
    /// All templates in palette order.
    pub const ALL: [Template; 5] = [
        Template::CardioWarmup,
        Template::CardioCooldown,
        Template::CardioInterval,
        Template::StrengthSet,
        Template::StrengthRest,
    ];

    /// The composite `category-subtype` key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::CardioWarmup => "cardio-warmup",
            Self::CardioCooldown => "cardio-cooldown",
            Self::CardioInterval => "cardio-interval",
            Self::StrengthSet => "strength-set",
            Self::StrengthRest => "strength-rest",
        }
    }

    /// Parse a composite key. Unknown keys yield `None`.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }

    /// Human-readable palette label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CardioWarmup => "Warmup",
            Self::CardioCooldown => "Cooldown",
            Self::CardioInterval => "Interval",
            Self::StrengthSet => "Set",
            Self::StrengthRest => "Rest",
        }
    }

    /// Category half of the key.
    pub fn category(&self) -> &'static str {
        match self {
            Self::CardioWarmup | Self::CardioCooldown | Self::CardioInterval => "cardio",
            Self::StrengthSet | Self::StrengthRest => "strength",
        }
    }

    /// Materialize a new block with this template's defaults.
    pub fn materialize(&self) -> Block {
        let kind = match self {
            Self::CardioWarmup => BlockKind::Cardio {
                subtype: CardioKind::Warmup,
                duration: Some(4),
                zone: None,
                heart_rate: None,
                cadence: None,
            },
            Self::CardioCooldown => BlockKind::Cardio {
                subtype: CardioKind::Cooldown,
                duration: Some(4),
                zone: None,
                heart_rate: None,
                cadence: None,
            },
            Self::CardioInterval => BlockKind::Cardio {
                subtype: CardioKind::Interval,
                duration: Some(4),
                zone: Some(1),
                heart_rate: None,
                cadence: None,
            },
            Self::StrengthSet => BlockKind::Strength {
                subtype: StrengthKind::Set,
                duration: None,
                reps: Some(10),
                weight: Some(100),
            },
            Self::StrengthRest => BlockKind::Strength {
                subtype: StrengthKind::Rest,
                duration: Some(1),
                reps: None,
                weight: None,
            },
        };
        Block::new(kind).with_description(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_back_to_themselves() {
        for template in Template::ALL {
            assert_eq!(Template::parse(template.key()), Some(template));
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert_eq!(Template::parse("cardio-sprint"), None);
        assert_eq!(Template::parse("strength"), None);
        assert_eq!(Template::parse(""), None);
    }

    #[test]
    fn interval_defaults() {
        let block = Template::CardioInterval.materialize();
        assert_eq!(block.duration(), Some(4));
        assert!(matches!(
            block.kind,
            BlockKind::Cardio {
                subtype: CardioKind::Interval,
                zone: Some(1),
                ..
            }
        ));
        assert_eq!(block.description, "Interval");
    }

    #[test]
    fn warmup_and_cooldown_default_to_four_minutes_without_zone() {
        for template in [Template::CardioWarmup, Template::CardioCooldown] {
            let block = template.materialize();
            assert_eq!(block.duration(), Some(4));
            assert!(matches!(block.kind, BlockKind::Cardio { zone: None, .. }));
        }
    }

    #[test]
    fn strength_defaults() {
        let set = Template::StrengthSet.materialize();
        assert!(matches!(
            set.kind,
            BlockKind::Strength {
                subtype: StrengthKind::Set,
                duration: None,
                reps: Some(10),
                weight: Some(100),
            }
        ));

        let rest = Template::StrengthRest.materialize();
        assert!(matches!(
            rest.kind,
            BlockKind::Strength {
                subtype: StrengthKind::Rest,
                duration: Some(1),
                reps: None,
                weight: None,
            }
        ));
    }

    #[test]
    fn materialized_blocks_get_distinct_ids() {
        let a = Template::StrengthSet.materialize();
        let b = Template::StrengthSet.materialize();
        assert_ne!(a.id, b.id);
    }
}
