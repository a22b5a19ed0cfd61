//! Snapshot wire model and the task category mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical task category, parsed from the board's label prefix.
///
/// Serializes to the lowercase identifier the collector expects. Variants
/// list the board labels they canonicalize; the board renders either the
/// English or the Chinese spelling depending on the client locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// "Milking" / "挤奶".
    Milking,
    /// "Foraging" / "采摘".
    Foraging,
    /// "Woodcutting" / "伐木".
    Woodcutting,
    /// "Cheesesmithing" / "奶酪锻造".
    Cheesesmithing,
    /// "Crafting" / "制作".
    Crafting,
    /// "Tailoring" / "缝纫".
    Tailoring,
    /// "Cooking" / "烹饪".
    Cooking,
    /// "Brewing" / "冲泡".
    Brewing,
    /// "Alchemy" / "炼金".
    Alchemy,
    /// "Enhancing" / "强化".
    Enhancing,
    /// "Defeat" / "击败".
    Combat,
    /// Anything the label table does not cover.
    Unknown,
}

impl TaskKind {
    /// Maps a localized board label to its canonical category.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Milking" | "挤奶" => Some(Self::Milking),
            "Foraging" | "采摘" => Some(Self::Foraging),
            "Woodcutting" | "伐木" => Some(Self::Woodcutting),
            "Cheesesmithing" | "奶酪锻造" => Some(Self::Cheesesmithing),
            "Crafting" | "制作" => Some(Self::Crafting),
            "Tailoring" | "缝纫" => Some(Self::Tailoring),
            "Cooking" | "烹饪" => Some(Self::Cooking),
            "Brewing" | "冲泡" => Some(Self::Brewing),
            "Alchemy" | "炼金" => Some(Self::Alchemy),
            "Enhancing" | "强化" => Some(Self::Enhancing),
            "Defeat" | "击败" => Some(Self::Combat),
            _ => None,
        }
    }
}

/// One parsed task entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Canonical category.
    #[serde(rename = "type")]
    pub kind: TaskKind,
    /// Display name: the label with a recognized category prefix stripped,
    /// otherwise the full label.
    pub name: String,
    /// The label exactly as rendered on the board.
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// Progress line exactly as rendered, prefix included.
    pub progress: String,
}

/// One extracted, timestamped batch of task records plus page context.
///
/// Constructed fresh per pass and discarded after serialization; snapshots
/// carry no identity and are never deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSnapshot {
    /// Parsed task records in board order.
    pub tasks: Vec<TaskRecord>,
    /// Character name read from the page.
    pub user_name: String,
    /// Number of parsed records.
    pub total_count: usize,
    /// Extraction time.
    pub timestamp: DateTime<Utc>,
    /// Where the page was loaded from.
    pub location: String,
}
