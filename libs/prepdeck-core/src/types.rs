//! Core types for the study card domain.

use serde::{Deserialize, Serialize};

/// Difficulty tier of a card.
///
/// Wire values are the `lvl_*` tags of the card database; `label` gives the
/// human-readable form used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "lvl_1")]
    Easy,
    #[serde(rename = "lvl_2")]
    Medium,
    #[serde(rename = "lvl_3")]
    Hard,
}

impl Level {
    /// All tiers in ascending order.
    pub const ALL_LEVELS: [Level; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Get the wire value (`lvl_1`, `lvl_2`, `lvl_3`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "lvl_1",
            Self::Medium => "lvl_2",
            Self::Hard => "lvl_3",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Parse from a wire value.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "lvl_1" => Some(Self::Easy),
            "lvl_2" => Some(Self::Medium),
            "lvl_3" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Topic assignment of a card: a single label or a set of labels.
///
/// Both wire forms exist in the dataset; the set form is canonical and the
/// single form is kept for backward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Topic {
    One(String),
    Many(Vec<String>),
}

impl Topic {
    /// Whether the card belongs to `name`.
    pub fn contains(&self, name: &str) -> bool {
        match self {
            Self::One(t) => t == name,
            Self::Many(ts) => ts.iter().any(|t| t == name),
        }
    }

    /// Iterate over all labels.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::One(t) => std::slice::from_ref(t).iter(),
            Self::Many(ts) => ts.iter(),
        }
        .map(String::as_str)
    }

    /// First label, for single-line display.
    pub fn primary(&self) -> Option<&str> {
        self.labels().next()
    }
}

impl From<&str> for Topic {
    fn from(s: &str) -> Self {
        Self::One(s.to_string())
    }
}

/// One question/answer study unit.
///
/// Cards are loaded once from the dataset and never mutated; identity is `id`.
/// Question and answer bodies are Markdown+LaTeX and treated as opaque text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<Topic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Card {
    /// Display id, zero-padded to three digits (`#042`).
    pub fn display_id(&self) -> String {
        format!("#{:03}", self.id)
    }
}
