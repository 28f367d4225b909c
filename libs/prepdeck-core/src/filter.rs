//! Card filtering: topic + level + free-text search.

use serde::{Deserialize, Serialize};

use crate::types::Card;

/// Sentinel filter value meaning "no constraint on this field".
///
/// Never a real topic or level value.
pub const ALL: &str = "all";

fn default_all() -> String {
    ALL.to_string()
}

/// Current filter selection.
///
/// The catalog owns one full filter; study modes each own an independent
/// topic-only instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFilter {
    #[serde(default = "default_all")]
    pub topic: String,
    #[serde(default = "default_all")]
    pub level: String,
    #[serde(default)]
    pub search: String,
}

impl Default for CardFilter {
    fn default() -> Self {
        Self {
            topic: default_all(),
            level: default_all(),
            search: String::new(),
        }
    }
}

impl CardFilter {
    /// Filter constrained by topic only.
    pub fn topic_only(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    /// Whether no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.topic == ALL && self.level == ALL && self.search.trim().is_empty()
    }

    /// Whether a single card passes the filter.
    pub fn matches(&self, card: &Card) -> bool {
        let topic_ok = self.topic == ALL
            || card
                .topic
                .as_ref()
                .is_some_and(|t| t.contains(&self.topic));
        let level_ok =
            self.level == ALL || card.level.is_some_and(|l| l.as_str() == self.level);
        if !(topic_ok && level_ok) {
            return false;
        }

        let needle = self.search.trim();
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        card.question.to_lowercase().contains(&needle)
            || card.answer.to_lowercase().contains(&needle)
    }

    /// Apply the filter to a card list, preserving input order. Pure.
    pub fn apply<'a>(&self, cards: &'a [Card]) -> Vec<&'a Card> {
        cards.iter().filter(|c| self.matches(c)).collect()
    }
}
