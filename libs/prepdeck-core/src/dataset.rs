//! Dataset container and topic derivation.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::types::Card;

/// Dataset metadata emitted by the compiler.
///
/// `topics`, when non-empty, is the authoritative topic list and preserves
/// curated ordering. The remaining fields are informational.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetMeta {
    #[serde(default)]
    pub total_cards: usize,
    #[serde(default)]
    pub levels: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// The full card dataset: an immutable list of cards plus metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub cards: Vec<Card>,
    #[serde(default)]
    pub meta: DatasetMeta,
}

impl Dataset {
    /// Decode a dataset from its JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Encode the dataset as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, DatasetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The topic list.
    ///
    /// `meta.topics` wins when non-empty; otherwise the sorted set of distinct
    /// topics found across all cards (set-valued topics flattened), in
    /// Russian-aware order.
    pub fn topics(&self) -> Vec<String> {
        if !self.meta.topics.is_empty() {
            return self.meta.topics.clone();
        }

        let mut topics: Vec<String> = Vec::new();
        for card in &self.cards {
            if let Some(topic) = &card.topic {
                for label in topic.labels() {
                    if !topics.iter().any(|t| t == label) {
                        topics.push(label.to_string());
                    }
                }
            }
        }
        topics.sort_by(|a, b| collate_ru(a, b));
        topics
    }
}

/// Russian-aware string ordering.
///
/// Codepoint order is almost right for Cyrillic, except `ё` which must sort
/// right after `е` rather than after `я`. Comparison is case-insensitive with
/// a codepoint tie-break.
pub fn collate_ru(a: &str, b: &str) -> Ordering {
    let key = |c: char| -> u32 {
        let c = c.to_lowercase().next().unwrap_or(c);
        match c {
            'ё' => 'е' as u32 * 2 + 1,
            _ => c as u32 * 2,
        }
    };
    a.chars()
        .map(key)
        .cmp(b.chars().map(key))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Topic;
    use pretty_assertions::assert_eq;

    fn card(id: i64, topic: Option<Topic>) -> Card {
        Card {
            id,
            question: format!("q{id}"),
            answer: format!("a{id}"),
            topic,
            level: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_meta_topics_take_priority() {
        let ds = Dataset {
            cards: vec![card(1, Some("Python".into()))],
            meta: DatasetMeta {
                topics: vec!["SQL".to_string(), "Python".to_string()],
                ..Default::default()
            },
        };
        // Curated ordering is preserved as-is.
        assert_eq!(ds.topics(), vec!["SQL", "Python"]);
    }

    #[test]
    fn test_topics_derived_from_cards_sorted() {
        let ds = Dataset {
            cards: vec![
                card(1, Some("Статистика".into())),
                card(2, Some(Topic::Many(vec!["SQL".into(), "Python".into()]))),
                card(3, Some("SQL".into())),
                card(4, None),
            ],
            meta: DatasetMeta::default(),
        };
        assert_eq!(ds.topics(), vec!["Python", "SQL", "Статистика"]);
    }

    #[test]
    fn test_topics_empty_dataset() {
        let ds = Dataset::default();
        assert!(ds.topics().is_empty());
    }

    #[test]
    fn test_collate_ru_places_yo_after_ye() {
        let mut words = vec!["жук", "ёж", "елка", "яма"];
        words.sort_by(|a, b| collate_ru(a, b));
        assert_eq!(words, vec!["елка", "ёж", "жук", "яма"]);
    }

    #[test]
    fn test_from_json_missing_cards_is_error() {
        assert!(Dataset::from_json(r#"{"meta": {}}"#).is_err());
    }

    #[test]
    fn test_from_json_roundtrip() {
        let json = r#"{
            "meta": {"total_cards": 1, "levels": ["lvl_1"], "topics": ["SQL"]},
            "cards": [{"id": 1, "question": "q", "answer": "a", "topic": "SQL", "level": "lvl_1"}]
        }"#;
        let ds = Dataset::from_json(json).unwrap();
        assert_eq!(ds.cards.len(), 1);
        assert_eq!(ds.meta.total_cards, 1);
        assert_eq!(ds.topics(), vec!["SQL"]);
    }
}
