//! Markdown card database compiler.
//!
//! The card database is a directory of `№<id>.md` files, each holding a
//! question, an answer and a tag line separated by `---` rules, plus a topics
//! index file mapping `## Topic` headings to `[[№id]]` card links.
//! [`compile`] resolves both into a [`Dataset`] ready to be served as
//! `data.json`.

use crate::dataset::{collate_ru, Dataset, DatasetMeta};
use crate::error::{ParseError, Result};
use crate::types::{Card, Level};

/// A card file parsed on its own, before topic assignment.
#[derive(Debug, Clone)]
pub struct ParsedCard {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub tags: Vec<String>,
    pub level: Option<Level>,
}

/// Parse the topics index: `## Topic` headings followed by lines of
/// `[[№id]]` links. Heading order is preserved; the first topic listing a
/// card wins.
pub fn parse_topics_index(content: &str) -> Vec<(String, Vec<i64>)> {
    let mut topics: Vec<(String, Vec<i64>)> = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if let Some(heading) = line.strip_prefix("## ") {
            topics.push((heading.trim().to_string(), Vec::new()));
        } else if line.contains("[[") {
            if let Some((_, ids)) = topics.last_mut() {
                ids.extend(extract_card_ids(line));
            }
        }
    }
    topics
}

/// Pull every `[[№id]]` link out of a line.
fn extract_card_ids(line: &str) -> Vec<i64> {
    let mut ids = Vec::new();
    let mut rest = line;
    while let Some(start) = rest.find("[[№") {
        rest = &rest[start + "[[№".len()..];
        match rest.find("]]") {
            Some(end) => {
                if let Ok(id) = rest[..end].trim().parse::<i64>() {
                    ids.push(id);
                }
                rest = &rest[end + 2..];
            }
            None => break,
        }
    }
    ids
}

/// Parse one card file. `stem` is the file name without extension
/// (`№12`); the id comes from it.
pub fn parse_card_file(stem: &str, content: &str) -> Result<ParsedCard> {
    let id_part = stem.strip_prefix('№').ok_or_else(|| ParseError::InvalidName {
        name: stem.to_string(),
    })?;
    let id: i64 = id_part.parse().map_err(|_| ParseError::InvalidId {
        name: stem.to_string(),
        value: id_part.to_string(),
    })?;

    let parts: Vec<&str> = content.trim().split("---").map(str::trim).collect();
    if parts.len() < 3 {
        return Err(ParseError::InvalidFormat {
            name: stem.to_string(),
        });
    }

    let question = parts[0].to_string();
    let answer = parts[1].to_string();

    let mut tags = Vec::new();
    let mut level = None;
    for token in parts[2].split_whitespace() {
        let Some(raw) = token.strip_prefix('#') else {
            continue;
        };
        let tag: String = raw
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        if tag.is_empty() {
            continue;
        }
        if tag.starts_with("lvl") {
            if level.is_none() {
                level = Level::from_str(&tag);
            }
        } else {
            tags.push(tag);
        }
    }

    Ok(ParsedCard {
        id,
        question,
        answer,
        tags,
        level,
    })
}

/// Compile the card database into a dataset.
///
/// `card_files` holds `(stem, content)` pairs. Cards are sorted by id and
/// topics resolved from the index; cards absent from the index get no topic.
pub fn compile(topics_index: &str, card_files: &[(String, String)]) -> Result<Dataset> {
    let topics = parse_topics_index(topics_index);

    let mut cards: Vec<Card> = Vec::with_capacity(card_files.len());
    for (stem, content) in card_files {
        let parsed = parse_card_file(stem, content)?;
        if cards.iter().any(|c| c.id == parsed.id) {
            return Err(ParseError::DuplicateId {
                id: parsed.id,
                name: stem.to_string(),
            });
        }

        let topic = topics
            .iter()
            .find(|(_, ids)| ids.contains(&parsed.id))
            .map(|(name, _)| name.as_str().into());

        cards.push(Card {
            id: parsed.id,
            question: parsed.question,
            answer: parsed.answer,
            topic,
            level: parsed.level,
            tags: parsed.tags,
        });
    }
    cards.sort_by_key(|c| c.id);

    let mut levels: Vec<String> = cards
        .iter()
        .filter_map(|c| c.level.map(|l| l.as_str().to_string()))
        .collect();
    levels.sort();
    levels.dedup();

    let mut topic_names: Vec<String> = cards
        .iter()
        .filter_map(|c| c.topic.as_ref().and_then(|t| t.primary()))
        .map(str::to_string)
        .collect();
    topic_names.sort_by(|a, b| collate_ru(a, b));
    topic_names.dedup();

    let meta = DatasetMeta {
        total_cards: cards.len(),
        levels,
        topics: topic_names,
    };
    Ok(Dataset { cards, meta })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Topic;
    use pretty_assertions::assert_eq;

    const INDEX: &str = "\
# Train plan

## SQL
- [[№1]], [[№2]]

## Python
- [[№3]]
";

    fn card_file(id: i64, tag_line: &str) -> (String, String) {
        (
            format!("№{id}"),
            format!("What is thing {id}?\n---\nIt is thing {id}.\n---\n{tag_line}"),
        )
    }

    #[test]
    fn test_parse_topics_index() {
        let topics = parse_topics_index(INDEX);
        assert_eq!(
            topics,
            vec![
                ("SQL".to_string(), vec![1, 2]),
                ("Python".to_string(), vec![3]),
            ]
        );
    }

    #[test]
    fn test_parse_card_file() {
        let (stem, content) = card_file(7, "#sql #joins #lvl_2");
        let parsed = parse_card_file(&stem, &content).unwrap();
        assert_eq!(parsed.id, 7);
        assert_eq!(parsed.question, "What is thing 7?");
        assert_eq!(parsed.answer, "It is thing 7.");
        assert_eq!(parsed.tags, vec!["sql", "joins"]);
        assert_eq!(parsed.level, Some(Level::Medium));
    }

    #[test]
    fn test_missing_sections_is_error() {
        let err = parse_card_file("№1", "only a question");
        assert!(matches!(err, Err(ParseError::InvalidFormat { .. })));
    }

    #[test]
    fn test_bad_id_is_error() {
        let err = parse_card_file("№abc", "q\n---\na\n---\n#t");
        assert!(matches!(err, Err(ParseError::InvalidId { .. })));
    }

    #[test]
    fn test_compile_assigns_topics_and_sorts() {
        let files = vec![
            card_file(3, "#python #lvl_1"),
            card_file(1, "#sql #lvl_1"),
            card_file(2, "#sql #lvl_3"),
        ];
        let dataset = compile(INDEX, &files).unwrap();

        let ids: Vec<i64> = dataset.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            dataset.cards[0].topic,
            Some(Topic::One("SQL".to_string()))
        );
        assert_eq!(
            dataset.cards[2].topic,
            Some(Topic::One("Python".to_string()))
        );
        assert_eq!(dataset.meta.total_cards, 3);
        assert_eq!(dataset.meta.levels, vec!["lvl_1", "lvl_3"]);
        assert_eq!(dataset.meta.topics, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_compile_card_outside_index_has_no_topic() {
        let files = vec![card_file(99, "#misc #lvl_1")];
        let dataset = compile(INDEX, &files).unwrap();
        assert_eq!(dataset.cards[0].topic, None);
    }

    #[test]
    fn test_compile_rejects_duplicate_ids() {
        let files = vec![card_file(1, "#sql"), card_file(1, "#sql")];
        let err = compile(INDEX, &files);
        assert!(matches!(err, Err(ParseError::DuplicateId { id: 1, .. })));
    }
}
