//! Catalog browsing: the filtered card list with aggregate counts and
//! per-card answer toggles.

use std::collections::BTreeSet;

use crate::filter::CardFilter;
use crate::types::{Card, Level};

/// Aggregate counts shown above the catalog, recomputed on every filter
/// change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    /// Cards matching the current filter.
    pub matching: usize,
    /// Cards in the whole dataset.
    pub total: usize,
    /// Per-tier counts within the matching set, ascending by tier.
    pub by_level: [usize; 3],
}

/// One render pass of the catalog.
#[derive(Debug)]
pub struct CatalogView<'a> {
    pub cards: Vec<&'a Card>,
    pub stats: CatalogStats,
}

/// Catalog browsing state: a full filter plus which answers are revealed.
///
/// Browsing is otherwise stateless — no scoring, no current card.
#[derive(Debug, Default)]
pub struct Catalog {
    filter: CardFilter,
    revealed: BTreeSet<i64>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &CardFilter {
        &self.filter
    }

    /// Replace the filter. The visible set is rebuilt from scratch, so all
    /// answer toggles reset, matching the full re-render of the page.
    pub fn set_filter(&mut self, filter: CardFilter) {
        self.filter = filter;
        self.revealed.clear();
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        let mut filter = self.filter.clone();
        filter.topic = topic.into();
        self.set_filter(filter);
    }

    pub fn set_level(&mut self, level: impl Into<String>) {
        let mut filter = self.filter.clone();
        filter.level = level.into();
        self.set_filter(filter);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let mut filter = self.filter.clone();
        filter.search = search.into();
        self.set_filter(filter);
    }

    /// Toggle the answer of one card; independent per card. Returns the new
    /// visibility.
    pub fn toggle_answer(&mut self, card_id: i64) -> bool {
        if self.revealed.remove(&card_id) {
            false
        } else {
            self.revealed.insert(card_id);
            true
        }
    }

    pub fn is_revealed(&self, card_id: i64) -> bool {
        self.revealed.contains(&card_id)
    }

    /// Apply the filter and recompute the aggregate counts.
    pub fn view<'a>(&self, cards: &'a [Card]) -> CatalogView<'a> {
        let matching = self.filter.apply(cards);

        let mut by_level = [0usize; 3];
        for card in &matching {
            if let Some(level) = card.level {
                let tier = Level::ALL_LEVELS
                    .iter()
                    .position(|l| *l == level)
                    .unwrap_or(0);
                by_level[tier] += 1;
            }
        }

        let stats = CatalogStats {
            matching: matching.len(),
            total: cards.len(),
            by_level,
        };
        CatalogView {
            cards: matching,
            stats,
        }
    }
}
