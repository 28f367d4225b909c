//! Unified study session controller.
//!
//! The three random-card study modes (flip, blitz, interview) share one
//! lifecycle: filter the pool by topic, draw a card uniformly at random,
//! run the mode-specific actions, draw the next card. [`Session`] owns that
//! shared state and is parameterized by a [`ModeState`] carrying the
//! per-mode bookkeeping. Catalog browsing is list-shaped rather than
//! card-at-a-time and lives in [`catalog`].

mod blitz;
mod catalog;
mod flip;
mod interview;

pub use blitz::{BlitzState, BlitzStats};
pub use catalog::{Catalog, CatalogStats, CatalogView};
pub use flip::FlipState;
pub use interview::{InterviewState, RecordOutcome, SubmissionTicket, GRADING_ERROR_FEEDBACK};

use rand::Rng;

use crate::filter::{CardFilter, ALL};
use crate::types::Card;

/// Per-mode session state hooks.
pub trait ModeState: Default {
    /// Reset per-card state when a new card is loaded (or the pool empties).
    fn on_card_loaded(&mut self);
}

/// Modes that reveal the reference answer on demand.
pub trait RevealAnswer {
    fn revealed(&self) -> bool;
    fn set_revealed(&mut self, on: bool);
}

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No card drawn yet.
    Loading,
    /// A card is loaded and actionable.
    Ready,
    /// The filtered pool is empty; action controls are disabled.
    Empty,
}

/// A study session over an immutable card pool.
#[derive(Debug)]
pub struct Session<M: ModeState> {
    cards: Vec<Card>,
    topic: String,
    current: Option<Card>,
    phase: Phase,
    generation: u64,
    pub mode: M,
}

impl<M: ModeState> Session<M> {
    /// Create a session over the full card list. No card is drawn until
    /// [`Session::next_card`] is called.
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            topic: ALL.to_string(),
            current: None,
            phase: Phase::Loading,
            generation: 0,
            mode: M::default(),
        }
    }

    /// Current topic filter value (`"all"` when unconstrained).
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Change the topic filter and immediately load a new card, matching the
    /// dropdown behavior of the study pages.
    pub fn set_topic(&mut self, topic: impl Into<String>, rng: &mut impl Rng) -> Option<&Card> {
        self.topic = topic.into();
        self.next_card(rng)
    }

    /// Number of cards matching the current topic filter.
    pub fn pool_size(&self) -> usize {
        let filter = CardFilter::topic_only(self.topic.clone());
        self.cards.iter().filter(|c| filter.matches(c)).count()
    }

    /// Draw the next card uniformly at random from the filtered pool.
    ///
    /// Every draw is fresh — repeats across a session are expected. An empty
    /// pool transitions to [`Phase::Empty`] and returns `None`; it never
    /// panics. Each call invalidates outstanding per-card state via the
    /// generation counter and [`ModeState::on_card_loaded`].
    pub fn next_card(&mut self, rng: &mut impl Rng) -> Option<&Card> {
        self.generation += 1;

        let drawn = {
            let pool = CardFilter::topic_only(self.topic.clone()).apply(&self.cards);
            if pool.is_empty() {
                None
            } else {
                Some(pool[rng.random_range(0..pool.len())].clone())
            }
        };
        match drawn {
            Some(card) => {
                self.current = Some(card);
                self.phase = Phase::Ready;
            }
            None => {
                self.current = None;
                self.phase = Phase::Empty;
            }
        }
        self.mode.on_card_loaded();
        self.current.as_ref()
    }

    /// The loaded card, if any.
    pub fn current(&self) -> Option<&Card> {
        self.current.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Monotonic load counter; bumped on every draw. Used to detect state
    /// that belongs to a superseded card.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<M: ModeState + RevealAnswer> Session<M> {
    /// Toggle reference-answer visibility; returns the new visibility.
    pub fn toggle_answer(&mut self) -> bool {
        let next = !self.mode.revealed();
        self.mode.set_revealed(next);
        next
    }

    pub fn answer_visible(&self) -> bool {
        self.mode.revealed()
    }
}
