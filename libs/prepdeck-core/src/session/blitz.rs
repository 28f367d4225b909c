//! Blitz mode: rapid self-assessment with knew / did-not-know ratings.

use serde::Serialize;

use super::{ModeState, RevealAnswer, Session};

/// Running statistics of a blitz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BlitzStats {
    /// Rated questions.
    pub total: u32,
    /// "Knew it" answers.
    pub correct: u32,
    /// Current run of consecutive "knew it" answers.
    pub current_streak: u32,
    /// Best run seen this session.
    pub max_streak: u32,
}

impl BlitzStats {
    /// Accuracy as a whole percentage, `round(correct / total * 100)`;
    /// 0 before the first rating.
    pub fn accuracy(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct as f64 / self.total as f64 * 100.0).round() as u32
    }
}

/// Per-card and per-session state for blitz mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlitzState {
    pub stats: BlitzStats,
    rated: bool,
    revealed: bool,
}

impl ModeState for BlitzState {
    fn on_card_loaded(&mut self) {
        self.rated = false;
        self.revealed = false;
    }
}

impl RevealAnswer for BlitzState {
    fn revealed(&self) -> bool {
        self.revealed
    }

    fn set_revealed(&mut self, on: bool) {
        self.revealed = on;
    }
}

impl Session<BlitzState> {
    /// Rate the current card. Each card can be rated exactly once; repeated
    /// calls (either button) are no-ops until the next card loads. Returns
    /// whether the rating was counted.
    pub fn rate(&mut self, knew: bool) -> bool {
        if self.current().is_none() || self.mode.rated {
            return false;
        }
        self.mode.rated = true;

        let stats = &mut self.mode.stats;
        stats.total += 1;
        if knew {
            stats.correct += 1;
            stats.current_streak += 1;
            stats.max_streak = stats.max_streak.max(stats.current_streak);
        } else {
            stats.current_streak = 0;
        }
        true
    }

    /// Whether the current card has been rated.
    pub fn is_rated(&self) -> bool {
        self.mode.rated
    }

    pub fn stats(&self) -> BlitzStats {
        self.mode.stats
    }
}

#[cfg(test)]
mod tests {
    use crate::session::test_support::deck;
    use crate::session::Session;

    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session_with_card(rng: &mut StdRng) -> Session<BlitzState> {
        let mut session = Session::new(deck());
        session.next_card(rng);
        session
    }

    #[test]
    fn test_accuracy_matches_hand_computed() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = session_with_card(&mut rng);

        for knew in [true, true, true, false] {
            session.rate(knew);
            session.next_card(&mut rng);
        }

        let stats = session.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.correct, 3);
        assert_eq!(stats.accuracy(), 75);
    }

    #[test]
    fn test_accuracy_zero_before_first_rating() {
        let mut rng = StdRng::seed_from_u64(3);
        let session = session_with_card(&mut rng);
        assert_eq!(session.stats().accuracy(), 0);
    }

    #[test]
    fn test_streak_sequence() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = session_with_card(&mut rng);

        let mut streaks = Vec::new();
        for knew in [true, true, false, true] {
            session.rate(knew);
            streaks.push(session.stats().current_streak);
            session.next_card(&mut rng);
        }

        assert_eq!(streaks, vec![1, 2, 0, 1]);
        assert_eq!(session.stats().max_streak, 2);
    }

    #[test]
    fn test_second_rating_is_ignored() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = session_with_card(&mut rng);

        assert!(session.rate(true));
        assert!(!session.rate(true));
        assert!(!session.rate(false));

        let stats = session.stats();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.correct, 1);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn test_next_card_allows_rating_again() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = session_with_card(&mut rng);

        session.rate(true);
        session.next_card(&mut rng);
        assert!(!session.is_rated());
        assert!(session.rate(false));
        assert_eq!(session.stats().total, 2);
    }

    #[test]
    fn test_rating_without_card_is_noop() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session: Session<BlitzState> = Session::new(deck());
        session.set_topic("Rust", &mut rng);
        assert!(!session.rate(true));
        assert_eq!(session.stats().total, 0);
    }

    #[test]
    fn test_stats_survive_card_loads() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = session_with_card(&mut rng);
        session.rate(true);
        session.next_card(&mut rng);
        assert_eq!(session.stats().total, 1);
        assert_eq!(session.stats().max_streak, 1);
    }
}
