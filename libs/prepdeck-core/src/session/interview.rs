//! Interview mode: written answers graded by an external scoring call.

use rand::Rng;

use super::{ModeState, Session};
use crate::error::SubmitError;
use crate::types::Card;
use crate::verdict::{Verdict, MIN_ANSWERED};

/// Feedback shown when grading fails; the attempt still counts as answered.
pub const GRADING_ERROR_FEEDBACK: &str = "Не удалось проверить ответ. Попробуйте позже.";

/// Session state for interview mode.
#[derive(Debug, Clone, Copy)]
pub struct InterviewState {
    /// Question number shown in the header; starts at 1.
    display_index: u32,
    /// Sum of all recorded scores.
    total_score: f64,
    /// Questions actually answered (graded or failed).
    answered: u32,
    finished: bool,
    /// The loaded card has already been answered.
    current_answered: bool,
    /// Generation of the outstanding grading request, if any.
    in_flight: Option<u64>,
}

impl Default for InterviewState {
    fn default() -> Self {
        Self {
            display_index: 1,
            total_score: 0.0,
            answered: 0,
            finished: false,
            current_answered: false,
            in_flight: None,
        }
    }
}

impl ModeState for InterviewState {
    fn on_card_loaded(&mut self) {
        self.current_answered = false;
    }
}

/// Token tying a grading request to the card it was issued for.
///
/// A response carrying a stale ticket (the session has moved on) is
/// discarded instead of mutating the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
}

/// What happened to a recorded grading result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordOutcome {
    /// The result was applied to the session counters.
    Applied { score: f64 },
    /// The ticket was stale; nothing changed.
    Discarded,
}

impl Session<InterviewState> {
    /// Start a submission for the current card.
    ///
    /// Rejects blank text, a card that was already answered, a finished
    /// session, a missing card and an outstanding request. On success the
    /// caller must eventually resolve the returned ticket with
    /// [`Session::record_score`] or [`Session::record_failure`].
    pub fn begin_submission(&mut self, answer: &str) -> Result<SubmissionTicket, SubmitError> {
        if self.mode.finished {
            return Err(SubmitError::Finished);
        }
        if self.current().is_none() {
            return Err(SubmitError::NoCard);
        }
        if answer.trim().is_empty() {
            return Err(SubmitError::Blank);
        }
        if self.mode.current_answered {
            return Err(SubmitError::AlreadyAnswered);
        }
        if self.mode.in_flight.is_some() {
            return Err(SubmitError::InFlight);
        }
        let ticket = SubmissionTicket {
            generation: self.generation(),
        };
        self.mode.in_flight = Some(ticket.generation);
        Ok(ticket)
    }

    /// Record a successful grade for `ticket`.
    pub fn record_score(&mut self, ticket: SubmissionTicket, score: f64) -> RecordOutcome {
        self.record(ticket, score)
    }

    /// Record a failed grading attempt: score 0, and the fixed
    /// [`GRADING_ERROR_FEEDBACK`] message at the display layer. The question
    /// still counts as answered.
    pub fn record_failure(&mut self, ticket: SubmissionTicket) -> RecordOutcome {
        self.record(ticket, 0.0)
    }

    fn record(&mut self, ticket: SubmissionTicket, score: f64) -> RecordOutcome {
        if self.mode.in_flight == Some(ticket.generation) {
            self.mode.in_flight = None;
        }
        if ticket.generation != self.generation() || self.mode.finished {
            return RecordOutcome::Discarded;
        }

        self.mode.total_score += score;
        self.mode.answered += 1;
        self.mode.display_index += 1;
        self.mode.current_answered = true;
        RecordOutcome::Applied { score }
    }

    /// Whether a grading request is outstanding.
    pub fn is_checking(&self) -> bool {
        self.mode.in_flight.is_some()
    }

    /// Whether the current card already received an answer.
    pub fn current_answered(&self) -> bool {
        self.mode.current_answered
    }

    /// The finish action becomes available after [`MIN_ANSWERED`] answers,
    /// and stays available once finished (as "start a new interview").
    pub fn can_finish(&self) -> bool {
        self.mode.finished || self.mode.answered >= MIN_ANSWERED
    }

    /// Finish the interview: compute the verdict and lock submissions until
    /// [`Session::reset`].
    pub fn finish(&mut self) -> Verdict {
        self.mode.finished = true;
        Verdict::new(self.mode.answered, self.mode.total_score)
    }

    /// Start a new interview: all counters return to their initial values
    /// and a fresh card is drawn.
    pub fn reset(&mut self, rng: &mut impl Rng) -> Option<&Card> {
        self.mode = InterviewState::default();
        self.next_card(rng)
    }

    pub fn display_index(&self) -> u32 {
        self.mode.display_index
    }

    pub fn answered_count(&self) -> u32 {
        self.mode.answered
    }

    pub fn total_score(&self) -> f64 {
        self.mode.total_score
    }

    pub fn is_finished(&self) -> bool {
        self.mode.finished
    }
}
