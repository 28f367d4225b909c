//! Core study library shared by the backend and client applications.
//!
//! Provides:
//! - Card, topic and dataset types with topic-list derivation
//! - Markdown card database compiler
//! - Filter engine (topic + level + free-text search)
//! - Dropdown widget state
//! - Unified study sessions (catalog, flip, blitz, interview)
//! - Interview verdicts and Russian pluralization

pub mod dataset;
pub mod dropdown;
pub mod error;
pub mod filter;
pub mod parser;
pub mod session;
pub mod types;
pub mod verdict;

pub use dataset::{collate_ru, Dataset, DatasetMeta};
pub use dropdown::{Dropdown, DropdownGroup, DropdownOption};
pub use error::{DatasetError, ParseError, Result, SubmitError};
pub use filter::{CardFilter, ALL};
pub use parser::{compile, parse_card_file, parse_topics_index};
pub use session::{
    BlitzState, BlitzStats, Catalog, CatalogStats, CatalogView, FlipState, InterviewState,
    ModeState, Phase, RecordOutcome, RevealAnswer, Session, SubmissionTicket,
    GRADING_ERROR_FEEDBACK,
};
pub use types::{Card, Level, Topic};
pub use verdict::{plural_questions, ScoreTier, Verdict, VerdictBand, MIN_ANSWERED};
