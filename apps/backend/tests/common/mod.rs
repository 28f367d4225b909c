//! Common test utilities for integration tests.
//!
//! Builds the application router around an in-memory dataset and a mock
//! grader, so tests never touch the upstream model API.

use std::future::Future;
use std::sync::Arc;

use axum::Router;

use prepdeck_backend::services::grader::{Assessment, GradeRequest, Grader, GraderError};
use prepdeck_backend::{app, AppState};
use prepdeck_core::{Card, Dataset, DatasetMeta, Level};

/// Grader returning a canned outcome.
#[derive(Clone)]
pub struct MockGrader {
    outcome: Result<Assessment, u16>,
}

impl MockGrader {
    /// Always grade with the given score and feedback.
    pub fn score(score: f64, feedback: &str) -> Self {
        Self {
            outcome: Ok(Assessment {
                score,
                feedback: feedback.to_string(),
            }),
        }
    }

    /// Always fail as if the upstream model was unreachable.
    pub fn failing() -> Self {
        Self { outcome: Err(500) }
    }
}

impl Grader for MockGrader {
    fn grade(
        &self,
        _request: GradeRequest,
    ) -> impl Future<Output = Result<Assessment, GraderError>> + Send {
        let outcome = match &self.outcome {
            Ok(assessment) => Ok(assessment.clone()),
            Err(status) => Err(GraderError::Upstream {
                status: *status,
                message: "upstream down".to_string(),
            }),
        };
        async move { outcome }
    }
}

fn card(id: i64, topic: &str, level: Level) -> Card {
    Card {
        id,
        question: format!("question {id}"),
        answer: format!("answer {id}"),
        topic: Some(topic.into()),
        level: Some(level),
        tags: Vec::new(),
    }
}

/// Three-card dataset with curated topic order.
pub fn sample_dataset() -> Dataset {
    Dataset {
        cards: vec![
            card(1, "SQL", Level::Easy),
            card(2, "SQL", Level::Hard),
            card(3, "Python", Level::Medium),
        ],
        meta: DatasetMeta {
            total_cards: 3,
            levels: vec!["lvl_1".into(), "lvl_2".into(), "lvl_3".into()],
            topics: vec!["SQL".into(), "Python".into()],
        },
    }
}

/// Build the full application router with a mock grader.
pub fn test_app(grader: MockGrader) -> Router {
    app(AppState {
        dataset: Arc::new(sample_dataset()),
        grader: Arc::new(grader),
    })
}

/// JSON body for a grading request.
pub fn grade_request(question: &str, expected: &str, user: &str) -> serde_json::Value {
    serde_json::json!({
        "question": question,
        "expected_answer": expected,
        "user_answer": user,
    })
}
