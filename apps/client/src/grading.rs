//! Grading client for the interview mode.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Explicit bound on a grading request; a hung endpoint surfaces as a
/// grading failure instead of locking the mode forever.
const GRADING_TIMEOUT: Duration = Duration::from_secs(30);

/// Grading request failures. All of them are recoverable: the session
/// records a zero score with a fixed message and continues.
#[derive(Debug, thiserror::Error)]
pub enum GradingError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Grading endpoint returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Malformed grading response: {0}")]
    Parse(String),
}

#[derive(Debug, Serialize)]
struct GradeRequestBody<'a> {
    question: &'a str,
    expected_answer: &'a str,
    user_answer: &'a str,
}

/// Score and feedback returned by the grading endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GradeResult {
    pub score: f64,
    pub feedback: String,
}

/// Client for the `POST /api/interview` grading endpoint.
pub struct GradingClient {
    client: Client,
    base_url: String,
}

impl GradingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(GRADING_TIMEOUT)
            .build()
            .expect("reqwest client");
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one question/expected-answer/user-answer triple for scoring.
    /// Issues a single request; retrying is a user action.
    pub async fn grade(
        &self,
        question: &str,
        expected_answer: &str,
        user_answer: &str,
    ) -> Result<GradeResult, GradingError> {
        let url = format!("{}/api/interview", self.base_url);
        let body = GradeRequestBody {
            question,
            expected_answer,
            user_answer,
        };

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GradingError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GradingError::Http { status, message });
        }

        resp.json()
            .await
            .map_err(|e| GradingError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_url_is_normalized() {
        let client = GradingClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        // Nothing listens on this port.
        let client = GradingClient::new("http://127.0.0.1:1");
        let err = client.grade("q", "a", "mine").await;
        assert!(matches!(err, Err(GradingError::Network(_))));
    }
}
