//! Answer grading through an OpenAI-compatible chat completions API.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Grading errors.
#[derive(Debug, Error)]
pub enum GraderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid assessment: {0}")]
    InvalidAssessment(String),
}

/// A grading request: the question, the reference answer and what the
/// candidate wrote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    pub question: String,
    pub expected_answer: String,
    pub user_answer: String,
}

/// The model's judgment: a 1-10 score plus short feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub score: f64,
    pub feedback: String,
}

/// Something that can grade an interview answer.
///
/// Implemented by [`OpenAiGrader`] in production and by mocks in tests.
pub trait Grader: Send + Sync + 'static {
    fn grade(
        &self,
        request: GradeRequest,
    ) -> impl Future<Output = Result<Assessment, GraderError>> + Send;
}

// === Chat completions wire types ===

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Grader backed by an OpenAI-compatible endpoint.
pub struct OpenAiGrader {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiGrader {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    /// Configure from `OPENAI_API_KEY`, `OPENAI_MODEL` and `OPENAI_BASE_URL`.
    /// A missing key is a startup error rather than a per-request 500.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY must be set"))?;
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(base_url, api_key, model))
    }

    fn build_prompt(request: &GradeRequest) -> String {
        format!(
            "Ты — опытный интервьюер для позиции Data Analyst / Data Scientist.\n\n\
             Твоя задача: оценить ответ кандидата на вопрос по шкале от 1 до 10 \
             и дать краткий конструктивный фидбек.\n\n\
             **Вопрос:**\n{question}\n\n\
             **Эталонный ответ (для справки):**\n{expected}\n\n\
             **Ответ кандидата:**\n{user}\n\n\
             **Критерии оценки:**\n\
             - Полнота ответа (охватывает ли все ключевые моменты)\n\
             - Корректность (нет ли фактических ошибок)\n\
             - Структурированность (логично ли изложен)\n\
             - Практическая применимость\n\n\
             **Формат ответа (строго JSON):**\n\
             {{\n  \"score\": <число от 1 до 10>,\n  \"feedback\": \"<краткий фидбек 2-3 предложения на русском>\"\n}}\n\n\
             Не добавляй никаких пояснений вне JSON. Верни только JSON.",
            question = request.question.trim(),
            expected = request.expected_answer.trim(),
            user = request.user_answer.trim(),
        )
    }

    /// Parse and validate the JSON the model was instructed to return.
    fn parse_assessment(content: &str) -> Result<Assessment, GraderError> {
        let assessment: Assessment = serde_json::from_str(content.trim())
            .map_err(|e| GraderError::Parse(e.to_string()))?;

        if !(1.0..=10.0).contains(&assessment.score) {
            return Err(GraderError::InvalidAssessment(format!(
                "score out of range: {}",
                assessment.score
            )));
        }
        if assessment.feedback.trim().is_empty() {
            return Err(GraderError::InvalidAssessment("empty feedback".to_string()));
        }
        Ok(assessment)
    }
}

impl Grader for OpenAiGrader {
    fn grade(
        &self,
        request: GradeRequest,
    ) -> impl Future<Output = Result<Assessment, GraderError>> + Send {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "Ты — профессиональный интервьюер. Отвечай строго в формате JSON."
                        .to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: Self::build_prompt(&request),
                },
            ],
            temperature: 0.7,
            max_tokens: 300,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };
        let client = self.client.clone();
        let api_key = self.api_key.clone();

        async move {
            let resp = client
                .post(&url)
                .bearer_auth(&api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| GraderError::Network(e.to_string()))?;

            if !resp.status().is_success() {
                let status = resp.status().as_u16();
                let message = resp.text().await.unwrap_or_default();
                return Err(GraderError::Upstream { status, message });
            }

            let chat: ChatResponse = resp
                .json()
                .await
                .map_err(|e| GraderError::Parse(e.to_string()))?;
            let content = chat
                .choices
                .first()
                .map(|c| c.message.content.as_str())
                .ok_or_else(|| GraderError::Parse("no choices in response".to_string()))?;

            Self::parse_assessment(content)
        }
    }
}
