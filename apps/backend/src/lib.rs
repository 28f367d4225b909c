pub mod error;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prepdeck_core::Dataset;

use crate::services::grader::{Grader, OpenAiGrader};

/// Shared application state
pub struct AppState<G: Grader> {
    pub dataset: Arc<Dataset>,
    pub grader: Arc<G>,
}

impl<G: Grader> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            dataset: self.dataset.clone(),
            grader: self.grader.clone(),
        }
    }
}

/// Build the router. Generic over the grader so tests can swap in a mock.
pub fn app<G: Grader>(state: AppState<G>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/data.json", get(routes::dataset::serve::<G>))
        .route("/api/interview", post(routes::interview::grade::<G>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_file = std::env::var("DATA_FILE").unwrap_or_else(|_| "data.json".to_string());
    tracing::info!("Loading dataset from {}...", data_file);
    let payload = tokio::fs::read_to_string(&data_file).await?;
    let dataset = Dataset::from_json(&payload)?;
    tracing::info!("Loaded {} cards", dataset.cards.len());

    let grader = OpenAiGrader::from_env()?;

    let state = AppState {
        dataset: Arc::new(dataset),
        grader: Arc::new(grader),
    };
    let app = app(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
