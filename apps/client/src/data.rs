//! Dataset loading: fetch once, cache for the process lifetime.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::OnceCell;

use prepdeck_core::{Card, Dataset};

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Dataset loading errors. Surfaced via logging; the UI degrades to an
/// empty state instead of crashing.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Dataset endpoint returned {status}")]
    Http { status: u16 },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Dataset parse error: {0}")]
    Parse(#[from] prepdeck_core::DatasetError),
}

/// Where the dataset comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// `data.json` served by the backend.
    Remote { base_url: String },
    /// A local `data.json` file.
    File(PathBuf),
}

/// Load-once dataset store.
///
/// The first [`DataStore::load`] performs the fetch; concurrent callers
/// share the in-flight load and later callers get the cached value. There
/// is no reload path.
pub struct DataStore {
    source: DataSource,
    client: Client,
    cell: OnceCell<Arc<Dataset>>,
}

impl DataStore {
    pub fn new(source: DataSource) -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("reqwest client");
        Self {
            source,
            client,
            cell: OnceCell::new(),
        }
    }

    /// Load the dataset exactly once.
    pub async fn load(&self) -> Result<Arc<Dataset>, DataError> {
        self.cell
            .get_or_try_init(|| async { self.fetch().await.map(Arc::new) })
            .await
            .cloned()
    }

    async fn fetch(&self) -> Result<Dataset, DataError> {
        let payload = match &self.source {
            DataSource::Remote { base_url } => {
                let url = format!("{}/data.json", base_url.trim_end_matches('/'));
                let resp = self
                    .client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| DataError::Network(e.to_string()))?;
                if !resp.status().is_success() {
                    return Err(DataError::Http {
                        status: resp.status().as_u16(),
                    });
                }
                resp.text()
                    .await
                    .map_err(|e| DataError::Network(e.to_string()))?
            }
            DataSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| DataError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
        };
        Ok(Dataset::from_json(&payload)?)
    }

    /// Whether the dataset has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The full card list, or empty when the dataset is not loaded.
    /// Never fails.
    pub fn cards(&self) -> &[Card] {
        self.cell
            .get()
            .map(|d| d.cards.as_slice())
            .unwrap_or_default()
    }

    /// The topic list (curated or derived), or empty when not loaded.
    pub fn topics(&self) -> Vec<String> {
        self.cell.get().map(|d| d.topics()).unwrap_or_default()
    }
}
