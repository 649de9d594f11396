//! Dataset loading: fetch, parse, and the page-level load state machine.

use thiserror::Error;
use tracing::{debug, info};

use crate::collate;
use crate::record::Municipality;

/// Errors surfaced while loading the municipality dataset.
///
/// The `Display` output is shown verbatim in the viewer's error panel, so
/// every variant reads as a sentence.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (connection, DNS, timeout).
    #[error("failed to fetch municipality data: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("failed to fetch municipality data: {url} returned HTTP {status}")]
    Status { status: u16, url: String },

    /// The body was not a valid municipality array.
    #[error("municipality data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load state of the dataset over the page's lifetime.
///
/// Transitions are `Idle -> Loading` once on mount, then exactly one of
/// `Loaded` or `Error`. There is no retry and no post-load transition;
/// recovery from `Error` is a full restart.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DatasetState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Municipality>),
    Error(String),
}

impl DatasetState {
    /// Whether the page is still waiting for data.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    /// Loaded records, if any.
    pub fn records(&self) -> Option<&[Municipality]> {
        match self {
            Self::Loaded(records) => Some(records),
            _ => None,
        }
    }

    /// Captured failure message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Parse a JSON record array and sort it for display.
///
/// The collation sort here is the one fixed point of ordering in the
/// application: every later filter preserves it.
pub fn parse_dataset(body: &str) -> Result<Vec<Municipality>, CatalogError> {
    let mut records: Vec<Municipality> = serde_json::from_str(body)?;
    collate::sort_by_name(&mut records);
    Ok(records)
}

/// Fetch the dataset from `url` and parse it.
pub async fn fetch_dataset(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<Municipality>, CatalogError> {
    debug!(url, "fetching municipality dataset");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    let records = parse_dataset(&body)?;
    info!(count = records.len(), "municipality dataset loaded");
    Ok(records)
}
