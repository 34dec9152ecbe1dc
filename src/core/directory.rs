use crate::core::filters::filter_hospitals;
use crate::models::{Hospital, HospitalSearchParams};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Dataset compiled into the binary
const BUNDLED_DATASET: &str = include_str!("../../data/hospitals.json");

/// Errors that can occur while loading the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dataset format: {0}")]
    Format(#[from] serde_json::Error),
}

/// Result of a directory search
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub hospitals: Vec<Hospital>,
    pub total: usize,
}

/// Read-only hospital directory
///
/// Loaded once at startup and shared between workers; cloning only bumps
/// the reference count.
#[derive(Debug, Clone)]
pub struct HospitalDirectory {
    hospitals: Arc<Vec<Hospital>>,
}

impl HospitalDirectory {
    pub fn new(hospitals: Vec<Hospital>) -> Self {
        Self {
            hospitals: Arc::new(hospitals),
        }
    }

    /// Load the dataset that ships with the binary
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let hospitals: Vec<Hospital> = serde_json::from_str(json)?;
        Ok(Self::new(hospitals))
    }

    /// Load a dataset from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Load from `path` when configured, otherwise use the bundled dataset
    pub fn from_settings(path: Option<&str>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => {
                tracing::info!("Loading hospital dataset from {}", path);
                Self::load(path)
            }
            None => {
                tracing::info!("Loading bundled hospital dataset");
                Self::bundled()
            }
        }
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    pub fn len(&self) -> usize {
        self.hospitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty()
    }

    /// Search the directory
    ///
    /// Records are returned in dataset order. Unknown cities or nonsense
    /// queries simply produce fewer (or zero) matches.
    pub fn search(&self, params: &HospitalSearchParams) -> SearchResult {
        let hospitals = if params.is_unfiltered() {
            self.hospitals.as_ref().clone()
        } else {
            filter_hospitals(self.hospitals.iter(), params)
        };

        let total = hospitals.len();
        tracing::debug!(q = ?params.query(), city = ?params.city(), total, "Directory search");

        SearchResult { hospitals, total }
    }
}
