use crate::core::HospitalDirectory;
use crate::models::{HospitalListResponse, HospitalSearchParams};
use actix_web::web::Bytes;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while producing a cached search response
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache load failed: {0}")]
    LoadFailed(#[from] Arc<CacheError>),
}

/// Cache key builder
///
/// Filtering is case-insensitive, so keys are lowercased and empty values
/// collapse into "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    q: Option<String>,
    city: Option<String>,
}

impl CacheKey {
    fn search(params: &HospitalSearchParams) -> Self {
        Self {
            q: params.query().map(str::to_lowercase),
            city: params.city().map(str::to_lowercase),
        }
    }
}

/// In-memory cache of serialized search responses
///
/// The dataset never changes after startup, so entries only expire to bound
/// memory. Clones share the same cache.
#[derive(Clone)]
pub struct SearchCache {
    responses: moka::future::Cache<CacheKey, Bytes>,
}

impl SearchCache {
    /// Create a new cache holding at most `capacity` responses
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let responses = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { responses }
    }

    /// Get the JSON body for a search, running it on a miss
    pub async fn search_json(
        &self,
        directory: &HospitalDirectory,
        params: &HospitalSearchParams,
    ) -> Result<Bytes, CacheError> {
        let key = CacheKey::search(params);

        let body = self
            .responses
            .try_get_with(key, async {
                tracing::trace!("Search cache miss: {:?}", params);
                let result = directory.search(params);
                let json = serde_json::to_vec(&HospitalListResponse::new(result.hospitals))?;
                Ok::<_, CacheError>(Bytes::from(json))
            })
            .await?;

        Ok(body)
    }
}
