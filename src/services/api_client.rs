use crate::models::{City, CityListResponse, HospitalListResponse, HospitalSearchParams};
use reqwest::Client;
use thiserror::Error;

/// Errors that can occur when calling the hospital search API
#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    Status { status: u16, message: String },
}

/// HTTP client for the hospital search API
///
/// Talks to `GET /api/hospitals` and `GET /api/cities` of a running
/// directory server.
#[derive(Debug, Clone)]
pub struct HospitalApiClient {
    base_url: String,
    client: Client,
}

impl HospitalApiClient {
    /// Create a new client for the server at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiClientError> {
        let client = Client::builder()
            .user_agent(concat!("hospital-directory/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Search hospitals
    ///
    /// Absent and empty parameters are left out of the query string.
    pub async fn search(
        &self,
        params: &HospitalSearchParams,
    ) -> Result<HospitalListResponse, ApiClientError> {
        let url = self.url("/api/hospitals");

        let mut query: Vec<(&str, &str)> = Vec::with_capacity(2);
        if let Some(q) = params.query() {
            query.push(("q", q));
        }
        if let Some(city) = params.city() {
            query.push(("city", city));
        }

        tracing::debug!("Searching hospitals at {} with {:?}", url, query);

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(&query);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .json::<crate::models::ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_default();
            return Err(ApiClientError::Status { status, message });
        }

        Ok(response.json().await?)
    }

    /// Fetch the list of cities the directory knows about
    pub async fn cities(&self) -> Result<Vec<City>, ApiClientError> {
        let url = self.url("/api/cities");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiClientError::Status {
                status: response.status().as_u16(),
                message: String::new(),
            });
        }

        let body: CityListResponse = response.json().await?;
        Ok(body.data)
    }
}
