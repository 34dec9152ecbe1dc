use serde::{Deserialize, Serialize};
use crate::models::domain::{City, Hospital};

/// User-facing message for any unexpected server fault
pub const SERVER_ERROR_MESSAGE: &str = "伺服器錯誤，請稍後再試";

/// Response for the hospital search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalListResponse {
    pub data: Vec<Hospital>,
    pub total: usize,
}

impl HospitalListResponse {
    pub fn new(data: Vec<Hospital>) -> Self {
        let total = data.len();
        Self { data, total }
    }
}

/// Response for the city list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityListResponse {
    pub data: Vec<City>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub hospitals: usize,
}

/// Error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn server_error() -> Self {
        Self {
            error: SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}
