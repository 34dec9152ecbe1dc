// Service exports
pub mod api_client;
pub mod cache;

pub use api_client::{ApiClientError, HospitalApiClient};
pub use cache::{CacheError, SearchCache};
