//! Taiwan hospital directory
//!
//! Search service over a static, bundled list of hospitals, plus the client
//! pieces that talk to it: an HTTP search session, a locally persisted
//! favorites set and plain-text rendering.

pub mod client;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use client::{FavoritesStore, SearchSession, ViewMode};
pub use crate::core::{filter_hospitals, HospitalDirectory};
pub use models::{City, Hospital, HospitalListResponse, HospitalSearchParams};
