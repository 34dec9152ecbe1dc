// Core search exports
pub mod directory;
pub mod filters;

pub use directory::{DatasetError, HospitalDirectory, SearchResult};
pub use filters::{filter_hospitals, matches_city, matches_query, matches_search};
