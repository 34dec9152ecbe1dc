// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{City, Hospital, UnknownCity};
pub use requests::HospitalSearchParams;
pub use responses::{CityListResponse, ErrorResponse, HealthResponse, HospitalListResponse, SERVER_ERROR_MESSAGE};
