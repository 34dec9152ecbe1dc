// Route exports
pub mod error;
pub mod hospitals;

use actix_web::web;

pub use error::{handle_query_payload_error, ApiError};
pub use hospitals::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(hospitals::configure),
    );
}
