use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use hospital_directory::config::{LoggingSettings, Settings};
use hospital_directory::core::HospitalDirectory;
use hospital_directory::routes::{self, handle_query_payload_error, AppState};
use hospital_directory::services::SearchCache;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging from the `logging` settings section
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // HOSPITAL_CONFIG points at a single file replacing config/default + config/local
    let settings = match std::env::var("HOSPITAL_CONFIG") {
        Ok(path) => Settings::load_from(path),
        Err(_) => Settings::load(),
    };
    init_tracing(
        settings
            .as_ref()
            .map(|s| &s.logging)
            .unwrap_or(&LoggingSettings::default()),
    );

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Starting hospital directory service...");

    let directory = HospitalDirectory::from_settings(settings.data.path.as_deref()).map_err(|e| {
        error!("Failed to load hospital dataset: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    info!("Loaded {} hospitals", directory.len());

    let cache = SearchCache::new(settings.cache.l1_cache_size, settings.cache.ttl_secs);

    info!(
        "Search cache initialized (L1: {} entries, TTL: {}s)",
        settings.cache.l1_cache_size, settings.cache.ttl_secs
    );

    let app_state = AppState { directory, cache };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
