use clap::Parser;
use hospital_directory::client::render::render_results;
use hospital_directory::client::{FavoritesStore, FileStorage, SearchSession, ViewMode};
use hospital_directory::services::HospitalApiClient;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Search the Taiwan hospital directory from the terminal
#[derive(Debug, Parser)]
#[command(name = "hospital-cli", version, about)]
struct Cli {
    /// Base URL of the directory server
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Free-text query matched against name, city, district and address
    #[arg(short, long, default_value = "")]
    query: String,

    /// City name, full or partial (e.g. 台北市)
    #[arg(short, long)]
    city: Option<String>,

    /// Show favorites only
    #[arg(short, long)]
    favorites: bool,

    /// List the cities the server knows about and exit
    #[arg(long)]
    list_cities: bool,

    /// Toggle a hospital id in the favorites (repeatable)
    #[arg(short, long = "toggle", value_name = "ID")]
    toggle: Vec<String>,

    /// Directory holding local favorites
    #[arg(long, value_name = "DIR")]
    storage_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("hospital_directory=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let storage_dir = cli
        .storage_dir
        .or_else(FileStorage::default_dir)
        .unwrap_or_else(|| PathBuf::from(".tw-hospital"));
    let storage = FileStorage::new(storage_dir);
    tracing::debug!("Favorites stored in {}", storage.base().display());

    let client = HospitalApiClient::new(cli.server)?;

    if cli.list_cities {
        for city in client.cities().await? {
            println!("{}", city);
        }
        return Ok(());
    }

    let mut favorites = FavoritesStore::load(storage);
    for id in &cli.toggle {
        let now = favorites.toggle(id);
        println!("{} {}", if now { "已加入收藏" } else { "已移除收藏" }, id);
    }

    let mut session = SearchSession::new(client);
    session.mount().await;

    if !cli.query.is_empty() || cli.city.is_some() {
        session.search(&cli.query, cli.city.as_deref()).await;
    }

    if cli.favorites {
        session.set_view(ViewMode::Favorites);
        println!("收藏 {} 間", favorites.count());
    }

    let visible = session.visible(&favorites);
    print!(
        "{}",
        render_results(session.state(), session.view(), &visible, |id| favorites.is_favorite(id))
    );

    Ok(())
}
