use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cinex_api::RestApi;
use cinex_core::{Catalog, ContentBasedRecommender};

/// A content-based movie similarity service
#[derive(Parser, Debug)]
#[command(name = "cinex")]
#[command(about = "A content-based movie recommender", long_about = None)]
struct Args {
    /// Path to the movie catalog CSV file
    #[arg(short, long, default_value = "./datasets/movies.csv")]
    catalog: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting cinex v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.catalog);

    let catalog = Arc::new(Catalog::from_csv_path(&args.catalog)?);
    info!(
        "Loaded {} movies across {} columns",
        catalog.len(),
        catalog.columns().len()
    );

    let engine = Arc::new(ContentBasedRecommender::new(catalog));

    info!("HTTP API: http://localhost:{}/", args.http_port);
    RestApi::start(engine, args.http_port).await?;

    info!("Shutting down...");
    Ok(())
}
