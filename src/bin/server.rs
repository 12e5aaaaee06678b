use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

use faculty_match::constants::{
    DEFAULT_DATABASE_PATH, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PRECISION, DEFAULT_THRESHOLD,
};
use faculty_match::web::{create_router, AppState};
use faculty_match::{init_tracing, RankConfig, Ranker, SqliteStore};

#[derive(Parser)]
#[command(name = "server", about = "Match research interests against faculty biographies")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// SQLite database holding the `faculty` table
    #[arg(short, long, default_value = DEFAULT_DATABASE_PATH)]
    database: String,

    /// Scores must exceed this to be listed
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Decimal digits shown for each score
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let config = RankConfig::new(args.threshold, args.precision)?;
    let store = SqliteStore::open(&args.database).map_err(|e| {
        error!("Failed to open database '{}': {e}", args.database);
        e
    })?;
    info!(
        database = %args.database,
        documents = store.count()?,
        threshold = config.threshold,
        precision = config.precision,
        "loaded faculty database"
    );

    let state = AppState::new(Arc::new(store), Ranker::new(config));
    let app = create_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server running at http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
