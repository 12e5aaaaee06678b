use clap::Parser;
use tracing::info;

use faculty_match::constants::DEFAULT_DATABASE_PATH;
use faculty_match::import::import_file;
use faculty_match::{init_tracing, SqliteStore};

#[derive(Parser)]
#[command(name = "import", about = "Load collected faculty biographies into the database")]
struct Args {
    /// JSON array of {"name": ..., "biography": ...} records
    input: String,

    /// SQLite database to create or extend
    #[arg(short, long, default_value = DEFAULT_DATABASE_PATH)]
    database: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    println!("[1/2] Opening '{}'…", args.database);
    let store = SqliteStore::open(&args.database)?;

    println!("[2/2] Importing '{}'…", args.input);
    let stats = import_file(&args.input, &store)?;
    println!(
        "      {} added  |  {} duplicates skipped  |  {} total",
        stats.inserted,
        stats.duplicates,
        store.count()?
    );

    info!("Done.  Run `cargo run --bin server` to start matching.");
    Ok(())
}
