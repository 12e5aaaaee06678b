//! `faculty_match rank`
//!
//! Ranks faculty against a research-interest statement from the terminal.
//!
//! Usage (single query):
//!   cargo run --bin rank -- "protein folding in yeast"
//!
//! Usage (interactive REPL):
//!   cargo run --bin rank
//!
//! Use a custom database:
//!   cargo run --bin rank -- --database other.db "plant genomics"

use std::io::{self, BufRead, Write};

use clap::Parser;

use faculty_match::constants::{DEFAULT_DATABASE_PATH, DEFAULT_PRECISION, DEFAULT_THRESHOLD};
use faculty_match::store::DocumentStore;
use faculty_match::{init_tracing, RankConfig, Ranker, SqliteStore};

#[derive(Parser)]
#[command(name = "rank", about = "Rank faculty biographies against a query")]
struct Args {
    /// SQLite database holding the `faculty` table
    #[arg(short, long, default_value = DEFAULT_DATABASE_PATH)]
    database: String,

    /// Scores must exceed this to be listed
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Decimal digits shown for each score
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: u32,

    /// Research interests; omit for an interactive prompt
    query: Vec<String>,
}

fn rank_and_print(query: &str, store: &SqliteStore, ranker: &Ranker) -> Result<(), Box<dyn std::error::Error>> {
    let documents = store.fetch_all()?;
    let normalized = ranker.normalizer().normalize(query);

    println!("\nQuery: '{query}'");
    println!("  Tokens: {normalized:?}");

    let ranking = ranker.rank(query, &documents)?;
    if ranking.is_empty() {
        println!("  No results found.");
        return Ok(());
    }

    let precision = ranker.config().precision as usize;
    for r in &ranking.results {
        println!("  [{:.*}] {}", precision, r.score, r.name);
    }
    println!("  {} of {} faculty matched", ranking.count, documents.len());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let config = RankConfig::new(args.threshold, args.precision)?;
    let ranker = Ranker::new(config);
    let store = SqliteStore::open(&args.database)?;

    // ── Single query from CLI args ──────────────────────────────────────────
    if !args.query.is_empty() {
        return rank_and_print(&args.query.join(" "), &store, &ranker);
    }

    // ── Interactive REPL ────────────────────────────────────────────────────
    println!("Type your research interests and press Enter. Ctrl-D / empty line to exit.");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 || line.trim().is_empty() {
            break;
        }
        rank_and_print(line.trim(), &store, &ranker)?;
    }

    Ok(())
}
