pub mod config;
pub mod constants;
pub mod doc;
pub mod error;
pub mod import;
pub mod rank;
pub mod store;
pub mod text;
pub mod tfidf;
pub mod web;

pub use config::RankConfig;
pub use doc::{Document, DocumentSet, RawText};
pub use rank::{RankedFaculty, Ranker, Ranking};
pub use store::{DocumentStore, MemoryStore, SqliteStore};

/// Install the global `tracing` subscriber used by every binary.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(constants::DEFAULT_LOG_DIRECTIVE));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
