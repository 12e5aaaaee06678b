// Ranking
/// Scores must be strictly greater than this to appear in a ranking.
pub const DEFAULT_THRESHOLD: f64 = 0.02;
/// Decimal digits kept on every retained score.
pub const DEFAULT_PRECISION: u32 = 3;
/// Upper bound accepted for `precision`.
pub const MAX_PRECISION: u32 = 10;

// Vectorizer
/// Shortest token (in chars) the TF-IDF vectorizer keeps.
pub const MIN_TERM_LEN: usize = 2;

// Database
pub const DEFAULT_DATABASE_PATH: &str = "faculty_database.db";

// Server
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Default `tracing` directive when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVE: &str = "faculty_match=info";
