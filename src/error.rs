use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("threshold must be a finite number in [0, 1), got {0}")]
    InvalidThreshold(f64),
    #[error("precision must be at most {max}, got {got}")]
    InvalidPrecision { got: u32, max: u32 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorizeError {
    #[error("cannot fit a weighting model on an empty corpus")]
    EmptyCorpus,
    #[error("non-finite weight computed for term '{term}'")]
    NonFiniteWeight { term: String },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum RankError {
    #[error("vectorization failed: {0}")]
    Vectorize(#[from] VectorizeError),
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid import file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type StoreResult<T> = Result<T, StoreError>;
