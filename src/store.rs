//! Document Store boundary.
//!
//! The ranker only ever sees a [`DocumentSet`]; where it came from is behind
//! [`DocumentStore`]. [`SqliteStore`] reads the collector's `faculty` table,
//! [`MemoryStore`] serves fixed documents for tests and embedding.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tracing::debug;

use crate::doc::{Document, DocumentSet};
use crate::error::StoreResult;

pub trait DocumentStore: Send + Sync {
    /// Every document in store order. Duplicate names collapse, last write wins.
    fn fetch_all(&self) -> StoreResult<DocumentSet>;
}

/// SQLite-backed store. Opens a fresh connection per call so each request owns its own.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path` and ensure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let store = SqliteStore {
            path: path.as_ref().to_path_buf(),
        };
        store.setup_schema()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> StoreResult<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    fn setup_schema(&self) -> StoreResult<()> {
        let conn = self.connect()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS faculty (
                id TEXT PRIMARY KEY,
                name TEXT,
                biography TEXT,
                UNIQUE(name, biography)
            );
            "#,
        )?;
        Ok(())
    }

    /// Insert one faculty record. Returns `false` when the same (name, biography) already exists.
    pub fn insert(&self, name: &str, biography: &str) -> StoreResult<bool> {
        let conn = self.connect()?;
        let id = uuid::Uuid::new_v4().to_string();
        let changed = conn.execute(
            "INSERT OR IGNORE INTO faculty (id, name, biography) VALUES (?1, ?2, ?3)",
            params![id, name, biography],
        )?;
        Ok(changed == 1)
    }

    pub fn count(&self) -> StoreResult<usize> {
        let conn = self.connect()?;
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM faculty", [], |row| row.get(0))?;
        Ok(n as usize)
    }
}

impl DocumentStore for SqliteStore {
    fn fetch_all(&self) -> StoreResult<DocumentSet> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT name, biography FROM faculty ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| {
            let name: Option<String> = row.get(0)?;
            let biography: Option<String> = row.get(1)?;
            Ok(Document::new(
                name.unwrap_or_default(),
                biography.unwrap_or_default(),
            ))
        })?;

        let mut set = DocumentSet::new();
        for doc in rows {
            set.insert(doc?);
        }
        debug!(documents = set.len(), path = %self.path.display(), "fetched documents");
        Ok(set)
    }
}

/// Fixed in-memory documents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    docs: Vec<Document>,
}

impl MemoryStore {
    pub fn new(docs: Vec<Document>) -> Self {
        MemoryStore { docs }
    }
}

impl DocumentStore for MemoryStore {
    fn fetch_all(&self) -> StoreResult<DocumentSet> {
        Ok(self.docs.iter().cloned().collect())
    }
}
