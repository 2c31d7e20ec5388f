#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::Path;

use rusqlite::{Connection, OpenFlags, OptionalExtension};
use tracing::debug;

use pgnmerge_model::Spn;

use crate::MetadataError;

/// Keyed lookup of the human-readable description for one SPN.
///
/// The pipeline treats the store as opaque; the classification rule sits on
/// top of this seam so tests can substitute an in-memory fixture.
pub trait DescriptionStore {
    fn lookup_description(&self, spn: Spn) -> Result<String, MetadataError>;
}

/// SQLite-backed store over the `SPNandPGN` reference table.
///
/// Opened read-only, once per run; the connection drops at run end.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, MetadataError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(path = %path.display(), "opened metadata database");
        Ok(Self { conn })
    }

    /// Wrap an existing connection (tests use an in-memory database).
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl DescriptionStore for SqliteStore {
    fn lookup_description(&self, spn: Spn) -> Result<String, MetadataError> {
        let description: Option<String> = self
            .conn
            .query_row(
                "SELECT Resolution FROM SPNandPGN WHERE SPN = ?1",
                [spn.value()],
                |row| row.get(0),
            )
            .optional()?;
        description.ok_or(MetadataError::NotFound(spn))
    }
}

/// In-memory fixture store for tests and offline use.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<Spn, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, spn: Spn, description: impl Into<String>) {
        self.entries.insert(spn, description.into());
    }
}

impl FromIterator<(Spn, String)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (Spn, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl DescriptionStore for MemoryStore {
    fn lookup_description(&self, spn: Spn) -> Result<String, MetadataError> {
        self.entries
            .get(&spn)
            .cloned()
            .ok_or(MetadataError::NotFound(spn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_fixture() -> SqliteStore {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE SPNandPGN (SPN INTEGER PRIMARY KEY, Resolution TEXT);
             INSERT INTO SPNandPGN VALUES (190, '0.125 rpm/bit');
             INSERT INTO SPNandPGN VALUES (523, '16 states/4 bit');",
        )
        .unwrap();
        SqliteStore::from_connection(conn)
    }

    #[test]
    fn sqlite_lookup_returns_description() {
        let store = sqlite_fixture();
        assert_eq!(
            store.lookup_description(Spn::new(190)).unwrap(),
            "0.125 rpm/bit"
        );
        assert_eq!(
            store.lookup_description(Spn::new(523)).unwrap(),
            "16 states/4 bit"
        );
    }

    #[test]
    fn sqlite_lookup_miss_is_not_found() {
        let store = sqlite_fixture();
        let error = store.lookup_description(Spn::new(999)).unwrap_err();
        assert!(matches!(error, MetadataError::NotFound(spn) if spn == Spn::new(999)));
    }

    #[test]
    fn memory_store_miss_is_not_found() {
        let mut store = MemoryStore::new();
        store.insert(Spn::new(1), "1 kPa/bit");
        assert!(store.lookup_description(Spn::new(1)).is_ok());
        assert!(matches!(
            store.lookup_description(Spn::new(2)),
            Err(MetadataError::NotFound(_))
        ));
    }

    #[test]
    fn opening_a_missing_database_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = SqliteStore::open(&dir.path().join("absent.db"));
        assert!(matches!(result, Err(MetadataError::Store(_))));
    }
}
