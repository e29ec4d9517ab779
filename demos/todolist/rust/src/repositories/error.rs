// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// Error returned by the task store.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
#[non_exhaustive]
pub enum StoreError {
    /// SQLite rejected a statement or the database file could not be opened.
    #[display("database error: {_0}")]
    Sqlite(rusqlite::Error),
    /// The directory holding the database could not be prepared.
    #[display("i/o error: {_0}")]
    Io(std::io::Error),
    /// The store's worker has shut down.
    #[display("task store is closed")]
    #[from(skip)]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(path: &std::path::Path) -> Result<(), StoreError> {
        std::fs::create_dir(path)?;
        rusqlite::Connection::open(path.join("missing").join("tasks.db"))?;
        Ok(())
    }

    #[test]
    fn test_question_mark_converts_causes() {
        let dir = tempfile::tempdir().unwrap();

        let existing = open(dir.path());
        assert!(matches!(existing, Err(StoreError::Io(_))), "{existing:?}");

        let unreachable = open(&dir.path().join("db"));
        assert!(matches!(unreachable, Err(StoreError::Sqlite(_))), "{unreachable:?}");
    }
}
