// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use super::{InvalidationTracker, SqliteTaskRepository, StoreError, sqlite_task_repository};

/// One storage location for tasks.
///
/// Every screen opens its own repository on it; all of them share the
/// database's invalidation tracker so that a write through any connection
/// refreshes the live queries of all the others.
#[derive(Clone)]
pub struct TaskDatabase {
    path: Arc<PathBuf>,
    tracker: InvalidationTracker,
}

impl TaskDatabase {
    /// Creates the parent directory and the schema if they are missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        sqlite_task_repository::connect(&path)?;

        log::info!("Opened task database at {}", path.display());
        Ok(Self { path: Arc::new(path), tracker: InvalidationTracker::default() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn task_repository(&self) -> Result<SqliteTaskRepository, StoreError> {
        SqliteTaskRepository::open(&self.path, self.tracker.clone())
    }
}
