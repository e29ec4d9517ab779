// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

pub const DATABASE_FILE_NAME: &str = "todo-database.db";

/// Where the application keeps its data.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub database_path: PathBuf,
}

impl Settings {
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self { database_path: data_dir.join(DATABASE_FILE_NAME) }
    }

    /// The per-user data directory of the platform, e.g. `~/.local/share/todolist` on Linux.
    ///
    /// Returns `None` when no home directory can be determined.
    pub fn from_project_dirs() -> Option<Self> {
        let dirs = ProjectDirs::from("dev", "slint", "todolist")?;
        Some(Self::from_data_dir(dirs.data_dir()))
    }
}
