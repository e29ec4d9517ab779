// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::fmt;

use super::TaskDraft;

/// Identifier assigned by the store when a task is inserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub i64);

impl TaskId {
    /// Passed when no task was selected. Never matches a stored row.
    pub const UNSET: TaskId = TaskId(-1);
}

impl From<i32> for TaskId {
    fn from(id: i32) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub is_completed: bool,
}

impl Task {
    /// Copy of this task carrying the edited fields of `draft`. The id never changes.
    pub fn with_draft(&self, draft: &TaskDraft) -> Task {
        Task { id: self.id, name: draft.name.clone(), is_completed: draft.is_completed }
    }
}

/// A task that has not been stored yet and therefore has no id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewTask {
    pub name: String,
    pub is_completed: bool,
}

impl NewTask {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_completed: false }
    }

    pub fn with_id(self, id: TaskId) -> Task {
        Task { id, name: self.name, is_completed: self.is_completed }
    }
}
