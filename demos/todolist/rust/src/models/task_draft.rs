// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use super::Task;

/// Editable copy of a task's fields owned by the detail screen until it is saved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskDraft {
    pub name: String,
    pub is_completed: bool,
}

impl TaskDraft {
    /// Only non-empty names are written back. Whitespace counts as content.
    pub fn is_submittable(&self) -> bool {
        !self.name.is_empty()
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self { name: task.name.clone(), is_completed: task.is_completed }
    }
}
