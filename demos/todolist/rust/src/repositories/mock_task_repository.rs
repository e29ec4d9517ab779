// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, rc::Rc};

use super::{InvalidationTracker, StoreError, traits};
use crate::models::{NewTask, Task, TaskId};

struct MockState {
    tasks: Vec<Task>,
    next_id: i64,
}

/// In-memory task store with the same observable behavior as the SQLite one.
#[derive(Clone)]
pub struct MockTaskRepository {
    state: Rc<RefCell<MockState>>,
    tracker: InvalidationTracker,
}

impl MockTaskRepository {
    pub fn new(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|task| task.id.0).max().unwrap_or(0) + 1;

        Self {
            state: Rc::new(RefCell::new(MockState { tasks, next_id })),
            tracker: InvalidationTracker::default(),
        }
    }

    pub fn snapshot(&self) -> Vec<Task> {
        self.state.borrow().tasks.clone()
    }
}

impl Default for MockTaskRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl traits::TaskRepository for MockTaskRepository {
    async fn tasks(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.snapshot())
    }

    async fn task(&self, id: TaskId) -> Result<Option<Task>, StoreError> {
        Ok(self.state.borrow().tasks.iter().find(|task| task.id == id).cloned())
    }

    async fn insert(&self, task: NewTask) -> Result<TaskId, StoreError> {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = TaskId(state.next_id);
            state.next_id += 1;
            state.tasks.push(task.with_id(id));
            id
        };

        self.tracker.notify();
        Ok(id)
    }

    async fn update(&self, task: Task) -> Result<(), StoreError> {
        let changed = match self.state.borrow_mut().tasks.iter_mut().find(|t| t.id == task.id) {
            Some(stored) => {
                *stored = task;
                true
            }
            None => false,
        };

        if changed {
            self.tracker.notify();
        }
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        let changed = {
            let mut state = self.state.borrow_mut();
            let count = state.tasks.len();
            state.tasks.retain(|task| task.id != id);
            state.tasks.len() != count
        };

        if changed {
            self.tracker.notify();
        }
        Ok(())
    }

    fn invalidation_tracker(&self) -> &InvalidationTracker {
        &self.tracker
    }
}
