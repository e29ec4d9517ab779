// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, rc::Rc};

use slint::{Model, ModelNotify, ModelTracker};

use super::{Task, TaskId};

enum Change {
    None,
    Changed(Vec<usize>),
    Added { index: usize, count: usize },
    Removed { index: usize, count: usize },
    Reset,
}

/// Snapshot of the task table as last delivered by the store.
///
/// Every delivery replaces the whole snapshot. The model works out the smallest
/// notification that describes the difference so that views keep their scroll
/// position when a single row is added, removed or edited.
#[derive(Clone, Default)]
pub struct TaskListModel {
    tasks: Rc<RefCell<Vec<Task>>>,
    notify: Rc<ModelNotify>,
}

impl TaskListModel {
    pub fn set_tasks(&self, tasks: Vec<Task>) {
        let change = {
            let mut current = self.tasks.borrow_mut();
            let change = diff(&current, &tasks);
            *current = tasks;
            change
        };

        match change {
            Change::None => {}
            Change::Changed(rows) => rows.into_iter().for_each(|row| self.notify.row_changed(row)),
            Change::Added { index, count } => self.notify.row_added(index, count),
            Change::Removed { index, count } => self.notify.row_removed(index, count),
            Change::Reset => self.notify.reset(),
        }
    }

    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.tasks.borrow().iter().find(|task| task.id == id).cloned()
    }
}

fn diff(old: &[Task], new: &[Task]) -> Change {
    let prefix = old.iter().zip(new).take_while(|(a, b)| a == b).count();

    if old.len() == new.len() {
        if prefix == old.len() {
            return Change::None;
        }

        let rows = old.iter().zip(new).enumerate().filter(|(_, (a, b))| a != b);
        let rows = rows.map(|(row, _)| row).collect();

        // rows only count as edited while every id stays in place
        if old.iter().zip(new).all(|(a, b)| a.id == b.id) {
            return Change::Changed(rows);
        }

        return Change::Reset;
    }

    if new.len() > old.len() {
        let count = new.len() - old.len();
        if old[prefix..] == new[prefix + count..] {
            return Change::Added { index: prefix, count };
        }
    } else {
        let count = old.len() - new.len();
        if old[prefix + count..] == new[prefix..] {
            return Change::Removed { index: prefix, count };
        }
    }

    Change::Reset
}

impl Model for TaskListModel {
    type Data = Task;

    fn row_count(&self) -> usize {
        self.tasks.borrow().len()
    }

    fn row_data(&self, row: usize) -> Option<Self::Data> {
        self.tasks.borrow().get(row).cloned()
    }

    fn model_tracker(&self) -> &dyn ModelTracker {
        self.notify.as_ref()
    }
}
