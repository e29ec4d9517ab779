// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::future::Future;

use futures::FutureExt;

use crate::models::{NewTask, Task, TaskId};
use crate::repositories::{InvalidationTracker, LiveQuery, StoreError};

pub trait TaskRepository: Clone + 'static {
    /// All tasks in insertion order.
    fn tasks(&self) -> impl Future<Output = Result<Vec<Task>, StoreError>>;

    fn task(&self, id: TaskId) -> impl Future<Output = Result<Option<Task>, StoreError>>;

    /// Stores `task` under a fresh id and returns that id.
    fn insert(&self, task: NewTask) -> impl Future<Output = Result<TaskId, StoreError>>;

    /// Rewrites name and completion of the row with `task.id`. Does nothing if
    /// there is no such row.
    fn update(&self, task: Task) -> impl Future<Output = Result<(), StoreError>>;

    /// Removes the row with `id`. Does nothing if there is no such row.
    fn delete(&self, id: TaskId) -> impl Future<Output = Result<(), StoreError>>;

    fn invalidation_tracker(&self) -> &InvalidationTracker;

    fn observe_tasks(&self) -> LiveQuery<Vec<Task>> {
        let repo = self.clone();

        LiveQuery::new(self.invalidation_tracker().subscribe(), move || {
            let repo = repo.clone();
            async move { repo.tasks().await }.boxed_local()
        })
    }

    /// Delivers `None` for as long as no row with `id` exists.
    fn observe_task(&self, id: TaskId) -> LiveQuery<Option<Task>> {
        let repo = self.clone();

        LiveQuery::new(self.invalidation_tracker().subscribe(), move || {
            let repo = repo.clone();
            async move { repo.task(id).await }.boxed_local()
        })
    }
}
