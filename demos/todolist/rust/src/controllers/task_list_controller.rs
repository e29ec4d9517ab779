// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, rc::Rc};

use slint::ModelRc;

use super::Route;
use crate::Callback;
use crate::models::{NewTask, ShareRequest, Task, TaskId, TaskListModel};
use crate::repositories::traits::TaskRepository;

pub struct TaskListController<R: TaskRepository> {
    repo: R,
    model: TaskListModel,
    input: RefCell<String>,
    input_changed_callback: Callback<str>,
    navigate_callback: Callback<Route>,
    share_callback: Callback<ShareRequest>,
}

impl<R: TaskRepository> TaskListController<R> {
    pub fn new(repo: R) -> Rc<Self> {
        Rc::new(Self {
            repo,
            model: TaskListModel::default(),
            input: RefCell::default(),
            input_changed_callback: Callback::default(),
            navigate_callback: Callback::default(),
            share_callback: Callback::default(),
        })
    }

    pub fn tasks(&self) -> ModelRc<Task> {
        ModelRc::new(self.model.clone())
    }

    /// Keeps the task list in sync with the store until the store shuts down.
    pub async fn run(&self) {
        let mut query = self.repo.observe_tasks();

        while let Some(tasks) = query.next().await {
            log::trace!("Task list refreshed with {} tasks", tasks.len());
            self.model.set_tasks(tasks);
        }
    }

    pub fn input(&self) -> String {
        self.input.borrow().clone()
    }

    pub fn set_input(&self, text: &str) {
        *self.input.borrow_mut() = text.into();
    }

    pub fn on_input_changed(&self, callback: impl Fn(&str) + 'static) {
        self.input_changed_callback.on(callback);
    }

    /// Stores the typed name as a new task and clears the input. Returns
    /// whether a task was added; an empty input is ignored.
    pub async fn add_task(&self) -> bool {
        let name = self.input();
        if name.is_empty() {
            return false;
        }

        if let Err(e) = self.repo.insert(NewTask::named(name)).await {
            log::error!("Failed to add task: {}", e);
            return false;
        }

        self.set_input("");
        self.input_changed_callback.invoke("");
        true
    }

    pub async fn remove_task(&self, id: TaskId) {
        if let Err(e) = self.repo.delete(id).await {
            log::error!("Failed to remove task {}: {}", id, e);
        }
    }

    pub fn share_task(&self, id: TaskId) {
        let Some(task) = self.model.task(id) else {
            return;
        };

        self.share_callback.invoke(&ShareRequest::from(&task));
    }

    pub fn on_share(&self, callback: impl Fn(&ShareRequest) + 'static) {
        self.share_callback.on(callback);
    }

    pub fn open_task(&self, id: TaskId) {
        self.navigate_callback.invoke(&Route::TaskDetail(id));
    }

    pub fn on_navigate(&self, callback: impl Fn(&Route) + 'static) {
        self.navigate_callback.on(callback);
    }
}
