// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, rc::Rc};

use crate::Callback;
use crate::models::{Task, TaskDraft, TaskId};
use crate::repositories::traits::TaskRepository;

pub const SAVED_MESSAGE: &str = "Task Updated!";

#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    /// No row with the requested id has been delivered (yet).
    Loading,
    Loaded { task: Task, draft: TaskDraft },
    Closed,
}

/// Edits a single task.
///
/// The draft is seeded from the first delivery of the task and belongs to the
/// user from then on: later deliveries refresh `task` but keep the draft.
pub struct TaskDetailController<R: TaskRepository> {
    repo: R,
    task_id: TaskId,
    state: RefCell<DetailState>,
    state_changed_callback: Callback<DetailState>,
    notify_callback: Callback<str>,
    close_callback: Callback<()>,
}

impl<R: TaskRepository> TaskDetailController<R> {
    pub fn new(repo: R, task_id: TaskId) -> Rc<Self> {
        Rc::new(Self {
            repo,
            task_id,
            state: RefCell::new(DetailState::Loading),
            state_changed_callback: Callback::default(),
            notify_callback: Callback::default(),
            close_callback: Callback::default(),
        })
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    /// Follows the task in the store until the screen closes. For an id that
    /// never matches a row this stays in [`DetailState::Loading`].
    pub async fn run(&self) {
        let mut query = self.repo.observe_task(self.task_id);

        while let Some(task) = query.next().await {
            if !self.apply(task) {
                break;
            }
        }
    }

    // returns false once the screen is closed
    fn apply(&self, task: Option<Task>) -> bool {
        let next = match (self.state(), task) {
            (DetailState::Closed, _) => return false,
            (DetailState::Loaded { draft, .. }, Some(task)) => DetailState::Loaded { task, draft },
            (DetailState::Loading, Some(task)) => {
                log::debug!("Loaded task {}", task.id);
                DetailState::Loaded { draft: TaskDraft::from(&task), task }
            }
            (_, None) => DetailState::Loading,
        };

        self.set_state(next);
        true
    }

    fn set_state(&self, state: DetailState) {
        if *self.state.borrow() == state {
            return;
        }

        *self.state.borrow_mut() = state.clone();
        self.state_changed_callback.invoke(&state);
    }

    /// Edits go to the draft only; they are ignored while nothing is loaded.
    pub fn set_name(&self, name: &str) {
        if let DetailState::Loaded { draft, .. } = &mut *self.state.borrow_mut() {
            draft.name = name.into();
        }
    }

    pub fn set_completed(&self, is_completed: bool) {
        if let DetailState::Loaded { draft, .. } = &mut *self.state.borrow_mut() {
            draft.is_completed = is_completed;
        }
    }

    /// Writes the draft back, confirms and closes. Returns whether anything was
    /// written; a draft with an empty name is not.
    pub async fn save(&self) -> bool {
        let updated = match &*self.state.borrow() {
            DetailState::Loaded { task, draft } if draft.is_submittable() => task.with_draft(draft),
            _ => return false,
        };

        if let Err(e) = self.repo.update(updated).await {
            log::error!("Failed to save task {}: {}", self.task_id, e);
            return false;
        }

        self.notify_callback.invoke(SAVED_MESSAGE);
        self.close();
        true
    }

    /// Leaves the screen, discarding the draft.
    pub fn back(&self) {
        self.close();
    }

    fn close(&self) {
        if *self.state.borrow() == DetailState::Closed {
            return;
        }

        self.set_state(DetailState::Closed);
        self.close_callback.invoke(&());
    }

    pub fn on_state_changed(&self, callback: impl Fn(&DetailState) + 'static) {
        self.state_changed_callback.on(callback);
    }

    pub fn on_notify(&self, callback: impl Fn(&str) + 'static) {
        self.notify_callback.on(callback);
    }

    pub fn on_close(&self, callback: impl Fn() + 'static) {
        self.close_callback.on(move |()| callback());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewTask;
    use crate::repositories::MockTaskRepository;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::cell::Cell;

    fn milk() -> Task {
        Task { id: TaskId(1), name: "Buy milk".into(), is_completed: false }
    }

    fn test_controller(
        pool: &mut LocalPool,
        repo: MockTaskRepository,
        task_id: TaskId,
    ) -> Rc<TaskDetailController<MockTaskRepository>> {
        let controller = TaskDetailController::new(repo, task_id);
        pool.spawner()
            .spawn_local({
                let controller = controller.clone();
                async move { controller.run().await }
            })
            .unwrap();
        pool.run_until_stalled();
        controller
    }

    fn loaded(task: Task, name: &str, is_completed: bool) -> DetailState {
        DetailState::Loaded { task, draft: TaskDraft { name: name.into(), is_completed } }
    }

    #[test]
    fn test_unknown_id_stays_loading() {
        let mut pool = LocalPool::new();
        let repo = MockTaskRepository::new(vec![milk()]);

        let unset = test_controller(&mut pool, repo.clone(), TaskId::UNSET);
        let missing = test_controller(&mut pool, repo.clone(), TaskId(42));

        pool.run_until(repo.insert(NewTask::named("Pay rent"))).unwrap();
        pool.run_until_stalled();

        assert_eq!(unset.state(), DetailState::Loading);
        assert_eq!(missing.state(), DetailState::Loading);
        assert!(!pool.run_until(unset.save()));
    }

    #[test]
    fn test_draft_is_seeded_from_task() {
        let mut pool = LocalPool::new();
        let controller = test_controller(&mut pool, MockTaskRepository::new(vec![milk()]), TaskId(1));

        assert_eq!(controller.state(), loaded(milk(), "Buy milk", false));
    }

    #[test]
    fn test_edits_do_not_apply_while_loading() {
        let mut pool = LocalPool::new();
        let controller = test_controller(&mut pool, MockTaskRepository::default(), TaskId(1));

        controller.set_name("Something");
        controller.set_completed(true);

        assert_eq!(controller.state(), DetailState::Loading);
    }

    #[test]
    fn test_save() {
        let mut pool = LocalPool::new();
        let repo = MockTaskRepository::new(vec![
            milk(),
            Task { id: TaskId(2), name: "Pay rent".into(), is_completed: false },
        ]);
        let controller = test_controller(&mut pool, repo.clone(), TaskId(1));

        let messages = Rc::new(RefCell::new(Vec::new()));
        controller.on_notify({
            let messages = messages.clone();
            move |message| messages.borrow_mut().push(message.to_string())
        });
        let closed = Rc::new(Cell::new(0));
        controller.on_close({
            let closed = closed.clone();
            move || closed.set(closed.get() + 1)
        });

        controller.set_name("Buy oat milk");
        controller.set_completed(true);
        assert!(pool.run_until(controller.save()));
        pool.run_until_stalled();

        assert_eq!(
            repo.snapshot(),
            vec![
                Task { id: TaskId(1), name: "Buy oat milk".into(), is_completed: true },
                Task { id: TaskId(2), name: "Pay rent".into(), is_completed: false },
            ]
        );
        assert_eq!(*messages.borrow(), vec![SAVED_MESSAGE.to_string()]);
        assert_eq!(closed.get(), 1);
        assert_eq!(controller.state(), DetailState::Closed);
    }

    #[test]
    fn test_save_with_empty_name() {
        let mut pool = LocalPool::new();
        let repo = MockTaskRepository::new(vec![milk()]);
        let controller = test_controller(&mut pool, repo.clone(), TaskId(1));

        let closed = Rc::new(Cell::new(false));
        controller.on_close({
            let closed = closed.clone();
            move || closed.set(true)
        });

        controller.set_name("");
        controller.set_completed(true);

        assert!(!pool.run_until(controller.save()));
        assert_eq!(repo.snapshot(), vec![milk()]);
        assert!(!closed.get());
        assert_eq!(controller.state(), loaded(milk(), "", true));
    }

    #[test]
    fn test_external_change_keeps_draft() {
        let mut pool = LocalPool::new();
        let repo = MockTaskRepository::new(vec![milk()]);
        let controller = test_controller(&mut pool, repo.clone(), TaskId(1));

        controller.set_name("Buy oat milk");
        let done = Task { is_completed: true, ..milk() };
        pool.run_until(repo.update(done.clone())).unwrap();
        pool.run_until_stalled();

        assert_eq!(controller.state(), loaded(done, "Buy oat milk", false));
    }

    #[test]
    fn test_deleted_task_returns_to_loading() {
        let mut pool = LocalPool::new();
        let repo = MockTaskRepository::new(vec![milk()]);
        let controller = test_controller(&mut pool, repo.clone(), TaskId(1));

        let states = Rc::new(RefCell::new(Vec::new()));
        controller.on_state_changed({
            let states = states.clone();
            move |state| states.borrow_mut().push(state.clone())
        });

        pool.run_until(repo.delete(TaskId(1))).unwrap();
        pool.run_until_stalled();

        assert_eq!(*states.borrow(), vec![DetailState::Loading]);
    }

    #[test]
    fn test_back_discards_draft() {
        let mut pool = LocalPool::new();
        let repo = MockTaskRepository::new(vec![milk()]);
        let controller = test_controller(&mut pool, repo.clone(), TaskId(1));

        let closed = Rc::new(Cell::new(0));
        controller.on_close({
            let closed = closed.clone();
            move || closed.set(closed.get() + 1)
        });

        controller.set_name("Never saved");
        controller.back();
        controller.back();

        assert_eq!(closed.get(), 1);
        assert_eq!(repo.snapshot(), vec![milk()]);
        assert!(!pool.run_until(controller.save()));
    }
}
