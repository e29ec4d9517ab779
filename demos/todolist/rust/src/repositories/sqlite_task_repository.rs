// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{path::Path, time::Duration};

use futures::channel::oneshot;
use rusqlite::{Connection, OptionalExtension, params};
use smol::channel::{Receiver, Sender};

use super::{InvalidationTracker, StoreError, traits};
use crate::models::{NewTask, Task, TaskId};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

type Reply<T> = oneshot::Sender<Result<T, StoreError>>;

enum Command {
    Tasks(Reply<Vec<Task>>),
    Task(TaskId, Reply<Option<Task>>),
    Insert(NewTask, Reply<TaskId>),
    Update(Task, Reply<()>),
    Delete(TaskId, Reply<()>),
}

/// Task store backed by one SQLite connection.
///
/// The connection lives on a worker thread that executes commands in the
/// order they were sent, so the UI thread never waits for the disk. The
/// worker stops once every clone of the repository has been dropped.
#[derive(Clone)]
pub struct SqliteTaskRepository {
    commands: Sender<Command>,
    tracker: InvalidationTracker,
}

impl SqliteTaskRepository {
    pub(super) fn open(path: &Path, tracker: InvalidationTracker) -> Result<Self, StoreError> {
        let connection = connect(path)?;
        let (commands, receiver) = smol::channel::unbounded();

        std::thread::Builder::new().name("task store".into()).spawn({
            let tracker = tracker.clone();
            move || Worker { connection, tracker }.run(receiver)
        })?;

        Ok(Self { commands, tracker })
    }

    async fn request<T>(&self, command: impl FnOnce(Reply<T>) -> Command) -> Result<T, StoreError> {
        let (reply, response) = oneshot::channel();
        self.commands.send(command(reply)).await.map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Closed)?
    }
}

impl traits::TaskRepository for SqliteTaskRepository {
    async fn tasks(&self) -> Result<Vec<Task>, StoreError> {
        self.request(Command::Tasks).await
    }

    async fn task(&self, id: TaskId) -> Result<Option<Task>, StoreError> {
        self.request(|reply| Command::Task(id, reply)).await
    }

    async fn insert(&self, task: NewTask) -> Result<TaskId, StoreError> {
        self.request(|reply| Command::Insert(task, reply)).await
    }

    async fn update(&self, task: Task) -> Result<(), StoreError> {
        self.request(|reply| Command::Update(task, reply)).await
    }

    async fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        self.request(|reply| Command::Delete(id, reply)).await
    }

    fn invalidation_tracker(&self) -> &InvalidationTracker {
        &self.tracker
    }
}

pub(super) fn connect(path: &Path) -> Result<Connection, StoreError> {
    let connection = Connection::open(path)?;
    connection.busy_timeout(BUSY_TIMEOUT)?;
    connection.execute_batch(
        "PRAGMA journal_mode = WAL;
         CREATE TABLE IF NOT EXISTS tasks (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             name TEXT NOT NULL,
             isCompleted INTEGER NOT NULL DEFAULT 0
         );",
    )?;
    Ok(connection)
}

struct Worker {
    connection: Connection,
    tracker: InvalidationTracker,
}

impl Worker {
    fn run(self, commands: Receiver<Command>) {
        while let Ok(command) = commands.recv_blocking() {
            // a dropped reply means the caller went away; the write still happened
            match command {
                Command::Tasks(reply) => {
                    reply.send(self.tasks()).ok();
                }
                Command::Task(id, reply) => {
                    reply.send(self.task(id)).ok();
                }
                Command::Insert(task, reply) => {
                    let result = self.insert(&task);
                    if let Ok(id) = &result {
                        log::debug!("Inserted task {}", id);
                        self.tracker.notify();
                    }
                    reply.send(result).ok();
                }
                Command::Update(task, reply) => {
                    let result = self.update(&task);
                    reply.send(result.map(|changed| self.committed(changed, "Updated", task.id))).ok();
                }
                Command::Delete(id, reply) => {
                    let result = self.delete(id);
                    reply.send(result.map(|changed| self.committed(changed, "Deleted", id))).ok();
                }
            }
        }

        log::debug!("Task store worker stopped");
    }

    fn committed(&self, changed: usize, action: &str, id: TaskId) {
        if changed == 0 {
            log::debug!("{} nothing: no task {}", action, id);
            return;
        }

        log::debug!("{} task {}", action, id);
        self.tracker.notify();
    }

    fn tasks(&self) -> Result<Vec<Task>, StoreError> {
        let mut statement =
            self.connection.prepare_cached("SELECT id, name, isCompleted FROM tasks ORDER BY id")?;
        let tasks = statement.query_map([], task_from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    fn task(&self, id: TaskId) -> Result<Option<Task>, StoreError> {
        let task = self
            .connection
            .query_row(
                "SELECT id, name, isCompleted FROM tasks WHERE id = ?1",
                params![id.0],
                task_from_row,
            )
            .optional()?;
        Ok(task)
    }

    fn insert(&self, task: &NewTask) -> Result<TaskId, StoreError> {
        self.connection.execute(
            "INSERT INTO tasks (name, isCompleted) VALUES (?1, ?2)",
            params![task.name, task.is_completed],
        )?;
        Ok(TaskId(self.connection.last_insert_rowid()))
    }

    fn update(&self, task: &Task) -> Result<usize, StoreError> {
        Ok(self.connection.execute(
            "UPDATE tasks SET name = ?2, isCompleted = ?3 WHERE id = ?1",
            params![task.id.0, task.name, task.is_completed],
        )?)
    }

    fn delete(&self, id: TaskId) -> Result<usize, StoreError> {
        Ok(self.connection.execute("DELETE FROM tasks WHERE id = ?1", params![id.0])?)
    }
}

fn task_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task { id: TaskId(row.get(0)?), name: row.get(1)?, is_completed: row.get(2)? })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{TaskDatabase, traits::TaskRepository};
    use futures::executor::block_on;

    fn test_database() -> (tempfile::TempDir, TaskDatabase) {
        let dir = tempfile::tempdir().unwrap();
        let database = TaskDatabase::open(dir.path().join("todo-database.db")).unwrap();
        (dir, database)
    }

    #[test]
    fn test_empty_store() {
        let (_dir, database) = test_database();
        let repo = database.task_repository().unwrap();

        assert_eq!(block_on(repo.tasks()).unwrap(), vec![]);
        assert_eq!(block_on(repo.task(TaskId::UNSET)).unwrap(), None);
    }

    #[test]
    fn test_insert_assigns_fresh_ids() {
        let (_dir, database) = test_database();
        let repo = database.task_repository().unwrap();

        let first = block_on(repo.insert(NewTask::named("Buy milk"))).unwrap();
        let second = block_on(repo.insert(NewTask::named("Buy milk"))).unwrap();

        assert_ne!(first, second);
        assert_eq!(
            block_on(repo.tasks()).unwrap(),
            vec![
                Task { id: first, name: "Buy milk".into(), is_completed: false },
                Task { id: second, name: "Buy milk".into(), is_completed: false },
            ]
        );
    }

    #[test]
    fn test_insert_then_get_by_id() {
        let (_dir, database) = test_database();
        let repo = database.task_repository().unwrap();

        let draft = NewTask { name: "Pay rent".into(), is_completed: true };
        let id = block_on(repo.insert(draft.clone())).unwrap();

        assert_eq!(block_on(repo.task(id)).unwrap(), Some(draft.with_id(id)));
    }

    #[test]
    fn test_update_only_touches_its_row() {
        let (_dir, database) = test_database();
        let repo = database.task_repository().unwrap();

        let milk = block_on(repo.insert(NewTask::named("Buy milk"))).unwrap();
        let rent = block_on(repo.insert(NewTask::named("Pay rent"))).unwrap();

        block_on(repo.update(Task { id: milk, name: "Buy oat milk".into(), is_completed: true }))
            .unwrap();

        assert_eq!(
            block_on(repo.tasks()).unwrap(),
            vec![
                Task { id: milk, name: "Buy oat milk".into(), is_completed: true },
                Task { id: rent, name: "Pay rent".into(), is_completed: false },
            ]
        );
    }

    #[test]
    fn test_update_missing_row_is_noop() {
        let (_dir, database) = test_database();
        let repo = database.task_repository().unwrap();
        let milk = block_on(repo.insert(NewTask::named("Buy milk"))).unwrap();

        block_on(repo.update(Task { id: TaskId(99), name: "Ghost".into(), is_completed: true }))
            .unwrap();

        assert_eq!(block_on(repo.tasks()).unwrap(), vec![NewTask::named("Buy milk").with_id(milk)]);
    }

    #[test]
    fn test_delete() {
        let (_dir, database) = test_database();
        let repo = database.task_repository().unwrap();

        let milk = block_on(repo.insert(NewTask::named("Buy milk"))).unwrap();
        let rent = block_on(repo.insert(NewTask::named("Pay rent"))).unwrap();

        block_on(repo.delete(milk)).unwrap();
        block_on(repo.delete(TaskId(99))).unwrap();

        assert_eq!(block_on(repo.tasks()).unwrap(), vec![NewTask::named("Pay rent").with_id(rent)]);
        assert_eq!(block_on(repo.task(milk)).unwrap(), None);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let (_dir, database) = test_database();
        let repo = database.task_repository().unwrap();

        let first = block_on(repo.insert(NewTask::named("Buy milk"))).unwrap();
        block_on(repo.delete(first)).unwrap();
        let second = block_on(repo.insert(NewTask::named("Buy milk"))).unwrap();

        assert!(second > first);
    }

    #[test]
    fn test_rows_survive_reopening() {
        let (dir, database) = test_database();
        let id = block_on(database.task_repository().unwrap().insert(NewTask::named("Buy milk")))
            .unwrap();
        drop(database);

        let database = TaskDatabase::open(dir.path().join("todo-database.db")).unwrap();
        let repo = database.task_repository().unwrap();

        assert_eq!(block_on(repo.task(id)).unwrap(), Some(NewTask::named("Buy milk").with_id(id)));
    }

    #[test]
    fn test_live_query_sees_writes_of_other_connections() {
        let (_dir, database) = test_database();
        let list_repo = database.task_repository().unwrap();
        let detail_repo = database.task_repository().unwrap();

        block_on(async {
            let mut tasks = list_repo.observe_tasks();
            assert_eq!(tasks.next().await, Some(vec![]));

            let id = detail_repo.insert(NewTask::named("Buy milk")).await.unwrap();
            assert_eq!(tasks.next().await, Some(vec![NewTask::named("Buy milk").with_id(id)]));

            let done = Task { id, name: "Buy milk".into(), is_completed: true };
            detail_repo.update(done.clone()).await.unwrap();
            assert_eq!(tasks.next().await, Some(vec![done]));

            detail_repo.delete(id).await.unwrap();
            assert_eq!(tasks.next().await, Some(vec![]));
        });
    }

    #[test]
    fn test_live_query_for_single_row() {
        let (_dir, database) = test_database();
        let repo = database.task_repository().unwrap();

        block_on(async {
            let mut missing = repo.observe_task(TaskId::UNSET);
            assert_eq!(missing.next().await, Some(None));

            let id = repo.insert(NewTask::named("Buy milk")).await.unwrap();
            let mut task = repo.observe_task(id);
            assert_eq!(task.next().await, Some(Some(NewTask::named("Buy milk").with_id(id))));

            // the unrelated query is re-run and still finds nothing
            assert_eq!(missing.next().await, Some(None));
        });
    }
}
