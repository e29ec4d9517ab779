// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod error;
pub use error::StoreError;

mod invalidation_tracker;
pub use invalidation_tracker::InvalidationTracker;

mod live_query;
pub use live_query::LiveQuery;

mod mock_task_repository;
pub use mock_task_repository::MockTaskRepository;

mod sqlite_task_repository;
pub use sqlite_task_repository::SqliteTaskRepository;

mod task_database;
pub use task_database::TaskDatabase;

pub mod traits;
