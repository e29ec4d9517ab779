// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod share_request;
pub use share_request::ShareRequest;

mod task_draft;
pub use task_draft::TaskDraft;

mod task_list_model;
pub use task_list_model::TaskListModel;

mod task_model;
pub use task_model::{NewTask, Task, TaskId};
