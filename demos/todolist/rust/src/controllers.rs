// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod route;
pub use route::Route;

mod task_detail_controller;
pub use task_detail_controller::{DetailState, SAVED_MESSAGE, TaskDetailController};

mod task_list_controller;
pub use task_list_controller::TaskListController;
