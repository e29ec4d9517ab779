// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::models::TaskId;

/// Screens the application can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    TaskList,
    TaskDetail(TaskId),
}

impl Route {
    /// Index of the page in the main window.
    pub fn page(&self) -> i32 {
        match self {
            Route::TaskList => 0,
            Route::TaskDetail(_) => 1,
        }
    }
}
