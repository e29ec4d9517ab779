// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use super::Task;

/// Outbound text handed to the platform's share facility.
#[derive(Clone, Debug, PartialEq)]
pub struct ShareRequest {
    pub text: String,
    pub mime_type: &'static str,
}

impl From<&Task> for ShareRequest {
    fn from(task: &Task) -> Self {
        Self { text: format!("ToDo Task: {}", task.name), mime_type: "text/plain" }
    }
}
