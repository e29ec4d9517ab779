// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::future::Future;

pub mod navigation_adapter;
pub mod share_adapter;
pub mod task_detail_adapter;
pub mod task_list_adapter;
pub mod toast_adapter;

/// Runs `future` on the UI event loop without waiting for it.
fn spawn(future: impl Future<Output = ()> + 'static) -> Option<slint::JoinHandle<()>> {
    match slint::spawn_local(future) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::error!("Failed to schedule task on the event loop: {}", e);
            None
        }
    }
}
