// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::time::Duration;

use slint::{ComponentHandle, Timer, TimerMode, Weak};

use crate::ui;

const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Short-lived confirmation shown at the bottom of the window.
pub struct Toast {
    view_handle: Weak<ui::MainWindow>,
    timer: Timer,
}

impl Toast {
    pub fn new(view_handle: &ui::MainWindow) -> Self {
        Self { view_handle: view_handle.as_weak(), timer: Timer::default() }
    }

    /// Showing a new message restarts the countdown.
    pub fn show(&self, message: &str) {
        let Some(view) = self.view_handle.upgrade() else {
            return;
        };

        let adapter = view.global::<ui::ToastAdapter>();
        adapter.set_message(message.into());
        adapter.set_shown(true);

        self.timer.start(TimerMode::SingleShot, TOAST_DURATION, {
            let view_handle = self.view_handle.clone();

            move || {
                if let Some(view) = view_handle.upgrade() {
                    view.global::<ui::ToastAdapter>().set_shown(false);
                }
            }
        });
    }
}
