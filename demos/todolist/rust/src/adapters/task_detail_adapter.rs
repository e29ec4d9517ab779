// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use slint::ComponentHandle;

use super::spawn;
use crate::{
    controllers::{DetailState, TaskDetailController},
    repositories::traits::TaskRepository,
    ui,
};

// The view only holds weak references: the navigation adapter owns the
// controller for as long as the detail page is shown.
pub fn connect<R: TaskRepository>(
    view_handle: &ui::MainWindow,
    controller: &Rc<TaskDetailController<R>>,
) {
    apply_state(view_handle, &controller.state());

    controller.on_state_changed({
        let view_handle = view_handle.as_weak();

        move |state| {
            if let Some(view) = view_handle.upgrade() {
                apply_state(&view, state);
            }
        }
    });

    let adapter = view_handle.global::<ui::TaskDetailAdapter>();

    adapter.on_name_edited({
        let controller = Rc::downgrade(controller);

        move |name| {
            if let Some(controller) = controller.upgrade() {
                controller.set_name(&name);
            }
        }
    });

    adapter.on_completed_toggled({
        let controller = Rc::downgrade(controller);

        move |checked| {
            if let Some(controller) = controller.upgrade() {
                controller.set_completed(checked);
            }
        }
    });

    adapter.on_save({
        let controller = Rc::downgrade(controller);

        move || {
            if let Some(controller) = controller.upgrade() {
                spawn(async move {
                    controller.save().await;
                });
            }
        }
    });

    adapter.on_back({
        let controller = Rc::downgrade(controller);

        move || {
            if let Some(controller) = controller.upgrade() {
                controller.back();
            }
        }
    });
}

fn apply_state(view_handle: &ui::MainWindow, state: &DetailState) {
    let adapter = view_handle.global::<ui::TaskDetailAdapter>();

    match state {
        DetailState::Loading => adapter.set_loading(true),
        DetailState::Loaded { draft, .. } => {
            adapter.set_name(draft.name.as_str().into());
            adapter.set_completed(draft.is_completed);
            adapter.set_loading(false);
        }
        DetailState::Closed => {}
    }
}
