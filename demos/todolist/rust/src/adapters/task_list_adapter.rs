// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use slint::{ComponentHandle, MapModel};

use super::spawn;
use crate::{
    controllers::TaskListController,
    models::{Task, TaskId},
    repositories::traits::TaskRepository,
    ui,
};

// one place to implement connection between adapter (view) and controller
pub fn connect<R: TaskRepository>(
    view_handle: &ui::MainWindow,
    controller: &Rc<TaskListController<R>>,
) {
    let adapter = view_handle.global::<ui::TaskListAdapter>();

    adapter.set_tasks(Rc::new(MapModel::new(controller.tasks(), map_task_to_item)).into());
    adapter.set_input(controller.input().into());

    controller.on_input_changed({
        let view_handle = view_handle.as_weak();

        move |text| {
            if let Some(view) = view_handle.upgrade() {
                view.global::<ui::TaskListAdapter>().set_input(text.into());
            }
        }
    });

    adapter.on_input_edited({
        let controller = controller.clone();

        move |text| controller.set_input(&text)
    });

    adapter.on_add_task({
        let controller = controller.clone();

        move || {
            let controller = controller.clone();
            spawn(async move {
                controller.add_task().await;
            });
        }
    });

    adapter.on_remove_task({
        let controller = controller.clone();

        move |id| {
            let controller = controller.clone();
            spawn(async move { controller.remove_task(id.into()).await });
        }
    });

    adapter.on_share_task({
        let controller = controller.clone();

        move |id| controller.share_task(id.into())
    });

    adapter.on_open_task({
        let controller = controller.clone();

        move |id| controller.open_task(id.into())
    });

    spawn({
        let controller = controller.clone();

        async move { controller.run().await }
    });
}

// maps a Task (data) to a TaskItem (ui)
fn map_task_to_item(task: Task) -> ui::TaskItem {
    ui::TaskItem {
        id: item_id(task.id),
        name: task.name.into(),
        struck_through: task.is_completed,
        muted: task.is_completed,
    }
}

// Rows whose id does not fit the view's int get the unset id, which matches
// no row, so their actions are no-ops rather than hitting another task.
fn item_id(id: TaskId) -> i32 {
    i32::try_from(id.0).unwrap_or_else(|_| {
        log::warn!("Task {} cannot be addressed from the view", id);
        -1
    })
}
