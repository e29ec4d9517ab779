// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, rc::Rc};

use slint::{ComponentHandle, JoinHandle, Weak};

use super::{spawn, task_detail_adapter, toast_adapter::Toast};
use crate::{
    controllers::{Route, TaskDetailController, TaskListController},
    models::TaskId,
    repositories::{SqliteTaskRepository, TaskDatabase, traits::TaskRepository},
    ui,
};

struct DetailScreen {
    controller: Rc<TaskDetailController<SqliteTaskRepository>>,
    subscription: Option<JoinHandle<()>>,
}

/// Switches pages and owns the detail screen while it is shown.
///
/// Every detail screen gets its own repository, and with it its own database
/// connection, which is closed again when the screen goes away.
pub struct Navigator {
    view_handle: Weak<ui::MainWindow>,
    database: TaskDatabase,
    toast: Rc<Toast>,
    detail: RefCell<Option<DetailScreen>>,
}

impl Navigator {
    pub fn new(view_handle: &ui::MainWindow, database: TaskDatabase, toast: Rc<Toast>) -> Rc<Self> {
        view_handle.global::<ui::NavigationAdapter>().set_current_page(Route::TaskList.page());

        Rc::new(Self {
            view_handle: view_handle.as_weak(),
            database,
            toast,
            detail: RefCell::default(),
        })
    }

    pub fn navigate(self: &Rc<Self>, route: Route) {
        log::debug!("Navigating to {:?}", route);
        self.close_detail();

        if let Route::TaskDetail(id) = route {
            if !self.open_detail(id) {
                return;
            }
        }

        if let Some(view) = self.view_handle.upgrade() {
            view.global::<ui::NavigationAdapter>().set_current_page(route.page());
        }
    }

    fn open_detail(self: &Rc<Self>, id: TaskId) -> bool {
        let Some(view) = self.view_handle.upgrade() else {
            return false;
        };

        let repo = match self.database.task_repository() {
            Ok(repo) => repo,
            Err(e) => {
                log::error!("Failed to open task {}: {}", id, e);
                return false;
            }
        };

        let controller = TaskDetailController::new(repo, id);
        task_detail_adapter::connect(&view, &controller);

        controller.on_notify({
            let toast = self.toast.clone();

            move |message| toast.show(message)
        });

        controller.on_close({
            let navigator = Rc::downgrade(self);

            move || {
                if let Some(navigator) = navigator.upgrade() {
                    navigator.navigate(Route::TaskList);
                }
            }
        });

        let subscription = spawn({
            let controller = controller.clone();

            async move { controller.run().await }
        });

        *self.detail.borrow_mut() = Some(DetailScreen { controller, subscription });
        true
    }

    fn close_detail(&self) {
        let Some(screen) = self.detail.borrow_mut().take() else {
            return;
        };

        if let Some(subscription) = screen.subscription {
            subscription.abort();
        }
        log::debug!("Closed detail screen of task {}", screen.controller.task_id());
    }
}

// one place to implement connection between adapter (view) and controller
pub fn connect_task_list_controller<R: TaskRepository>(
    navigator: &Rc<Navigator>,
    controller: &TaskListController<R>,
) {
    controller.on_navigate({
        let navigator = navigator.clone();

        move |route| navigator.navigate(*route)
    });
}
