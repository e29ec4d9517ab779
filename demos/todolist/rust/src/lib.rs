// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{error::Error, rc::Rc};

use slint::ComponentHandle;

pub mod ui {
    slint::include_modules!();
}

mod adapters;
use adapters::*;

mod callback;
pub use callback::*;

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod settings;

use repositories::TaskDatabase;
use settings::Settings;

/// Opens the database named by `settings` and runs the UI until the window is closed.
#[cfg(not(target_os = "android"))]
pub fn run(settings: &Settings) -> Result<(), Box<dyn Error>> {
    run_with(settings, share_adapter::ShareTarget)
}

fn run_with(
    settings: &Settings,
    share_target: share_adapter::ShareTarget,
) -> Result<(), Box<dyn Error>> {
    let database = TaskDatabase::open(&settings.database_path)?;
    let main_window = init(&database, share_target)?;

    main_window.run()?;
    Ok(())
}

fn init(
    database: &TaskDatabase,
    share_target: share_adapter::ShareTarget,
) -> Result<ui::MainWindow, Box<dyn Error>> {
    let view_handle = ui::MainWindow::new()?;

    let toast = Rc::new(toast_adapter::Toast::new(&view_handle));
    let navigator = navigation_adapter::Navigator::new(&view_handle, database.clone(), toast);

    let task_list_controller = controllers::TaskListController::new(database.task_repository()?);
    task_list_adapter::connect(&view_handle, &task_list_controller);
    navigation_adapter::connect_task_list_controller(&navigator, &task_list_controller);
    share_adapter::connect(&task_list_controller, share_target);

    Ok(view_handle)
}

#[cfg(target_os = "android")]
#[unsafe(no_mangle)]
fn android_main(app: slint::android::AndroidApp) {
    android_logger::init_once(android_logger::Config::default().with_max_level(
        if cfg!(debug_assertions) { log::LevelFilter::Debug } else { log::LevelFilter::Info },
    ));

    let Some(data_dir) = app.internal_data_path() else {
        log::error!("The app has no internal data directory");
        return;
    };
    let settings = Settings::from_data_dir(&data_dir);
    let share_target = share_adapter::ShareTarget::new(app.clone());

    if let Err(e) = slint::android::init(app) {
        log::error!("Failed to initialize the Android backend: {}", e);
        return;
    }

    if let Err(e) = run_with(&settings, share_target) {
        log::error!("Runtime error: {}", e);
    }
}
