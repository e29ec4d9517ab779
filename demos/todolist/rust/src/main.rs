// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

#![cfg(not(target_os = "android"))]

use std::process::ExitCode;

use todolist_lib::settings::Settings;

fn main() -> ExitCode {
    env_logger::Builder::default()
        .filter_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let Some(settings) = Settings::from_project_dirs() else {
        log::error!("Could not determine a data directory for the task database");
        return ExitCode::FAILURE;
    };

    match todolist_lib::run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Runtime error: {}", e);
            ExitCode::FAILURE
        }
    }
}
