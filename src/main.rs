#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod desktop_bridge_commands;
mod logging;
mod main_window;
mod modal_window;
mod runtime_paths;
mod shell_locale;
mod startup_entry;
mod startup_gate;
mod window_actions;

pub(crate) use app_constants::*;
pub(crate) use app_types::{BridgeResult, ShellStateBridge, StartupState};
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};

fn main() {
    app_runtime::run();
}
