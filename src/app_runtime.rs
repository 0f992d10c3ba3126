use tauri::{Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_shutdown_log, append_startup_log, logging, runtime_paths,
    startup_entry::{self, StartupEntry},
    startup_gate::{decide_activation, ActivationDecision, GateOutcome, StartupGate},
    window_actions, StartupState, DESKTOP_LOG_FILE, MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(runtime_paths::root_dir(), DESKTOP_LOG_FILE).display()
    ));

    run_with_entry(Box::new(startup_entry::run_default));
}

pub(crate) fn run_with_entry(entry: StartupEntry) {
    let startup_gate =
        StartupGate::new(move |app_handle| startup_entry::hand_off(app_handle, entry));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(
            |app_handle, _argv, _cwd| {
                append_desktop_log("second desktop launch detected, focusing existing main window");
                window_actions::show_main_window(app_handle, append_desktop_log);
            },
        ))
        .manage(StartupState { startup_gate })
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::desktop_bridge_is_desktop_runtime,
            crate::desktop_bridge_commands::desktop_bridge_get_shell_state,
            crate::desktop_bridge_commands::desktop_bridge_open_modal_window,
            crate::desktop_bridge_commands::desktop_bridge_set_shell_locale,
        ])
        .on_window_event(|window, event| match event {
            WindowEvent::Focused(focused) => {
                match decide_activation(window.label(), *focused) {
                    ActivationDecision::RunStartupEntry => {
                        let app_handle = window.app_handle();
                        let state = app_handle.state::<StartupState>();
                        if state.startup_gate.fire(app_handle.clone()) == GateOutcome::Invoked {
                            append_startup_log("main window activated, startup entry invoked");
                        }
                    }
                    ActivationDecision::Ignore => {}
                }
            }
            WindowEvent::CloseRequested { .. } => {
                if window.label() == MAIN_WINDOW_LABEL {
                    append_shutdown_log("main window close requested");
                }
            }
            _ => {}
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app_handle, event| match event {
            RunEvent::Ready => {
                append_startup_log("main window created, waiting for first activation");
            }
            RunEvent::Exit => {
                append_shutdown_log("desktop process exiting");
            }
            _ => {}
        });
}
