use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, modal_window::ModalWindowFactory, runtime_paths, shell_locale,
    window_actions, BridgeResult, ShellStateBridge, StartupState, DEFAULT_SHELL_LOCALE,
};

#[tauri::command]
pub(crate) fn desktop_bridge_is_desktop_runtime() -> bool {
    true
}

#[tauri::command]
pub(crate) fn desktop_bridge_get_shell_state(app_handle: AppHandle) -> ShellStateBridge {
    let startup_complete = app_handle.state::<StartupState>().startup_gate.is_spent();
    let locale =
        shell_locale::resolve_shell_locale(DEFAULT_SHELL_LOCALE, runtime_paths::root_dir());
    let modal_windows_created = app_handle
        .try_state::<ModalWindowFactory>()
        .map(|factory| factory.created_count())
        .unwrap_or(0);

    ShellStateBridge {
        startup_complete,
        locale: locale.to_string(),
        modal_windows_created,
    }
}

#[tauri::command]
pub(crate) fn desktop_bridge_open_modal_window(app_handle: AppHandle) -> BridgeResult {
    let Some(factory) = app_handle.try_state::<ModalWindowFactory>() else {
        return BridgeResult {
            ok: false,
            reason: Some("Startup entry has not run yet.".to_string()),
        };
    };

    match factory.create() {
        Ok(window) => {
            append_desktop_log(&format!(
                "modal window '{}' opened from bridge",
                window.label()
            ));
            BridgeResult {
                ok: true,
                reason: None,
            }
        }
        Err(error) => {
            append_desktop_log(&format!("failed to open modal window from bridge: {error}"));
            BridgeResult {
                ok: false,
                reason: Some(error),
            }
        }
    }
}

#[tauri::command]
pub(crate) fn desktop_bridge_set_shell_locale(
    app_handle: AppHandle,
    locale: Option<String>,
) -> BridgeResult {
    let root_dir = runtime_paths::root_dir();
    match shell_locale::write_cached_shell_locale(
        locale.as_deref(),
        root_dir.as_deref(),
        append_desktop_log,
    ) {
        Ok(()) => {
            let resolved =
                shell_locale::resolve_shell_locale(DEFAULT_SHELL_LOCALE, runtime_paths::root_dir());
            window_actions::apply_shell_texts(&app_handle, resolved, append_desktop_log);
            BridgeResult {
                ok: true,
                reason: None,
            }
        }
        Err(error) => {
            append_desktop_log(&format!("failed to persist shell locale: {error}"));
            BridgeResult {
                ok: false,
                reason: Some(error),
            }
        }
    }
}
