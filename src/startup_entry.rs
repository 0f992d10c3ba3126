use tauri::{AppHandle, Manager, WebviewWindow};

use crate::{
    append_desktop_log, append_startup_log, main_window, modal_window::ModalWindowFactory,
    runtime_paths, shell_locale, window_actions, DEFAULT_SHELL_LOCALE,
};

/// The startup entry point contract: receives the live main window and a
/// factory that builds a distinct new modal window per call. Invoked at most
/// once per process, on the first activation of the main window.
pub(crate) type StartupEntry = Box<dyn FnOnce(WebviewWindow, ModalWindowFactory) + Send>;

pub(crate) fn hand_off(app_handle: AppHandle, entry: StartupEntry) {
    let Some(window) = main_window::main_window(&app_handle) else {
        append_startup_log("startup entry skipped: main window not found");
        return;
    };

    let modal_windows = ModalWindowFactory::new(app_handle);
    entry(window, modal_windows);
}

/// The shell's own startup entry: localize titles, surface the main window,
/// and publish the modal factory for the desktop bridge.
pub(crate) fn run_default(main_window: WebviewWindow, modal_windows: ModalWindowFactory) {
    let app_handle = main_window.app_handle().clone();
    let locale =
        shell_locale::resolve_shell_locale(DEFAULT_SHELL_LOCALE, runtime_paths::root_dir());

    window_actions::apply_shell_texts(&app_handle, locale, append_desktop_log);
    window_actions::show_main_window(&app_handle, append_desktop_log);

    if !app_handle.manage(modal_windows) {
        append_desktop_log("modal window factory already published, skipping manage");
    }

    append_startup_log(&format!(
        "startup entry finished: main window '{}' ready, locale {locale}",
        main_window.label()
    ));
}
