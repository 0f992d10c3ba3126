use tauri::{AppHandle, Manager};

use crate::{main_window, modal_window, shell_locale};

pub(crate) fn show_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str) + Copy,
{
    main_window::show_main_window(app_handle, log);
    main_window::focus_main_window(app_handle, log);
}

/// Retitles the main window and every open modal window from the locale's
/// shell texts.
pub(crate) fn apply_shell_texts<F>(app_handle: &AppHandle, locale: &str, log: F)
where
    F: Fn(&str) + Copy,
{
    let texts = shell_locale::shell_texts_for_locale(locale);
    main_window::set_main_window_title(app_handle, texts.main_window_title, log);

    for (label, window) in app_handle.webview_windows() {
        if !modal_window::is_modal_window_label(&label) {
            continue;
        }
        if let Err(error) = window.set_title(texts.modal_window_title) {
            log(&format!(
                "failed to set title for modal window '{label}': {error}"
            ));
        }
    }
}
