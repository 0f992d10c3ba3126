use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use tauri::{AppHandle, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::{
    runtime_paths, shell_locale, DEFAULT_SHELL_LOCALE, MODAL_WINDOW_HEIGHT,
    MODAL_WINDOW_LABEL_PREFIX, MODAL_WINDOW_WIDTH,
};

/// Builds a new modal window on every call. Clones share the sequence
/// counter, so labels stay unique for the lifetime of the process.
#[derive(Clone)]
pub(crate) struct ModalWindowFactory {
    app_handle: AppHandle,
    created: Arc<AtomicUsize>,
}

impl ModalWindowFactory {
    pub(crate) fn new(app_handle: AppHandle) -> Self {
        Self {
            app_handle,
            created: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn create(&self) -> Result<WebviewWindow, String> {
        let sequence = self.created.fetch_add(1, Ordering::SeqCst) + 1;
        let label = modal_window_label(sequence);
        let locale =
            shell_locale::resolve_shell_locale(DEFAULT_SHELL_LOCALE, runtime_paths::root_dir());
        let texts = shell_locale::shell_texts_for_locale(locale);

        WebviewWindowBuilder::new(&self.app_handle, &label, WebviewUrl::App("modal.html".into()))
            .title(texts.modal_window_title)
            .inner_size(MODAL_WINDOW_WIDTH, MODAL_WINDOW_HEIGHT)
            .resizable(false)
            .center()
            .build()
            .map_err(|error| format!("Failed to create modal window '{label}': {error}"))
    }

    pub(crate) fn created_count(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

pub(crate) fn modal_window_label(sequence: usize) -> String {
    format!("{MODAL_WINDOW_LABEL_PREFIX}{sequence}")
}

pub(crate) fn is_modal_window_label(label: &str) -> bool {
    label
        .strip_prefix(MODAL_WINDOW_LABEL_PREFIX)
        .is_some_and(|suffix| !suffix.is_empty() && suffix.bytes().all(|byte| byte.is_ascii_digit()))
}
