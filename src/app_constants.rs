pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MODAL_WINDOW_LABEL_PREFIX: &str = "modal-";

pub(crate) const MODAL_WINDOW_WIDTH: f64 = 480.0;
pub(crate) const MODAL_WINDOW_HEIGHT: f64 = 320.0;

pub(crate) const DEFAULT_SHELL_LOCALE: &str = "en-US";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const DESKTOP_STATE_FILE: &str = "desktop_state.json";

pub(crate) const ROOT_ENV: &str = "CLOSEWIN_ROOT";
pub(crate) const LOCALE_ENV: &str = "CLOSEWIN_DESKTOP_LOCALE";
