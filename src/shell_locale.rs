use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::{DESKTOP_STATE_FILE, LOCALE_ENV};

const LOCALE_FIELD: &str = "locale";

#[derive(Debug, Clone, Copy)]
pub(crate) struct ShellTexts {
    pub(crate) main_window_title: &'static str,
    pub(crate) modal_window_title: &'static str,
}

pub(crate) fn shell_texts_for_locale(locale: &str) -> ShellTexts {
    if locale == "ru-RU" {
        return ShellTexts {
            main_window_title: "CloseWin",
            modal_window_title: "CloseWin: диалог",
        };
    }

    ShellTexts {
        main_window_title: "CloseWin",
        modal_window_title: "CloseWin: dialog",
    }
}

pub(crate) fn resolve_shell_locale(
    default_shell_locale: &'static str,
    root_dir: Option<PathBuf>,
) -> &'static str {
    if let Some(locale) = read_cached_shell_locale(root_dir.as_deref()) {
        return locale;
    }

    for env_key in [LOCALE_ENV, "LC_ALL", "LANG"] {
        if let Ok(value) = env::var(env_key) {
            if let Some(locale) = normalize_shell_locale(&value) {
                return locale;
            }
        }
    }

    default_shell_locale
}

pub(crate) fn normalize_shell_locale(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw == "en-US" {
        return Some("en-US");
    }
    if raw == "ru-RU" {
        return Some("ru-RU");
    }

    let lowered = raw.to_ascii_lowercase();
    if lowered.starts_with("en") {
        return Some("en-US");
    }
    if lowered.starts_with("ru") {
        return Some("ru-RU");
    }
    None
}

fn desktop_state_path(root_dir: Option<&Path>) -> Option<PathBuf> {
    root_dir.map(|root| root.join(DESKTOP_STATE_FILE))
}

pub(crate) fn read_cached_shell_locale(root_dir: Option<&Path>) -> Option<&'static str> {
    let state_path = desktop_state_path(root_dir)?;
    let raw = fs::read_to_string(state_path).ok()?;
    let parsed: Value = serde_json::from_str(&raw).ok()?;
    let locale = parsed.get(LOCALE_FIELD)?.as_str()?;
    normalize_shell_locale(locale)
}

fn read_state_object<F>(state_path: &Path, log: F) -> Result<Map<String, Value>, String>
where
    F: Fn(&str),
{
    let raw = match fs::read_to_string(state_path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
        Err(error) => {
            return Err(format!(
                "Failed to read desktop state {}: {}",
                state_path.display(),
                error
            ));
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(state)) => Ok(state),
        Ok(_) => {
            log(&format!(
                "desktop state {} has a non-object root, resetting state file",
                state_path.display()
            ));
            Ok(Map::new())
        }
        Err(error) => {
            log(&format!(
                "failed to parse desktop state {}: {}, resetting state file",
                state_path.display(),
                error
            ));
            Ok(Map::new())
        }
    }
}

pub(crate) fn write_cached_shell_locale<F>(
    locale: Option<&str>,
    root_dir: Option<&Path>,
    log: F,
) -> Result<(), String>
where
    F: Fn(&str),
{
    let normalized_locale = locale.and_then(normalize_shell_locale);
    if let Some(raw_locale) = locale {
        if normalized_locale.is_none() {
            log(&format!(
                "unsupported shell locale '{raw_locale}', clearing cached locale"
            ));
        }
    }

    let Some(state_path) = desktop_state_path(root_dir) else {
        log("desktop state path is unavailable, skipping locale persistence");
        return Ok(());
    };

    if let Some(parent_dir) = state_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create desktop state directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut state = read_state_object(&state_path, &log)?;
    match normalized_locale {
        Some(normalized_locale) => {
            state.insert(
                LOCALE_FIELD.to_string(),
                Value::String(normalized_locale.to_string()),
            );
        }
        None => {
            state.remove(LOCALE_FIELD);
        }
    }

    let serialized = serde_json::to_string_pretty(&Value::Object(state))
        .map_err(|error| format!("Failed to serialize desktop state: {error}"))?;
    fs::write(&state_path, serialized).map_err(|error| {
        format!(
            "Failed to write desktop state {}: {}",
            state_path.display(),
            error
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn quiet(_message: &str) {}

    #[test]
    fn shell_texts_for_locale_returns_english_copy() {
        let texts = shell_texts_for_locale("en-US");
        assert_eq!(texts.main_window_title, "CloseWin");
        assert_eq!(texts.modal_window_title, "CloseWin: dialog");
    }

    #[test]
    fn shell_texts_for_locale_returns_russian_copy() {
        let texts = shell_texts_for_locale("ru-RU");
        assert_eq!(texts.main_window_title, "CloseWin");
        assert_eq!(texts.modal_window_title, "CloseWin: диалог");
    }

    #[test]
    fn shell_texts_for_unknown_locale_falls_back_to_english() {
        let texts = shell_texts_for_locale("fr-FR");
        assert_eq!(texts.modal_window_title, "CloseWin: dialog");
    }

    #[test]
    fn normalize_shell_locale_accepts_language_prefixes() {
        assert_eq!(normalize_shell_locale("EN_us"), Some("en-US"));
        assert_eq!(normalize_shell_locale("ru_RU.UTF-8"), Some("ru-RU"));
        assert_eq!(normalize_shell_locale("fr-FR"), None);
        assert_eq!(normalize_shell_locale("  "), None);
    }

    #[test]
    fn write_then_read_round_trips_a_supported_locale() {
        let dir = tempfile::tempdir().expect("temp dir");

        write_cached_shell_locale(Some("ru"), Some(dir.path()), quiet).expect("write locale");
        assert_eq!(read_cached_shell_locale(Some(dir.path())), Some("ru-RU"));

        write_cached_shell_locale(None, Some(dir.path()), quiet).expect("clear locale");
        assert_eq!(read_cached_shell_locale(Some(dir.path())), None);
    }

    #[test]
    fn writing_an_unsupported_locale_clears_the_cached_value() {
        let dir = tempfile::tempdir().expect("temp dir");

        write_cached_shell_locale(Some("en-US"), Some(dir.path()), quiet).expect("write locale");
        write_cached_shell_locale(Some("fr-FR"), Some(dir.path()), quiet).expect("write unsupported");
        assert_eq!(read_cached_shell_locale(Some(dir.path())), None);
    }

    #[test]
    fn a_corrupt_state_file_is_reset_instead_of_failing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let state_path = dir.path().join(crate::DESKTOP_STATE_FILE);
        fs::write(&state_path, "not json at all").expect("write corrupt state");

        write_cached_shell_locale(Some("ru-RU"), Some(dir.path()), quiet)
            .expect("write over corrupt state");
        assert_eq!(read_cached_shell_locale(Some(dir.path())), Some("ru-RU"));
    }

    #[test]
    fn read_cached_shell_locale_without_a_root_returns_none() {
        assert_eq!(read_cached_shell_locale(None), None);
    }
}
