use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{runtime_paths, DESKTOP_LOG_FILE};

const SCOPE_STARTUP: &str = "startup";
const SCOPE_DESKTOP: &str = "desktop";
const SCOPE_SHUTDOWN: &str = "shutdown";

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    root_dir
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logs")
        .join(file_name)
}

/// Appends one timestamped line to the log file and mirrors it to stderr.
/// Logging failures degrade to stderr only.
pub(crate) fn append_log_line(path: &Path, scope: &str, message: &str) {
    let line = format!(
        "{} [{}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        scope,
        message
    );
    eprintln!("{line}");

    if let Some(parent) = path.parent() {
        if let Err(error) = fs::create_dir_all(parent) {
            eprintln!(
                "failed to create log directory {}: {}",
                parent.display(),
                error
            );
            return;
        }
    }

    match fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(mut file) => {
            if let Err(error) = writeln!(file, "{line}") {
                eprintln!("failed to write log line to {}: {}", path.display(), error);
            }
        }
        Err(error) => {
            eprintln!("failed to open log file {}: {}", path.display(), error);
        }
    }
}

fn append_scoped_log(scope: &str, message: &str) {
    let path = resolve_desktop_log_path(runtime_paths::root_dir(), DESKTOP_LOG_FILE);
    append_log_line(&path, scope, message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_scoped_log(SCOPE_STARTUP, message);
}

pub(crate) fn append_desktop_log(message: &str) {
    append_scoped_log(SCOPE_DESKTOP, message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_scoped_log(SCOPE_SHUTDOWN, message);
}
