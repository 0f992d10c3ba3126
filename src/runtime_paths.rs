use std::{env, path::PathBuf};

use crate::ROOT_ENV;

pub(crate) fn root_dir() -> Option<PathBuf> {
    if let Ok(raw) = env::var(ROOT_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    default_root_dir()
}

pub(crate) fn default_root_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".closewin"))
}

#[cfg(test)]
mod tests {
    use super::default_root_dir;

    #[test]
    fn default_root_dir_lives_under_the_home_directory() {
        if let Some(root) = default_root_dir() {
            assert!(root.ends_with(".closewin"));
        }
    }
}
