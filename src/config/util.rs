//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/guides/   ← cwd
/// /home/user/site/docsite.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(config_name, &cwd)
}

/// Find config file by searching upward from the given directory.
pub fn find_config_file_from(config_name: &Path, start: &Path) -> Option<PathBuf> {
    // Absolute config paths are used as-is
    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs").join("guides");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("docsite.toml"), "title = \"t\"").unwrap();

        let found = find_config_file_from(Path::new("docsite.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("docsite.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        // Searching for a name that exists nowhere up the tree
        let found = find_config_file_from(Path::new("no-such-config-xyz.toml"), dir.path());
        assert_eq!(found, None);
    }
}
