//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! The configuration is constructed once at load time and read-only
//! thereafter; `reload_config` exists for callers that re-run the build
//! when the config file changes on disk.

use crate::config::SiteConfig;
use anyhow::{Result, bail};
use arc_swap::ArcSwap;
use rustc_hash::FxHasher;
use std::hash::Hasher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Global hash of the current config file content.
static CONFIG_HASH: AtomicU64 = AtomicU64::new(0);

/// Compute 64-bit content hash (fast, deterministic).
#[inline]
fn content_hash(data: &[u8]) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data);
    hasher.finish()
}

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Install a loaded config as the global one.
///
/// Records the content hash of the backing file (if any) so a later
/// `reload_config` can detect unchanged content cheaply.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    use std::fs;

    if config.config_path.exists()
        && let Ok(content) = fs::read_to_string(&config.config_path)
    {
        CONFIG_HASH.store(content_hash(content.as_bytes()), Ordering::Relaxed);
    }

    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

/// Reload config from disk if content changed.
///
/// Returns `Ok(true)` if config was updated, `Ok(false)` if unchanged.
pub fn reload_config() -> Result<bool> {
    use std::fs;

    let c = cfg();
    if c.config_path.as_os_str().is_empty() {
        bail!("config was not loaded from a file, nothing to reload");
    }

    let content = fs::read_to_string(&c.config_path)?;
    let new_hash = content_hash(content.as_bytes());

    let old_hash = CONFIG_HASH.load(Ordering::Relaxed);
    if new_hash == old_hash {
        return Ok(false);
    }

    let new_config = SiteConfig::load_from(&c.config_path)?;
    CONFIG.store(Arc::new(new_config));
    CONFIG_HASH.store(new_hash, Ordering::Relaxed);

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // Serialize the global-handle tests: they share CONFIG.
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn write_config(dir: &tempfile::TempDir, title: &str) -> std::path::PathBuf {
        let path = dir.path().join("docsite.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "title = \"{title}\"\ndescription = \"d\"").unwrap();
        path
    }

    #[test]
    fn test_init_and_reload_unchanged() {
        let _guard = LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "Homelab");

        let config = SiteConfig::load_from(&path).unwrap();
        init_config(config);
        assert_eq!(cfg().title, "Homelab");

        // Same content on disk: no reload
        assert!(!reload_config().unwrap());
    }

    #[test]
    fn test_reload_after_change() {
        let _guard = LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "Before");

        init_config(SiteConfig::load_from(&path).unwrap());
        assert_eq!(cfg().title, "Before");

        std::fs::write(&path, "title = \"After\"\ndescription = \"d\"").unwrap();
        assert!(reload_config().unwrap());
        assert_eq!(cfg().title, "After");
    }

    #[test]
    fn test_reload_without_file_fails() {
        let _guard = LOCK.lock().unwrap();
        init_config(SiteConfig::default());
        assert!(reload_config().is_err());
    }
}
