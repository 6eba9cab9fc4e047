//! OS directory resolution for config and log files.

use std::io;
use std::path::{Path, PathBuf};

/// Name of the per-user directory this application owns.
const APP_NAME: &str = "solar-scene";

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("the OS exposes no user configuration directory")]
    NoConfigDir,

    #[error("could not create application directories: {0}")]
    Create(#[from] io::Error),
}

/// Per-user directories the application writes into.
///
/// `config_dir` holds `config.ron`; `log_dir` collects the JSON log files
/// written by debug builds.
pub struct PlatformDirs {
    pub config_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl PlatformDirs {
    /// Resolve the directories from OS conventions without touching disk.
    pub fn resolve() -> Result<Self, PlatformError> {
        let base = dirs::config_dir().ok_or(PlatformError::NoConfigDir)?;
        Ok(Self::under(&base))
    }

    /// Resolve the directories and create them.
    pub fn resolve_and_create() -> Result<Self, PlatformError> {
        let dirs = Self::resolve()?;
        dirs.create_dirs()?;
        Ok(dirs)
    }

    /// Lay the application directories out under an arbitrary root.
    pub fn under(root: &Path) -> Self {
        let app = root.join(APP_NAME);
        Self {
            config_dir: app.join("config"),
            log_dir: app.join("logs"),
        }
    }

    /// Create both directories, including missing parents.
    pub fn create_dirs(&self) -> Result<(), PlatformError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_keeps_config_and_logs_apart() {
        let dirs = PlatformDirs::under(Path::new("/base"));
        assert_eq!(dirs.config_dir, Path::new("/base/solar-scene/config"));
        assert_eq!(dirs.log_dir, Path::new("/base/solar-scene/logs"));
    }

    #[test]
    fn create_dirs_builds_the_tree() {
        let root = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::under(root.path());
        dirs.create_dirs().unwrap();

        assert!(dirs.config_dir.is_dir());
        assert!(dirs.log_dir.is_dir());
    }

    #[test]
    fn resolved_directories_are_absolute() {
        // Environments without a config dir (bare containers) skip this.
        if let Ok(dirs) = PlatformDirs::resolve() {
            assert!(dirs.config_dir.is_absolute());
            assert!(dirs.log_dir.is_absolute());
        }
    }
}
