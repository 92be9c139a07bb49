//! Path management for Pennywise
//!
//! ## Path Resolution Order
//!
//! 1. `PENNYWISE_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory: `$XDG_CONFIG_HOME/pennywise` or
//!    `~/.config/pennywise` on Unix, `%APPDATA%\pennywise` on Windows

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::PennywiseError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV_VAR: &str = "PENNYWISE_DATA_DIR";

/// Manages all paths used by Pennywise
#[derive(Debug, Clone)]
pub struct PennywisePaths {
    /// Base directory for all Pennywise data
    base_dir: PathBuf,
}

impl PennywisePaths {
    /// Create a new PennywisePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, PennywiseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PennywisePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the key-value store file
    pub fn store_file(&self) -> PathBuf {
        self.base_dir.join("store.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PennywiseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PennywiseError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Check if any data has ever been persisted
    pub fn is_initialized(&self) -> bool {
        self.store_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PennywiseError> {
    let dirs = BaseDirs::new().ok_or_else(|| {
        PennywiseError::Config(format!(
            "Could not determine a home directory; set {} instead",
            DATA_DIR_ENV_VAR
        ))
    })?;
    Ok(dirs.config_dir().join("pennywise"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PennywisePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.store_file(), temp_dir.path().join("store.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("pennywise");
        let paths = PennywisePaths::with_base_dir(nested.clone());

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
