//! Configuration manager for loading and saving app configuration

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use super::AppConfig;

/// Shared configuration manager type
pub type SharedConfig = Arc<RwLock<ConfigManager>>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// Error during deserialization
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

/// Configuration manager handles loading, saving, and accessing app configuration
pub struct ConfigManager {
    config: AppConfig,
    config_path: PathBuf,
    dirty: bool,
}

impl ConfigManager {
    /// Create a configuration manager using the OS config directory
    pub fn new() -> Self {
        Self::with_path(Self::default_config_path())
    }

    /// Create a configuration manager backed by `config_path`.
    ///
    /// A missing or unreadable file falls back to defaults.
    pub fn with_path(config_path: PathBuf) -> Self {
        let config = match Self::load_from_path(&config_path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                tracing::info!("No config file found, using defaults");
                AppConfig::new()
            }
            Err(e) => {
                tracing::warn!("Failed to load config: {}", e);
                AppConfig::new()
            }
        };

        Self {
            config,
            config_path,
            dirty: false,
        }
    }

    /// Get the OS-standard configuration directory
    #[cfg(not(target_arch = "wasm32"))]
    fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("arm-viewer")
    }

    #[cfg(target_arch = "wasm32")]
    fn config_dir() -> PathBuf {
        PathBuf::from(".")
    }

    fn default_config_path() -> PathBuf {
        Self::config_dir().join("config.ron")
    }

    /// Load configuration from a file path; `Ok(None)` when the file does not exist
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ConfigError::Io(e.to_string())),
        };

        let config: AppConfig =
            ron::from_str(&content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        tracing::info!("Loaded config from {:?}", path);

        if config.version != AppConfig::CURRENT_VERSION {
            tracing::warn!(
                "Config version {} differs from {}, missing fields use defaults",
                config.version,
                AppConfig::CURRENT_VERSION
            );
        }
        Ok(Some(config))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load_from_path(_path: &Path) -> Result<Option<AppConfig>, ConfigError> {
        Ok(None)
    }

    /// Get a reference to the current configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a mutable reference to the configuration (marks as dirty)
    pub fn config_mut(&mut self) -> &mut AppConfig {
        self.dirty = true;
        &mut self.config
    }

    /// Check if the configuration has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Save the configuration to disk if it changed
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&mut self) -> Result<(), ConfigError> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        self.config.version = AppConfig::CURRENT_VERSION;
        let content = ron::ser::to_string_pretty(&self.config, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        std::fs::write(&self.config_path, &content).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::info!("Saved config to {:?}", self.config_path);
        self.dirty = false;
        Ok(())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn save(&mut self) -> Result<(), ConfigError> {
        self.dirty = false;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new shared configuration manager
pub fn create_shared_config() -> SharedConfig {
    Arc::new(RwLock::new(ConfigManager::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("arm-viewer-test-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let manager = ConfigManager::with_path(scratch_path("config.ron"));
        assert_eq!(manager.config(), &AppConfig::new());
        assert!(!manager.is_dirty());
    }

    #[test]
    fn test_save_then_reload() {
        let path = scratch_path("config.ron");
        let mut manager = ConfigManager::with_path(path.clone());
        manager.config_mut().arm.dome_radius = 0.1;
        manager.config_mut().renderer.display.show_grid = true;
        assert!(manager.is_dirty());

        manager.save().unwrap();
        assert!(!manager.is_dirty());

        let reloaded = ConfigManager::with_path(path.clone());
        assert_eq!(reloaded.config().arm.dome_radius, 0.1);
        assert!(reloaded.config().renderer.display.show_grid);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_corrupt_file_reports_deserialize_error() {
        let path = scratch_path("config.ron");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not ron at all {").unwrap();

        let result = ConfigManager::load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));

        let manager = ConfigManager::with_path(path.clone());
        assert_eq!(manager.config(), &AppConfig::new());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
