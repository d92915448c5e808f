use serde::{Deserialize, Serialize};

use std::future::Future;
use std::path::Path;
use std::path::PathBuf;

use crate::actions::ActionList;
use crate::error::ConfigError;
use crate::icons::IconOverrideMap;
use crate::render::ToolbarStyle;

/// Host configuration for a toolbar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Buttons, left to right. `None` uses the default set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<ActionList>,
    /// Icons that replace the built-in ones.
    #[serde(skip_serializing_if = "IconOverrideMap::is_empty")]
    pub icon_overrides: IconOverrideMap,
    pub style: ToolbarStyle,
}

impl ToolbarConfig {
    /// The configured action list, or the default one.
    pub fn action_list(&self) -> ActionList {
        self.actions.clone().unwrap_or_default()
    }

    /// Icon overrides, if any were configured.
    pub fn icon_overrides(&self) -> Option<&IconOverrideMap> {
        (!self.icon_overrides.is_empty()).then_some(&self.icon_overrides)
    }

    /// Loads the configuration from the provided loader.
    pub async fn load(loader: &impl Loader) -> Result<Self, ConfigError> {
        loader.load().await
    }

    /// Saves the configuration using the provided saver.
    pub async fn save(&self, saver: &impl Saver) -> Result<(), ConfigError> {
        saver.save(self).await
    }
}

/// The trait for loading configuration data.
pub trait Loader {
    /// Loads the configuration data.
    fn load(&self) -> impl Future<Output = Result<ToolbarConfig, ConfigError>> + Send;
}

/// The trait for saving configuration data.
pub trait Saver {
    /// Saves the configuration data.
    fn save(&self, config: &ToolbarConfig)
    -> impl Future<Output = Result<(), ConfigError>> + Send;
}

/// An implementation of [`Loader`] and [`Saver`] that reads and writes a configuration file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a new [`FileStore`] with the given path.
    ///
    /// [`ToolbarConfig`] data will be serialized and deserialized using the file extension.
    /// `.json` and `.toml` are supported.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn format(&self) -> Result<Format, ConfigError> {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(ConfigError::UnsupportedFormat(self.path.clone())),
        }
    }
}

enum Format {
    Json,
    Toml,
}

impl Loader for FileStore {
    async fn load(&self) -> Result<ToolbarConfig, ConfigError> {
        let format = self.format()?;
        let contents = std::fs::read_to_string(&self.path)?;
        let config = match format {
            Format::Json => serde_json::from_str(&contents)?,
            Format::Toml => toml::from_str(&contents)?,
        };
        tracing::debug!(path = %self.path.display(), "loaded toolbar config");
        Ok(config)
    }
}

impl Saver for FileStore {
    async fn save(&self, config: &ToolbarConfig) -> Result<(), ConfigError> {
        let contents = match self.format()? {
            Format::Json => serde_json::to_string_pretty(config)?,
            Format::Toml => toml::to_string_pretty(config)?,
        };
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}
