use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::config::LocalConfig;
use crate::constants::CONFIG_FILE;
use crate::error::ConfigLoadError;

/// Reads the pipeline configuration that belongs to a workspace directory.
///
/// Implementations must tell an absent configuration (`Ok(None)`) apart from
/// one that is present but unusable (`Err`). They are called concurrently
/// when tasks are resolved in parallel.
pub trait ConfigLoader: Send + Sync {
    fn load(&self, directory: &Path) -> Result<Option<LocalConfig>, ConfigLoadError>;
}

impl<L: ConfigLoader + ?Sized> ConfigLoader for &L {
    fn load(&self, directory: &Path) -> Result<Option<LocalConfig>, ConfigLoadError> {
        (**self).load(directory)
    }
}

/// Loads `pipeline.toml` (or a configured file name) from disk.
#[derive(Debug, Clone)]
pub struct FsConfigLoader {
    file_name: String,
}

impl FsConfigLoader {
    pub fn new() -> Self {
        Self {
            file_name: CONFIG_FILE.to_string(),
        }
    }

    pub fn with_file_name(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn config_path(&self, directory: &Path) -> PathBuf {
        directory.join(&self.file_name)
    }
}

impl Default for FsConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FsConfigLoader {
    #[instrument(skip(self))]
    fn load(&self, directory: &Path) -> Result<Option<LocalConfig>, ConfigLoadError> {
        let path = self.config_path(directory);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no config at {}", path.display());
                return Ok(None);
            }
            Err(source) => return Err(ConfigLoadError::Read { path, source }),
        };

        let cfg = LocalConfig::from_toml_str(&text)
            .map_err(|source| ConfigLoadError::Parse {
                path: path.clone(),
                source,
            })?;
        debug!(
            "loaded {} with {} task(s), extends={:?}",
            path.display(),
            cfg.pipeline.len(),
            cfg.extends
        );
        Ok(Some(cfg))
    }
}
