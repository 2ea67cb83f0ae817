use std::path::PathBuf;

use thiserror::Error;

/// A configuration file exists but could not be turned into a [`LocalConfig`].
///
/// [`LocalConfig`]: crate::config::LocalConfig
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse TOML config: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigLoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
