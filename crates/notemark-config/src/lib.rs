use notemark_engine::{ParseOptions, SiteLayout};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where the config file lives before tilde expansion.
const CONFIG_FILE: &str = "~/.config/notemark/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config file at {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Publishing settings kept between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site root; sources, styles and output directories hang off it.
    pub base_dir: PathBuf,
    #[serde(default)]
    pub parse: ParseOptions,
}

impl Config {
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            parse: ParseOptions::default(),
        }
    }

    /// Reads a config file; `Ok(None)` when there is no file at `path`.
    ///
    /// `base_dir` has `~` and environment variables expanded.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(expanded) = Self::expand_path(&config.base_dir) {
            config.base_dir = expanded;
        }
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Writes the config as TOML, creating the parent directory if needed.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let write_error = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(path, content).map_err(write_error)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(CONFIG_FILE).into_owned())
    }

    /// The directory layout derived from `base_dir`.
    pub fn layout(&self) -> SiteLayout {
        SiteLayout::from_base_dir(&self.base_dir)
    }

    /// Expands `~` and `$VARS`; `None` if a variable is unset.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let raw = path.to_string_lossy();
        let expanded = shellexpand::full(&raw).ok()?;
        Some(PathBuf::from(expanded.into_owned()))
    }
}
