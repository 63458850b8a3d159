use crate::error::{Result, WakeyError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_EXT: &str = ".md";
const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

pub const ENV_CONFIG: &str = "WAKEY_CONFIG";
pub const ENV_DATA_DIR: &str = "WAKEY_DATA_DIR";
pub const ENV_HOST: &str = "WAKEY_HOST";
pub const ENV_PORT: &str = "WAKEY_PORT";
pub const ENV_FILE_EXT: &str = "WAKEY_FILE_EXT";
pub const ENV_TEMPLATES_DIR: &str = "WAKEY_TEMPLATES_DIR";

/// Settings for a wakey instance, optionally stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WakeyConfig {
    /// Directory holding one file per entry
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// File extension of entry files (e.g. ".md")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory whose templates replace the built-in pages
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for WakeyConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            file_ext: default_file_ext(),
            host: default_host(),
            port: default_port(),
            templates_dir: None,
        }
    }
}

impl WakeyConfig {
    /// Load config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            WakeyError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let mut config: WakeyConfig =
            serde_json::from_str(&content).map_err(WakeyError::Serialization)?;
        let ext = config.file_ext.clone();
        config.set_file_ext(&ext);
        Ok(config)
    }

    /// Resolve the config file and environment on top of the defaults.
    ///
    /// An explicit path (argument or `WAKEY_CONFIG`) must exist; the per-user file is
    /// only read when present.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(ENV_CONFIG).map(PathBuf::from);
        let mut config = match explicit.map(Path::to_path_buf).or(env_path) {
            Some(path) => Self::load(path)?,
            None => match user_config_path() {
                Some(path) if path.is_file() => Self::load(path)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Override fields from environment-style lookups.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| WakeyError::Config(format!("{} is not a port: {}", ENV_PORT, port)))?;
        }
        if let Some(ext) = lookup(ENV_FILE_EXT) {
            self.set_file_ext(&ext);
        }
        if let Some(dir) = lookup(ENV_TEMPLATES_DIR) {
            self.templates_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    /// Get the file extension (always starts with a dot)
    pub fn get_file_ext(&self) -> &str {
        &self.file_ext
    }

    /// Set the file extension (normalizes to start with a dot)
    pub fn set_file_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
    }

    /// The address the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `config.json` in the platform config directory, e.g. `~/.config/wakey/config.json`.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "wakey", "wakey").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
