//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Storage directory used when neither the CLI nor the config file sets one.
pub const DEFAULT_DIR: &str = "tasks";

/// Bind address used when neither the CLI nor the config file sets one.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port used when neither the CLI nor the config file sets one.
pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Task storage directory
    pub dir: Option<PathBuf>,

    /// Address to bind
    pub host: Option<String>,

    /// Port to listen on
    pub port: Option<u16>,
}

impl Config {
    /// Load configuration from `path`, or from the default location when `None`.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/taskdir/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("taskdir")
            .join("config.toml")
    }

    /// Resolve the storage directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. `./tasks`
    pub fn tasks_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR))
    }

    /// Resolve the `host:port` bind address, CLI values first.
    pub fn bind_addr(&self, cli_host: Option<&str>, cli_port: Option<u16>) -> String {
        let host = cli_host
            .or(self.host.as_deref())
            .unwrap_or(DEFAULT_HOST);
        let port = cli_port.or(self.port).unwrap_or(DEFAULT_PORT);
        if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]:{port}")
        } else {
            format!("{host}:{port}")
        }
    }
}
