use std::path::PathBuf;

use anyhow::Context as _;
use serde::Deserialize;

/// Server configuration, loaded from an optional YAML file plus
/// environment overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds, e.g. "127.0.0.1:4221".
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Root directory served by the /files endpoints.
    pub root_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            files: FilesConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:4221".to_string(),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            root_dir: std::env::temp_dir(),
        }
    }
}

impl Config {
    /// Loads configuration.
    ///
    /// Reads the YAML file named by the `CONFIG` environment variable when
    /// set, otherwise starts from defaults. The `LISTEN` and `FILES_DIR`
    /// environment variables override the corresponding fields either way.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {path}"))?;
                serde_yaml::from_str(&raw)
                    .with_context(|| format!("parsing config file {path}"))?
            }
            Err(_) => Config::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(dir) = std::env::var("FILES_DIR") {
            cfg.files.root_dir = PathBuf::from(dir);
        }

        Ok(cfg)
    }
}
