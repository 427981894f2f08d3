//! Client configuration: defaults, TOML file, then environment.
//!
//! File discovery checks two locations in precedence order:
//! 1. `./.ticktick-mcp.toml` (project-local)
//! 2. `~/.config/ticktick-mcp.toml` (user-global)
//!
//! Environment variables (`TICKTICK_ACCESS_TOKEN`, `TICKTICK_BASE_URL`,
//! `TICKTICK_TIMEOUT_MS`) override file values. A `.env` file is loaded into
//! the process environment before resolution.

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};

const CONFIG_FILENAME: &str = ".ticktick-mcp.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "ticktick-mcp.toml";

pub const ENV_ACCESS_TOKEN: &str = "TICKTICK_ACCESS_TOKEN";
pub const ENV_BASE_URL: &str = "TICKTICK_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "TICKTICK_TIMEOUT_MS";

/// Raw contents of a config file. Every key is optional.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    pub access_token: Option<String>,
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl std::fmt::Debug for ConfigFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigFile")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl ConfigFile {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> ClientResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            ClientError::config_error(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Load the first discovered config file, if any.
    ///
    /// A discovered file that cannot be read or parsed is skipped with a warning.
    pub fn discover() -> Option<Self> {
        let path = find_config_file()?;
        match Self::load(&path) {
            Ok(file) => {
                debug!(?path, "Loaded config file");
                Some(file)
            }
            Err(e) => {
                warn!(?path, error = %e, "Ignoring unreadable config file");
                None
            }
        }
    }
}

/// Resolved settings for building a [`crate::TickTickClient`].
#[derive(Debug)]
pub struct ClientConfig {
    pub access_token: SecretString,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl ClientConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.ticktick.com/open/v1";
    pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: SecretString::from(access_token.into()),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Resolve from the process environment and an optional explicit file.
    ///
    /// Loads `env_file` (or `./.env`) first; a missing dotenv file is not an
    /// error. Without an explicit `config_path`, the default locations are
    /// searched.
    pub fn load(config_path: Option<&Path>, env_file: Option<&Path>) -> ClientResult<Self> {
        load_dotenv(env_file);

        let file = match config_path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::discover(),
        };

        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge defaults, file values and environment lookups.
    pub fn resolve(
        file: Option<ConfigFile>,
        env: impl Fn(&str) -> Option<String>,
    ) -> ClientResult<Self> {
        let file = file.unwrap_or_default();
        let lookup = |key: &str| present(env(key));

        let access_token = lookup(ENV_ACCESS_TOKEN)
            .or_else(|| present(file.access_token))
            .map(SecretString::from)
            .ok_or_else(|| {
                ClientError::config_error(format!(
                    "No access token found. Set {ENV_ACCESS_TOKEN} in the environment, \
                     a .env file, or the access-token key of {CONFIG_FILENAME}"
                ))
            })?;

        let base_url = lookup(ENV_BASE_URL)
            .or_else(|| present(file.base_url))
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        let timeout_ms = match lookup(ENV_TIMEOUT_MS) {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ClientError::config_error(format!(
                    "{ENV_TIMEOUT_MS} must be a number of milliseconds, got '{raw}'"
                ))
            })?,
            None => file.timeout_ms.unwrap_or(Self::DEFAULT_TIMEOUT_MS),
        };

        Ok(Self {
            access_token,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms,
        })
    }
}

/// Blank values, as left by an unfilled `.env` template, count as unset.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn load_dotenv(env_file: Option<&Path>) {
    let result = match env_file {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };
    match result {
        Ok(path) => debug!(?path, "Loaded environment file"),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!(error = %e, "Failed to load environment file"),
    }
}

/// Search for config file in precedence order.
fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    if let Some(home) = home_dir() {
        let global = home.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME);
        if global.is_file() {
            return Some(global);
        }
    }

    None
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
