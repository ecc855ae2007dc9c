use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use catalog_core::{PaginationMode, DEFAULT_PAGE_SIZE};
use catalog_engine::{FetchSettings, DEFAULT_BASE_URL};
use catalog_logging::catalog_info;
use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_FILENAME: &str = "catalog.ron";

#[derive(Parser, Debug)]
#[command(name = "catalog", about = "Browse a remote product catalog from the terminal")]
pub struct Cli {
    /// RON config file. A missing file means built-in defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,
    /// Root of the product service, e.g. https://dummyjson.com
    #[arg(long)]
    pub base_url: Option<String>,
    #[arg(long)]
    pub page_size: Option<u32>,
    /// Fetch whole categories once and paginate locally.
    #[arg(long)]
    pub client_pagination: bool,
    /// Initial address, e.g. "/dash?category=laptops&search=pro".
    #[arg(default_value = "")]
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaginationSetting {
    #[default]
    Server,
    Client,
}

impl From<PaginationSetting> for PaginationMode {
    fn from(setting: PaginationSetting) -> Self {
        match setting {
            PaginationSetting::Server => PaginationMode::Server,
            PaginationSetting::Client => PaginationMode::Client,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub page_size: u32,
    pub pagination: PaginationSetting,
    pub connect_timeout_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
    pub max_bytes: u64,
    pub log: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            pagination: PaginationSetting::Server,
            connect_timeout_ms: fetch.connect_timeout.map(|d| d.as_millis() as u64),
            request_timeout_ms: fetch.request_timeout.map(|d| d.as_millis() as u64),
            max_bytes: fetch.max_bytes,
            log: LogDestination::File,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("page_size must be at least 1")]
    InvalidPageSize,
}

/// Reads `path` as RON. A missing file yields [`AppConfig::default`].
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config = ron::from_str::<AppConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    catalog_info!("Loaded config from {:?}", path);
    Ok(config)
}

impl AppConfig {
    /// Command-line flags win over file values.
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(base_url) = &cli.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(page_size) = cli.page_size {
            self.page_size = page_size;
        }
        if cli.client_pagination {
            self.pagination = PaginationSetting::Client;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(())
    }

    pub fn pagination_mode(&self) -> PaginationMode {
        self.pagination.into()
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.base_url.clone(),
            connect_timeout: self.connect_timeout_ms.map(Duration::from_millis),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
            max_bytes: self.max_bytes,
        }
    }
}
