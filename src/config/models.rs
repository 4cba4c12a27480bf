use std::sync::OnceLock;

use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};

use crate::models::TaskType;

use super::constants::{DEFAULT_ENDPOINT, LOG_FILE_PATH, STORAGE_PATH};

static CONFIG: OnceLock<Configuration> = OnceLock::new();

/// Every section may be left out of the file, missing keys take their
/// defaults.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Configuration {
    pub general: GeneralConfig,
    pub log: LogConfig,
    pub backend: BackendConfig,
    pub storage: StorageConfig,
}

impl Configuration {
    /// The configuration set by [`Configuration::init`], or the defaults
    /// before that.
    pub fn instance() -> &'static Configuration {
        CONFIG.get_or_init(Configuration::default)
    }

    pub fn init(config: Configuration) -> Result<()> {
        CONFIG
            .set(config)
            .map_err(|_| eyre!("configuration is already set"))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct GeneralConfig {
    pub verbose: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Per-module overrides of `level`
    pub filters: Vec<LogFilter>,
    pub file: LogFile,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            filters: vec![],
            file: LogFile::default(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogFilter {
    pub module: String,
    pub level: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct LogFile {
    pub path: String,
    pub append: bool,
}

impl Default for LogFile {
    fn default() -> Self {
        Self {
            path: LOG_FILE_PATH.to_string(),
            append: false,
        }
    }
}

/// Where `POST /ai` goes and the optional fields sent along with each text.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct BackendConfig {
    pub endpoint: String,
    pub timeout_secs: Option<u16>,
    pub task_type: Option<TaskType>,
    pub context: Option<String>,
    pub temperature: Option<f32>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
            task_type: None,
            context: None,
            temperature: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum StorageConfig {
    #[serde(rename = "sqlite")]
    Sqlite(SqliteStorage),
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::Sqlite(SqliteStorage::default())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct SqliteStorage {
    /// `None` keeps everything in memory
    pub path: Option<String>,
}

impl Default for SqliteStorage {
    fn default() -> Self {
        Self {
            path: Some(STORAGE_PATH.to_string()),
        }
    }
}

impl SqliteStorage {
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}
