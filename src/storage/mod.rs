pub mod persistent;
pub mod sqlite;

use std::sync::Arc;

use crate::config::{StorageConfig, resolve_path, utils::init_parent_dir};
use async_trait::async_trait;
use eyre::{Context, Result};
use sqlite::Sqlite;

pub use persistent::PersistentStore;

/// Durable `key -> text` storage. Values are opaque to the storage, the
/// [`PersistentStore`] gives them shape.
#[async_trait]
pub trait Storage {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

pub type ArcStorage = Arc<dyn Storage + Send + Sync>;

pub async fn new_storage(config: &StorageConfig) -> Result<ArcStorage> {
    let storage = match config {
        StorageConfig::Sqlite(sqlite_config) => {
            let path = match sqlite_config.path() {
                Some(path) => {
                    let path = resolve_path(path)
                        .wrap_err(format!("resolving storage path {}", path))?;
                    init_parent_dir(&path)?;
                    Some(path)
                }
                None => None,
            };
            log::debug!("Opening sqlite storage at {:?}", path);
            Arc::new(Sqlite::new(path.as_deref()).await?)
        }
    };
    Ok(storage)
}
