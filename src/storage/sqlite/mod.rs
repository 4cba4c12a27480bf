#[cfg(test)]
#[path = "sqlite_test.rs"]
mod tests;

pub(crate) mod migration;

use async_trait::async_trait;
use eyre::{Context, Result};
use tokio_rusqlite::{Connection, OpenFlags, OptionalExtension, params};

use super::Storage;
use migration::MIGRATION;

/// Durable key-value table backed by a single SQLite file.
pub struct Sqlite {
    conn: Connection,
}

impl Sqlite {
    pub async fn new(path: Option<&str>) -> Result<Self> {
        let conn = match path {
            Some(path) => Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
            )
            .await
            .wrap_err(format!("opening database path: {}", path))?,
            None => Connection::open_in_memory()
                .await
                .wrap_err("opening in-memory database")?,
        };

        conn.call(|conn| Ok(conn.execute_batch(MIGRATION)?))
            .await
            .wrap_err("creating kv_store table")?;
        Ok(Self { conn })
    }
}

const SELECT_VALUE: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE: &str = "DELETE FROM kv_store WHERE key = ?1";

/// Every value is written by one statement, so a value is either the old or
/// the new text, never a mix.
#[async_trait]
impl Storage for Sqlite {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let key = key.to_string();
        let value = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare_cached(SELECT_VALUE)?;
                Ok(stmt.query_row([&key], |row| row.get(0)).optional()?)
            })
            .await
            .wrap_err("reading value")?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let (key, value) = (key.to_string(), value.to_string());
        let updated_at = chrono::Utc::now().timestamp_millis();
        self.conn
            .call(move |conn| {
                conn.prepare_cached(UPSERT_VALUE)?
                    .execute(params![key, value, updated_at])?;
                Ok(())
            })
            .await
            .wrap_err("writing value")
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.conn
            .call(move |conn| {
                conn.prepare_cached(DELETE_VALUE)?.execute([&key])?;
                Ok(())
            })
            .await
            .wrap_err("removing value")
    }
}
