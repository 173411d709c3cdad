use std::path::Path;

use parking_lot::Mutex;
use rusqlite::{params, Connection};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::item::Item;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// SQLite-backed item table. A single connection is shared behind a mutex.
pub struct ItemStore {
    conn: Mutex<Connection>,
}

impl ItemStore {
    /// Opens (or creates) the database file. A newly created file gets one example item.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();
        let is_new = !db_path.exists();
        let store = Self::from_connection(Connection::open(db_path)?)?;

        if is_new {
            store.insert("Example Item", "This is an example description")?;
            info!(path = %db_path.display(), "database created");
        } else {
            info!(path = %db_path.display(), "database opened");
        }
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS items (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    pub fn list(&self) -> Result<Vec<Item>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare("SELECT id, name, description FROM items ORDER BY rowid")?;
        let items = stmt
            .query_map([], |row| {
                Ok(Item {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    pub fn insert(&self, name: &str, description: &str) -> Result<Item> {
        let item = Item {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
        };
        self.conn.lock().execute(
            "INSERT INTO items (id, name, description) VALUES (?1, ?2, ?3)",
            params![item.id, item.name, item.description],
        )?;
        Ok(item)
    }

    /// Returns `None` when no row has this id.
    pub fn update(&self, id: &str, name: &str, description: &str) -> Result<Option<Item>> {
        let changed = self.conn.lock().execute(
            "UPDATE items SET name = ?1, description = ?2 WHERE id = ?3",
            params![name, description, id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Ok(Some(Item {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }))
    }

    /// Returns whether a row was removed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let removed = self.conn.lock().execute("DELETE FROM items WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }
}
