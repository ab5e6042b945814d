//! SQLite store implementation.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use gunita_core::storage::{
    AttendeeRow, AttendeeStore, NewAttendee, Projection, Result, StoreError,
};

use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-backed attendee table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a file-based database and ensures the schema.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a store backed by an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[allow(dead_code)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl AttendeeStore for SqliteStore {
    async fn select(&self, projection: Projection) -> Result<Vec<AttendeeRow>> {
        self.conn
            .call(move |conn| {
                let rows = match projection {
                    Projection::Names => {
                        let mut stmt = conn.prepare(schema::SELECT_NAMES).map_err(wrap_err)?;
                        let mapped = stmt
                            .query_map([], |row| {
                                Ok(AttendeeRow {
                                    name: row.get(0)?,
                                    email: None,
                                })
                            })
                            .map_err(wrap_err)?;
                        mapped.collect::<rusqlite::Result<Vec<_>>>()
                    }
                    Projection::NamesAndEmails => {
                        let mut stmt = conn
                            .prepare(schema::SELECT_NAMES_AND_EMAILS)
                            .map_err(wrap_err)?;
                        let mapped = stmt
                            .query_map([], |row| {
                                Ok(AttendeeRow {
                                    name: row.get(0)?,
                                    email: row.get(1)?,
                                })
                            })
                            .map_err(wrap_err)?;
                        mapped.collect::<rusqlite::Result<Vec<_>>>()
                    }
                };
                rows.map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn insert(&self, attendee: &NewAttendee) -> Result<()> {
        let name = attendee.name.clone();
        let email = attendee.email.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_ATTENDEE, rusqlite::params![name, email])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
