//! Database layer for the clinic EHR demo.

mod schema;
mod patients;
mod visits;
mod medications;
mod allergies;

pub use schema::*;

use chrono::NaiveDate;
use rusqlite::Connection;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Malformed stored date: {0}")]
    MalformedDate(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database at path, creating if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Create in-memory database (for testing).
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Initialize schema.
    fn initialize(&self) -> DbResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Get raw connection (for advanced queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

/// Convert a stored ISO date column into a `NaiveDate`.
///
/// Written dates always come from `NaiveDate::to_string`, so a parse
/// failure here means the stored row is corrupt.
pub(crate) fn stored_date(value: Option<String>) -> DbResult<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(s) => NaiveDate::from_str(&s)
            .map(Some)
            .map_err(|_| DbError::MalformedDate(s)),
    }
}
