// Database module

pub mod migrations;
pub mod schema;

use rusqlite::Connection;
use std::path::Path;
use anyhow::Result;

use crate::constants::{CLIPBOY_FOLDER, DB_FILENAME};

/// Open or create a database at the given path
pub fn open_db(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;

    // Enable foreign keys (must be done per connection)
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    // Enable WAL mode for better concurrency
    conn.execute_batch("PRAGMA journal_mode = WAL;")?;

    // Run migrations
    migrations::run_migrations(&conn)?;

    Ok(conn)
}

/// Get the database path for a library root
pub fn get_db_path(library_root: &Path) -> std::path::PathBuf {
    library_root.join(CLIPBOY_FOLDER).join(DB_FILENAME)
}

/// Initialize the library folder structure
pub fn init_library_folders(library_root: &Path) -> Result<()> {
    std::fs::create_dir_all(library_root.join(CLIPBOY_FOLDER))?;
    Ok(())
}
