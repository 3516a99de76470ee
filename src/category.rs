//! Defines the `categories` table.
//!
//! The table is part of the stored schema but no endpoint reads or writes it
//! yet; it is created at start-up alongside the transaction table so existing
//! database files keep their shape.

use rusqlite::Connection;

/// Create the category table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                type TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}
