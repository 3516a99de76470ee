//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::{DatabaseId, TransactionId},
};

// ============================================================================
// MODELS
// ============================================================================

/// An income or expense, i.e. an event where money was either earned or spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: DatabaseId,
    /// Whether money was earned or spent.
    ///
    /// The summary recognises `"income"` and `"expense"`; any other non-empty
    /// string is stored as-is but ignored by the summary.
    #[serde(rename = "type")]
    pub kind: String,
    /// The category the transaction belongs to, as free text.
    pub category: String,
    /// The amount of money earned or spent in this transaction.
    pub amount: f64,
    /// When the transaction happened.
    ///
    /// Stored as free text; the service does not parse or validate dates.
    pub date: String,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
}

/// The JSON body for creating or updating a transaction.
///
/// Every field is optional at the parsing stage. The create endpoint applies
/// the presence rule via [TransactionData::require_fields]; the update
/// endpoint binds the fields as given, so absent fields become NULL.
#[derive(Debug, Deserialize)]
pub struct TransactionData {
    /// Whether money was earned or spent.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// The category the transaction belongs to.
    pub category: Option<String>,
    /// The amount of money earned or spent.
    pub amount: Option<f64>,
    /// When the transaction happened.
    pub date: Option<String>,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
}

impl TransactionData {
    /// Check that the required fields are present and convert into a
    /// [NewTransaction].
    ///
    /// A required field counts as missing when it is absent, an empty string,
    /// or a zero amount.
    ///
    /// # Errors
    /// Returns an [Error::MissingRequiredFields] if `type`, `category`,
    /// `amount` or `date` is missing.
    pub fn require_fields(self) -> Result<NewTransaction, Error> {
        let kind = self.kind.filter(|kind| !kind.is_empty());
        let category = self.category.filter(|category| !category.is_empty());
        let amount = self.amount.filter(|&amount| amount != 0.0);
        let date = self.date.filter(|date| !date.is_empty());

        match (kind, category, amount, date) {
            (Some(kind), Some(category), Some(amount), Some(date)) => Ok(NewTransaction {
                kind,
                category,
                amount,
                date,
                description: self.description,
            }),
            _ => Err(Error::MissingRequiredFields),
        }
    }
}

/// A transaction that has passed the presence checks but has not been given
/// an ID by the database yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// Whether money was earned or spent.
    pub kind: String,
    /// The category the transaction belongs to.
    pub category: String,
    /// The amount of money earned or spent.
    pub amount: f64,
    /// When the transaction happened.
    pub date: String,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// Returns the ID assigned to the new row.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn insert_transaction(
    new_transaction: &NewTransaction,
    connection: &Connection,
) -> Result<TransactionId, Error> {
    connection.execute(
        "INSERT INTO transactions (type, category, amount, date, description)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        (
            &new_transaction.kind,
            &new_transaction.category,
            new_transaction.amount,
            &new_transaction.date,
            &new_transaction.description,
        ),
    )?;

    Ok(connection.last_insert_rowid())
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, type, category, amount, date, description FROM transactions WHERE id = :id",
        )?
        .query_one(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve every transaction in the database.
///
/// Rows come back in the order the storage engine keeps them; callers must
/// not rely on any particular ordering.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare("SELECT id, type, category, amount, date, description FROM transactions")?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
        .collect()
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL,
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a [Transaction].
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let kind = row.get(1)?;
    let category = row.get(2)?;
    let amount = row.get(3)?;
    let date = row.get(4)?;
    let description = row.get(5)?;

    Ok(Transaction {
        id,
        kind,
        category,
        amount,
        date,
        description,
    })
}

// ============================================================================
// TESTS
// ============================================================================
