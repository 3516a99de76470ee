//! Defines the endpoint for the derived income and expense summary.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{AppState, Error};

/// The transaction type counted towards income.
const INCOME: &str = "income";
/// The transaction type counted towards expenses.
const EXPENSE: &str = "expense";

/// Aggregate figures derived from the recorded transactions.
///
/// The summary is computed on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of all income transaction amounts.
    pub total_income: f64,
    /// The sum of all expense transaction amounts.
    pub total_expenses: f64,
    /// Total income minus total expenses.
    pub balance: f64,
}

/// The state needed to compute the summary.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for the income and expense summary.
///
/// Transactions whose type is neither `"income"` nor `"expense"` are ignored.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_summary_endpoint(State(state): State<SummaryState>) -> Response {
    let connection = state.db_connection.lock().unwrap();

    match get_summary(&connection) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(error) => {
            tracing::error!("Could not compute summary: {error}");
            error.into_response()
        }
    }
}

/// Compute the summary of all recorded transactions.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_summary(connection: &Connection) -> Result<Summary, Error> {
    let total_income = sum_by_type(INCOME, connection)?;
    let total_expenses = sum_by_type(EXPENSE, connection)?;

    Ok(Summary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    })
}

/// Sum the amounts of all transactions matching `kind`.
///
/// Returns zero when no transactions match.
fn sum_by_type(kind: &str, connection: &Connection) -> Result<f64, Error> {
    let mut stmt =
        connection.prepare("SELECT COALESCE(SUM(amount), 0) FROM transactions WHERE type = :type")?;

    let total: f64 = stmt.query_row(&[(":type", kind)], |row| row.get(0))?;

    Ok(total)
}
