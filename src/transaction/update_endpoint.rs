//! Defines the endpoint for overwriting an existing transaction.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{AppState, Error, database_id::TransactionId, transaction::core::TransactionData};

/// The state needed to update a transaction.
#[derive(Debug, Clone)]
pub struct UpdateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for UpdateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for overwriting all fields of a transaction.
///
/// The fields are bound exactly as the client sent them, so a body that omits
/// a required field fails the NOT NULL constraint when the ID matches a row.
/// A zero-row update still reports success; the row count is not surfaced to
/// the client.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn update_transaction_endpoint(
    State(state): State<UpdateTransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Json(data): Json<TransactionData>,
) -> Response {
    let connection = state.db_connection.lock().unwrap();

    match update_transaction(transaction_id, &data, &connection) {
        Ok(_) => (StatusCode::OK, "Transaction Updated Successfully").into_response(),
        Err(error) => {
            tracing::error!("Could not update transaction {transaction_id}: {error}");
            error.into_response()
        }
    }
}

type RowsAffected = usize;

fn update_transaction(
    id: TransactionId,
    data: &TransactionData,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE transactions
             SET type = ?1, category = ?2, amount = ?3, date = ?4, description = ?5
             WHERE id = ?6",
            (
                &data.kind,
                &data.category,
                data.amount,
                &data.date,
                &data.description,
                id,
            ),
        )
        .map_err(Error::from)
}
