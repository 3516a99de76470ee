//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState,
    transaction::core::{TransactionData, insert_transaction},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for creating a new transaction.
///
/// Responds with a plain text confirmation. The ID assigned to the new row is
/// not included in the response.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Json(data): Json<TransactionData>,
) -> Response {
    let new_transaction = match data.require_fields() {
        Ok(new_transaction) => new_transaction,
        Err(error) => return error.into_response(),
    };

    let connection = state.db_connection.lock().unwrap();

    match insert_transaction(&new_transaction, &connection) {
        Ok(_) => (StatusCode::OK, "Transaction Successfully Added").into_response(),
        Err(error) => {
            tracing::error!("Could not create transaction: {error}");
            error.into_response()
        }
    }
}
