//! Defines the endpoint for listing every recorded transaction.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{AppState, transaction::core::get_all_transactions};

/// The state needed to list transactions.
#[derive(Debug, Clone)]
pub struct ListTransactionsState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for listing every recorded transaction as a JSON array.
///
/// The array order follows the storage engine and is not guaranteed.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_transactions_endpoint(State(state): State<ListTransactionsState>) -> Response {
    let connection = state.db_connection.lock().unwrap();

    match get_all_transactions(&connection) {
        Ok(transactions) => (StatusCode::OK, Json(transactions)).into_response(),
        Err(error) => {
            tracing::error!("Could not list transactions: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{body::to_bytes, extract::State, http::StatusCode};
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        initialize_db,
        transaction::{
            core::{NewTransaction, insert_transaction},
            list_endpoint::{ListTransactionsState, get_transactions_endpoint},
        },
    };

    fn get_test_state() -> ListTransactionsState {
        let connection =
            Connection::open_in_memory().expect("could not create in-memory SQLite database");
        initialize_db(&connection).expect("could not initialize test DB");

        ListTransactionsState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    async fn response_json(state: ListTransactionsState) -> (StatusCode, Value) {
        let response = get_transactions_endpoint(State(state)).await;
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn returns_empty_array_for_empty_database() {
        let state = get_test_state();

        let (status, body) = response_json(state).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn returns_every_transaction_with_type_field() {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            insert_transaction(
                &NewTransaction {
                    kind: "income".to_owned(),
                    category: "Salary".to_owned(),
                    amount: 1000.0,
                    date: "2024-01-01".to_owned(),
                    description: None,
                },
                &connection,
            )
            .unwrap();
            insert_transaction(
                &NewTransaction {
                    kind: "expense".to_owned(),
                    category: "Groceries".to_owned(),
                    amount: 42.5,
                    date: "2024-01-02".to_owned(),
                    description: Some("Weekly shop".to_owned()),
                },
                &connection,
            )
            .unwrap();
        }

        let (status, body) = response_json(state).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {
                    "id": 1,
                    "type": "income",
                    "category": "Salary",
                    "amount": 1000.0,
                    "date": "2024-01-01",
                    "description": null
                },
                {
                    "id": 2,
                    "type": "expense",
                    "category": "Groceries",
                    "amount": 42.5,
                    "date": "2024-01-02",
                    "description": "Weekly shop"
                }
            ])
        );
    }
}
