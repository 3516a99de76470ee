//! Application router configuration for the transaction and summary routes.

use axum::{Router, routing::get};

use crate::{
    AppState, endpoints,
    summary::get_summary_endpoint,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transaction_endpoint,
        get_transactions_endpoint, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(update_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(endpoints::SUMMARY, get(get_summary_endpoint))
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        AppState, build_router,
        endpoints::{self, format_endpoint},
        summary::Summary,
        transaction::Transaction,
    };

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection).expect("Could not create app state.");
        let app = build_router(state);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn record_transaction_then_list_and_summarise() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .content_type("application/json")
            .json(&json!({
                "type": "income",
                "category": "Salary",
                "amount": 1000.0,
                "date": "2024-01-01"
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.text(), "Transaction Successfully Added");

        let response = server.get(endpoints::TRANSACTIONS).await;
        response.assert_status_ok();
        let transactions = response.json::<Vec<Transaction>>();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].kind, "income");
        assert_eq!(transactions[0].category, "Salary");
        assert_eq!(transactions[0].amount, 1000.0);

        let response = server.get(endpoints::SUMMARY).await;
        response.assert_status_ok();
        let summary = response.json::<Summary>();
        assert_eq!(
            summary,
            Summary {
                total_income: 1000.0,
                total_expenses: 0.0,
                balance: 1000.0
            }
        );
    }

    #[tokio::test]
    async fn rejects_incomplete_transaction() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .content_type("application/json")
            .json(&json!({
                "type": "income",
                "amount": 1000.0,
                "date": "2024-01-01"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.text(),
            "All fields (type, category, amount, date) are required."
        );
    }

    #[tokio::test]
    async fn rejects_non_numeric_amount() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .content_type("application/json")
            .json(&json!({
                "type": "income",
                "category": "Salary",
                "amount": "lots",
                "date": "2024-01-01"
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn rejects_non_numeric_transaction_id() {
        let server = get_test_server();

        let response = server.get("/transactions/abc").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn fetch_update_and_delete_round_trip() {
        let server = get_test_server();

        server
            .post(endpoints::TRANSACTIONS)
            .content_type("application/json")
            .json(&json!({
                "type": "expense",
                "category": "Groceries",
                "amount": 42.5,
                "date": "2024-02-14",
                "description": "Weekly shop"
            }))
            .await
            .assert_status_ok();

        let transaction_endpoint = format_endpoint(endpoints::TRANSACTION, 1);

        let response = server.get(&transaction_endpoint).await;
        response.assert_status_ok();
        let transaction = response.json::<Transaction>();
        assert_eq!(transaction.id, 1);
        assert_eq!(transaction.category, "Groceries");

        let response = server
            .put(&transaction_endpoint)
            .content_type("application/json")
            .json(&json!({
                "type": "expense",
                "category": "Groceries",
                "amount": 38.0,
                "date": "2024-02-14",
                "description": "Weekly shop, refunded item"
            }))
            .await;
        response.assert_status_ok();
        assert_eq!(response.text(), "Transaction Updated Successfully");

        let response = server.get(&transaction_endpoint).await;
        let transaction = response.json::<Transaction>();
        assert_eq!(transaction.amount, 38.0);

        let response = server.delete(&transaction_endpoint).await;
        response.assert_status_ok();
        assert_eq!(response.text(), "Transaction Deleted Successfully");

        let response = server.get(&transaction_endpoint).await;
        response.assert_status_not_found();
        assert_eq!(response.text(), "Transaction Not Found");
    }

    #[tokio::test]
    async fn summary_reflects_mixed_transactions() {
        let server = get_test_server();

        for (kind, amount) in [("income", 100.0), ("expense", 25.0), ("expense", 15.0)] {
            server
                .post(endpoints::TRANSACTIONS)
                .content_type("application/json")
                .json(&json!({
                    "type": kind,
                    "category": "Test",
                    "amount": amount,
                    "date": "2024-01-01"
                }))
                .await
                .assert_status_ok();
        }

        let response = server.get(endpoints::SUMMARY).await;
        response.assert_status_ok();
        let summary = response.json::<Summary>();
        assert_eq!(
            summary,
            Summary {
                total_income: 100.0,
                total_expenses: 40.0,
                balance: 60.0
            }
        );
    }
}
