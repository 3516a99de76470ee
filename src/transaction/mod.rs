//! Transaction management for the record keeping service.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and database functions for storing, querying,
//!   and managing transactions
//! - Route handlers for the transaction JSON endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod get_endpoint;
mod list_endpoint;
mod update_endpoint;

pub use core::create_transaction_table;
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::get_transactions_endpoint;
pub use update_endpoint::update_transaction_endpoint;

#[cfg(test)]
pub use core::{NewTransaction, Transaction, insert_transaction};
