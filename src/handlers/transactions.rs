//! Transaction HTTP handlers.
//!
//! This module implements the Transaction Service's API endpoints:
//! - POST /transactions - Create a transaction and notify downstream
//! - GET /transactions/{id} - Get a transaction, cache first

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::transaction::{CreateTransactionRequest, Transaction},
    services::transaction_service::TransactionService,
};

/// Create a transaction.
///
/// # Request Body
///
/// ```json
/// {
///   "amount": 100.50,
///   "user_id": "u1",
///   "description": "coffee"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: The stored transaction
/// - **Error (400/415/422)**: Body missing or malformed
/// - **Error (500)**: Database or cache failure
///
/// The Notification Service webhook runs in the background; its outcome
/// never changes this response.
pub async fn create_transaction(
    State(service): State<TransactionService>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    let transaction = service.create_transaction(request).await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Get a transaction by id.
///
/// # Response
///
/// - **Success (200 OK)**: The transaction, from cache or database
/// - **Error (404)**: No transaction with this id
pub async fn get_transaction(
    State(service): State<TransactionService>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Transaction>, AppError> {
    let transaction = service.get_transaction(&transaction_id).await?;
    Ok(Json(transaction))
}
