use super::{delete, get_json, post_json, put_json, ApiError};
use crate::models::{Transaction, TransactionInput};

pub async fn get_transactions() -> Result<Vec<Transaction>, ApiError> {
    get_json("/transactions").await
}

pub async fn add_transaction(input: &TransactionInput) -> Result<Transaction, ApiError> {
    post_json("/transactions", input).await
}

pub async fn update_transaction(id: &str, input: &TransactionInput) -> Result<Transaction, ApiError> {
    put_json(&format!("/transactions/{}", id), input).await
}

pub async fn delete_transaction(id: &str) -> Result<(), ApiError> {
    delete(&format!("/transactions/{}", id)).await
}
