use super::{delete, get_json, post_json, put_json, ApiError};
use crate::models::{Budget, BudgetInput};

pub async fn get_budgets() -> Result<Vec<Budget>, ApiError> {
    get_json("/budget").await
}

pub async fn create_budget(input: &BudgetInput) -> Result<Budget, ApiError> {
    post_json("/budget", input).await
}

pub async fn update_budget(id: &str, input: &BudgetInput) -> Result<Budget, ApiError> {
    put_json(&format!("/budget/{}", id), input).await
}

pub async fn delete_budget(id: &str) -> Result<(), ApiError> {
    delete(&format!("/budget/{}", id)).await
}
