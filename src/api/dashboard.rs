use super::{get_json, ApiError};
use crate::models::DashboardStats;

pub async fn get_dashboard_stats() -> Result<DashboardStats, ApiError> {
    get_json("/dashboard").await
}
