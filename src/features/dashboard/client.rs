use crate::app_lib::{
    AppError,
    api::{ApiEnvelope, get_json},
};
use crate::features::dashboard::types::DashboardStats;

/// Fetches the aggregate counters for the dashboard.
pub async fn fetch_stats() -> Result<DashboardStats, AppError> {
    get_json::<ApiEnvelope<DashboardStats>>("/dashboard/stats")
        .await?
        .into_data()
}
