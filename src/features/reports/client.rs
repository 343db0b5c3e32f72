//! Client helpers for report endpoints. These functions keep endpoint paths
//! centralized and assume the backend enforces authorization.

use crate::app_lib::{
    AppError,
    api::{ApiEnvelope, delete_json, get_json, post_json, put_json},
};
use crate::features::reports::types::{Report, ReportDraft};

/// Fetches all reports visible to the current user.
pub async fn list_reports() -> Result<Vec<Report>, AppError> {
    get_json::<ApiEnvelope<Vec<Report>>>("/reports")
        .await?
        .into_data()
}

/// Fetches one report by id after basic input validation.
pub async fn get_report(id: &str) -> Result<Report, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Report id is required.".to_string()));
    }

    get_json::<ApiEnvelope<Report>>(&format!("/reports/{trimmed}"))
        .await?
        .into_data()
}

/// Files a new report.
pub async fn create_report(draft: &ReportDraft) -> Result<Report, AppError> {
    post_json::<_, ApiEnvelope<Report>>("/reports", draft)
        .await?
        .into_data()
}

/// Replaces a report's contents.
pub async fn update_report(id: &str, draft: &ReportDraft) -> Result<Report, AppError> {
    put_json::<_, ApiEnvelope<Report>>(&format!("/reports/{id}"), draft)
        .await?
        .into_data()
}

/// Deletes a report by id.
pub async fn delete_report(id: &str) -> Result<(), AppError> {
    delete_json::<ApiEnvelope<serde_json::Value>>(&format!("/reports/{id}"))
        .await?
        .ok()
}
