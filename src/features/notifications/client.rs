use crate::app_lib::{
    AppError,
    api::{ApiEnvelope, get_json, patch_json},
};
use crate::features::notifications::types::Notification;

/// Fetches the current user's notifications.
pub async fn list_notifications() -> Result<Vec<Notification>, AppError> {
    get_json::<ApiEnvelope<Vec<Notification>>>("/notifications")
        .await?
        .into_data()
}

/// Marks one notification as read.
pub async fn mark_read(id: &str) -> Result<(), AppError> {
    patch_json::<ApiEnvelope<serde_json::Value>>(&format!("/notifications/{id}/read"))
        .await?
        .ok()
}
