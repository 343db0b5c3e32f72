//! Client helpers for the officer directory.

use crate::app_lib::{
    AppError,
    api::{ApiEnvelope, get_json},
};
use crate::features::officers::types::Officer;

/// Fetches the officer roster.
pub async fn list_officers() -> Result<Vec<Officer>, AppError> {
    get_json::<ApiEnvelope<Vec<Officer>>>("/officers")
        .await?
        .into_data()
}

/// Fetches one officer by id after basic input validation.
pub async fn get_officer(id: &str) -> Result<Officer, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Officer id is required.".to_string()));
    }

    get_json::<ApiEnvelope<Officer>>(&format!("/officers/{trimmed}"))
        .await?
        .into_data()
}
