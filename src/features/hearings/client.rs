use crate::app_lib::{
    AppError,
    api::{ApiEnvelope, get_json, post_json},
};
use crate::features::hearings::types::{Hearing, HearingDraft};

/// Fetches all scheduled hearings.
pub async fn list_hearings() -> Result<Vec<Hearing>, AppError> {
    get_json::<ApiEnvelope<Vec<Hearing>>>("/hearings")
        .await?
        .into_data()
}

/// Schedules a hearing for a report.
pub async fn create_hearing(draft: &HearingDraft) -> Result<Hearing, AppError> {
    post_json::<_, ApiEnvelope<Hearing>>("/hearings", draft)
        .await?
        .into_data()
}
