//! Client wrappers for the Blotter auth endpoints. These helpers centralize
//! endpoint paths and the token-persistence side effect, keeping session
//! writes out of route code.

use crate::app_lib::{
    AppError, post_json,
    session::{self, SessionRecord},
};
use crate::features::auth::types::{
    ApiEnvelope, AuthPayload, CompleteProfileRequest, ForgotPasswordRequest, LoginRequest,
    RegisterRequest, ResendCodeRequest, ResetPasswordRequest, VerifyEmailRequest,
};

/// Logs in and persists the returned session before handing the response to
/// the caller. Token and user land in storage as one record.
pub async fn login(request: &LoginRequest) -> Result<ApiEnvelope<AuthPayload>, AppError> {
    let response: ApiEnvelope<AuthPayload> = post_json("/auth/login", request).await?;
    persist_session(&response);
    Ok(response)
}

/// Registers a new account. No session is created until email verification.
pub async fn register(request: &RegisterRequest) -> Result<ApiEnvelope<AuthPayload>, AppError> {
    post_json("/auth/register", request).await
}

/// Verifies the emailed code and persists the session the backend issues.
pub async fn verify_email(request: &VerifyEmailRequest) -> Result<ApiEnvelope<AuthPayload>, AppError> {
    let response: ApiEnvelope<AuthPayload> = post_json("/auth/verify-email", request).await?;
    persist_session(&response);
    Ok(response)
}

/// Requests a fresh verification code.
pub async fn resend_code(request: &ResendCodeRequest) -> Result<ApiEnvelope<AuthPayload>, AppError> {
    post_json("/auth/resend-code", request).await
}

/// Fills in profile details after verification.
pub async fn complete_profile(
    request: &CompleteProfileRequest,
) -> Result<ApiEnvelope<AuthPayload>, AppError> {
    post_json("/auth/complete-profile", request).await
}

/// Starts password recovery for the given email.
pub async fn forgot_password(
    request: &ForgotPasswordRequest,
) -> Result<ApiEnvelope<AuthPayload>, AppError> {
    post_json("/auth/forgot-password", request).await
}

/// Completes password recovery with the emailed code.
pub async fn reset_password(
    request: &ResetPasswordRequest,
) -> Result<ApiEnvelope<AuthPayload>, AppError> {
    post_json("/auth/reset-password", request).await
}

/// Clears the persisted session. Purely local: the backend holds no
/// server-side session state for bearer tokens.
pub fn logout() {
    session::clear();
}

/// Persists token and user atomically when a successful response carries a
/// token. Responses without one leave storage untouched.
fn persist_session(response: &ApiEnvelope<AuthPayload>) {
    if !response.success {
        return;
    }
    let Some(payload) = &response.data else {
        return;
    };
    if let Some(token) = &payload.token {
        session::save(&SessionRecord::new(token.clone(), payload.user.clone()));
    }
}
