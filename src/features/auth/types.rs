//! Request and response types for auth-related API calls. The backend is a
//! JS service, so every field crosses the wire in camelCase. These payloads
//! carry credentials and verification codes; never log them.

use crate::app_lib::session::UserAccount;
use serde::{Deserialize, Serialize};

pub use crate::app_lib::api::ApiEnvelope;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub captcha_token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub captcha_token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendCodeRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteProfileRequest {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_photo_uri: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// Payload carried by login and verify-email responses. The token is the
/// opaque bearer credential persisted into the session store.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserAccount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_uses_camel_case_for_the_captcha_flag() {
        let request = LoginRequest {
            username: "desk_officer".to_string(),
            password: "hunter2".to_string(),
            captcha_token: "slider-ok".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains("captchaToken"));
        assert!(!json.contains("captcha_token"));
    }

    #[test]
    fn envelope_parses_error_responses_without_data() {
        let body = r#"{"success":false,"message":"Invalid credentials"}"#;
        let envelope: ApiEnvelope<AuthPayload> =
            serde_json::from_str(body).expect("Failed to parse");

        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Invalid credentials"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn auth_payload_parses_token_and_user() {
        let body = r#"{"success":true,"data":{"token":"opaque","user":{"id":"u-1","username":"desk_officer","email":"desk@precinct.example"}}}"#;
        let envelope: ApiEnvelope<AuthPayload> =
            serde_json::from_str(body).expect("Failed to parse");

        let payload = envelope.data.expect("payload present");
        assert_eq!(payload.token.as_deref(), Some("opaque"));
        assert_eq!(
            payload.user.map(|user| user.username),
            Some("desk_officer".to_string())
        );
    }
}
