//! HTTP helpers for the Blotter JSON API with consistent auth-header and
//! error handling. Feature clients use these helpers to avoid duplicating
//! request setup. Every request is a single attempt: no retry, no backoff.
//! The helpers read the bearer token from the persisted session but never
//! log it.

use super::errors::AppError;
use serde::{Deserialize, Serialize};

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Envelope every Blotter endpoint answers with.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the payload. A 2xx body claiming `success: false`, or one
    /// missing its data, violates the API contract and surfaces as a
    /// response error.
    pub fn into_data(self) -> Result<T, AppError> {
        if !self.success {
            return Err(AppError::Parse(
                self.message
                    .unwrap_or_else(|| "Request failed".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| AppError::Parse("Response missing data".to_string()))
    }

    /// Checks the success flag, discarding any payload.
    pub fn ok(self) -> Result<(), AppError> {
        if self.success {
            Ok(())
        } else {
            Err(AppError::Parse(
                self.message
                    .unwrap_or_else(|| "Request failed".to_string()),
            ))
        }
    }
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Extracts a user-facing message from an error response body.
///
/// The backend answers failures with `{"success": false, "message": "..."}`;
/// when the body is not that shape the trimmed raw body is used, truncated
/// so broken proxies cannot flood the UI.
pub fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            let trimmed = message.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(target_arch = "wasm32")]
mod fetch {
    use super::super::{config::AppConfig, errors::AppError, session};
    use super::{build_url_with_base, extract_error_message};
    use gloo_net::http::{Request, RequestBuilder, Response};
    use leptos::logging;
    use serde::{Serialize, de::DeserializeOwned};
    use serde_json::to_string;

    /// Fetches JSON from an API path, attaching the bearer token when present.
    pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
        let url = build_url(path);
        let response = with_auth(Request::get(&url))
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }

    /// Posts JSON and parses a JSON response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        post_json_with_headers(path, body, &[]).await
    }

    /// Posts JSON with caller-supplied extra headers and parses a JSON response.
    pub async fn post_json_with_headers<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
        headers: &[(String, String)],
    ) -> Result<T, AppError> {
        send_json(Request::post(&build_url(path)), body, headers).await
    }

    /// Sends a JSON `PUT` and parses a JSON response.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        send_json(Request::put(&build_url(path)), body, &[]).await
    }

    /// Sends a bodyless `PATCH` and parses a JSON response.
    pub async fn patch_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
        let url = build_url(path);
        let response = with_auth(Request::patch(&url))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }

    /// Sends a `DELETE` and parses a JSON response.
    pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
        let url = build_url(path);
        let response = with_auth(Request::delete(&url))
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }

    /// Posts a multipart form, attaching the bearer token when present.
    ///
    /// The content type is left unset so the browser can pick the multipart
    /// boundary. Failures raise through the same path as JSON requests.
    pub async fn post_multipart<T: DeserializeOwned>(
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, AppError> {
        let url = build_url(path);
        let response = with_auth(Request::post(&url))
            .body(form)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }

    /// Builds a URL from the configured API base URL and the provided path.
    fn build_url(path: &str) -> String {
        let config = AppConfig::load();
        build_url_with_base(&config.api_base_url, path)
    }

    /// Injects the `Authorization: Bearer` header when a session token exists.
    fn with_auth(builder: RequestBuilder) -> RequestBuilder {
        match session::token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        builder: RequestBuilder,
        body: &B,
        headers: &[(String, String)],
    ) -> Result<T, AppError> {
        let payload = to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

        let mut builder = with_auth(builder).header("Content-Type", "application/json");
        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }

    /// Maps network errors into user-facing `AppError` variants.
    fn map_request_error(err: gloo_net::Error) -> AppError {
        let error = AppError::Network(format!("Unable to reach the server: {err}"));
        logging::error!("API error: {error}");
        error
    }

    /// Parses JSON responses and surfaces HTTP errors with the server message.
    async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let error = AppError::Http {
                status,
                message: extract_error_message(&body),
            };
            logging::error!("API error: {error}");
            Err(error)
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use fetch::{
    delete_json, get_json, patch_json, post_json, post_json_with_headers, post_multipart, put_json,
};

#[cfg(test)]
mod tests {
    use super::super::errors::AppError;
    use super::{ApiEnvelope, build_url_with_base, extract_error_message};

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://api.blotter.example/api", "/reports"),
            "https://api.blotter.example/api/reports"
        );
    }

    #[test]
    fn build_url_normalizes_slashes() {
        assert_eq!(
            build_url_with_base("https://api.blotter.example/api/", "reports/7"),
            "https://api.blotter.example/api/reports/7"
        );
        assert_eq!(
            build_url_with_base(" https://api.blotter.example ", "/reports"),
            "https://api.blotter.example/reports"
        );
    }

    #[test]
    fn build_url_with_empty_base_keeps_path() {
        assert_eq!(build_url_with_base("", "/reports"), "/reports");
    }

    #[test]
    fn extract_error_message_prefers_server_message() {
        let body = r#"{"success":false,"message":"Not found"}"#;
        assert_eq!(extract_error_message(body), "Not found");
    }

    #[test]
    fn extract_error_message_falls_back_to_raw_body() {
        assert_eq!(extract_error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn extract_error_message_handles_empty_and_blank_message() {
        assert_eq!(extract_error_message(""), "Request failed");
        assert_eq!(
            extract_error_message(r#"{"success":false,"message":"  "}"#),
            r#"{"success":false,"message":"  "}"#
        );
    }

    #[test]
    fn extract_error_message_truncates_oversized_bodies() {
        let body = "x".repeat(1000);
        assert_eq!(extract_error_message(&body).len(), 200);
    }

    #[test]
    fn envelope_into_data_unwraps_successful_payloads() {
        let envelope: ApiEnvelope<u32> =
            serde_json::from_str(r#"{"success":true,"data":7}"#).expect("Failed to parse");
        assert_eq!(envelope.into_data(), Ok(7));
    }

    #[test]
    fn envelope_into_data_rejects_contract_violations() {
        let failed: ApiEnvelope<u32> =
            serde_json::from_str(r#"{"success":false,"message":"Nope"}"#).expect("Failed to parse");
        assert_eq!(failed.into_data(), Err(AppError::Parse("Nope".to_string())));

        let missing: ApiEnvelope<u32> =
            serde_json::from_str(r#"{"success":true}"#).expect("Failed to parse");
        assert!(missing.into_data().is_err());
    }

    #[test]
    fn envelope_ok_checks_only_the_success_flag() {
        let envelope: ApiEnvelope<u32> =
            serde_json::from_str(r#"{"success":true}"#).expect("Failed to parse");
        assert_eq!(envelope.ok(), Ok(()));
    }
}
