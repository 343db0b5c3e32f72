//! Persisted session record for the frontend. The token and the signed-in
//! user travel together as one record under a single local-storage key, so
//! storage can never hold a token without its user or vice versa. Writes are
//! last-write-wins; at most one session exists per browser origin.

use serde::{Deserialize, Serialize};

/// Local-storage key holding the serialized session record.
pub const STORAGE_KEY: &str = "blotter_session";

/// Signed-in user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub profile_photo_uri: Option<String>,
}

/// One atomic session: bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserAccount>,
}

impl SessionRecord {
    pub fn new(token: String, user: Option<UserAccount>) -> Self {
        Self { token, user }
    }

    /// Returns a copy with the user record replaced, keeping the token.
    pub fn with_user(&self, user: UserAccount) -> Self {
        Self {
            token: self.token.clone(),
            user: Some(user),
        }
    }
}

/// Loads the persisted session, if any. A record that fails to parse is
/// treated as absent so a corrupt value cannot wedge the login flow.
#[cfg(target_arch = "wasm32")]
pub fn load() -> Option<SessionRecord> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Persists the session record in one write.
#[cfg(target_arch = "wasm32")]
pub fn save(record: &SessionRecord) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() {
        if let Ok(raw) = serde_json::to_string(record) {
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
    }
}

/// Clears the persisted session in one operation.
#[cfg(target_arch = "wasm32")]
pub fn clear() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

/// Returns the persisted bearer token, if a session exists.
#[cfg(target_arch = "wasm32")]
pub fn token() -> Option<String> {
    load().map(|record| record.token)
}

#[cfg(test)]
mod tests {
    use super::{SessionRecord, UserAccount};

    fn user() -> UserAccount {
        UserAccount {
            id: "u-1".to_string(),
            username: "desk_officer".to_string(),
            email: "desk@precinct.example".to_string(),
            first_name: Some("Dana".to_string()),
            last_name: None,
            role: Some("officer".to_string()),
            profile_photo_uri: None,
        }
    }

    #[test]
    fn record_parses_without_user() {
        let record: SessionRecord =
            serde_json::from_str(r#"{"token":"opaque-token"}"#).expect("Failed to parse");
        assert_eq!(record.token, "opaque-token");
        assert!(record.user.is_none());
    }

    #[test]
    fn user_fields_use_camel_case_on_the_wire() {
        let json = serde_json::to_string(&user()).expect("Failed to serialize");
        assert!(json.contains("firstName"));
        assert!(json.contains("profilePhotoUri"));
        assert!(!json.contains("first_name"));
    }

    #[test]
    fn with_user_keeps_the_token() {
        let record = SessionRecord::new("opaque-token".to_string(), None);
        let updated = record.with_user(user());
        assert_eq!(updated.token, "opaque-token");
        assert_eq!(updated.user.map(|u| u.username), Some("desk_officer".to_string()));
    }

    #[test]
    fn corrupt_record_is_rejected() {
        assert!(serde_json::from_str::<SessionRecord>("{not json").is_err());
    }
}
