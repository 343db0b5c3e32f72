use serde::{Deserialize, Serialize};

/// Location of a stored file returned by `POST /upload`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub url: String,
    #[serde(default)]
    pub filename: Option<String>,
}
