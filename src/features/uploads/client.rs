//! Multipart upload client. Unlike JSON calls the content type is left to
//! the browser, but failures raise through the shared error path so callers
//! see upload errors like any other request error.

use crate::app_lib::{
    AppError,
    api::{ApiEnvelope, post_multipart},
};
use crate::features::uploads::types::UploadedFile;
use web_sys::{File, FormData};

/// Uploads one file and returns where the backend stored it.
pub async fn upload_file(file: &File) -> Result<UploadedFile, AppError> {
    let form = FormData::new()
        .map_err(|_| AppError::Serialization("Failed to build upload form".to_string()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| AppError::Serialization("Failed to attach file".to_string()))?;

    post_multipart::<ApiEnvelope<UploadedFile>>("/upload", form)
        .await?
        .into_data()
}
