//! Checks before an upload is sent and the reaction to its outcome.

use payloads::responses::UploadResponse;
use std::fmt;

pub const UPLOAD_SUCCEEDED_TEXT: &str = "File uploaded successfully!";
pub const UPLOAD_ERRORED_TEXT: &str =
    "An error occurred while uploading the file.";

/// The title or the file was left out of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingFields;

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Please provide both a title and a file.")
    }
}

/// Require both a title and a file. Only presence is checked.
pub fn validate_upload<F>(
    title: &str,
    file: Option<F>,
) -> Result<(String, F), MissingFields> {
    match file {
        Some(file) if !title.is_empty() => Ok((title.to_string(), file)),
        _ => Err(MissingFields),
    }
}

/// A step to take once an upload has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEffect {
    Alert(String),
    ClearForm,
    ReloadShelf,
}

/// What to do after an upload, in order. An `Err` is a request that never
/// produced a readable response.
pub fn upload_effects<E>(
    result: &Result<UploadResponse, E>,
) -> Vec<UploadEffect> {
    match result {
        Ok(response) if response.success => vec![
            UploadEffect::Alert(UPLOAD_SUCCEEDED_TEXT.to_string()),
            UploadEffect::ClearForm,
            UploadEffect::ReloadShelf,
        ],
        Ok(response) => vec![UploadEffect::Alert(format!(
            "Error uploading file: {}",
            response.error.as_deref().unwrap_or("Unknown error")
        ))],
        Err(_) => vec![UploadEffect::Alert(UPLOAD_ERRORED_TEXT.to_string())],
    }
}
