use serde::{Deserialize, Serialize};

use crate::FileId;

/// A book on the shelf, as listed by the backend.
///
/// Field names follow the storage provider's file listing, so the link is
/// `webContentLink` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FileId>,
    pub name: String,
    /// Playable location of the audio, when the backend exposes one.
    #[serde(
        rename = "webContentLink",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub web_content_link: Option<String>,
}

/// Decode a book listing. A `null` or empty body is an empty shelf.
pub fn parse_book_list(
    body: &str,
) -> Result<Vec<BookRecord>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let books: Option<Vec<BookRecord>> = serde_json::from_str(body)?;
    Ok(books.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    pub is_authenticated: bool,
}

/// Result of an upload. Error responses carry only `error`, so `success`
/// defaults to false.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<FileId>,
}

impl UploadResponse {
    pub fn succeeded(file_id: FileId) -> Self {
        Self {
            success: true,
            error: None,
            file_id: Some(file_id),
        }
    }
}

/// Body of every error response from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
