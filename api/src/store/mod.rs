//! In-memory file library backing the shelf.
//!
//! Stands in for the hosted file storage the shelf was built against: files
//! are kept whole in memory for the lifetime of the process, so a restart
//! empties the shelf. Nothing bounds the total size beyond the per-upload
//! limit, so it is only fit for development.

use actix_web::web::Bytes;
use payloads::FileId;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// How many files a listing returns.
pub const LIST_PAGE_SIZE: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("File not found")]
    FileNotFound,
}

/// A stored file and its metadata.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub id: FileId,
    pub name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Cheap to clone; clones share the same files.
#[derive(Clone, Default)]
pub struct Library {
    files: Arc<RwLock<Vec<StoredFile>>>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a file, returning its new id.
    #[tracing::instrument(
        skip(self, data),
        fields(size = data.len(), file_id = tracing::field::Empty)
    )]
    pub async fn insert(
        &self,
        name: String,
        content_type: Option<String>,
        data: Bytes,
    ) -> FileId {
        let id = FileId(Uuid::new_v4().to_string());
        self.files.write().await.push(StoredFile {
            id: id.clone(),
            name,
            content_type,
            data,
        });
        tracing::Span::current().record("file_id", tracing::field::display(&id));
        id
    }

    /// The most recently stored files first, at most `limit` of them.
    pub async fn list(&self, limit: usize) -> Vec<StoredFile> {
        self.files
            .read()
            .await
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: &FileId) -> Result<StoredFile, StoreError> {
        self.files
            .read()
            .await
            .iter()
            .find(|file| &file.id == id)
            .cloned()
            .ok_or(StoreError::FileNotFound)
    }

    pub async fn file_count(&self) -> usize {
        self.files.read().await.len()
    }
}
