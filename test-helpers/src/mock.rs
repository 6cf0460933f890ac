//! Sample shelf contents for the dev-server and browser tests.

use crate::{TestApp, sample_mp3};
use api::store::Library;
use payloads::FileId;

/// Titles seeded by [`DevDataset::create`], oldest first.
pub const SAMPLE_TITLES: [&str; 3] =
    ["Pride and Prejudice", "The Time Machine", "Moby Dick"];

pub struct DevDataset {
    pub books: Vec<(FileId, String)>,
}

impl DevDataset {
    /// Seed the app's library with a few playable books.
    pub async fn create(app: &TestApp) -> Self {
        Self {
            books: seed_library(&app.library).await,
        }
    }

    pub fn print_summary(&self) {
        tracing::info!("📚 Seeded {} books:", self.books.len());
        for (id, title) in &self.books {
            tracing::info!("   {title} ({id})");
        }
    }
}

async fn seed_library(library: &Library) -> Vec<(FileId, String)> {
    let mut books = Vec::new();
    for title in SAMPLE_TITLES {
        let id = library
            .insert(
                title.to_string(),
                Some("audio/mpeg".into()),
                sample_mp3().into(),
            )
            .await;
        books.push((id, title.to_string()));
    }
    books
}
