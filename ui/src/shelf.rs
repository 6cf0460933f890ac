//! What the shelf section shows for the current book list.

use payloads::BookRecord;

use crate::hooks::FetchState;

pub const EMPTY_SHELF_TEXT: &str =
    "Your shelf is empty. Upload a book to get started!";
pub const LOAD_FAILED_TEXT: &str = "Could not load books.";

#[derive(Debug, Clone, PartialEq)]
pub enum ShelfView {
    /// No list has arrived yet.
    Pending,
    Empty,
    Failed,
    Books(Vec<BookCard>),
}

/// A single rendered book.
#[derive(Debug, Clone, PartialEq)]
pub struct BookCard {
    pub key: String,
    pub title: String,
    /// Source for the audio control; no control is rendered without one.
    pub audio_src: Option<String>,
}

impl ShelfView {
    /// A failed load replaces whatever was shown before it.
    pub fn from_state(
        books: &FetchState<Vec<BookRecord>>,
        load_error: Option<&str>,
    ) -> Self {
        if load_error.is_some() {
            return Self::Failed;
        }
        match books.as_ref() {
            None => Self::Pending,
            Some(books) if books.is_empty() => Self::Empty,
            Some(books) => Self::Books(
                books
                    .iter()
                    .enumerate()
                    .map(|(index, book)| BookCard::new(index, book))
                    .collect(),
            ),
        }
    }
}

impl BookCard {
    fn new(index: usize, book: &BookRecord) -> Self {
        let key = match &book.id {
            Some(id) => id.to_string(),
            None => format!("{index}-{}", book.name),
        };
        Self {
            key,
            title: book.name.clone(),
            audio_src: book
                .web_content_link
                .clone()
                .filter(|link| !link.is_empty()),
        }
    }
}
