use payloads::BookRecord;
use yewdux::prelude::*;

use crate::hooks::FetchState;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    /// The authentication check hasn't answered yet
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn,
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Authentication (managed by use_authentication) ===
    pub auth_state: AuthState,

    // === Shelf (managed by load_books) ===
    pub books: FetchState<Vec<BookRecord>>,
    /// Set when the most recent load failed
    pub books_error: Option<String>,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn)
    }

    pub fn set_books(&mut self, books: Vec<BookRecord>) {
        self.books = FetchState::Fetched(books);
        self.books_error = None;
    }

    pub fn set_books_error(&mut self, error: String) {
        self.books_error = Some(error);
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
        self.books = FetchState::NotFetched;
        self.books_error = None;
    }
}
