pub mod use_authentication;
pub mod use_books;
pub mod use_sign_out;
pub mod use_title;

pub use use_authentication::use_authentication;
pub use use_books::{load_books, use_reload_books};
pub use use_sign_out::use_sign_out;
pub use use_title::use_title;

/// Distinguishes "not fetched yet" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
