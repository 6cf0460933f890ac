use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client};

/// Fetch the book list and replace the shelf with it. A failure is logged
/// and recorded so the shelf shows it.
pub async fn load_books(dispatch: &Dispatch<State>) {
    match get_api_client().list_books().await {
        Ok(books) => {
            tracing::debug!("Loaded {} books", books.len());
            dispatch.reduce_mut(|state| state.set_books(books));
        }
        Err(e) => {
            tracing::error!("Error loading books: {e}");
            dispatch.reduce_mut(|state| state.set_books_error(e.to_string()));
        }
    }
}

/// Callback that reloads the shelf in the background.
#[hook]
pub fn use_reload_books() -> Callback<()> {
    let dispatch = use_dispatch::<State>();

    Callback::from(move |_| {
        let dispatch = dispatch.clone();
        yew::platform::spawn_local(async move {
            load_books(&dispatch).await;
        });
    })
}
