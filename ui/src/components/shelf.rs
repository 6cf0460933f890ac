use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::components::BookCard;
use crate::shelf::{EMPTY_SHELF_TEXT, LOAD_FAILED_TEXT, ShelfView};

/// The user's books, rebuilt from the store whenever the list is reloaded.
#[function_component]
pub fn Shelf() -> Html {
    let (state, _) = use_store::<State>();
    let view =
        ShelfView::from_state(&state.books, state.books_error.as_deref());

    let contents = match view {
        ShelfView::Pending => html! {},
        ShelfView::Empty => html! {
            <p class="text-neutral-600 dark:text-neutral-400">{EMPTY_SHELF_TEXT}</p>
        },
        ShelfView::Failed => html! {
            <p class="text-red-700 dark:text-red-400">{LOAD_FAILED_TEXT}</p>
        },
        ShelfView::Books(books) => html! {
            <div class="space-y-4">
                {for books.into_iter().map(|book| {
                    let key = book.key.clone();
                    html! { <BookCard key={key} {book} /> }
                })}
            </div>
        },
    };

    html! {
        <section id="shelf-container">
            {contents}
        </section>
    }
}
