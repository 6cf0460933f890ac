use yew::prelude::*;

use crate::shelf;

#[derive(Properties, PartialEq)]
pub struct BookCardProps {
    pub book: shelf::BookCard,
}

#[function_component]
pub fn BookCard(props: &BookCardProps) -> Html {
    let book = &props.book;

    html! {
        <div class="book p-4 rounded-lg border border-neutral-200 dark:border-neutral-700 space-y-2">
            <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                {&book.title}
            </h3>
            if let Some(src) = &book.audio_src {
                <audio controls={true} src={src.clone()} class="w-full" />
            }
        </div>
    }
}
