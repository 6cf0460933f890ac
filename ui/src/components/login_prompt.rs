use yew::prelude::*;

use crate::get_api_client;
use crate::utils::navigate_to;

#[function_component]
pub fn LoginPrompt() -> Html {
    let on_login = Callback::from(|_: MouseEvent| {
        navigate_to(&get_api_client().authorize_url());
    });

    html! {
        <section id="auth-section" class="text-center space-y-6 py-12">
            <p class="text-lg text-neutral-600 dark:text-neutral-400">
                {"Connect your storage to see your audiobooks."}
            </p>
            <button
                id="login-button"
                type="button"
                onclick={on_login}
                class="px-4 py-2 text-sm font-medium text-white
                       bg-neutral-900 hover:bg-neutral-800
                       dark:bg-neutral-100 dark:text-neutral-900
                       dark:hover:bg-neutral-200 rounded-md"
            >
                {"Log in"}
            </button>
        </section>
    }
}
