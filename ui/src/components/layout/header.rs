use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::hooks::use_sign_out;

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let on_sign_out = use_sign_out();

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <h1 class="text-xl font-semibold text-gray-900 dark:text-white">{"Audioshelf"}</h1>
                    </div>
                    if state.is_authenticated() {
                        <button
                            id="sign-out-button"
                            type="button"
                            onclick={on_sign_out}
                            class="px-3 py-1.5 text-sm font-medium rounded
                                   text-neutral-600 dark:text-neutral-400
                                   hover:text-neutral-800 dark:hover:text-neutral-200
                                   hover:bg-neutral-100 dark:hover:bg-neutral-700"
                        >
                            {"Sign out"}
                        </button>
                    }
                </div>
            </div>
        </header>
    }
}
