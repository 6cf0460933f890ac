use crate::{AuthState, State};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{LoginPrompt, Shelf, UploadForm};
use crate::hooks::use_title;

/// The shelf and upload form once authenticated, otherwise the login
/// prompt. Nothing is shown until the authentication check answers.
#[function_component]
pub fn HomePage() -> Html {
    let (state, _) = use_store::<State>();
    use_title("Audioshelf");

    match &state.auth_state {
        AuthState::LoggedIn => html! {
            <div class="space-y-8">
                <Shelf />
                <UploadForm />
            </div>
        },
        AuthState::LoggedOut => html! {
            <LoginPrompt />
        },
        AuthState::Unknown => html! {},
    }
}
