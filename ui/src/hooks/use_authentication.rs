use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State, get_api_client, hooks::load_books};

/// Hook to check authentication status on startup, loading the shelf when
/// the session is authenticated.
#[hook]
pub fn use_authentication() {
    let dispatch = use_dispatch::<State>();

    use_effect_with((), move |_| {
        yew::platform::spawn_local(async move {
            let api_client = get_api_client();
            match api_client.is_authenticated().await {
                Ok(true) => {
                    dispatch.reduce_mut(|state| {
                        state.auth_state = AuthState::LoggedIn;
                    });
                    load_books(&dispatch).await;
                }
                Ok(false) => {
                    dispatch.reduce_mut(|state| {
                        state.logout();
                    });
                }
                Err(e) => {
                    // Can't tell, so offer to log in again
                    tracing::error!("Error checking authentication: {e}");
                    dispatch.reduce_mut(|state| {
                        state.logout();
                    });
                }
            }
        });
    });
}
