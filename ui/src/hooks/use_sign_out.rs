use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

#[hook]
pub fn use_sign_out() -> Callback<MouseEvent> {
    let dispatch = use_dispatch::<State>();

    Callback::from(move |_| {
        let dispatch = dispatch.clone();

        yew::platform::spawn_local(async move {
            let api_client = crate::get_api_client();
            if let Err(e) = api_client.clear_credentials().await {
                tracing::error!("Error clearing credentials: {e}");
            }

            dispatch.reduce_mut(|state| {
                state.logout();
            });
        });
    })
}
