/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        tracing::error!("Couldn't show alert: {e:?}");
    }
}

/// Send the browser to another page.
pub fn navigate_to(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        tracing::error!("Couldn't navigate to {url}: {e:?}");
    }
}
