use yew::prelude::*;

/// Sets the document title whenever `title` changes.
#[hook]
pub fn use_title(title: &str) {
    let title = title.to_string();
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
