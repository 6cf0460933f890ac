use payloads::requests::UploadBook;
use payloads::responses::UploadResponse;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::use_reload_books;
use crate::upload::{UploadEffect, upload_effects, validate_upload};
use crate::utils::alert;

/// Form for adding a book to the shelf. Submitting checks that a title and
/// a file are present, posts them, and reports the outcome in an alert.
#[function_component]
pub fn UploadForm() -> Html {
    let title_ref = use_node_ref();
    let file_ref = use_node_ref();
    let is_uploading = use_state(|| false);
    let reload_books = use_reload_books();

    let on_submit = {
        let title_ref = title_ref.clone();
        let file_ref = file_ref.clone();
        let is_uploading = is_uploading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(title_input), Some(file_input)) = (
                title_ref.cast::<HtmlInputElement>(),
                file_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let file = file_input.files().and_then(|files| files.get(0));
            let (title, file) = match validate_upload(&title_input.value(), file)
            {
                Ok(fields) => fields,
                Err(e) => {
                    alert(&e.to_string());
                    return;
                }
            };

            let is_uploading = is_uploading.clone();
            let reload_books = reload_books.clone();

            yew::platform::spawn_local(async move {
                is_uploading.set(true);

                let result = send_upload(title, file).await;
                if let Err(e) = &result {
                    tracing::error!("Error uploading book: {e:#}");
                }

                for effect in upload_effects(&result) {
                    match effect {
                        UploadEffect::Alert(message) => alert(&message),
                        UploadEffect::ClearForm => {
                            title_input.set_value("");
                            file_input.set_value("");
                        }
                        UploadEffect::ReloadShelf => reload_books.emit(()),
                    }
                }

                is_uploading.set(false);
            });
        })
    };

    html! {
        <section id="upload-section" class="space-y-4">
            <h2 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                {"Upload a book"}
            </h2>
            <form id="upload-form" onsubmit={on_submit} class="space-y-3">
                <input
                    ref={title_ref}
                    id="book-title"
                    type="text"
                    placeholder="Title"
                    disabled={*is_uploading}
                    class="w-full px-3 py-2 border border-neutral-300
                           dark:border-neutral-600 rounded-md shadow-sm
                           bg-white dark:bg-neutral-700 text-neutral-900
                           dark:text-neutral-100 text-sm
                           focus:outline-none focus:ring-2
                           focus:ring-neutral-500 focus:border-neutral-500
                           disabled:opacity-50"
                />
                <input
                    ref={file_ref}
                    id="book-file"
                    type="file"
                    accept="audio/*"
                    disabled={*is_uploading}
                    class="block w-full text-sm text-neutral-600
                           dark:text-neutral-400"
                />
                <button
                    type="submit"
                    disabled={*is_uploading}
                    class="px-3 py-1.5 text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900
                           dark:hover:bg-neutral-200 rounded-md
                           disabled:opacity-50"
                >
                    {if *is_uploading { "Uploading..." } else { "Upload" }}
                </button>
            </form>
        </section>
    }
}

/// Read the selected file and post it with its title.
async fn send_upload(
    title: String,
    file: File,
) -> anyhow::Result<UploadResponse> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| anyhow::anyhow!("Couldn't read {}: {e:?}", file.name()))?;
    let data = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime_type = Some(file.type_()).filter(|mime| !mime.is_empty());

    let details = UploadBook {
        title,
        file_name: file.name(),
        mime_type,
        data,
    };
    Ok(get_api_client().upload_book(details).await?)
}
