//! Upload page: create a new artwork from an image and its details.

use dioxus::prelude::*;
use ui::{ErrorBanner, RequireProfile};

use super::require_selected_file;
use crate::Route;

#[component]
pub fn Upload() -> Element {
    rsx! {
        RequireProfile {
            UploadInner {}
        }
    }
}

#[component]
fn UploadInner() -> Element {
    let mut file = use_signal(|| Option::<(String, Vec<u8>)>::None);
    let mut title = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut uploading = use_signal(|| false);
    let nav = use_navigator();

    let handle_file_pick = move |evt: FormEvent| async move {
        if let Some(picked) = evt.files().first().cloned() {
            if let Ok(bytes) = picked.read_bytes().await {
                file.set(Some((picked.name(), bytes.to_vec())));
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            // Nothing leaves the browser until a file is picked.
            if let Err(msg) = require_selected_file(&file()) {
                error.set(Some(msg.to_string()));
                return;
            }
            let Some((file_name, bytes)) = file() else {
                return;
            };

            let t = title().trim().to_string();
            if t.is_empty() {
                error.set(Some("Title is required".to_string()));
                return;
            }
            let c = category();
            if c.is_empty() {
                error.set(Some("Select a category".to_string()));
                return;
            }
            let p: f64 = match price().trim().parse() {
                Ok(p) => p,
                Err(_) => {
                    error.set(Some("Price must be a number".to_string()));
                    return;
                }
            };
            if let Err(msg) = api::validate::price(p) {
                error.set(Some(msg));
                return;
            }

            uploading.set(true);
            match api::create_artwork(t, description(), p, c, file_name, bytes).await {
                Ok(_) => {
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    uploading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "page page-wide",
            h1 { class: "page-title", "Upload Work" }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            form { class: "form", onsubmit: handle_submit,
                label { class: "drop-zone",
                    input {
                        class: "hidden-input",
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_file_pick,
                    }
                    if let Some((file_name, _)) = file() {
                        span { class: "drop-zone-filename", "{file_name}" }
                    } else {
                        span { class: "drop-zone-hint", "Upload Image" }
                    }
                }

                div { class: "form-row",
                    input {
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Title",
                        required: true,
                        value: title(),
                        oninput: move |evt| title.set(evt.value()),
                    }
                    input {
                        class: "form-input",
                        r#type: "number",
                        placeholder: "Price (USD)",
                        required: true,
                        min: "0",
                        step: "0.01",
                        value: price(),
                        oninput: move |evt| price.set(evt.value()),
                    }
                }

                select {
                    class: "form-input",
                    value: category(),
                    oninput: move |evt| category.set(evt.value()),
                    option { value: "", "Select Category" }
                    for (key, label) in api::validate::MEDIUM_OPTIONS {
                        option { value: "{key}", "{label}" }
                    }
                }

                textarea {
                    class: "form-input",
                    placeholder: "Description",
                    rows: "4",
                    required: true,
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }

                button {
                    class: "button-primary",
                    r#type: "submit",
                    disabled: uploading(),
                    if uploading() { "Uploading..." } else { "Upload Work" }
                }
            }
        }
    }
}
