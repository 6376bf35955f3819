//! Small shared form pieces used by several pages.

use dioxus::prelude::*;

/// Inline error banner rendered above the form that triggered the failure.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner",
            p { "{message}" }
        }
    }
}

/// The medium `<select>` shared by the sign-up and profile forms.
#[component]
pub fn MediumSelect(value: String, oninput: EventHandler<FormEvent>) -> Element {
    rsx! {
        select {
            class: "form-input",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
            option { value: "", "Select your medium" }
            for (key, label) in api::validate::MEDIUM_OPTIONS {
                option { value: "{key}", selected: value == *key, "{label}" }
            }
        }
    }
}
