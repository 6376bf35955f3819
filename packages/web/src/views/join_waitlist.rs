//! Sign-up page ("Join Us"): creates the account and sends the new artist to
//! profile completion.

use dioxus::prelude::*;
use ui::{use_session, ErrorBanner, MediumSelect, SessionState};

use crate::Route;

/// Sign-up page component.
#[component]
pub fn JoinWaitlist() -> Element {
    let mut session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut medium = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let m = medium();

            // Same checks the server runs, plus the form-only fields.
            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if !api::validate::email(&e) {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if let Err(msg) = api::validate::password(&p) {
                error.set(Some(msg));
                return;
            }
            if m.is_empty() {
                error.set(Some("Select your medium".to_string()));
                return;
            }

            loading.set(true);
            match api::register(e, p).await {
                Ok(profile) => {
                    session.set(SessionState::resolved(Some(profile)));
                    // The profile row starts empty; finish it on the profile page.
                    nav.push(Route::Profile {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "page page-narrow",
            span { class: "eyebrow", "Join Us" }
            h1 { class: "page-title", "Join Us" }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            form { class: "form", onsubmit: handle_submit,
                label { class: "form-label", "What Should We Call You?" }
                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Your full name",
                    required: true,
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }

                label { class: "form-label", "Email" }
                input {
                    class: "form-input",
                    r#type: "email",
                    placeholder: "your@email.com",
                    required: true,
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                label { class: "form-label", "Password" }
                input {
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Choose a secure password",
                    required: true,
                    minlength: "{api::validate::MIN_PASSWORD_LEN}",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                label { class: "form-label", "Your Medium" }
                MediumSelect {
                    value: medium(),
                    oninput: move |evt: FormEvent| medium.set(evt.value()),
                }

                label { class: "form-label", "Your Story (Optional)" }
                textarea {
                    class: "form-input",
                    placeholder: "Tell us about your art and vision...",
                    rows: "4",
                    value: bio(),
                    oninput: move |evt| bio.set(evt.value()),
                }

                button {
                    class: "button-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating Account..." } else { "Create Account" }
                }
            }
        }
    }
}
