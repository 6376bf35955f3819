//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{use_session, ErrorBanner, SessionState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            match api::login(email().trim().to_string(), password()).await {
                Ok(profile) => {
                    session.set(SessionState::resolved(Some(profile)));
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
            h1 { class: "page-title", "Login" }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            form { class: "form", onsubmit: handle_login,
                label { class: "form-label", "Email" }
                input {
                    class: "form-input",
                    r#type: "email",
                    required: true,
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                label { class: "form-label", "Password" }
                input {
                    class: "form-input",
                    r#type: "password",
                    required: true,
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    class: "button-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }
            }

            div { class: "form-footer",
                p { "Don't have an account?" }
                Link { class: "form-footer-link", to: Route::JoinWaitlist {}, "Join Now" }
            }
        }
    }
}
