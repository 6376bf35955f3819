//! Top navigation bar, reflecting auth state.

use dioxus::prelude::*;

use crate::{navigate_to, use_session, SessionState};

/// (label, path) pairs shown in the bar for a given auth state.
pub fn nav_items(signed_in: bool) -> &'static [(&'static str, &'static str)] {
    if signed_in {
        &[
            ("Dashboard", "/dashboard"),
            ("Artists", "/artists"),
            ("About", "/about"),
        ]
    } else {
        &[("About", "/about"), ("Login", "/login")]
    }
}

/// Fixed top bar. Signed-in users see Dashboard/Artists/About/Logout;
/// everyone else sees About/Login/Join Now.
///
/// Navigation is delegated to `on_navigate` so the host app can push
/// routes through its router instead of reloading the page.
#[component]
pub fn Navbar(on_navigate: EventHandler<String>) -> Element {
    let session = use_session();
    let signed_in = session().profile.is_some();

    rsx! {
        nav { class: "navbar",
            button {
                class: "navbar-brand",
                onclick: move |_| on_navigate.call("/".to_string()),
                span { class: "navbar-mark", "\u{25CB}" }
                span { class: "navbar-title", "Basqi" }
            }
            div { class: "navbar-links",
                for (label, path) in nav_items(signed_in) {
                    button {
                        class: "nav-link",
                        onclick: move |_| on_navigate.call(path.to_string()),
                        "{label}"
                    }
                }
                if signed_in {
                    LogoutButton {}
                } else {
                    button {
                        class: "nav-cta",
                        onclick: move |_| on_navigate.call("/join-waitlist".to_string()),
                        "Join Now"
                    }
                }
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(#[props(default = "Logout".to_string())] label: String) -> Element {
    let mut session = use_session();

    let onclick = move |_| async move {
        match api::logout().await {
            Ok(()) => {
                session.set(SessionState::resolved(None));
                navigate_to("/login");
            }
            Err(e) => {
                tracing::error!("logout failed: {}", e);
            }
        }
    };

    rsx! {
        button {
            class: "nav-link nav-logout",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::nav_items;

    #[test]
    fn signed_in_bar_hides_login() {
        let items = nav_items(true);
        assert!(items.iter().any(|(_, path)| *path == "/dashboard"));
        assert!(items.iter().any(|(_, path)| *path == "/artists"));
        assert!(!items.iter().any(|(_, path)| *path == "/login"));
    }

    #[test]
    fn signed_out_bar_offers_login_only() {
        let items = nav_items(false);
        assert!(items.iter().any(|(_, path)| *path == "/login"));
        assert!(!items.iter().any(|(_, path)| *path == "/dashboard"));
    }
}
