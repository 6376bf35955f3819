//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the only shared mutable state in the app: the
//! current profile and a loading flag. It resolves the session once on mount
//! (which is where the lazy profile bootstrap happens, server-side) and then
//! re-resolves periodically so a sign-in or sign-out elsewhere converges.
//! Resolution failure is fail-closed: the session is flushed and the browser
//! is sent to the login page.

use api::ProfileInfo;
use dioxus::prelude::*;

/// How often the provider re-resolves the session after the initial load.
const RESOLVE_PERIOD: std::time::Duration = std::time::Duration::from_secs(30);

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub profile: Option<ProfileInfo>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            profile: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// A resolved state holding the given profile.
    pub fn resolved(profile: Option<ProfileInfo>) -> Self {
        Self {
            profile,
            loading: false,
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Hard-navigate the browser to a path. No-op outside the browser.
pub fn navigate_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(path, "navigate_to outside browser, ignoring");
    }
}

/// Sign out and force the browser to the login page. Used by the provider's
/// fail-closed path and by the navbar logout button.
async fn sign_out_and_redirect(mut session: Signal<SessionState>) {
    if let Err(e) = api::logout().await {
        tracing::error!("logout failed: {}", e);
    }
    session.set(SessionState::resolved(None));
    navigate_to("/login");
}

/// Provider component that manages session state.
/// Wrap the router with this component so every page can call [`use_session`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(SessionState::default);

    // Resolve the session on mount. The server lazily creates the profile row
    // on first resolution for a fresh account.
    let _ = use_resource(move || async move {
        match api::get_current_profile().await {
            Ok(profile) => {
                session.set(SessionState::resolved(profile));
            }
            Err(e) => {
                tracing::error!("session resolution failed: {}", e);
                sign_out_and_redirect(session).await;
            }
        }
    });

    // Periodic re-resolution: the closest analogue of an auth-change
    // subscription. Sign-in or sign-out in another tab converges within one
    // period. The spawned task is dropped with the provider's scope.
    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(RESOLVE_PERIOD).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(RESOLVE_PERIOD).await;

                // Don't race the initial load.
                if session().loading {
                    continue;
                }
                match api::get_current_profile().await {
                    Ok(profile) => {
                        if session().profile != profile {
                            session.set(SessionState::resolved(profile));
                        }
                    }
                    Err(e) => {
                        tracing::error!("session re-resolution failed: {}", e);
                        sign_out_and_redirect(session).await;
                        return;
                    }
                }
            }
        });
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
