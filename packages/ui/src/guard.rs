//! Route guards.
//!
//! The access decision is a pure function of [`SessionState`]
//! ([`guard_outcome`]); the two wrapper components just act on it:
//!
//! - [`RequireProfile`] — the full decision. Guards Dashboard, Upload, and
//!   Artists: unauthenticated goes to login, an incomplete profile goes to
//!   profile completion.
//! - [`RequireSession`] — session-only. Guards the Profile page itself, which
//!   is the completion target and must not redirect to itself.
//!
//! While the session is still loading the guards render nothing; there is no
//! retry or timeout, just one decision per render.

use dioxus::prelude::*;

use crate::{navigate_to, use_session, SessionState};

/// The guard's decision for the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still resolving; render nothing.
    Loading,
    /// No session; send to the login page.
    RedirectLogin,
    /// Signed in but name or medium is missing; send to profile completion.
    RedirectProfile,
    /// Render the protected content.
    Allow,
}

/// Decide access for a protected page from the session state alone.
pub fn guard_outcome(state: &SessionState) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Loading;
    }
    match &state.profile {
        None => GuardOutcome::RedirectLogin,
        Some(profile) if !profile.is_complete() => GuardOutcome::RedirectProfile,
        Some(_) => GuardOutcome::Allow,
    }
}

/// Wrapper for pages that need a signed-in, completed profile.
#[component]
pub fn RequireProfile(children: Element) -> Element {
    let session = use_session();

    match guard_outcome(&session()) {
        GuardOutcome::Loading => rsx! {},
        GuardOutcome::RedirectLogin => {
            navigate_to("/login");
            rsx! {}
        }
        GuardOutcome::RedirectProfile => {
            navigate_to("/profile");
            rsx! {}
        }
        GuardOutcome::Allow => rsx! {
            {children}
        },
    }
}

/// Wrapper for pages that need a session but not a completed profile.
#[component]
pub fn RequireSession(children: Element) -> Element {
    let session = use_session();
    let state = session();

    if state.loading {
        return rsx! {};
    }
    if state.profile.is_none() {
        navigate_to("/login");
        return rsx! {};
    }
    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ProfileInfo;

    fn state(profile: Option<ProfileInfo>, loading: bool) -> SessionState {
        SessionState { profile, loading }
    }

    fn profile(name: &str, medium: &str) -> ProfileInfo {
        ProfileInfo {
            id: "id".to_string(),
            name: name.to_string(),
            email: "artist@example.com".to_string(),
            medium: medium.to_string(),
            bio: Some("a story".to_string()),
            profile_image: Some("http://localhost:8080/uploads/avatars/x.png".to_string()),
        }
    }

    #[test]
    fn loading_renders_nothing() {
        assert_eq!(guard_outcome(&state(None, true)), GuardOutcome::Loading);
        // loading wins even with a profile present
        assert_eq!(
            guard_outcome(&state(Some(profile("a", "b")), true)),
            GuardOutcome::Loading
        );
    }

    #[test]
    fn unauthenticated_is_always_denied() {
        assert_eq!(
            guard_outcome(&state(None, false)),
            GuardOutcome::RedirectLogin
        );
    }

    #[test]
    fn incomplete_profile_goes_to_completion_regardless_of_other_fields() {
        // bio and avatar are filled in, but name/medium decide
        assert_eq!(
            guard_outcome(&state(Some(profile("", "")), false)),
            GuardOutcome::RedirectProfile
        );
        assert_eq!(
            guard_outcome(&state(Some(profile("Jean", "")), false)),
            GuardOutcome::RedirectProfile
        );
        assert_eq!(
            guard_outcome(&state(Some(profile("", "painting")), false)),
            GuardOutcome::RedirectProfile
        );
    }

    #[test]
    fn complete_profile_is_allowed() {
        assert_eq!(
            guard_outcome(&state(Some(profile("Jean", "painting")), false)),
            GuardOutcome::Allow
        );
    }
}
