//! # Artist profile model
//!
//! Defines the two representations of an artist profile:
//!
//! ## [`Profile`] (server only)
//!
//! The complete database row from the `profiles` table. It derives
//! [`sqlx::FromRow`] so it can be loaded directly from queries and contains
//! every column:
//!
//! - `id` — primary key (`UUID v4`), equal to the owning `users.id`.
//! - `name`, `medium` — the two fields that must be filled in before the
//!   profile counts as complete; both start empty after the lazy bootstrap.
//! - `email` — copied from the account at bootstrap time.
//! - `bio`, `profile_image` — optional story text and avatar URL.
//! - `created_at` — audit timestamp.
//!
//! The [`Profile::to_info`] method projects this into a [`ProfileInfo`].
//!
//! ## [`ProfileInfo`]
//!
//! A client-safe subset that is `Serialize + Deserialize + PartialEq` and can
//! cross the server/client boundary via Dioxus server functions. It converts
//! the `Uuid` to a `String` so it works in WASM and drops the timestamp.
//! [`ProfileInfo::is_complete`] is the single source of truth for the route
//! guard's "profile finished" decision.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full artist profile record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub medium: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Profile {
    /// Default row inserted on first session resolution: email copied from
    /// the account, name and medium left empty so the route guard sends the
    /// artist to profile completion.
    pub fn bootstrap(id: Uuid, email: &str) -> Profile {
        Profile {
            id,
            name: String::new(),
            email: email.to_string(),
            medium: String::new(),
            bio: None,
            profile_image: None,
            created_at: Utc::now(),
        }
    }

    /// Convert to ProfileInfo for client consumption.
    pub fn to_info(&self) -> ProfileInfo {
        ProfileInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            medium: self.medium.clone(),
            bio: self.bio.clone(),
            profile_image: self.profile_image.clone(),
        }
    }
}

/// Profile information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub medium: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}

impl ProfileInfo {
    /// Whether the profile has been filled in enough to use the app.
    /// Name and medium are required; everything else is optional.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.medium.trim().is_empty()
    }

    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, medium: &str) -> ProfileInfo {
        ProfileInfo {
            id: "b9b2f8a0-0000-0000-0000-000000000000".to_string(),
            name: name.to_string(),
            email: "artist@example.com".to_string(),
            medium: medium.to_string(),
            bio: None,
            profile_image: None,
        }
    }

    #[test]
    fn fresh_bootstrap_profile_is_incomplete() {
        assert!(!profile("", "").is_complete());
    }

    #[test]
    fn name_alone_is_not_enough() {
        assert!(!profile("Jean", "").is_complete());
        assert!(!profile("", "painting").is_complete());
    }

    #[test]
    fn whitespace_does_not_count_as_filled_in() {
        assert!(!profile("   ", "painting").is_complete());
        assert!(!profile("Jean", "\t").is_complete());
    }

    #[test]
    fn name_and_medium_complete_the_profile() {
        let p = profile("Jean", "painting");
        assert!(p.is_complete());
        // bio and avatar stay optional
        assert!(p.bio.is_none());
        assert!(p.profile_image.is_none());
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(profile("", "").display_name(), "artist@example.com");
        assert_eq!(profile("Jean", "painting").display_name(), "Jean");
    }

    #[cfg(feature = "server")]
    #[test]
    fn bootstrap_row_starts_empty_and_incomplete() {
        let row = Profile::bootstrap(Uuid::new_v4(), "artist@example.com");
        assert_eq!(row.name, "");
        assert_eq!(row.medium, "");
        assert_eq!(row.email, "artist@example.com");
        assert!(row.bio.is_none());
        assert!(row.profile_image.is_none());
        assert!(!row.to_info().is_complete());
    }
}
