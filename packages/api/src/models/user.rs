//! # Account record for authenticated identities
//!
//! [`User`] is the server-only row from the `users` table: the login identity
//! behind a [`super::Profile`]. It carries the Argon2 password hash and is never
//! sent to the client; everything a page needs to render comes from the profile.
//!
//! The public-facing record for an identity is its profile row (see
//! [`super::profile`]), created lazily on first session resolution.

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full account record from the database. Server only.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
