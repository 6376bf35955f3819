//! # Artwork model
//!
//! [`Artwork`] is the server-only row from the `artworks` table; every artwork
//! belongs to exactly one profile via `artist_id`. [`ArtworkInfo`] is the
//! client-safe projection used by the gallery, profile, and dashboard pages.
//!
//! Listings always join the owning profile so cards can show the artist's name
//! and medium without a second round trip; the joined columns land in the
//! optional `artist_name` / `artist_medium` / `artist_bio` fields of
//! [`ArtworkInfo`].

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full artwork record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Artwork {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub artist_id: Uuid,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Artwork {
    /// Convert to ArtworkInfo for client consumption, without artist columns.
    pub fn to_info(&self) -> ArtworkInfo {
        ArtworkInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            image_url: self.image_url.clone(),
            artist_id: self.artist_id.to_string(),
            category: self.category.clone(),
            artist_name: None,
            artist_medium: None,
            artist_bio: None,
        }
    }
}

/// Artwork information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtworkInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub artist_id: String,
    pub category: String,
    /// Owning artist's name, present on joined listings.
    pub artist_name: Option<String>,
    /// Owning artist's medium, present on joined listings.
    pub artist_medium: Option<String>,
    /// Owning artist's bio, present on single-artwork fetches.
    pub artist_bio: Option<String>,
}
