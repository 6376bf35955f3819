//! # API crate — fullstack server functions for Basqi
//!
//! This crate is the backbone of the Basqi fullstack architecture. It defines
//! every Dioxus server function the web frontend calls, along with the
//! supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Password hashing (Argon2) and the session user-id key |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database rows (`User`, `Profile`, `Artwork`) and their client-safe projections |
//! | [`storage`] | — | Disk-backed object store for avatar and artwork images |
//! | [`validate`] | — | Form validation shared by client and server |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` or `#[post(...)]` and compiled twice: once with full
//! server logic (behind `#[cfg(feature = "server")]`) and once as a thin client
//! stub that forwards the call over HTTP.
//!
//! - **Session**: `get_current_profile`, `register`, `login`, `logout`
//! - **Profiles**: `update_profile`, `upload_avatar`, `list_artists`
//! - **Artworks**: `list_artworks`, `list_my_artworks`, `get_artwork`,
//!   `create_artwork`, `delete_artwork`
//!
//! The session bootstrap lives in `get_current_profile`: the first resolution
//! of a session whose identity has no profile row inserts a default row with
//! empty name/medium, which is what routes a fresh account to profile
//! completion.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;
pub mod storage;
pub mod validate;

pub use models::{ArtworkInfo, ProfileInfo};
pub use storage::Bucket;

#[cfg(feature = "server")]
use models::Profile;

/// Fetch-or-create insert for the lazy profile bootstrap. `ON CONFLICT DO
/// NOTHING` keeps a racing second resolution from inserting a duplicate.
#[cfg(feature = "server")]
const BOOTSTRAP_PROFILE_SQL: &str =
    "INSERT INTO profiles (id, name, email, medium) VALUES ($1, $2, $3, $4)
     ON CONFLICT (id) DO NOTHING";

/// Owner-scoped delete: filters on both the artwork id and the session's
/// artist id, so nobody can delete another artist's work.
#[cfg(feature = "server")]
const DELETE_OWNED_ARTWORK_SQL: &str = "DELETE FROM artworks WHERE id = $1 AND artist_id = $2";

/// Resolve the profile for an authenticated user, inserting the default row
/// on first resolution. The insert uses `ON CONFLICT DO NOTHING` followed by a
/// re-fetch so a racing second resolution still ends up with exactly one row.
#[cfg(feature = "server")]
async fn resolve_profile(
    pool: &sqlx::PgPool,
    user_id: uuid::Uuid,
) -> Result<Option<Profile>, ServerFnError> {
    let profile: Option<Profile> = sqlx::query_as("SELECT * FROM profiles WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if let Some(profile) = profile {
        return Ok(Some(profile));
    }

    // No profile yet: this identity just signed up.
    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        // Stale session pointing at a deleted account.
        return Ok(None);
    };

    let fresh = Profile::bootstrap(user_id, &user.email);
    sqlx::query(BOOTSTRAP_PROFILE_SQL)
        .bind(fresh.id)
        .bind(&fresh.name)
        .bind(&fresh.email)
        .bind(&fresh.medium)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile: Profile = sqlx::query_as("SELECT * FROM profiles WHERE id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user_id = %user_id, "bootstrapped empty profile on first session resolution");

    Ok(Some(profile))
}

/// Read the authenticated user id out of the session, if any.
#[cfg(feature = "server")]
async fn session_user_id(
    session: &tower_sessions::Session,
) -> Result<Option<uuid::Uuid>, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    match user_id {
        Some(id) => {
            let uuid =
                uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;
            Ok(Some(uuid))
        }
        None => Ok(None),
    }
}

/// Like [`session_user_id`] but an absent session is an error.
#[cfg(feature = "server")]
async fn require_user_id(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, ServerFnError> {
    session_user_id(session)
        .await?
        .ok_or_else(|| ServerFnError::new("Not authenticated"))
}

/// Get the current authenticated profile from the session, lazily creating
/// the profile row on first resolution.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_profile() -> Result<Option<ProfileInfo>, ServerFnError> {
    use crate::db::get_pool;

    let Some(user_id) = session_user_id(&session).await? else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile = resolve_profile(pool, user_id).await?;
    Ok(profile.map(|p| p.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_profile() -> Result<Option<ProfileInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new account with email and password. The profile row is NOT
/// created here; the session bootstrap creates it empty, which lands the new
/// account on profile completion.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(email: String, password: String) -> Result<ProfileInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    if !validate::email(&email) {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if let Err(msg) = validate::password(&password) {
        return Err(ServerFnError::new(msg));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i64,)> = sqlx::query_as("SELECT 1 as n FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(ServerFnError::new)?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile = resolve_profile(pool, user.id)
        .await?
        .ok_or_else(|| ServerFnError::new("Failed to create profile"))?;

    Ok(profile.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(email: String, password: String) -> Result<ProfileInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password, returning the resolved profile.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<ProfileInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash).map_err(ServerFnError::new)?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile = resolve_profile(pool, user.id)
        .await?
        .ok_or_else(|| ServerFnError::new("Failed to resolve profile"))?;

    Ok(profile.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<ProfileInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by flushing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Update the current user's profile. Name and medium are required; bio and
/// avatar URL are optional.
#[cfg(feature = "server")]
#[post("/api/profile", session: tower_sessions::Session)]
pub async fn update_profile(
    name: String,
    medium: String,
    bio: Option<String>,
    profile_image: Option<String>,
) -> Result<ProfileInfo, ServerFnError> {
    use crate::db::get_pool;

    let user_id = require_user_id(&session).await?;

    let name = name.trim().to_string();
    let medium = medium.trim().to_string();
    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }
    if medium.is_empty() {
        return Err(ServerFnError::new("Medium is required"));
    }

    let bio = bio.filter(|b| !b.trim().is_empty());

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile: Profile = sqlx::query_as(
        "UPDATE profiles
         SET name = $2, medium = $3, bio = $4,
             profile_image = COALESCE($5, profile_image)
         WHERE id = $1
         RETURNING *",
    )
    .bind(user_id)
    .bind(&name)
    .bind(&medium)
    .bind(&bio)
    .bind(&profile_image)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(profile.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/profile")]
pub async fn update_profile(
    name: String,
    medium: String,
    bio: Option<String>,
    profile_image: Option<String>,
) -> Result<ProfileInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Store an avatar image for the current user and return its public URL.
/// The key is stable per user up to the file extension; re-uploading
/// overwrites the object and removes any sibling left by an earlier upload
/// with a different extension.
#[cfg(feature = "server")]
#[post("/api/profile/avatar", session: tower_sessions::Session)]
pub async fn upload_avatar(filename: String, bytes: Vec<u8>) -> Result<String, ServerFnError> {
    use crate::storage::{file_ext, DiskStorage};

    let user_id = require_user_id(&session).await?;

    if bytes.is_empty() {
        return Err(ServerFnError::new("Empty file"));
    }

    let store = DiskStorage::from_env();
    let prefix = format!("{}-avatar.", user_id);
    let key = format!("{}{}", prefix, file_ext(&filename));

    store
        .store(Bucket::Avatars, &key, &bytes, true)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // The key varies with the file extension, so a re-upload under a new
    // extension must drop the previous avatar object.
    store
        .remove_stale(Bucket::Avatars, &prefix, &key)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    store
        .public_url(Bucket::Avatars, &key)
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/profile/avatar")]
pub async fn upload_avatar(filename: String, bytes: Vec<u8>) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List all artists with a complete profile, newest first.
#[cfg(feature = "server")]
#[get("/api/artists")]
pub async fn list_artists() -> Result<Vec<ProfileInfo>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profiles: Vec<Profile> = sqlx::query_as(
        "SELECT * FROM profiles WHERE name <> '' AND medium <> '' ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(profiles.iter().map(|p| p.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/artists")]
pub async fn list_artists() -> Result<Vec<ProfileInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Artwork row joined with the owning artist's public columns.
#[cfg(feature = "server")]
#[derive(Debug, sqlx::FromRow)]
struct JoinedArtwork {
    id: uuid::Uuid,
    title: String,
    description: String,
    price: f64,
    image_url: String,
    artist_id: uuid::Uuid,
    category: String,
    artist_name: String,
    artist_medium: String,
    artist_bio: Option<String>,
}

#[cfg(feature = "server")]
impl JoinedArtwork {
    fn into_info(self) -> ArtworkInfo {
        ArtworkInfo {
            id: self.id.to_string(),
            title: self.title,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
            artist_id: self.artist_id.to_string(),
            category: self.category,
            artist_name: Some(self.artist_name),
            artist_medium: Some(self.artist_medium),
            artist_bio: self.artist_bio,
        }
    }
}

#[cfg(feature = "server")]
const JOINED_ARTWORK_SELECT: &str = "SELECT a.id, a.title, a.description, a.price, a.image_url,
        a.artist_id, a.category,
        p.name AS artist_name, p.medium AS artist_medium, p.bio AS artist_bio
 FROM artworks a
 JOIN profiles p ON p.id = a.artist_id";

/// List every artwork in the gallery, newest first, with artist columns.
#[cfg(feature = "server")]
#[get("/api/artworks")]
pub async fn list_artworks() -> Result<Vec<ArtworkInfo>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<JoinedArtwork> =
        sqlx::query_as(&format!("{} ORDER BY a.created_at DESC", JOINED_ARTWORK_SELECT))
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.into_iter().map(|r| r.into_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/artworks")]
pub async fn list_artworks() -> Result<Vec<ArtworkInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the current user's artworks, newest first.
#[cfg(feature = "server")]
#[get("/api/artworks/mine", session: tower_sessions::Session)]
pub async fn list_my_artworks() -> Result<Vec<ArtworkInfo>, ServerFnError> {
    use crate::db::get_pool;

    let user_id = require_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<models::Artwork> = sqlx::query_as(
        "SELECT * FROM artworks WHERE artist_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(|a| a.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/artworks/mine")]
pub async fn list_my_artworks() -> Result<Vec<ArtworkInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch a single artwork with the artist's name, medium, and bio.
#[cfg(feature = "server")]
#[get("/api/artworks/:id")]
pub async fn get_artwork(id: String) -> Result<Option<ArtworkInfo>, ServerFnError> {
    use crate::db::get_pool;

    let artwork_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<JoinedArtwork> =
        sqlx::query_as(&format!("{} WHERE a.id = $1", JOINED_ARTWORK_SELECT))
            .bind(artwork_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|r| r.into_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/artworks/:id")]
pub async fn get_artwork(id: String) -> Result<Option<ArtworkInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create an artwork: store the image, then insert the row. If the insert
/// fails after the image was stored, the stored object is removed so no
/// orphan is left behind.
#[cfg(feature = "server")]
#[post("/api/artworks", session: tower_sessions::Session)]
pub async fn create_artwork(
    title: String,
    description: String,
    price: f64,
    category: String,
    filename: String,
    bytes: Vec<u8>,
) -> Result<ArtworkInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::storage::{file_ext, DiskStorage};

    let user_id = require_user_id(&session).await?;

    let title = title.trim().to_string();
    let category = category.trim().to_string();
    if title.is_empty() {
        return Err(ServerFnError::new("Title is required"));
    }
    if category.is_empty() {
        return Err(ServerFnError::new("Category is required"));
    }
    if let Err(msg) = validate::price(price) {
        return Err(ServerFnError::new(msg));
    }
    if bytes.is_empty() {
        return Err(ServerFnError::new("Empty file"));
    }

    let store = DiskStorage::from_env();
    let key = format!("{}/{}.{}", user_id, uuid::Uuid::new_v4(), file_ext(&filename));

    store
        .store(Bucket::Artworks, &key, &bytes, false)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let image_url = store
        .public_url(Bucket::Artworks, &key)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let inserted: Result<models::Artwork, sqlx::Error> = sqlx::query_as(
        "INSERT INTO artworks (title, description, price, image_url, artist_id, category)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING *",
    )
    .bind(&title)
    .bind(&description)
    .bind(price)
    .bind(&image_url)
    .bind(user_id)
    .bind(&category)
    .fetch_one(pool)
    .await;

    match inserted {
        Ok(artwork) => Ok(artwork.to_info()),
        Err(e) => {
            // Best-effort cleanup of the image whose row never landed.
            if let Err(rm) = store.remove(Bucket::Artworks, &key) {
                tracing::warn!(key = %key, error = %rm, "failed to clean up orphaned artwork image");
            }
            Err(ServerFnError::new(e.to_string()))
        }
    }
}

#[cfg(not(feature = "server"))]
#[post("/api/artworks")]
pub async fn create_artwork(
    title: String,
    description: String,
    price: f64,
    category: String,
    filename: String,
    bytes: Vec<u8>,
) -> Result<ArtworkInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete an artwork owned by the current user. The statement filters on both
/// the artwork id and the session's artist id, so nobody can delete another
/// artist's work.
#[cfg(feature = "server")]
#[post("/api/artworks/delete", session: tower_sessions::Session)]
pub async fn delete_artwork(id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user_id = require_user_id(&session).await?;

    let artwork_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query(DELETE_OWNED_ARTWORK_SQL)
        .bind(artwork_id)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Artwork not found"));
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/artworks/delete")]
pub async fn delete_artwork(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_insert_never_duplicates_a_profile() {
        assert!(BOOTSTRAP_PROFILE_SQL.contains("ON CONFLICT (id) DO NOTHING"));
        // All four columns come from Profile::bootstrap, never literals.
        assert!(BOOTSTRAP_PROFILE_SQL.contains("($1, $2, $3, $4)"));
    }

    #[test]
    fn artwork_delete_is_owner_scoped() {
        assert!(DELETE_OWNED_ARTWORK_SQL.contains("id = $1"));
        assert!(DELETE_OWNED_ARTWORK_SQL.contains("AND artist_id = $2"));
    }
}
