//! # Object storage for uploaded images
//!
//! Disk-backed replacement for the hosted file-storage buckets the app used to
//! lean on. Two logical buckets exist:
//!
//! | Bucket | Contents | Key shape |
//! |--------|----------|-----------|
//! | [`Bucket::Avatars`] | profile images | `<user_id>-avatar.<ext>` (upsert) |
//! | [`Bucket::Artworks`] | artwork images | `<user_id>/<random>.<ext>` |
//!
//! ## Layout
//!
//! ```text
//! <UPLOADS_DIR>/
//! ├── avatars/
//! │   └── <user_id>-avatar.png
//! └── artworks/
//!     └── <user_id>/
//!         └── <random>.jpg
//! ```
//!
//! The web server exposes `<UPLOADS_DIR>` read-only at `/uploads`, so
//! [`DiskStorage::public_url`] is `<PUBLIC_BASE_URL>/uploads/<bucket>/<key>`.
//! Keys are validated before touching the filesystem: relative, at most one
//! directory level, no `.`/`..` segments.

#[cfg(feature = "server")]
mod disk;

#[cfg(feature = "server")]
pub use disk::{file_ext, DiskStorage, StorageError};

/// Logical bucket for an uploaded object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Profile images, one per user, overwritten on change.
    Avatars,
    /// Artwork images, one directory per artist.
    Artworks,
}

impl Bucket {
    /// Directory name under the uploads root and the `/uploads` URL prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Avatars => "avatars",
            Bucket::Artworks => "artworks",
        }
    }
}
