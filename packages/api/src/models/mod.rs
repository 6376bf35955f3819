//! Data models for the application.

mod artwork;
mod profile;
mod user;

#[cfg(feature = "server")]
pub use artwork::Artwork;
pub use artwork::ArtworkInfo;
#[cfg(feature = "server")]
pub use profile::Profile;
pub use profile::ProfileInfo;
#[cfg(feature = "server")]
pub use user::User;
