//! Session constants.
//!
//! The session cookie stores exactly one value: the authenticated user's id,
//! written on login/registration and flushed on logout. Everything else the
//! pages need is re-fetched from the database on each resolution.

/// Key for storing the user ID in the tower-sessions store.
pub const SESSION_USER_ID_KEY: &str = "user_id";
