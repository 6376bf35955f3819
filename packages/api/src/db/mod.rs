//! # Database module — PostgreSQL connection pool management
//!
//! The shared PostgreSQL connection pool used by every server function in the
//! `api` crate, gated behind `#[cfg(feature = "server")]` so client (WASM)
//! builds never pull in SQLx or Tokio networking code.
//!
//! The pool is a lazy, process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]: the first call to [`get_pool`] reads
//! `DATABASE_URL` from the environment (via `dotenvy`) and opens the pool;
//! a missing `DATABASE_URL` is fatal at startup.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
