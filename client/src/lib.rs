//! # Userboard Client
//!
//! REST client and remote data operations for the userboard directory API.
//!
//! [`DirectoryClient`] is a thin wrapper over one base origin; every request
//! is a relative path against it. The four remote operations the application
//! needs are exposed through the object-safe [`DirectoryApi`] trait so the
//! store environment can hold the production client and tests can hold a
//! scripted stub behind the same seam.
//!
//! Failures are normalized once per operation: whatever went wrong, callers
//! receive an [`ApiError`] whose `Display` output is the message the state
//! slices store and the dialogs show.

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use api::DirectoryApi;
pub use client::{DEFAULT_BASE_URL, DirectoryClient};
pub use error::ApiError;
pub use types::{Comment, NewTodo, Post, Todo, User, sort_by_id_desc};
