//! The remote data operations behind an injectable trait

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{NewTodo, Post, Todo, User};

/// The four remote data operations the application performs.
///
/// Object-safe so environments can hold `Arc<dyn DirectoryApi>`: production
/// code injects [`crate::DirectoryClient`], tests inject a scripted stub.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// undecodable body.
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// Fetch a user's posts, each enriched with its comments.
    ///
    /// Comment fetches run in parallel. A failed comment fetch leaves that
    /// post with empty comments rather than failing the operation; only the
    /// initial posts fetch can reject. The result preserves the server's
    /// post order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] only when the posts fetch itself fails.
    async fn posts_with_comments(&self, user_id: u64) -> Result<Vec<Post>, ApiError>;

    /// Fetch a user's todos, sorted by descending id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// undecodable body.
    async fn todos_by_user(&self, user_id: u64) -> Result<Vec<Todo>, ApiError>;

    /// Create a todo and return the server-assigned record.
    ///
    /// Never touches any list; merging the result into state is the caller's
    /// responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// undecodable body.
    async fn create_todo(&self, new_todo: NewTodo) -> Result<Todo, ApiError>;
}
