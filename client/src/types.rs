//! Wire types for the directory API
//!
//! These mirror the JSONPlaceholder-shaped payloads. `Post::comments` is not
//! part of the server response; it is filled in client-side by the enrichment
//! operation and defaults to empty when decoding.

use serde::{Deserialize, Serialize};

/// A directory user. Created server-side; read-only to this system.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier
    pub id: u64,
    /// Full display name
    pub name: String,
    /// Login-style handle
    pub username: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Personal website
    pub website: String,
}

/// A post authored by a user, optionally enriched with its comments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned identifier
    pub id: u64,
    /// Post title
    pub title: String,
    /// Post body text
    pub body: String,
    /// Comments fetched separately; empty until enriched
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A comment on a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Server-assigned identifier
    pub id: u64,
    /// Commenter's display name
    pub name: String,
    /// Comment body text
    pub body: String,
}

/// A todo item belonging to a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-assigned identifier
    pub id: u64,
    /// Owning user
    pub user_id: u64,
    /// Todo title
    pub title: String,
    /// Completion flag
    pub completed: bool,
}

/// Creation payload for a new todo. The server assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    /// Owning user
    pub user_id: u64,
    /// Todo title
    pub title: String,
    /// Completion flag
    pub completed: bool,
}

/// Sort todos by descending id, in place.
///
/// The single comparator shared by the fetch operation and the merge
/// performed after a creation. The sort is stable, so equal ids keep their
/// produced order.
pub fn sort_by_id_desc(todos: &mut [Todo]) {
    todos.sort_by(|a, b| b.id.cmp(&a.id));
}
