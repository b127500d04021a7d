//! Dialog abstraction and the console implementation
//!
//! Flows talk to a [`Dialogs`] trait and receive typed values back; they
//! never read widget internals. The console implementation renders plain-text
//! dialogs on stdout and reads stdin; its rendering carries no logic.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use userboard_client::{NewTodo, Post, Todo, User};

/// What the user chose in the todos dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TodoChoice {
    /// Add a new todo
    Add,
    /// Close the dialog
    Close,
}

/// Typed values collected by the todo creation form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoDraft {
    /// Proposed title, as entered
    pub title: String,
    /// Proposed completion flag
    pub completed: bool,
}

impl TodoDraft {
    /// Validate the draft before it may be submitted
    ///
    /// # Errors
    ///
    /// Returns the user-facing message when the trimmed title is empty or
    /// longer than 500 characters.
    pub fn validate(&self) -> Result<(), String> {
        let title = self.title.trim();

        if title.is_empty() {
            return Err("Todo title cannot be empty".to_string());
        }

        if title.len() > 500 {
            return Err("Todo title too long (max 500 characters)".to_string());
        }

        Ok(())
    }

    /// Turn a validated draft into the creation payload for a user
    #[must_use]
    pub fn into_new_todo(self, user_id: u64) -> NewTodo {
        NewTodo {
            user_id,
            title: self.title.trim().to_string(),
            completed: self.completed,
        }
    }
}

/// Modal dialog presentation, awaited like any other suspension point
#[async_trait]
pub trait Dialogs: Send + Sync {
    /// Show a user's posts with their comments until dismissed
    async fn show_posts(&self, user: &User, posts: &[Post]);

    /// Show a user's todos and return what the user chose to do next
    async fn show_todos(&self, user: &User, todos: &[Todo]) -> TodoChoice;

    /// Collect a new-todo draft; `None` when the user cancels the form
    async fn collect_todo_draft(&self) -> Option<TodoDraft>;

    /// Show an error dialog until dismissed
    async fn show_error(&self, title: &str, message: &str);
}

/// Read one trimmed line from stdin
pub async fn read_line() -> String {
    let mut line = String::new();
    let mut reader = BufReader::new(tokio::io::stdin());
    let _ = reader.read_line(&mut line).await;
    line.trim().to_string()
}

/// Console rendering of the dialogs
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleDialogs;

impl ConsoleDialogs {
    /// Creates a new `ConsoleDialogs`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Dialogs for ConsoleDialogs {
    async fn show_posts(&self, user: &User, posts: &[Post]) {
        println!("\n=== Posts by {} ===", user.name);
        for post in posts {
            println!("\n  {}", post.title);
            println!("  {}", post.body);
            println!("  Comments:");
            for comment in &post.comments {
                println!("    - {}: {}", comment.name, comment.body);
            }
            if post.comments.is_empty() {
                println!("    (none)");
            }
        }
        println!("\n[enter] close");
        let _ = read_line().await;
    }

    async fn show_todos(&self, user: &User, todos: &[Todo]) -> TodoChoice {
        println!("\n=== Todos for {} ===", user.name);
        for todo in todos {
            let mark = if todo.completed { "x" } else { " " };
            println!("  [{mark}] #{} {}", todo.id, todo.title);
        }
        println!("\n[a] add todo, [enter] close");

        if read_line().await.eq_ignore_ascii_case("a") {
            TodoChoice::Add
        } else {
            TodoChoice::Close
        }
    }

    async fn collect_todo_draft(&self) -> Option<TodoDraft> {
        println!("\n=== New todo ===");
        loop {
            println!("Title (empty to cancel):");
            let title = read_line().await;
            if title.is_empty() {
                return None;
            }

            println!("Completed? [y/N]:");
            let completed = read_line().await.eq_ignore_ascii_case("y");

            let draft = TodoDraft { title, completed };
            match draft.validate() {
                Ok(()) => return Some(draft),
                Err(message) => println!("{message}"),
            }
        }
    }

    async fn show_error(&self, title: &str, message: &str) {
        println!("\n!!! {title}: {message}");
        println!("[enter] close");
        let _ = read_line().await;
    }
}
