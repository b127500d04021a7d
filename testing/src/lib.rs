//! # Userboard Testing
//!
//! Testing utilities and helpers for the userboard architecture:
//!
//! - [`ReducerTest`]: fluent Given-When-Then harness for slice reducers
//! - [`assertions`]: helpers for asserting on returned effects
//! - [`mocks::StubApi`]: a scripted `DirectoryApi` for driving reducers and
//!   flows without a network


pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of injected dependencies
pub mod mocks {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use userboard_client::{ApiError, DirectoryApi, NewTodo, Post, Todo, User};

    type Scripted<T> = Mutex<VecDeque<Result<T, ApiError>>>;

    fn pop<T>(queue: &Scripted<T>, operation: &str) -> Result<T, ApiError> {
        queue
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| no_script(operation))
    }

    #[allow(clippy::panic)] // Exhausting the script is a test bug
    fn no_script<T>(operation: &str) -> T {
        panic!("StubApi: no scripted response left for {operation}")
    }

    /// A scripted `DirectoryApi`.
    ///
    /// Each operation pops the next scripted result; running past the script
    /// panics, and every call is recorded for assertion.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let api = StubApi::new()
    ///     .todos_ok(vec![todo(3), todo(2)])
    ///     .create_ok(todo(5));
    /// let env = AppEnvironment::new(Arc::new(api));
    /// ```
    #[derive(Default)]
    pub struct StubApi {
        users: Scripted<Vec<User>>,
        posts: Scripted<Vec<Post>>,
        todos: Scripted<Vec<Todo>>,
        created: Scripted<Todo>,
        calls: Mutex<Vec<String>>,
    }

    impl StubApi {
        /// Create a stub with an empty script
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Script a successful `list_users` response
        #[must_use]
        pub fn users_ok(self, users: Vec<User>) -> Self {
            self.push(|s| &s.users, Ok(users))
        }

        /// Script a failed `list_users` response
        #[must_use]
        pub fn users_err(self, error: ApiError) -> Self {
            self.push(|s| &s.users, Err(error))
        }

        /// Script a successful `posts_with_comments` response
        #[must_use]
        pub fn posts_ok(self, posts: Vec<Post>) -> Self {
            self.push(|s| &s.posts, Ok(posts))
        }

        /// Script a failed `posts_with_comments` response
        #[must_use]
        pub fn posts_err(self, error: ApiError) -> Self {
            self.push(|s| &s.posts, Err(error))
        }

        /// Script a successful `todos_by_user` response
        #[must_use]
        pub fn todos_ok(self, todos: Vec<Todo>) -> Self {
            self.push(|s| &s.todos, Ok(todos))
        }

        /// Script a failed `todos_by_user` response
        #[must_use]
        pub fn todos_err(self, error: ApiError) -> Self {
            self.push(|s| &s.todos, Err(error))
        }

        /// Script a successful `create_todo` response
        #[must_use]
        pub fn create_ok(self, todo: Todo) -> Self {
            self.push(|s| &s.created, Ok(todo))
        }

        /// Script a failed `create_todo` response
        #[must_use]
        pub fn create_err(self, error: ApiError) -> Self {
            self.push(|s| &s.created, Err(error))
        }

        /// The operations invoked so far, in order
        #[must_use]
        pub fn calls(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .clone()
        }

        fn push<T>(self, queue: fn(&Self) -> &Scripted<T>, result: Result<T, ApiError>) -> Self {
            queue(&self)
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .push_back(result);
            self
        }

        fn record(&self, call: String) {
            self.calls
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .push(call);
        }
    }

    #[async_trait]
    impl DirectoryApi for StubApi {
        async fn list_users(&self) -> Result<Vec<User>, ApiError> {
            self.record("list_users".to_string());
            pop(&self.users, "list_users")
        }

        async fn posts_with_comments(&self, user_id: u64) -> Result<Vec<Post>, ApiError> {
            self.record(format!("posts_with_comments({user_id})"));
            pop(&self.posts, "posts_with_comments")
        }

        async fn todos_by_user(&self, user_id: u64) -> Result<Vec<Todo>, ApiError> {
            self.record(format!("todos_by_user({user_id})"));
            pop(&self.todos, "todos_by_user")
        }

        async fn create_todo(&self, new_todo: NewTodo) -> Result<Todo, ApiError> {
            self.record(format!("create_todo({})", new_todo.title));
            pop(&self.created, "create_todo")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::StubApi;
    use userboard_client::{ApiError, DirectoryApi, Todo};

    fn todo(id: u64) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: "t".to_string(),
            completed: false,
        }
    }

    #[tokio::test]
    async fn scripted_results_pop_in_order() {
        let api = StubApi::new()
            .todos_ok(vec![todo(2)])
            .todos_err(ApiError::Unknown);

        assert_eq!(api.todos_by_user(1).await.unwrap().len(), 1);
        assert!(matches!(
            api.todos_by_user(1).await.unwrap_err(),
            ApiError::Unknown
        ));
        assert_eq!(api.calls(), vec!["todos_by_user(1)", "todos_by_user(1)"]);
    }
}
