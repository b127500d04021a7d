//! Posts/todos slice: posts with comments, todos, and todo creation
//!
//! Three independent lifecycles share this slice, each scoped to its own
//! loading/error fields so posts and todos operations never interfere with
//! each other's flags. Both lists are fetched per interaction and explicitly
//! cleared when the consuming dialog closes.

use userboard_client::{NewTodo, Post, Todo, sort_by_id_desc};
use userboard_core::{AsyncState, Effect, Phase, Reducer, SmallVec, TaskStatus, smallvec};

use crate::environment::AppEnvironment;

/// State of the posts/todos slice
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostsState {
    /// Posts enriched with comments
    pub posts: AsyncState<Vec<Post>>,
    /// Todos sorted by descending id
    pub todos: AsyncState<Vec<Todo>>,
    /// Lifecycle of the create-todo operation (payload merges into `todos`)
    pub create_todo: TaskStatus,
}

/// Actions processed by the posts/todos slice
#[derive(Clone, Debug)]
pub enum PostsAction {
    /// Trigger: fetch a user's posts enriched with comments
    FetchPosts {
        /// The user whose posts to fetch
        user_id: u64,
    },
    /// Feedback: the posts fetch fulfilled
    PostsLoaded(Vec<Post>),
    /// Feedback: the posts fetch rejected
    PostsFailed(String),

    /// Trigger: fetch a user's todos
    FetchTodos {
        /// The user whose todos to fetch
        user_id: u64,
    },
    /// Feedback: the todos fetch fulfilled
    TodosLoaded(Vec<Todo>),
    /// Feedback: the todos fetch rejected
    TodosFailed(String),

    /// Trigger: create a todo
    CreateTodo(NewTodo),
    /// Feedback: the creation fulfilled with the server-assigned record
    TodoCreated(Todo),
    /// Feedback: the creation rejected
    CreateFailed(String),

    /// Reset the posts triple
    ClearPosts,
    /// Reset the todos triple and the create-todo pair
    ClearTodos,
}

/// Merge a newly created todo into a list: prepend, then re-sort by
/// descending id with the same comparator the fetch uses.
///
/// Pure and synchronous; does not imply a refetch.
#[must_use]
pub fn merge_todo(todos: &[Todo], new: Todo) -> Vec<Todo> {
    let mut merged = Vec::with_capacity(todos.len() + 1);
    merged.push(new);
    merged.extend_from_slice(todos);
    sort_by_id_desc(&mut merged);
    merged
}

/// Reducer for the posts/todos slice
#[derive(Clone, Debug, Default)]
pub struct PostsReducer;

impl PostsReducer {
    /// Creates a new `PostsReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for PostsReducer {
    type State = PostsState;
    type Action = PostsAction;
    type Environment = AppEnvironment;

    #[allow(clippy::too_many_lines)] // One arm per lifecycle step
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Posts lifecycle ==========
            PostsAction::FetchPosts { user_id } => {
                state.posts.apply(Phase::Pending);

                let api = env.api.clone();
                smallvec![Effect::future(async move {
                    Some(match api.posts_with_comments(user_id).await {
                        Ok(posts) => PostsAction::PostsLoaded(posts),
                        Err(error) => PostsAction::PostsFailed(error.to_string()),
                    })
                })]
            },
            PostsAction::PostsLoaded(posts) => {
                state.posts.apply(Phase::Fulfilled(posts));
                SmallVec::new()
            },
            PostsAction::PostsFailed(message) => {
                state.posts.apply(Phase::Rejected(message));
                SmallVec::new()
            },

            // ========== Todos lifecycle ==========
            PostsAction::FetchTodos { user_id } => {
                state.todos.apply(Phase::Pending);

                let api = env.api.clone();
                smallvec![Effect::future(async move {
                    Some(match api.todos_by_user(user_id).await {
                        Ok(todos) => PostsAction::TodosLoaded(todos),
                        Err(error) => PostsAction::TodosFailed(error.to_string()),
                    })
                })]
            },
            PostsAction::TodosLoaded(todos) => {
                state.todos.apply(Phase::Fulfilled(todos));
                SmallVec::new()
            },
            PostsAction::TodosFailed(message) => {
                state.todos.apply(Phase::Rejected(message));
                SmallVec::new()
            },

            // ========== Create-todo lifecycle ==========
            PostsAction::CreateTodo(new_todo) => {
                state.create_todo.begin();

                let api = env.api.clone();
                smallvec![Effect::future(async move {
                    Some(match api.create_todo(new_todo).await {
                        Ok(todo) => PostsAction::TodoCreated(todo),
                        Err(error) => PostsAction::CreateFailed(error.to_string()),
                    })
                })]
            },
            PostsAction::TodoCreated(todo) => {
                state.create_todo.succeed();
                state.todos.data = merge_todo(&state.todos.data, todo);
                SmallVec::new()
            },
            PostsAction::CreateFailed(message) => {
                state.create_todo.fail(message);
                SmallVec::new()
            },

            // ========== Resets ==========
            PostsAction::ClearPosts => {
                state.posts.reset();
                SmallVec::new()
            },
            PostsAction::ClearTodos => {
                state.todos.reset();
                state.create_todo.reset();
                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Arc;
    use userboard_client::Comment;
    use userboard_testing::mocks::StubApi;
    use userboard_testing::{ReducerTest, assertions};

    fn test_env() -> AppEnvironment {
        AppEnvironment::new(Arc::new(StubApi::new()))
    }

    fn todo(id: u64) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("todo {id}"),
            completed: false,
        }
    }

    fn post(id: u64) -> Post {
        Post {
            id,
            title: format!("post {id}"),
            body: "body".to_string(),
            comments: vec![Comment {
                id: id * 10,
                name: "commenter".to_string(),
                body: "hi".to_string(),
            }],
        }
    }

    fn dirty_state() -> PostsState {
        PostsState {
            posts: AsyncState {
                data: vec![post(1)],
                loading: true,
                error: Some("old posts error".to_string()),
            },
            todos: AsyncState {
                data: vec![todo(1)],
                loading: true,
                error: Some("old todos error".to_string()),
            },
            create_todo: TaskStatus {
                loading: true,
                error: Some("old create error".to_string()),
            },
        }
    }

    #[test]
    fn fetch_posts_only_touches_the_posts_pair() {
        ReducerTest::new(PostsReducer::new())
            .with_env(test_env())
            .given_state(PostsState {
                todos: AsyncState {
                    loading: true,
                    error: Some("todos busy".to_string()),
                    ..AsyncState::default()
                },
                ..PostsState::default()
            })
            .when_action(PostsAction::FetchPosts { user_id: 1 })
            .then_state(|state| {
                assert!(state.posts.loading);
                assert_eq!(state.posts.error, None);
                // The todos lifecycle is untouched
                assert!(state.todos.loading);
                assert_eq!(state.todos.error.as_deref(), Some("todos busy"));
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn posts_loaded_stores_enriched_posts() {
        ReducerTest::new(PostsReducer::new())
            .with_env(test_env())
            .given_state(PostsState {
                posts: AsyncState {
                    loading: true,
                    ..AsyncState::default()
                },
                ..PostsState::default()
            })
            .when_action(PostsAction::PostsLoaded(vec![post(7), post(8)]))
            .then_state(|state| {
                assert!(!state.posts.loading);
                assert_eq!(state.posts.data.len(), 2);
                assert_eq!(state.posts.data[0].comments.len(), 1);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn todos_loaded_keeps_fetch_order() {
        ReducerTest::new(PostsReducer::new())
            .with_env(test_env())
            .given_state(PostsState::default())
            .when_action(PostsAction::TodosLoaded(vec![todo(3), todo(2), todo(1)]))
            .then_state(|state| {
                let ids: Vec<u64> = state.todos.data.iter().map(|t| t.id).collect();
                assert_eq!(ids, vec![3, 2, 1]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn created_todo_is_merged_and_resorted() {
        ReducerTest::new(PostsReducer::new())
            .with_env(test_env())
            .given_state(PostsState {
                todos: AsyncState {
                    data: vec![todo(3), todo(2), todo(1)],
                    ..AsyncState::default()
                },
                create_todo: TaskStatus {
                    loading: true,
                    ..TaskStatus::default()
                },
                ..PostsState::default()
            })
            .when_action(PostsAction::TodoCreated(todo(5)))
            .then_state(|state| {
                assert!(!state.create_todo.loading);
                let ids: Vec<u64> = state.todos.data.iter().map(|t| t.id).collect();
                assert_eq!(ids, vec![5, 3, 2, 1]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn create_failed_leaves_the_list_alone() {
        ReducerTest::new(PostsReducer::new())
            .with_env(test_env())
            .given_state(PostsState {
                todos: AsyncState {
                    data: vec![todo(2), todo(1)],
                    ..AsyncState::default()
                },
                ..PostsState::default()
            })
            .when_action(PostsAction::CreateFailed("Unknown error".to_string()))
            .then_state(|state| {
                assert_eq!(state.create_todo.error.as_deref(), Some("Unknown error"));
                assert_eq!(state.todos.data.len(), 2);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn clear_posts_resets_only_the_posts_triple() {
        ReducerTest::new(PostsReducer::new())
            .with_env(test_env())
            .given_state(dirty_state())
            .when_action(PostsAction::ClearPosts)
            .then_state(|state| {
                assert_eq!(state.posts, AsyncState::default());
                // Everything todos-related is untouched
                assert_eq!(state.todos.data.len(), 1);
                assert!(state.create_todo.loading);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn clear_todos_zeroes_all_four_todos_fields() {
        ReducerTest::new(PostsReducer::new())
            .with_env(test_env())
            .given_state(dirty_state())
            .when_action(PostsAction::ClearTodos)
            .then_state(|state| {
                assert_eq!(state.todos, AsyncState::default());
                assert_eq!(state.create_todo, TaskStatus::default());
                // The posts triple is untouched
                assert!(state.posts.loading);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    proptest! {
        #[test]
        fn merge_is_one_longer_sorted_and_contains_the_new_todo(
            ids in proptest::collection::vec(0u64..1000, 0..50),
            new_id in 0u64..1000,
        ) {
            let todos: Vec<Todo> = ids.iter().map(|&id| todo(id)).collect();

            let merged = merge_todo(&todos, todo(new_id));

            prop_assert_eq!(merged.len(), todos.len() + 1);
            prop_assert!(merged.iter().any(|t| t.id == new_id));
            prop_assert!(merged.windows(2).all(|w| w[0].id >= w[1].id));
        }
    }
}
