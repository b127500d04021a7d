//! Users slice: the user list and its load lifecycle
//!
//! Users are loaded once at startup and never mutated, cleared, or refetched
//! afterwards.

use userboard_client::User;
use userboard_core::{AsyncState, Effect, Phase, Reducer, SmallVec, smallvec};

use crate::environment::AppEnvironment;

/// State of the users slice
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersState {
    /// The user list with its loading/error triple
    pub users: AsyncState<Vec<User>>,
}

/// Actions processed by the users slice
#[derive(Clone, Debug)]
pub enum UsersAction {
    /// Trigger: fetch all users
    Load,
    /// Feedback: the fetch fulfilled
    Loaded(Vec<User>),
    /// Feedback: the fetch rejected with a normalized message
    LoadFailed(String),
}

/// Reducer for the users slice
#[derive(Clone, Debug, Default)]
pub struct UsersReducer;

impl UsersReducer {
    /// Creates a new `UsersReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for UsersReducer {
    type State = UsersState;
    type Action = UsersAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            UsersAction::Load => {
                state.users.apply(Phase::Pending);

                let api = env.api.clone();
                smallvec![Effect::future(async move {
                    Some(match api.list_users().await {
                        Ok(users) => UsersAction::Loaded(users),
                        Err(error) => UsersAction::LoadFailed(error.to_string()),
                    })
                })]
            },
            UsersAction::Loaded(users) => {
                state.users.apply(Phase::Fulfilled(users));
                SmallVec::new()
            },
            UsersAction::LoadFailed(message) => {
                state.users.apply(Phase::Rejected(message));
                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use userboard_testing::mocks::StubApi;
    use userboard_testing::{ReducerTest, assertions};

    fn test_env() -> AppEnvironment {
        AppEnvironment::new(Arc::new(StubApi::new()))
    }

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: name.to_lowercase(),
            email: format!("{name}@example.com"),
            phone: "555-0100".to_string(),
            website: "example.com".to_string(),
        }
    }

    #[test]
    fn load_marks_pending_and_describes_the_fetch() {
        ReducerTest::new(UsersReducer::new())
            .with_env(test_env())
            .given_state(UsersState {
                users: AsyncState {
                    error: Some("stale".to_string()),
                    ..AsyncState::default()
                },
            })
            .when_action(UsersAction::Load)
            .then_state(|state| {
                assert!(state.users.loading);
                assert_eq!(state.users.error, None);
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn loaded_settles_with_exact_shape() {
        let ann = user(1, "Ann");
        let expected = ann.clone();

        ReducerTest::new(UsersReducer::new())
            .with_env(test_env())
            .given_state(UsersState {
                users: AsyncState {
                    loading: true,
                    ..AsyncState::default()
                },
            })
            .when_action(UsersAction::Loaded(vec![ann]))
            .then_state(move |state| {
                assert!(!state.users.loading);
                assert_eq!(state.users.error, None);
                assert_eq!(state.users.data, vec![expected.clone()]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn load_failed_records_the_message() {
        ReducerTest::new(UsersReducer::new())
            .with_env(test_env())
            .given_state(UsersState {
                users: AsyncState {
                    loading: true,
                    ..AsyncState::default()
                },
            })
            .when_action(UsersAction::LoadFailed("Request failed: refused".to_string()))
            .then_state(|state| {
                assert!(!state.users.loading);
                assert_eq!(
                    state.users.error.as_deref(),
                    Some("Request failed: refused")
                );
                assert!(state.users.data.is_empty());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }
}
