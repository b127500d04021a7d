//! # Userboard Core
//!
//! Core traits and types for the userboard architecture.
//!
//! This crate provides the fundamental abstractions for driving a user
//! directory frontend through unidirectional data flow: state slices are
//! updated by pure reducers, and all I/O is described as effects that the
//! runtime executes and feeds back as actions.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a slice (users, posts/todos)
//! - **Action**: All possible inputs to a reducer, including the
//!   fulfilled/rejected feedback produced by remote operations
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Example
//!
//! ```ignore
//! use userboard_core::{Reducer, Effect, smallvec, SmallVec};
//!
//! impl Reducer for UsersReducer {
//!     type State = UsersState;
//!     type Action = UsersAction;
//!     type Environment = AppEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut UsersState,
//!         action: UsersAction,
//!         env: &AppEnvironment,
//!     ) -> SmallVec<[Effect<UsersAction>; 4]> {
//!         match action {
//!             UsersAction::Load => {
//!                 state.users.apply(Phase::Pending);
//!                 let api = env.api.clone();
//!                 smallvec![Effect::future(async move {
//!                     Some(match api.list_users().await {
//!                         Ok(users) => UsersAction::Loaded(users),
//!                         Err(err) => UsersAction::LoadFailed(err.to_string()),
//!                     })
//!                 })]
//!             }
//!             // ...
//!         }
//!     }
//! }
//! ```

// Re-export commonly used types
pub use smallvec::{SmallVec, smallvec};

pub use effect::Effect;
pub use lifecycle::{AsyncState, Phase, TaskStatus};
pub use reducer::Reducer;

pub mod composition;
pub mod lifecycle;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all state transitions and are deterministic and testable.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for slice logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The slice state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime. They are
/// values (not execution) and are composable.
pub mod effect {
    use futures::future::BoxFuture;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[allow(missing_docs)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into
        /// the reducer. Remote operations are expressed this way: the future
        /// performs the request and resolves to the fulfilled or rejected
        /// feedback action.
        Future(BoxFuture<'static, Option<Action>>),

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
            }
        }
    }

    impl<Action: Send + 'static> Effect<Action> {
        /// Wrap an async computation as an effect
        pub fn future<F>(fut: F) -> Effect<Action>
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(fut))
        }

        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Map the action type produced by this effect
        ///
        /// Used by scoped reducers to embed a slice's actions into the parent
        /// action type without the slice knowing about the parent.
        pub fn map<B, F>(self, f: F) -> Effect<B>
        where
            B: Send + 'static,
            F: Fn(Action) -> B + Send + Sync + Clone + 'static,
        {
            match self {
                Effect::None => Effect::None,
                Effect::Future(fut) => {
                    Effect::Future(Box::pin(async move { fut.await.map(f) }))
                },
                Effect::Parallel(effects) => Effect::Parallel(
                    effects.into_iter().map(|e| e.map(f.clone())).collect(),
                ),
                Effect::Sequential(effects) => Effect::Sequential(
                    effects.into_iter().map(|e| e.map(f.clone())).collect(),
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Inner {
        Done(u32),
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Outer {
        Inner(Inner),
    }

    #[test]
    fn effect_debug_hides_future() {
        let effect = Effect::future(async { Some(Inner::Done(1)) });
        assert_eq!(format!("{effect:?}"), "Effect::Future(<future>)");
    }

    #[test]
    fn map_embeds_future_actions() {
        let effect = Effect::future(async { Some(Inner::Done(7)) }).map(Outer::Inner);
        let Effect::Future(fut) = effect else {
            unreachable!("future effect maps to a future effect");
        };
        let action = tokio_test::block_on(fut);
        assert_eq!(action, Some(Outer::Inner(Inner::Done(7))));
    }

    #[test]
    fn map_preserves_structure() {
        let effect = Effect::merge(vec![
            Effect::None,
            Effect::future(async { Some(Inner::Done(2)) }),
        ])
        .map(Outer::Inner);

        let Effect::Parallel(effects) = effect else {
            unreachable!("parallel effect maps to a parallel effect");
        };
        assert_eq!(effects.len(), 2);
        assert!(matches!(effects[0], Effect::None));
        assert!(matches!(effects[1], Effect::Future(_)));
    }
}
