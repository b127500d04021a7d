//! Reducer composition utilities
//!
//! This module provides utilities for composing slice reducers into an
//! application reducer:
//! - **`combine_reducers`**: run two reducers on the same state/action
//! - **`scope_reducer`**: focus a reducer on a slice of state and a subset of
//!   actions
//!
//! Both combinators preserve `Clone`, which the Store runtime requires of its
//! reducer.

use crate::SmallVec;
use crate::effect::Effect;
use crate::reducer::Reducer;

/// Combines two reducers that operate on the same state and action types.
///
/// Each reducer runs in sequence and all effects are concatenated. Nest calls
/// to combine more than two.
///
/// # Examples
///
/// ```ignore
/// let app_reducer = combine_reducers(users_scoped, posts_scoped);
/// ```
#[must_use]
pub const fn combine_reducers<R1, R2>(first: R1, second: R2) -> CombinedReducer<R1, R2> {
    CombinedReducer { first, second }
}

/// A reducer pair that runs both halves in sequence.
///
/// Created by [`combine_reducers`].
#[derive(Clone, Debug)]
pub struct CombinedReducer<R1, R2> {
    first: R1,
    second: R2,
}

impl<S, A, E, R1, R2> Reducer for CombinedReducer<R1, R2>
where
    A: Clone,
    R1: Reducer<State = S, Action = A, Environment = E>,
    R2: Reducer<State = S, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = self.first.reduce(state, action.clone(), env);
        all_effects.extend(self.second.reduce(state, action, env));
        all_effects
    }
}

/// Scopes a slice reducer to operate inside a larger application state.
///
/// The state lens (`get_state`/`set_state`) focuses the slice's state inside
/// the parent state. The action prism (`extract`/`embed`) routes only the
/// slice's own actions to it and lifts the actions its effects produce back
/// into the parent action type. A scoped reducer therefore never observes
/// another slice's state or actions.
///
/// # Examples
///
/// ```ignore
/// let users_scoped = scope_reducer(
///     UsersReducer::new(),
///     |app: &AppState| &app.users,
///     |app: &mut AppState, users| app.users = users,
///     |action: &AppAction| match action {
///         AppAction::Users(a) => Some(a.clone()),
///         AppAction::Posts(_) => None,
///     },
///     AppAction::Users,
/// );
/// ```
pub const fn scope_reducer<S, CS, A, CA, E, R>(
    reducer: R,
    get_state: fn(&S) -> &CS,
    set_state: fn(&mut S, CS),
    extract: fn(&A) -> Option<CA>,
    embed: fn(CA) -> A,
) -> ScopedReducer<S, CS, A, CA, E, R>
where
    CS: Clone,
    R: Reducer<State = CS, Action = CA, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        extract,
        embed,
        _phantom: std::marker::PhantomData,
    }
}

/// A reducer focused on a slice of state and a subset of actions.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, CS, A, CA, E, R>
where
    CS: Clone,
    R: Reducer<State = CS, Action = CA, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &CS,
    set_state: fn(&mut S, CS),
    extract: fn(&A) -> Option<CA>,
    embed: fn(CA) -> A,
    _phantom: std::marker::PhantomData<(fn() -> S, fn() -> A, fn() -> E)>,
}

impl<S, CS, A, CA, E, R> Clone for ScopedReducer<S, CS, A, CA, E, R>
where
    CS: Clone,
    R: Reducer<State = CS, Action = CA, Environment = E> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            get_state: self.get_state,
            set_state: self.set_state,
            extract: self.extract,
            embed: self.embed,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S, CS, A, CA, E, R> Reducer for ScopedReducer<S, CS, A, CA, E, R>
where
    CS: Clone,
    A: Send + 'static,
    CA: Send + 'static,
    R: Reducer<State = CS, Action = CA, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(child_action) = (self.extract)(&action) else {
            return SmallVec::new();
        };

        // Lens: copy the slice out, reduce, write it back
        let mut child_state = (self.get_state)(state).clone();
        let effects = self.reducer.reduce(&mut child_state, child_action, env);
        (self.set_state)(state, child_state);

        // Prism: lift slice actions produced by effects into the parent type
        let embed = self.embed;
        effects.into_iter().map(|effect| effect.map(embed)).collect()
    }
}
