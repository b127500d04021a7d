//! Application assembly: the combined state, action, and reducer
//!
//! The composition root owns one store built from the two slice reducers.
//! Each slice is scoped with a state lens and an action prism, so neither
//! slice ever observes the other's state or actions.

use userboard_core::composition::{
    CombinedReducer, ScopedReducer, combine_reducers, scope_reducer,
};
use userboard_runtime::Store;

use crate::environment::AppEnvironment;
use crate::posts::{PostsAction, PostsReducer, PostsState};
use crate::users::{UsersAction, UsersReducer, UsersState};

/// The whole application state: two independent slices
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// The users slice
    pub users: UsersState,
    /// The posts/todos slice
    pub posts: PostsState,
}

/// The whole application action type
#[derive(Clone, Debug)]
pub enum AppAction {
    /// An action for the users slice
    Users(UsersAction),
    /// An action for the posts/todos slice
    Posts(PostsAction),
}

type UsersScoped =
    ScopedReducer<AppState, UsersState, AppAction, UsersAction, AppEnvironment, UsersReducer>;
type PostsScoped =
    ScopedReducer<AppState, PostsState, AppAction, PostsAction, AppEnvironment, PostsReducer>;

/// The application reducer: both slices combined
pub type AppReducer = CombinedReducer<UsersScoped, PostsScoped>;

/// The application store
pub type AppStore = Store<AppState, AppAction, AppEnvironment, AppReducer>;

/// Build the application reducer from the two slice reducers
#[must_use]
pub fn app_reducer() -> AppReducer {
    let users = scope_reducer(
        UsersReducer::new(),
        |app: &AppState| &app.users,
        |app: &mut AppState, users| app.users = users,
        |action: &AppAction| match action {
            AppAction::Users(a) => Some(a.clone()),
            AppAction::Posts(_) => None,
        },
        AppAction::Users,
    );

    let posts = scope_reducer(
        PostsReducer::new(),
        |app: &AppState| &app.posts,
        |app: &mut AppState, posts| app.posts = posts,
        |action: &AppAction| match action {
            AppAction::Posts(a) => Some(a.clone()),
            AppAction::Users(_) => None,
        },
        AppAction::Posts,
    );

    combine_reducers(users, posts)
}
