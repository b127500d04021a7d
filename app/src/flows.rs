//! View orchestration: sequences remote operations and dialog presentation
//!
//! Each flow sends a trigger action, waits for its terminal feedback action,
//! and renders dialogs from the resolved payload. The todo-creation sub-flow
//! works on an explicit local snapshot of the fetched list, never on live
//! store state.

use std::time::Duration;

use userboard_client::{Todo, User};
use userboard_runtime::StoreError;

use crate::app::{AppAction, AppStore};
use crate::dialog::{Dialogs, TodoChoice};
use crate::posts::{PostsAction, merge_todo};

/// Upper bound on waiting for an operation's terminal action.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch and present a user's posts with comments.
///
/// On success the posts dialog is shown and the posts triple is cleared when
/// it closes. On failure an error dialog is shown; no reset beyond the
/// rejection already recorded in the slice.
///
/// # Errors
///
/// Returns [`StoreError`] when the store is shutting down or the operation
/// never settles.
pub async fn view_posts(
    store: &AppStore,
    dialogs: &dyn Dialogs,
    user: &User,
) -> Result<(), StoreError> {
    let settled = store
        .send_and_wait_for(
            AppAction::Posts(PostsAction::FetchPosts { user_id: user.id }),
            |action| {
                matches!(
                    action,
                    AppAction::Posts(PostsAction::PostsLoaded(_) | PostsAction::PostsFailed(_))
                )
            },
            SETTLE_TIMEOUT,
        )
        .await?;

    match settled {
        AppAction::Posts(PostsAction::PostsLoaded(posts)) => {
            dialogs.show_posts(user, &posts).await;
            store.send(AppAction::Posts(PostsAction::ClearPosts)).await?;
        },
        AppAction::Posts(PostsAction::PostsFailed(message)) => {
            dialogs.show_error("Could not load posts", &message).await;
        },
        // The predicate admits only the two terminal actions
        _ => {},
    }

    Ok(())
}

/// Fetch and present a user's todos, with the add-todo sub-flow.
///
/// The todos triple and the create-todo pair are cleared on every exit path,
/// including a failed fetch.
///
/// # Errors
///
/// Returns [`StoreError`] when the store is shutting down or an operation
/// never settles.
pub async fn view_todos(
    store: &AppStore,
    dialogs: &dyn Dialogs,
    user: &User,
) -> Result<(), StoreError> {
    let settled = store
        .send_and_wait_for(
            AppAction::Posts(PostsAction::FetchTodos { user_id: user.id }),
            |action| {
                matches!(
                    action,
                    AppAction::Posts(PostsAction::TodosLoaded(_) | PostsAction::TodosFailed(_))
                )
            },
            SETTLE_TIMEOUT,
        )
        .await?;

    match settled {
        AppAction::Posts(PostsAction::TodosLoaded(todos)) => {
            // Local snapshot: the sub-flow below never re-reads store state
            todos_dialog_loop(store, dialogs, user, todos).await?;
        },
        AppAction::Posts(PostsAction::TodosFailed(message)) => {
            dialogs.show_error("Could not load todos", &message).await;
        },
        _ => {},
    }

    store.send(AppAction::Posts(PostsAction::ClearTodos)).await?;
    Ok(())
}

/// Display the todos list until the user closes it, handling creation.
async fn todos_dialog_loop(
    store: &AppStore,
    dialogs: &dyn Dialogs,
    user: &User,
    mut snapshot: Vec<Todo>,
) -> Result<(), StoreError> {
    loop {
        match dialogs.show_todos(user, &snapshot).await {
            TodoChoice::Close => return Ok(()),
            TodoChoice::Add => {
                let Some(draft) = dialogs.collect_todo_draft().await else {
                    // Cancelled: redisplay the unchanged snapshot
                    continue;
                };

                if let Err(message) = draft.validate() {
                    dialogs.show_error("Invalid todo", &message).await;
                    continue;
                }

                let settled = store
                    .send_and_wait_for(
                        AppAction::Posts(PostsAction::CreateTodo(draft.into_new_todo(user.id))),
                        |action| {
                            matches!(
                                action,
                                AppAction::Posts(
                                    PostsAction::TodoCreated(_) | PostsAction::CreateFailed(_)
                                )
                            )
                        },
                        SETTLE_TIMEOUT,
                    )
                    .await?;

                match settled {
                    AppAction::Posts(PostsAction::TodoCreated(todo)) => {
                        tracing::debug!(todo_id = todo.id, "todo created, merging into snapshot");
                        snapshot = merge_todo(&snapshot, todo);
                    },
                    AppAction::Posts(PostsAction::CreateFailed(message)) => {
                        // Redisplay the original, unmodified snapshot
                        dialogs.show_error("Could not create todo", &message).await;
                    },
                    _ => {},
                }
            },
        }
    }
}
