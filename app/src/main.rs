//! Userboard binary
//!
//! Composition root: builds the environment and store, loads the user list
//! once at startup, then serves the interactive user list until quit.

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userboard::dialog::{ConsoleDialogs, read_line};
use userboard::flows::{view_posts, view_todos};
use userboard::users::UsersAction;
use userboard::{AppAction, AppEnvironment, AppState, app_reducer};
use userboard_client::User;
use userboard_runtime::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userboard=info,userboard_runtime=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Composition root: the store is owned here and lent to the flows
    let env = AppEnvironment::production();
    let store = Store::new(AppState::default(), app_reducer(), env);
    let dialogs = ConsoleDialogs::new();

    println!("Loading users...");
    let settled = store
        .send_and_wait_for(
            AppAction::Users(UsersAction::Load),
            |action| {
                matches!(
                    action,
                    AppAction::Users(UsersAction::Loaded(_) | UsersAction::LoadFailed(_))
                )
            },
            Duration::from_secs(30),
        )
        .await?;

    // Consume the payload from the terminal action; the broadcast arrives
    // before the feedback reduce, so store state may not be settled yet
    let users = match settled {
        AppAction::Users(UsersAction::Loaded(users)) => users,
        AppAction::Users(UsersAction::LoadFailed(message)) => {
            println!("Error: {message}");
            Vec::new()
        },
        _ => Vec::new(),
    };

    loop {
        render_users(&users);
        if users.is_empty() {
            break;
        }

        println!("\nPick: <number> p (posts) | <number> t (todos) | q (quit)");
        let input = read_line().await;
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        match parse_choice(&input, &users) {
            Some((user, Inspect::Posts)) => view_posts(&store, &dialogs, &user).await?,
            Some((user, Inspect::Todos)) => view_todos(&store, &dialogs, &user).await?,
            None => println!("Didn't understand {input:?}"),
        }
    }

    store.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}

enum Inspect {
    Posts,
    Todos,
}

fn render_users(users: &[User]) {
    println!("\n=== Users ===");
    if users.is_empty() {
        println!("(no users)");
        return;
    }
    for (index, user) in users.iter().enumerate() {
        println!(
            "{:>3}. {} (@{}) | {} | {} | {}",
            index + 1,
            user.name,
            user.username,
            user.email,
            user.phone,
            user.website
        );
    }
}

fn parse_choice(input: &str, users: &[User]) -> Option<(User, Inspect)> {
    let mut parts = input.split_whitespace();
    let number: usize = parts.next()?.parse().ok()?;
    let action = match parts.next()? {
        "p" | "P" => Inspect::Posts,
        "t" | "T" => Inspect::Todos,
        _ => return None,
    };
    let user = users.get(number.checked_sub(1)?)?.clone();
    Some((user, action))
}
