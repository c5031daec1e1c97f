//! Console walkthrough: a store, a console-rendered list view, and the full
//! add/toggle/remove lifecycle.
//!
//! Run with `RUST_LOG=debug` to watch the store's command handling.

use todoflow_app::{TodoState, TodoStore};
use todoflow_view::{ConsoleSurface, ViewError, attach};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ViewError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store = TodoStore::new();
    let (_view, subscription) = attach(&store, ConsoleSurface::new()).await?;

    println!("-- adding tasks --");
    let _ = store.add_todo("  Buy groceries  ").await;
    let _ = store.add_todo("Water the plants").await;
    let _ = store.add_todo("Call the landlord").await;

    // Blank input is rejected by the store; nothing is printed for it.
    let _ = store.add_todo("   ").await;

    println!("-- completing and removing the first task --");
    let first = store.state(|s| s.todos.first().map(|t| t.id.clone())).await;
    if let Some(id) = first {
        let _ = store.toggle_todo(&id).await;
        let _ = store.remove_todo(&id).await;
    }

    let (open, done) = store
        .state(|s| (s.count() - s.completed_count(), s.completed_count()))
        .await;
    tracing::info!(open, done, "lifecycle finished");

    println!("-- detaching the view --");
    subscription.unsubscribe();

    // This mutation still commits, but the console no longer renders it.
    let _ = store.add_todo("Invisible to the view").await;
    println!("tasks in store: {}", store.state(TodoState::count).await);

    Ok(())
}
