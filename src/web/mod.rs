//! HTTP surface: router, shared state, and the server loop.
//!
//! ```text
//! GET  /                   list all tasks
//! POST /create-task        create, then redirect to /
//! GET  /task/{id}          task detail
//! POST /delete-task/{id}   delete, then redirect to /
//! GET  /edit-task/{id}     edit form
//! POST /update-task/{id}   update, then redirect to /task/{id}
//! GET  /static/style.css   stylesheet
//! ```

mod flash;
mod handlers;
mod theme;
mod views;

use std::io;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::infra::TaskStore;

pub use flash::{Flash, FlashKind, flash_redirect, flash_url};
pub use handlers::TaskForm;
pub use theme::STYLESHEET;
pub use views::Views;

/// State shared by every request. Both parts are read-only after startup.
#[derive(Clone)]
pub struct AppState {
    store: Arc<TaskStore>,
    views: Arc<Views>,
}

impl AppState {
    /// Builds state around a store, compiling the page templates.
    pub fn new(store: TaskStore) -> Result<Self, minijinja::Error> {
        Ok(Self {
            store: Arc::new(store),
            views: Arc::new(Views::new()?),
        })
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::list_tasks))
        .route("/create-task", post(handlers::create_task))
        .route("/task/{id}", get(handlers::show_task))
        .route("/delete-task/{id}", post(handlers::delete_task))
        .route("/edit-task/{id}", get(handlers::edit_task))
        .route("/update-task/{id}", post(handlers::update_task))
        .route("/static/style.css", get(handlers::stylesheet))
        .with_state(state)
}

/// Serves the application on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
