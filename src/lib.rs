//! taskdir - a web task manager keeping each task in its own text file

pub mod cli;
pub mod domain;
pub mod infra;
pub mod web;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, config::Config};
use infra::TaskStore;
use web::AppState;

/// Main entry point for the server binary.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let config = Config::load(cli.config.as_deref())?;
    let tasks_dir = config.tasks_dir(cli.dir.as_ref());
    let addr = config.bind_addr(cli.host.as_deref(), cli.port);

    let store = TaskStore::open(&tasks_dir).with_context(|| {
        format!("failed to prepare task directory: {}", tasks_dir.display())
    })?;
    info!(dir = %store.dir().display(), "tasks are stored in this directory");
    let state = AppState::new(store).context("failed to compile page templates")?;

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local_addr = listener.local_addr().context("failed to read bound address")?;

    info!("task manager running on http://{local_addr}");

    web::serve(listener, state).await.context("server error")
}

/// Installs the console subscriber.
///
/// A valid `RUST_LOG` wins; otherwise `default_level` applies.
fn init_tracing(default_level: &str) {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
