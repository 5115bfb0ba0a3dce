//! Route handlers: each one maps a request onto a single repository call.
//!
//! Failures never surface as 5xx. They are logged and turned into a redirect
//! carrying an `error` flash message. The one exception is a template that
//! fails to render.

use std::convert::Infallible;

use axum::Json;
use axum::extract::{Form, FromRequest, Path, Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::domain::TaskId;
use crate::infra::{DecodeContext, StoreError};
use crate::web::AppState;
use crate::web::flash::{Flash, FlashKind, flash_redirect};
use crate::web::theme::STYLESHEET;

const TITLE_REQUIRED: &str = "Title is required";
const TASK_NOT_FOUND: &str = "Task not found";
const CREATED: &str = "Task created successfully";
const CREATE_FAILED: &str = "Failed to create task";
const DELETED: &str = "Task deleted successfully";
const DELETE_FAILED: &str = "Failed to delete task";
const UPDATED: &str = "Task updated successfully";
const UPDATE_FAILED: &str = "Failed to update task";

/// Body for create and update, sent either form-encoded or as JSON.
///
/// A missing `title` field is treated like an empty one. A body that is
/// absent or cannot be parsed becomes an empty form, so it is rejected as a
/// missing title rather than with a 4xx.
#[derive(Debug, Default, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
}

impl<S: Send + Sync> FromRequest<S> for TaskForm {
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let parsed = if is_json(req.headers()) {
            Json::<TaskForm>::from_request(req, state)
                .await
                .map(|Json(form)| form)
                .map_err(|rejection| rejection.body_text())
        } else {
            Form::<TaskForm>::from_request(req, state)
                .await
                .map(|Form(form)| form)
                .map_err(|rejection| rejection.body_text())
        };

        Ok(parsed.unwrap_or_else(|reason| {
            debug!(reason = %reason, "treating unparseable task body as empty");
            TaskForm::default()
        }))
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
}

/// Runs filesystem work on the blocking pool and waits for it.
async fn run_blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(value) => value,
        Err(err) => std::panic::resume_unwind(err.into_panic()),
    }
}

fn render(page: &str, result: Result<String, minijinja::Error>) -> Response {
    match result {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!(page, error = %err, "template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}

fn parse_id(raw: &str) -> Option<TaskId> {
    match raw.parse() {
        Ok(id) => Some(id),
        Err(err) => {
            warn!(error = %err, "rejected task id from request path");
            None
        }
    }
}

/// Logs a missing task at warn and any other store failure at error.
fn log_lookup_failure(action: &str, err: &StoreError) {
    if err.is_not_found() {
        warn!(action, error = %err, "task not found");
    } else {
        error!(action, error = %err, "task operation failed");
    }
}

/// `GET /`
pub async fn list_tasks(State(state): State<AppState>, flash: Flash) -> Response {
    let store = state.store.clone();
    let tasks = run_blocking(move || store.list_all()).await;
    render("list", state.views.render_list(&tasks, &flash))
}

/// `POST /create-task`
pub async fn create_task(State(state): State<AppState>, form: TaskForm) -> Response {
    let store = state.store.clone();
    let result = run_blocking(move || store.create(&form.title, form.description.as_deref())).await;

    match result {
        Ok(id) => {
            info!(filename = %id.filename(), "task created");
            flash_redirect("/", FlashKind::Success, CREATED).into_response()
        }
        Err(err) if err.is_validation() => {
            debug!("create rejected: missing title");
            flash_redirect("/", FlashKind::Error, TITLE_REQUIRED).into_response()
        }
        Err(err) => {
            error!(error = %err, "error creating task");
            flash_redirect("/", FlashKind::Error, CREATE_FAILED).into_response()
        }
    }
}

/// `GET /task/{id}`
pub async fn show_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    flash: Flash,
) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return flash_redirect("/", FlashKind::Error, TASK_NOT_FOUND).into_response();
    };

    let store = state.store.clone();
    match run_blocking(move || store.read(&id, DecodeContext::Display)).await {
        Ok(task) => render("detail", state.views.render_detail(&task, &flash)),
        Err(err) => {
            log_lookup_failure("read", &err);
            flash_redirect("/", FlashKind::Error, TASK_NOT_FOUND).into_response()
        }
    }
}

/// `POST /delete-task/{id}`
pub async fn delete_task(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return flash_redirect("/", FlashKind::Error, DELETE_FAILED).into_response();
    };

    let store = state.store.clone();
    let target = id.clone();
    match run_blocking(move || store.delete(&target)).await {
        Ok(()) => {
            info!(id = %id, "task deleted");
            flash_redirect("/", FlashKind::Success, DELETED).into_response()
        }
        Err(err) => {
            log_lookup_failure("delete", &err);
            flash_redirect("/", FlashKind::Error, DELETE_FAILED).into_response()
        }
    }
}

/// `GET /edit-task/{id}`
pub async fn edit_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    flash: Flash,
) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return flash_redirect("/", FlashKind::Error, TASK_NOT_FOUND).into_response();
    };

    let store = state.store.clone();
    match run_blocking(move || store.read(&id, DecodeContext::EditForm)).await {
        Ok(task) => render("edit", state.views.render_edit(&task, &flash)),
        Err(err) => {
            log_lookup_failure("edit", &err);
            flash_redirect("/", FlashKind::Error, TASK_NOT_FOUND).into_response()
        }
    }
}

/// `POST /update-task/{id}`
pub async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    form: TaskForm,
) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return flash_redirect("/", FlashKind::Error, TASK_NOT_FOUND).into_response();
    };

    let segment = urlencoding::encode(id.as_str());
    let edit_path = format!("/edit-task/{segment}");

    let store = state.store.clone();
    let target = id.clone();
    let result = run_blocking(move || {
        store.update(&target, &form.title, form.description.as_deref())
    })
    .await;

    match result {
        Ok(()) => {
            info!(id = %id, "task updated");
            flash_redirect(&format!("/task/{segment}"), FlashKind::Success, UPDATED)
                .into_response()
        }
        Err(err) if err.is_validation() => {
            debug!(id = %id, "update rejected: missing title");
            flash_redirect(&edit_path, FlashKind::Error, TITLE_REQUIRED).into_response()
        }
        Err(err) => {
            error!(error = %err, "error updating task");
            flash_redirect(&edit_path, FlashKind::Error, UPDATE_FAILED).into_response()
        }
    }
}

/// `GET /static/style.css`
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
