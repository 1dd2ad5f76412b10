// To-Do Lists - Web Server
// Page handlers and router

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use rusqlite::Connection;
use serde::Deserialize;
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::trace::TraceLayer;

use crate::db::{self, list_url, List};
use crate::error::{Error, Result};
use crate::pages::{self, ItemForm};
use crate::validation::{validate_item, ItemError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wrap an already-initialized connection (see [`db::setup_database`])
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Another handle on the same connection
    pub fn db_handle(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.db)
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.db.lock().map_err(|_| Error::LockPoisoned)
    }
}

/// Submitted item form. A missing field counts as empty text.
#[derive(Debug, Deserialize)]
pub struct ItemSubmission {
    #[serde(default)]
    pub text: String,
}

// ============================================================================
// Page Handlers
// ============================================================================

/// GET / - Home page with an empty form; never writes
async fn home_page() -> Html<String> {
    Html(pages::render_home(&ItemForm::empty()))
}

/// POST /lists/new - Create a list from its first item
async fn new_list(
    State(state): State<AppState>,
    Form(submission): Form<ItemSubmission>,
) -> Result<Response> {
    let text = match validate_item(&submission.text, std::iter::empty()) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(error = %e, "rejected new list");
            let form = ItemForm::rejected(submission.text, e);
            return Ok(Html(pages::render_home(&form)).into_response());
        }
    };

    let conn = state.conn()?;
    let (list, item) = db::create_list_with_item(&conn, &text)?;
    tracing::info!(list_id = list.id, item_id = item.id, "created list");

    Ok(redirect(&list.url()))
}

/// GET /lists/:id/ - Show a list and its add-item form
async fn view_list(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let conn = state.conn()?;
    let list = find_list(&conn, &id)?;
    let items = db::get_items_for_list(&conn, list.id)?;

    Ok(Html(pages::render_list(&list, &items, &ItemForm::empty())).into_response())
}

/// POST /lists/:id/ - Append an item to an existing list
async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(submission): Form<ItemSubmission>,
) -> Result<Response> {
    let conn = state.conn()?;
    let list = find_list(&conn, &id)?;
    let items = db::get_items_for_list(&conn, list.id)?;

    match validate_item(&submission.text, items.iter().map(|item| item.text.as_str())) {
        Ok(text) => match db::insert_item(&conn, list.id, &text) {
            Ok(item) => {
                tracing::info!(list_id = list.id, item_id = item.id, "added item");
                Ok(redirect(&list.url()))
            }
            Err(Error::DuplicateItem { .. }) => {
                let form = ItemForm::rejected(submission.text, ItemError::Duplicate);
                Ok(Html(pages::render_list(&list, &items, &form)).into_response())
            }
            Err(e) => Err(e),
        },
        Err(e) => {
            tracing::debug!(list_id = list.id, error = %e, "rejected item");
            let form = ItemForm::rejected(submission.text, e);
            Ok(Html(pages::render_list(&list, &items, &form)).into_response())
        }
    }
}

/// GET /lists/:id - Add the trailing slash
async fn append_slash(Path(id): Path<String>) -> Result<Response> {
    let id = parse_list_id(&id)?;
    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, list_url(id))],
    )
        .into_response())
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_list_id(raw: &str) -> Result<i64> {
    // Only plain digits name a list; anything else is simply not found
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::ListNotFound(raw.to_string()));
    }
    raw.parse().map_err(|_| Error::ListNotFound(raw.to_string()))
}

fn find_list(conn: &Connection, raw_id: &str) -> Result<List> {
    let id = parse_list_id(raw_id)?;
    db::get_list(conn, id)?.ok_or_else(|| Error::ListNotFound(id.to_string()))
}

/// 302 Found (axum's `Redirect::to` answers 303)
fn redirect(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/lists/new", post(new_list))
        .route("/lists/:id/", get(view_list).post(add_item))
        .route("/lists/:id", get(append_slash))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
