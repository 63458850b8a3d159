//! Axum route handlers for the entry API and the HTML pages.

use super::templates::{ENTRY_TEMPLATE_NAME, FORM_TEMPLATE_NAME, INDEX_TEMPLATE_NAME};
use super::AppState;
use crate::error::WakeyError;
use crate::model::{Entry, EntryListing};
use crate::store::EntryStore;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::Form;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

type Shared<S> = State<Arc<AppState<S>>>;

#[derive(Debug, Deserialize)]
pub struct WriteEntryRequest {
    pub contents: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateEntryForm {
    pub title: String,
    pub contents: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Serialize)]
struct EntryPage<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct IndexPage<'a> {
    entries: &'a [String],
}

impl IntoResponse for WakeyError {
    fn into_response(self) -> Response {
        // Write failures share 404 with missing entries; clients rely on it.
        let status = match &self {
            WakeyError::NotFound { .. } | WakeyError::WriteFailed { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self {
            WakeyError::WriteFailed { source, .. } => log::warn!("{} ({})", self, source),
            _ if status.is_server_error() => log::error!("{}", self),
            _ => log::debug!("{}", self),
        }

        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// GET /
pub async fn list_entries<S: EntryStore + 'static>(
    State(state): Shared<S>,
) -> Result<Json<EntryListing>, WakeyError> {
    Ok(Json(state.api.list_entries()?))
}

// GET /{title}
pub async fn get_entry<S: EntryStore + 'static>(
    State(state): Shared<S>,
    Path(title): Path<String>,
) -> Result<Json<Entry>, WakeyError> {
    Ok(Json(state.api.get_entry(&title)?))
}

// POST /{title}
pub async fn write_entry<S: EntryStore + 'static>(
    State(state): Shared<S>,
    Path(title): Path<String>,
    Json(req): Json<WriteEntryRequest>,
) -> Result<Json<Entry>, WakeyError> {
    let entry = state.api.write_entry(&title, &req.contents)?;
    log::info!("Saved entry {}", entry.title);
    Ok(Json(entry))
}

// GET /web/
pub async fn web_index<S: EntryStore + 'static>(
    State(state): Shared<S>,
) -> Result<Html<String>, WakeyError> {
    let listing = state.api.list_entries()?;
    let page = state.pages.render(
        INDEX_TEMPLATE_NAME,
        &IndexPage {
            entries: &listing.entries,
        },
    )?;
    Ok(Html(page))
}

// GET /web/{title}
pub async fn web_entry<S: EntryStore + 'static>(
    State(state): Shared<S>,
    Path(title): Path<String>,
) -> Result<Html<String>, WakeyError> {
    let rendered = state.api.render_entry(&title)?;
    let page = state.pages.render(
        ENTRY_TEMPLATE_NAME,
        &EntryPage {
            title: &rendered.title,
            content: &rendered.html,
        },
    )?;
    Ok(Html(page))
}

// GET /web/form/
pub async fn web_form<S: EntryStore + 'static>(
    State(state): Shared<S>,
) -> Result<Html<String>, WakeyError> {
    let page = state.pages.render(FORM_TEMPLATE_NAME, &())?;
    Ok(Html(page))
}

// POST /web/create
pub async fn web_create<S: EntryStore + 'static>(
    State(state): Shared<S>,
    Form(form): Form<CreateEntryForm>,
) -> Result<Json<Entry>, WakeyError> {
    let entry = state.api.write_entry(&form.title, &form.contents)?;
    log::info!("Saved entry {} from form", entry.title);
    Ok(Json(entry))
}
