//! Notes REST API — CRUD over the in-memory note store.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;

use crate::error::NoteError;
use crate::notes::validate::{EXPECTED_JSON, INVALID_BODY};
use crate::notes::{validate_create, validate_update};
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.app_data(path_config());
    cfg.service(
        web::resource("/notes")
            .route(web::get().to(list_notes))
            .route(web::post().to(create_note)),
    );
    cfg.service(
        web::resource("/notes/{id}")
            .route(web::get().to(get_note))
            .route(web::put().to(update_note))
            .route(web::delete().to(delete_note)),
    );
}

/// Body extraction failures become 400s carrying our error shape.
/// Note size is unbounded, so the body limit is lifted.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(usize::MAX)
        .error_handler(|err: JsonPayloadError, req: &HttpRequest| {
            log::debug!("Rejected body for {} {}: {}", req.method(), req.path(), err);
            let message = match err {
                JsonPayloadError::ContentType => EXPECTED_JSON,
                _ => INVALID_BODY,
            };
            NoteError::invalid(message).into()
        })
}

/// An ID that is not an integer cannot name a note
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, req: &HttpRequest| {
        log::debug!("Unmatched note id in {}: {}", req.path(), err);
        NoteError::NotFound.into()
    })
}

/// List all notes
async fn list_notes(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.notes.list())
}

/// Create a note from `{title, content?}`
async fn create_note(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, NoteError> {
    let new_note = validate_create(&body).inspect_err(|e| {
        log::debug!("Rejected note create: {}", e);
    })?;

    let note = state.notes.create(new_note);
    Ok(HttpResponse::Created().json(note))
}

async fn get_note(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, NoteError> {
    let note = state.notes.get(path.into_inner())?;
    Ok(HttpResponse::Ok().json(note))
}

/// Update title and/or content. The payload is validated before the
/// note is looked up, so a bad body wins over a missing ID.
async fn update_note(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<Value>,
) -> Result<HttpResponse, NoteError> {
    let id = path.into_inner();
    let changes = validate_update(&body).inspect_err(|e| {
        log::debug!("Rejected update of note {}: {}", id, e);
    })?;

    let note = state.notes.update(id, changes)?;
    Ok(HttpResponse::Ok().json(note))
}

async fn delete_note(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, NoteError> {
    state.notes.delete(path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
