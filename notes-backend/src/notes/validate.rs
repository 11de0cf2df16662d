//! Payload validation for note create/update requests.
//!
//! Pure functions over the decoded JSON body. A JSON `null` counts as an
//! absent field; unknown keys are ignored.

use serde_json::{Map, Value};

use crate::error::NoteError;

pub const EXPECTED_JSON: &str = "Expected application/json";
pub const INVALID_BODY: &str = "Invalid JSON body";
pub const TITLE_REQUIRED: &str = "Field 'title' is required and must be a non-empty string.";
pub const TITLE_INVALID: &str = "If provided, 'title' must be a non-empty string.";
pub const CONTENT_INVALID: &str = "If provided, 'content' must be a string.";

/// A validated create payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    /// Already trimmed, never empty
    pub title: String,
    pub content: String,
}

/// A validated partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

pub fn validate_create(payload: &Value) -> Result<NewNote, NoteError> {
    let fields = as_object(payload)?;

    let title = non_blank_title(fields).ok_or_else(|| NoteError::invalid(TITLE_REQUIRED))?;
    let content = optional_content(fields)?.unwrap_or_default();

    Ok(NewNote { title, content })
}

pub fn validate_update(payload: &Value) -> Result<NoteChanges, NoteError> {
    let fields = as_object(payload)?;

    let title = match field(fields, "title") {
        None => None,
        Some(_) => Some(non_blank_title(fields).ok_or_else(|| NoteError::invalid(TITLE_INVALID))?),
    };
    let content = optional_content(fields)?;

    Ok(NoteChanges { title, content })
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, NoteError> {
    payload
        .as_object()
        .ok_or_else(|| NoteError::invalid(INVALID_BODY))
}

fn field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| !v.is_null())
}

fn non_blank_title(fields: &Map<String, Value>) -> Option<String> {
    field(fields, "title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

fn optional_content(fields: &Map<String, Value>) -> Result<Option<String>, NoteError> {
    match field(fields, "content") {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(NoteError::invalid(CONTENT_INVALID)),
    }
}
