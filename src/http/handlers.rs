//! Route handlers. Each one is a thin translation between HTTP and
//! [`Storage`] calls.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::config::Profile;
use crate::schema::{
    ContactMessage, FieldError, Id, IssueCode, NewContactMessage, Project, Skill,
    ValidationErrors,
};
use crate::storage::Storage;

const PROJECTS_FAILED: &str = "Failed to fetch projects";
const PROJECT_FAILED: &str = "Failed to fetch project";
const SKILLS_FAILED: &str = "Failed to fetch skills";
const CONTACT_FAILED: &str =
    "Sorry, there was an error sending your message. Please try again.";
const CONTACT_LIST_FAILED: &str = "Failed to fetch contact messages";
const INVALID_JSON: &str = "Invalid JSON body";
const CONTACT_THANKS: &str =
    "Thank you! Your message has been sent successfully. I'll get back to you soon.";

/// Response to an accepted contact submission.
#[derive(Debug, Clone, Serialize)]
pub struct ContactReceipt {
    pub message: String,
    pub id: Id,
}

/// `GET /health` — store row counts.
pub async fn health<S: Storage + 'static>(
    State(state): State<AppState<S>>,
) -> ApiResult<Json<Value>> {
    let store = &state.store;
    let projects = store.get_projects().map_err(ApiError::internal(PROJECTS_FAILED))?;
    let skills = store.get_skills().map_err(ApiError::internal(SKILLS_FAILED))?;
    let messages = store
        .get_contact_messages()
        .map_err(ApiError::internal(CONTACT_LIST_FAILED))?;

    Ok(Json(json!({
        "ok": true,
        "projects": projects.len(),
        "skills": skills.len(),
        "contactMessages": messages.len(),
    })))
}

/// `GET /api/projects`
pub async fn list_projects<S: Storage + 'static>(
    State(state): State<AppState<S>>,
) -> ApiResult<Json<Vec<Project>>> {
    let projects = state
        .store
        .get_projects()
        .map_err(ApiError::internal(PROJECTS_FAILED))?;
    Ok(Json(projects))
}

/// `GET /api/projects/:id`
pub async fn get_project<S: Storage + 'static>(
    State(state): State<AppState<S>>,
    id: Result<Path<Id>, PathRejection>,
) -> ApiResult<Json<Project>> {
    let Path(id) = id.map_err(|_| ApiError::BadRequest("Invalid project id".into()))?;
    state
        .store
        .get_project(id)
        .map_err(ApiError::internal(PROJECT_FAILED))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Project not found".into()))
}

/// `GET /api/skills`
pub async fn list_skills<S: Storage + 'static>(
    State(state): State<AppState<S>>,
) -> ApiResult<Json<Vec<Skill>>> {
    let skills = state
        .store
        .get_skills()
        .map_err(ApiError::internal(SKILLS_FAILED))?;
    Ok(Json(skills))
}

/// `POST /api/contact` — validate, store, acknowledge.
///
/// A body that is not JSON at all is reported the same way as a field
/// failure so the form always gets a `{message, errors}` shape back.
pub async fn submit_contact<S: Storage + 'static>(
    State(state): State<AppState<S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ContactReceipt>)> {
    let Json(body) = body.map_err(|rejection| {
        debug!(error = %rejection, "unreadable contact body");
        ApiError::Validation(ValidationErrors::single(FieldError::body(
            IssueCode::InvalidJson,
            INVALID_JSON,
        )))
    })?;

    let submission = NewContactMessage::from_json(&body)?;
    let message = state
        .store
        .create_contact_message(submission)
        .map_err(ApiError::internal(CONTACT_FAILED))?;

    // Delivery (e-mail etc.) would hook in here; for now the message is only stored.
    info!(id = message.id, email = %message.email, subject = %message.subject, "contact message received");

    Ok((
        StatusCode::CREATED,
        Json(ContactReceipt {
            message: CONTACT_THANKS.to_string(),
            id: message.id,
        }),
    ))
}

/// `GET /api/contact`
pub async fn list_contact_messages<S: Storage + 'static>(
    State(state): State<AppState<S>>,
) -> ApiResult<Json<Vec<ContactMessage>>> {
    let messages = state
        .store
        .get_contact_messages()
        .map_err(ApiError::internal(CONTACT_LIST_FAILED))?;
    Ok(Json(messages))
}

/// `GET /api/profile`
pub async fn profile<S: Storage + 'static>(State(state): State<AppState<S>>) -> Json<Profile> {
    Json(state.profile.as_ref().clone())
}
