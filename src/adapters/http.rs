//! HTTP/JSON surface of the teacher directory.
//!
//! Routes:
//! - GET /professores - all teachers
//! - GET /professores/{id} - one teacher
//! - PUT /professores/{id} - partial update of nome/idade/departamento
//! - DELETE /professores/{id} - remove a teacher
//! - GET /professores/{id}/turmas - a teacher's class sections
//! - POST /professores/{id}/turmas - append a class section
//! - GET /professores/departamento/{departamento} - accent-insensitive department search

use std::any::Any;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::core::directory::TeacherDirectory;
use crate::domain::model::{ClassDraft, ClassSection, RemovedTeacher, Teacher, TeacherPatch};
use crate::domain::ports::TeacherStore;
use crate::utils::error::{DirectoryError, Result};

pub const NOT_FOUND_MESSAGE: &str = "Id não existente";
pub const CONFLICT_MESSAGE: &str = "Turma com este código já existe";
pub const INTERNAL_MESSAGE: &str = "Erro interno do servidor";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Rota não encontrada";
pub const REMOVED_MESSAGE: &str = "Professor removido com sucesso";
pub const MALFORMED_BODY_MESSAGE: &str = "Corpo inválido. JSON malformado";

/// `/professores/departamento/turmas` resolves to the class list of id "departamento".
const DEPARTMENT_SEGMENT: &str = "departamento";
const CLASSES_SEGMENT: &str = "turmas";

/// Shared router state. Every request serializes on the one mutex.
pub struct AppState<S: TeacherStore> {
    directory: Arc<Mutex<TeacherDirectory<S>>>,
}

impl<S: TeacherStore> AppState<S> {
    pub fn new(directory: TeacherDirectory<S>) -> Self {
        Self {
            directory: Arc::new(Mutex::new(directory)),
        }
    }

    /// A handler that panicked mid-request leaves the lock poisoned; the data
    /// is still usable, so later requests keep going.
    fn lock(&self) -> MutexGuard<'_, TeacherDirectory<S>> {
        self.directory.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("⚠️ Recovering teacher directory lock after a panic");
            poisoned.into_inner()
        })
    }
}

impl<S: TeacherStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
        }
    }
}

pub fn router<S: TeacherStore + 'static>(directory: TeacherDirectory<S>) -> Router {
    Router::new()
        .route("/professores", get(list_teachers::<S>))
        .route(
            "/professores/departamento/{departamento}",
            get(find_by_department::<S>).post(add_class_to_departamento::<S>),
        )
        .route(
            "/professores/{id}",
            get(get_teacher::<S>)
                .put(update_teacher::<S>)
                .delete(delete_teacher::<S>),
        )
        .route(
            "/professores/{id}/turmas",
            get(list_classes::<S>).post(add_class::<S>),
        )
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(directory))
}

async fn list_teachers<S: TeacherStore>(
    State(state): State<AppState<S>>,
) -> Json<Vec<Teacher>> {
    Json(state.lock().list_teachers().to_vec())
}

async fn get_teacher<S: TeacherStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Teacher>> {
    Ok(Json(state.lock().get_teacher(&id)?.clone()))
}

async fn list_classes<S: TeacherStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ClassSection>>> {
    Ok(Json(state.lock().list_classes(&id)?.to_vec()))
}

async fn update_teacher<S: TeacherStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Teacher>> {
    let patch: TeacherPatch = parse_body(&headers, &body)?;
    let updated = state.lock().update_teacher(&id, &patch)?.clone();
    tracing::info!("✏️ Teacher {} updated", id);
    Ok(Json(updated))
}

async fn add_class<S: TeacherStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<ClassSection>)> {
    let draft: ClassDraft = parse_body(&headers, &body)?;
    let created = state.lock().add_class(&id, draft)?;
    tracing::info!("➕ Class {} added to teacher {}", created.code, id);
    Ok((StatusCode::CREATED, Json(created)))
}

async fn find_by_department<S: TeacherStore>(
    State(state): State<AppState<S>>,
    Path(department): Path<String>,
) -> Response {
    if department == CLASSES_SEGMENT {
        return list_classes(State(state), Path(DEPARTMENT_SEGMENT.to_string()))
            .await
            .into_response();
    }

    let directory = state.lock();
    let found: Vec<Teacher> = directory
        .find_by_department(&department)
        .into_iter()
        .cloned()
        .collect();
    tracing::debug!("Department '{}' matched {} teachers", department, found.len());
    Json(found).into_response()
}

async fn add_class_to_departamento<S: TeacherStore>(
    State(state): State<AppState<S>>,
    Path(segment): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if segment != CLASSES_SEGMENT {
        return route_not_found().await;
    }
    add_class(State(state), Path(DEPARTMENT_SEGMENT.to_string()), headers, body)
        .await
        .into_response()
}

async fn delete_teacher<S: TeacherStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<RemovedTeacher>> {
    let removed = state.lock().delete_teacher(&id)?;
    tracing::info!("🗑️ Teacher {} removed", id);
    Ok(Json(RemovedTeacher {
        message: REMOVED_MESSAGE.to_string(),
        teacher: removed,
    }))
}

async fn route_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": ROUTE_NOT_FOUND_MESSAGE })),
    )
        .into_response()
}

fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// 解析請求主體
///
/// A missing body, or one not sent as `application/json`, counts as `{}` so the
/// id lookup still decides 404. A JSON array also reads as `{}`. Anything that
/// is not a JSON object or array is rejected before the id is looked at.
fn parse_body<T: DeserializeOwned + Default>(headers: &HeaderMap, body: &Bytes) -> Result<T> {
    if !is_json_content(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Malformed JSON body: {}", e);
        DirectoryError::invalid_input(MALFORMED_BODY_MESSAGE)
    })?;

    match value {
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|_| DirectoryError::invalid_input(MALFORMED_BODY_MESSAGE)),
        Value::Array(_) => Ok(T::default()),
        _ => Err(DirectoryError::invalid_input(MALFORMED_BODY_MESSAGE)),
    }
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    DirectoryError::internal(format!("handler panicked: {}", detail)).into_response()
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            DirectoryError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
            }
            DirectoryError::InvalidInput { message } => (StatusCode::BAD_REQUEST, message.clone()),
            DirectoryError::Conflict { .. } => {
                (StatusCode::CONFLICT, CONFLICT_MESSAGE.to_string())
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_MESSAGE.to_string(),
            ),
        };

        if self.is_client_error() {
            tracing::debug!("Request rejected ({}): {}", status.as_u16(), self);
        } else {
            tracing::error!("❌ Request failed: {}", self);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
