use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db;
use crate::db::projects::NewProject;
use crate::error::AppError;
use crate::html;
use crate::models::ProjectSummary;
use crate::state::SharedState;

pub const DEFAULT_TITLE: &str = "Новый проект";
pub const DEFAULT_STYLE: &str = "modern";
pub const DEFAULT_SECTIONS: &str = "home,about,contact";

#[derive(Deserialize, Default)]
pub struct CreateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub style: Option<String>,
    pub sections: Option<String>,
    pub colors: Option<serde_json::Value>,
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct CreateProjectResponse {
    pub project_id: i32,
    pub session_id: String,
    pub preview_url: String,
    pub message: String,
}

pub async fn create(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CreateProjectResponse>, AppError> {
    // All fields are optional; an absent body means "all defaults".
    let req: CreateProject = if body.is_empty() {
        CreateProject::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?
    };

    let session_id = req
        .session_id
        .or_else(|| header_session(&headers))
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let title = req.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let description = req.description.unwrap_or_default();
    let style = req.style.unwrap_or_else(|| DEFAULT_STYLE.to_string());
    let sections = req.sections.unwrap_or_else(|| DEFAULT_SECTIONS.to_string());
    let colors = req.colors.unwrap_or_else(|| serde_json::json!({}));

    let html_content = html::render(&title, &description, &style, &sections, &colors);

    let project = db::projects::create(
        &state.pool,
        &NewProject {
            session_id: &session_id,
            title: &title,
            description: &description,
            style: &style,
            sections: &sections,
            colors: &colors,
            html_content: &html_content,
        },
    )
    .await?;

    tracing::debug!("Created project {} for session {session_id}", project.id);

    Ok(Json(CreateProjectResponse {
        project_id: project.id,
        session_id,
        preview_url: format!("/preview/{}", project.id),
        message: "Проект создан успешно!".to_string(),
    }))
}

#[derive(Deserialize)]
pub struct GetProjectParams {
    pub id: Option<i32>,
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct ProjectList {
    pub projects: Vec<ProjectSummary>,
}

pub async fn get(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(params): Query<GetProjectParams>,
) -> Result<Response, AppError> {
    if let Some(id) = params.id {
        let project = db::projects::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;
        return Ok(Json(project).into_response());
    }

    let session_id = params
        .session_id
        .or_else(|| header_session(&headers))
        .ok_or_else(|| AppError::BadRequest("project_id or session_id required".to_string()))?;

    let projects = db::projects::list_recent(&state.pool, &session_id).await?;
    if projects.is_empty() {
        return Err(AppError::NotFound("Project not found".to_string()));
    }

    Ok(Json(ProjectList { projects }).into_response())
}

pub async fn preflight() -> Response {
    (
        [
            ("Access-Control-Allow-Origin", "*"),
            ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
            ("Access-Control-Allow-Headers", "Content-Type, X-Session-Id"),
            ("Access-Control-Max-Age", "86400"),
        ],
        StatusCode::OK,
    )
        .into_response()
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("Method not allowed".to_string())
}

fn header_session(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-session-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}
