use axum::extract::{Path, State};
use axum::response::Html;

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

/// Serve the document that was rendered when the project was created.
pub async fn show(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let project = db::projects::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;
    Ok(Html(project.html_content))
}
