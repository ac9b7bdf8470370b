use sqlx::PgPool;

use crate::models::{Project, ProjectSummary};

/// How many projects a session lookup returns at most.
pub const SESSION_LIST_LIMIT: i64 = 10;

pub struct NewProject<'a> {
    pub session_id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub style: &'a str,
    pub sections: &'a str,
    pub colors: &'a serde_json::Value,
    pub html_content: &'a str,
}

pub async fn create(pool: &PgPool, new: &NewProject<'_>) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "INSERT INTO projects (session_id, title, description, style, sections, colors, html_content)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(new.session_id)
    .bind(new.title)
    .bind(new.description)
    .bind(new.style)
    .bind(new.sections)
    .bind(new.colors)
    .bind(new.html_content)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Most recent projects for a session, newest first. Ties on `created_at`
/// fall back to the insertion order of the ids.
pub async fn list_recent(
    pool: &PgPool,
    session_id: &str,
) -> Result<Vec<ProjectSummary>, sqlx::Error> {
    sqlx::query_as::<_, ProjectSummary>(
        "SELECT id, session_id, title, description, style, sections, colors, created_at
         FROM projects
         WHERE session_id = $1
         ORDER BY created_at DESC, id DESC
         LIMIT $2",
    )
    .bind(session_id)
    .bind(SESSION_LIST_LIMIT)
    .fetch_all(pool)
    .await
}
