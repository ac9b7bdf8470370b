pub mod preview;
pub mod projects;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/projects",
            get(projects::get)
                .post(projects::create)
                .options(projects::preflight)
                .fallback(projects::method_not_allowed),
        )
        .route("/preview/{id}", get(preview::show))
}
