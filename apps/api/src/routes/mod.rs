pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::resumes::{handlers, pages};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Browser flow
        .route("/", get(pages::handle_index))
        .route("/resumes", post(pages::handle_upload_form))
        .route(
            "/resumes/:id",
            get(pages::handle_editor).post(pages::handle_edit_form),
        )
        .route("/resumes/:id/export", get(pages::handle_export))
        .route("/resumes/:id/report", get(pages::handle_report))
        // JSON API
        .route("/api/v1/resumes", post(handlers::handle_upload))
        .route(
            "/api/v1/resumes/:id",
            get(handlers::handle_get_resume)
                .put(handlers::handle_update_resume)
                .delete(handlers::handle_delete_resume),
        )
        .route(
            "/api/v1/resumes/:id/analysis",
            get(handlers::handle_get_analysis),
        )
        .layer(body_limit)
        .with_state(state)
}
