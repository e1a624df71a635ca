use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::AnalysisReport;
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::resumes::load_session;
use crate::resumes::upload::{create_session, read_upload};
use crate::session::ResumeSession;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionResponse {
    #[serde(flatten)]
    pub session: ResumeSession,
    pub analysis: Option<AnalysisReport>,
}

impl From<ResumeSession> for SessionResponse {
    fn from(session: ResumeSession) -> Self {
        let analysis = session.analysis();
        SessionResponse { session, analysis }
    }
}

/// POST /api/v1/resumes
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let upload = read_upload(multipart).await?;
    let session = create_session(&state, upload).await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = load_session(&state, id).await?;
    Ok(Json(session.into()))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(record): Json<ResumeRecord>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state
        .sessions
        .update(id, |s| s.apply_edit(record))
        .await
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(session.into()))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Resume {id} not found")))
    }
}

/// GET /api/v1/resumes/:id/analysis
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisReport>, AppError> {
    let session = load_session(&state, id).await?;
    let report = session.analysis().ok_or_else(|| {
        AppError::NotFound(format!("Resume {id} has no text to analyze"))
    })?;
    Ok(Json(report))
}
