//! Resume sessions over HTTP: the browser flow (`pages`) and the JSON API (`handlers`).

pub mod handlers;
pub mod pages;
pub mod upload;

use uuid::Uuid;

use crate::errors::AppError;
use crate::session::ResumeSession;
use crate::state::AppState;

pub(crate) async fn load_session(state: &AppState, id: Uuid) -> Result<ResumeSession, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}
