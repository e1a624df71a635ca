use askama::Template;
use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::form::ResumeForm;
use crate::models::resume::ResumeRecord;
use crate::render::{editor_page, export_page, index_page, render_text_report, report_file_name};
use crate::resumes::load_session;
use crate::resumes::upload::{create_session, read_upload};
use crate::state::AppState;

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(index_page(state.config.max_upload_bytes).render()?))
}

/// POST /resumes
pub async fn handle_upload_form(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    let upload = read_upload(multipart).await?;
    let session = create_session(&state, upload).await?;
    Ok(Redirect::to(&editor_path(session.id)))
}

/// GET /resumes/:id
pub async fn handle_editor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let session = load_session(&state, id).await?;
    Ok(Html(editor_page(&session).render()?))
}

/// POST /resumes/:id
pub async fn handle_edit_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<ResumeForm>,
) -> Result<Redirect, AppError> {
    let record = form.into_record();
    state
        .sessions
        .update(id, |s| s.apply_edit(record))
        .await
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Redirect::to(&editor_path(id)))
}

/// GET /resumes/:id/export
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let session = load_session(&state, id).await?;
    let html = export_page(&session.record).render()?;
    Ok(attachment(
        "text/html; charset=utf-8",
        &export_file_name(&session.record),
        html,
    ))
}

/// GET /resumes/:id/report
pub async fn handle_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let session = load_session(&state, id).await?;
    let report = session
        .analysis()
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} has no text to analyze")))?;
    let now = Utc::now();
    Ok(attachment(
        "text/plain; charset=utf-8",
        &report_file_name(now),
        render_text_report(&report, now),
    ))
}

fn editor_path(id: Uuid) -> String {
    format!("/resumes/{id}")
}

fn attachment(content_type: &str, file_name: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
        .into_response()
}

/// `jane_doe_resume.html`, or `resume.html` when the record has no usable name.
fn export_file_name(record: &ResumeRecord) -> String {
    let slug = record
        .contact
        .name
        .as_deref()
        .unwrap_or_default()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_");
    if slug.is_empty() {
        "resume.html".to_string()
    } else {
        format!("{slug}_resume.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ContactInfo;

    #[test]
    fn test_export_file_name() {
        let mut record = ResumeRecord {
            contact: ContactInfo {
                name: Some("Jane O'Doe".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(export_file_name(&record), "jane_o_doe_resume.html");

        record.contact.name = Some("Zoë".to_string());
        assert_eq!(export_file_name(&record), "zo_resume.html");

        record.contact.name = None;
        assert_eq!(export_file_name(&record), "resume.html");
    }
}
