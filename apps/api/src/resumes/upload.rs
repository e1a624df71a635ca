use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;
use tracing::{info, warn};

use crate::documents::{normalize_text, DocumentKind};
use crate::errors::AppError;
use crate::parsing::parse_resume;
use crate::session::ResumeSession;
use crate::state::AppState;

/// Shown in place of the parsed fields when the upload could not be read.
pub const EXTRACTION_NOTICE: &str = "Unable to extract text from the document. \
     Please ensure the file is not corrupted or password-protected.";

const FILE_FIELD: &str = "file";

pub struct UploadedDocument {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Reads the `file` part of a multipart body, or the first part carrying a file name.
pub async fn read_upload(mut multipart: Multipart) -> Result<UploadedDocument, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) && field.file_name().is_none() {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("upload")
            .to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(multipart_error)?;

        if bytes.is_empty() {
            return Err(AppError::Validation("The uploaded file is empty".to_string()));
        }

        return Ok(UploadedDocument {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(AppError::Validation(format!(
        "No file was uploaded (expected a multipart field named \"{FILE_FIELD}\")"
    )))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(err.body_text())
    }
}

/// Upload pipeline: detect kind, extract, normalise, parse, store.
///
/// Unsupported files are rejected; a reader failure still creates the session,
/// with an empty record and `EXTRACTION_NOTICE`.
pub async fn create_session(
    state: &AppState,
    upload: UploadedDocument,
) -> Result<ResumeSession, AppError> {
    let kind = DocumentKind::detect(
        &upload.file_name,
        upload.content_type.as_deref(),
        &upload.bytes,
    )
    .ok_or_else(|| {
        AppError::UnsupportedMedia(format!(
            "{} is not a PDF, DOCX, Markdown or plain text file",
            upload.file_name
        ))
    })?;

    let size = upload.bytes.len();
    let (text, notice) = match state.extractor.extract(kind, upload.bytes).await {
        Ok(raw) => {
            let text = normalize_text(&raw);
            if text.is_empty() {
                warn!("No text found in {} ({})", upload.file_name, kind.label());
                (text, Some(EXTRACTION_NOTICE.to_string()))
            } else {
                (text, None)
            }
        }
        Err(e) => {
            warn!("Extraction failed for {}: {e}", upload.file_name);
            (String::new(), Some(EXTRACTION_NOTICE.to_string()))
        }
    };

    let record = parse_resume(&text);
    if record.is_empty() && notice.is_none() {
        warn!("No resume fields recognised in {}", upload.file_name);
    }
    info!(
        "Parsed {} ({}, {size} bytes): {} skills, {} section blocks",
        upload.file_name,
        kind.label(),
        record.skills.len(),
        record.sections.len()
    );

    let session = ResumeSession::new(upload.file_name, kind, text, record, notice);
    Ok(state.sessions.insert(session).await)
}
