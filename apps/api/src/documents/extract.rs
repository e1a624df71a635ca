//! Text extraction: pluggable, trait-based conversion of uploaded document bytes to text.
//!
//! Default: `DocumentTextExtractor` (pdf-extract, docx-rs, pulldown-cmark, UTF-8).
//! `AppState` holds an `Arc<dyn TextExtractor>` so tests can swap in a canned reader.

use async_trait::async_trait;
use bytes::Bytes;
use pulldown_cmark::{Event, Parser, Tag};
use thiserror::Error;
use tracing::debug;

use crate::documents::kind::DocumentKind;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF read failed: {0}")]
    Pdf(String),

    #[error("DOCX read failed: {0}")]
    Docx(String),

    #[error("Document reader crashed: {0}")]
    Worker(String),
}

/// Converts document bytes of a known kind into raw (un-normalised) text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, kind: DocumentKind, bytes: Bytes) -> Result<String, ExtractionError>;
}

/// Default extractor backed by third-party document readers.
pub struct DocumentTextExtractor;

#[async_trait]
impl TextExtractor for DocumentTextExtractor {
    async fn extract(&self, kind: DocumentKind, bytes: Bytes) -> Result<String, ExtractionError> {
        debug!("Extracting {} bytes as {}", bytes.len(), kind.label());
        match kind {
            // The binary readers are CPU bound and may panic on malformed input;
            // the blocking pool isolates both.
            DocumentKind::Pdf => run_blocking(move || pdf_to_text(&bytes)).await,
            DocumentKind::Docx => run_blocking(move || docx_to_text(&bytes)).await,
            DocumentKind::PlainText => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            DocumentKind::Markdown => Ok(markdown_to_text(&String::from_utf8_lossy(&bytes))),
        }
    }
}

async fn run_blocking<F>(job: F) -> Result<String, ExtractionError>
where
    F: FnOnce() -> Result<String, ExtractionError> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| ExtractionError::Worker(e.to_string()))?
}

fn pdf_to_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
}

fn docx_to_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    use docx_rs::{DocumentChild, ParagraphChild, RunChild};

    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for paragraph_child in &paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in &run.children {
                        match run_child {
                            RunChild::Text(t) => text.push_str(&t.text),
                            RunChild::Tab(_) => text.push('\t'),
                            RunChild::Break(_) => text.push('\n'),
                            _ => {}
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}

/// Flattens Markdown to plain lines. List items keep a `- ` marker so bullet
/// detection still sees them.
fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::Start(Tag::Item) => text.push_str("- "),
            Event::End(Tag::Paragraph) | Event::End(Tag::Heading(..)) => text.push_str("\n\n"),
            Event::End(Tag::Item) => text.push('\n'),
            Event::End(Tag::List(_)) => text.push('\n'),
            _ => {}
        }
    }
    text
}
