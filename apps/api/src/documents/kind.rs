use serde::Serialize;

const PDF_MAGIC: &[u8] = b"%PDF-";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Document formats the upload endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
    Markdown,
}

impl DocumentKind {
    /// Resolves the kind from the file extension, then the declared MIME type,
    /// then the leading bytes. Returns `None` for anything unrecognised.
    pub fn detect(file_name: &str, content_type: Option<&str>, bytes: &[u8]) -> Option<Self> {
        Self::from_file_name(file_name)
            .or_else(|| content_type.and_then(Self::from_content_type))
            .or_else(|| Self::from_magic(bytes))
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" | "text" => Some(DocumentKind::PlainText),
            "md" | "markdown" => Some(DocumentKind::Markdown),
            _ => None,
        }
    }

    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "application/pdf" => Some(DocumentKind::Pdf),
            DOCX_MIME => Some(DocumentKind::Docx),
            "text/plain" => Some(DocumentKind::PlainText),
            "text/markdown" | "text/x-markdown" => Some(DocumentKind::Markdown),
            _ => None,
        }
    }

    fn from_magic(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(PDF_MAGIC) {
            Some(DocumentKind::Pdf)
        } else if bytes.starts_with(ZIP_MAGIC) {
            // Any zip container is handed to the docx reader; non-docx archives fail there.
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
            DocumentKind::PlainText => "plain text",
            DocumentKind::Markdown => "Markdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_wins() {
        assert_eq!(
            DocumentKind::detect("Resume.PDF", Some("text/plain"), b""),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::detect("cv.docx", None, b""),
            Some(DocumentKind::Docx)
        );
        assert_eq!(
            DocumentKind::detect("notes.md", None, b""),
            Some(DocumentKind::Markdown)
        );
    }

    #[test]
    fn test_content_type_used_without_extension() {
        assert_eq!(
            DocumentKind::detect("upload", Some("text/plain; charset=utf-8"), b"hello"),
            Some(DocumentKind::PlainText)
        );
        assert_eq!(
            DocumentKind::detect("upload", Some(DOCX_MIME), b""),
            Some(DocumentKind::Docx)
        );
    }

    #[test]
    fn test_magic_bytes_fallback() {
        assert_eq!(
            DocumentKind::detect("blob", Some("application/octet-stream"), b"%PDF-1.7 ..."),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::detect("blob", None, b"PK\x03\x04rest"),
            Some(DocumentKind::Docx)
        );
    }

    #[test]
    fn test_unknown_document_rejected() {
        assert_eq!(DocumentKind::detect("resume.doc", None, b"\xd0\xcf\x11\xe0"), None);
        assert_eq!(DocumentKind::detect("image.png", Some("image/png"), b"\x89PNG"), None);
    }
}
