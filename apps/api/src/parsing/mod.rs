//! Resume text parsing: independent regex and keyword scans that populate a `ResumeRecord`.
//!
//! Nothing in here fails: a scan that finds nothing leaves its field empty.

pub mod contact;
pub mod sections;
pub mod skills;

use tracing::debug;

use crate::models::resume::{ResumeRecord, SectionBlock};
use crate::parsing::contact::extract_contact;
use crate::parsing::sections::{split_sections, HeaderKind};
use crate::parsing::skills::match_skills;

/// Parses normalised resume text into a flat record.
pub fn parse_resume(text: &str) -> ResumeRecord {
    let layout = split_sections(text);

    let contact = extract_contact(text, &layout.header_lines);
    let skills = match_skills(text);

    let mut summary_parts: Vec<String> = Vec::new();
    let mut sections = Vec::new();
    for section in layout.sections {
        match section.kind {
            HeaderKind::Summary => summary_parts.extend(section.blocks),
            HeaderKind::Block(kind) => {
                sections.extend(
                    section
                        .blocks
                        .into_iter()
                        .map(|text| SectionBlock { kind, text }),
                );
            }
            HeaderKind::Skills | HeaderKind::Other => {}
        }
    }

    let summary = if summary_parts.is_empty() {
        None
    } else {
        Some(summary_parts.join("\n\n"))
    };

    let record = ResumeRecord {
        contact,
        summary,
        skills,
        sections,
    };

    debug!(
        "Parsed resume: name={} email={} skills={} blocks={}",
        record.contact.name.is_some(),
        record.contact.email.is_some(),
        record.skills.len(),
        record.sections.len()
    );

    record
}
