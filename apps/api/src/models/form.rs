use serde::{Deserialize, Serialize};

use crate::documents::normalize_text;
use crate::models::resume::{ContactInfo, ResumeRecord, SectionBlock, SectionKind};

/// Flat, string-only view of a `ResumeRecord` as posted by the editor form.
///
/// Multi-value fields are plain text: links one per line, skills separated by
/// commas or newlines, section blocks separated by a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub links: String,
    pub summary: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub projects: String,
}

impl ResumeForm {
    pub fn from_record(record: &ResumeRecord) -> Self {
        let contact = &record.contact;
        ResumeForm {
            name: contact.name.clone().unwrap_or_default(),
            email: contact.email.clone().unwrap_or_default(),
            phone: contact.phone.clone().unwrap_or_default(),
            location: contact.location.clone().unwrap_or_default(),
            links: contact.links.join("\n"),
            summary: record.summary.clone().unwrap_or_default(),
            skills: record.skills.join(", "),
            experience: join_blocks(record, SectionKind::Experience),
            education: join_blocks(record, SectionKind::Education),
            projects: join_blocks(record, SectionKind::Project),
        }
    }

    /// Builds the edited record. Sections come out grouped by kind:
    /// experience, then education, then projects.
    pub fn into_record(self) -> ResumeRecord {
        let mut sections = Vec::new();
        for (kind, text) in [
            (SectionKind::Experience, &self.experience),
            (SectionKind::Education, &self.education),
            (SectionKind::Project, &self.projects),
        ] {
            sections.extend(
                split_blocks(text)
                    .into_iter()
                    .map(|text| SectionBlock { kind, text }),
            );
        }

        let summary = normalize_text(&self.summary);

        ResumeRecord {
            contact: ContactInfo {
                name: single_line(&self.name),
                email: single_line(&self.email),
                phone: single_line(&self.phone),
                location: single_line(&self.location),
                links: normalize_text(&self.links)
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(String::from)
                    .collect(),
            },
            summary: (!summary.is_empty()).then_some(summary),
            skills: self
                .skills
                .split([',', '\n'])
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            sections,
        }
    }
}

fn join_blocks(record: &ResumeRecord, kind: SectionKind) -> String {
    record
        .blocks(kind)
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn split_blocks(text: &str) -> Vec<String> {
    normalize_text(text)
        .split("\n\n")
        .map(|block| {
            block
                .lines()
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .filter(|block| !block.is_empty())
        .collect()
}

fn single_line(value: &str) -> Option<String> {
    let trimmed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    (!trimmed.is_empty()).then_some(trimmed)
}
