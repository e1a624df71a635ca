use serde::{Deserialize, Serialize};

/// Header keyword emitted for each section kind when composing plain text.
pub const SUMMARY_HEADING: &str = "SUMMARY";
pub const SKILLS_HEADING: &str = "SKILLS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub links: Vec<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.location.is_none()
            && self.links.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Experience,
    Education,
    Project,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Project,
    ];

    /// Upper-case heading used in composed text. Must stay recognisable by the section parser.
    pub fn heading(self) -> &'static str {
        match self {
            SectionKind::Experience => "EXPERIENCE",
            SectionKind::Education => "EDUCATION",
            SectionKind::Project => "PROJECTS",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Project => "Projects",
        }
    }
}

/// A free-text block found under a section header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBlock {
    pub kind: SectionKind,
    pub text: String,
}

/// Everything extracted from an uploaded resume. Fields may be missing,
/// duplicated or contradictory; nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default)]
    pub contact: ContactInfo,
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub sections: Vec<SectionBlock>,
}

impl ResumeRecord {
    pub fn is_empty(&self) -> bool {
        self.contact.is_empty()
            && self.summary.is_none()
            && self.skills.is_empty()
            && self.sections.is_empty()
    }

    pub fn blocks(&self, kind: SectionKind) -> impl Iterator<Item = &SectionBlock> {
        self.sections.iter().filter(move |b| b.kind == kind)
    }

    /// Composes a canonical plain-text resume. Feeding the result back through
    /// `parse_resume` yields the same record for parser-produced input.
    pub fn to_plain_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        let mut header = Vec::new();
        if let Some(name) = &self.contact.name {
            header.push(name.clone());
        }
        let contact_line: Vec<&str> = [
            self.contact.email.as_deref(),
            self.contact.phone.as_deref(),
            self.contact.location.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !contact_line.is_empty() {
            header.push(contact_line.join(" | "));
        }
        header.extend(self.contact.links.iter().cloned());
        if !header.is_empty() {
            parts.push(header.join("\n"));
        }

        if let Some(summary) = &self.summary {
            parts.push(format!("{SUMMARY_HEADING}\n{summary}"));
        }

        if !self.skills.is_empty() {
            parts.push(format!("{SKILLS_HEADING}\n{}", self.skills.join(", ")));
        }

        let mut current: Option<SectionKind> = None;
        for block in &self.sections {
            if current != Some(block.kind) {
                parts.push(format!("{}\n{}", block.kind.heading(), block.text));
                current = Some(block.kind);
            } else {
                parts.push(block.text.clone());
            }
        }

        parts.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(kind: SectionKind, text: &str) -> SectionBlock {
        SectionBlock {
            kind,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_empty_record_composes_to_empty_text() {
        assert!(ResumeRecord::default().is_empty());
        assert_eq!(ResumeRecord::default().to_plain_text(), "");
    }

    #[test]
    fn test_contact_line_joins_present_fields() {
        let record = ResumeRecord {
            contact: ContactInfo {
                name: Some("Jane Doe".into()),
                email: Some("jane@example.com".into()),
                phone: None,
                location: Some("Austin, TX".into()),
                links: vec!["https://github.com/jane".into()],
            },
            ..Default::default()
        };
        assert_eq!(
            record.to_plain_text(),
            "Jane Doe\njane@example.com | Austin, TX\nhttps://github.com/jane"
        );
    }

    #[test]
    fn test_consecutive_blocks_share_one_heading() {
        let record = ResumeRecord {
            sections: vec![
                block(SectionKind::Experience, "Acme Corp"),
                block(SectionKind::Experience, "Globex"),
                block(SectionKind::Education, "State University"),
            ],
            ..Default::default()
        };
        assert_eq!(
            record.to_plain_text(),
            "EXPERIENCE\nAcme Corp\n\nGlobex\n\nEDUCATION\nState University"
        );
    }

    #[test]
    fn test_blocks_filters_by_kind() {
        let record = ResumeRecord {
            sections: vec![
                block(SectionKind::Project, "Compiler"),
                block(SectionKind::Experience, "Acme"),
                block(SectionKind::Project, "Game engine"),
            ],
            ..Default::default()
        };
        let projects: Vec<_> = record
            .blocks(SectionKind::Project)
            .map(|b| b.text.as_str())
            .collect();
        assert_eq!(projects, vec!["Compiler", "Game engine"]);
    }

    #[test]
    fn test_section_kind_serializes_snake_case() {
        let json = serde_json::to_string(&SectionKind::Project).unwrap();
        assert_eq!(json, "\"project\"");
    }
}
