//! Section segmentation: finds header lines and splits the body into blocks.

use crate::models::resume::SectionKind;

/// Maximum number of non-empty lines considered part of the contact header.
pub const HEADER_REGION_LINES: usize = 10;

/// What a recognised header line introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    Summary,
    Skills,
    Block(SectionKind),
    Other,
}

const SUMMARY_HEADERS: &[&str] = &[
    "summary",
    "professional summary",
    "career summary",
    "executive summary",
    "profile",
    "professional profile",
    "personal profile",
    "objective",
    "career objective",
    "about",
    "about me",
];

const EXPERIENCE_HEADERS: &[&str] = &[
    "experience",
    "work experience",
    "professional experience",
    "relevant experience",
    "employment",
    "employment history",
    "work history",
    "career history",
    "internships",
    "internship experience",
];

const EDUCATION_HEADERS: &[&str] = &[
    "education",
    "academic background",
    "academic qualifications",
    "education and training",
    "education and certifications",
];

const PROJECT_HEADERS: &[&str] = &[
    "projects",
    "project",
    "personal projects",
    "academic projects",
    "key projects",
    "selected projects",
    "side projects",
    "project experience",
];

const SKILL_HEADERS: &[&str] = &[
    "skills",
    "technical skills",
    "key skills",
    "core competencies",
    "competencies",
    "skills and abilities",
    "proficiencies",
    "technologies",
    "tools and technologies",
];

const OTHER_HEADERS: &[&str] = &[
    "certifications",
    "certificates",
    "awards",
    "honors",
    "honors and awards",
    "achievements",
    "publications",
    "languages",
    "interests",
    "hobbies",
    "references",
    "volunteer experience",
    "volunteering",
    "activities",
    "extracurricular activities",
    "courses",
    "training",
];

/// Classifies a single line as a section header, if it is one.
pub fn classify_header(line: &str) -> Option<HeaderKind> {
    let key = header_key(line)?;
    let key = key.as_str();

    if SUMMARY_HEADERS.contains(&key) {
        Some(HeaderKind::Summary)
    } else if EXPERIENCE_HEADERS.contains(&key) {
        Some(HeaderKind::Block(SectionKind::Experience))
    } else if EDUCATION_HEADERS.contains(&key) {
        Some(HeaderKind::Block(SectionKind::Education))
    } else if PROJECT_HEADERS.contains(&key) {
        Some(HeaderKind::Block(SectionKind::Project))
    } else if SKILL_HEADERS.contains(&key) {
        Some(HeaderKind::Skills)
    } else if OTHER_HEADERS.contains(&key) {
        Some(HeaderKind::Other)
    } else {
        None
    }
}

/// Lowercase, `&` spelled out, trailing colon dropped, whitespace collapsed.
fn header_key(line: &str) -> Option<String> {
    let trimmed = line.trim().trim_end_matches(':').trim();
    if trimmed.is_empty() || trimmed.len() > 40 {
        return None;
    }
    let key = trimmed
        .to_lowercase()
        .replace('&', " and ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    Some(key)
}

/// Body text under one header, split into blank-line separated blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    pub kind: HeaderKind,
    pub blocks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout<'a> {
    /// Non-empty lines above the first header (capped at `HEADER_REGION_LINES`).
    pub header_lines: Vec<&'a str>,
    pub sections: Vec<RawSection>,
}

/// Splits resume text into the header region and the sections that follow it.
pub fn split_sections(text: &str) -> Layout<'_> {
    let mut layout = Layout::default();
    let mut current: Option<(HeaderKind, Vec<&str>)> = None;

    for line in text.lines().map(str::trim) {
        if let Some(kind) = classify_header(line) {
            if let Some((prev_kind, body)) = current.take() {
                layout.sections.push(RawSection {
                    kind: prev_kind,
                    blocks: into_blocks(&body),
                });
            }
            current = Some((kind, Vec::new()));
            continue;
        }

        match current.as_mut() {
            Some((_, body)) => body.push(line),
            None => {
                if !line.is_empty() && layout.header_lines.len() < HEADER_REGION_LINES {
                    layout.header_lines.push(line);
                }
            }
        }
    }

    if let Some((kind, body)) = current {
        layout.sections.push(RawSection {
            kind,
            blocks: into_blocks(&body),
        });
    }

    layout
}

fn into_blocks(lines: &[&str]) -> Vec<String> {
    lines
        .split(|line| line.is_empty())
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| chunk.join("\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_variants_recognised() {
        assert_eq!(
            classify_header("WORK EXPERIENCE"),
            Some(HeaderKind::Block(SectionKind::Experience))
        );
        assert_eq!(
            classify_header("  Education:  "),
            Some(HeaderKind::Block(SectionKind::Education))
        );
        assert_eq!(
            classify_header("Honors & Awards"),
            Some(HeaderKind::Other)
        );
        assert_eq!(classify_header("Professional   Summary"), Some(HeaderKind::Summary));
        assert_eq!(classify_header("Technical Skills"), Some(HeaderKind::Skills));
        assert_eq!(
            classify_header("PROJECTS"),
            Some(HeaderKind::Block(SectionKind::Project))
        );
    }

    #[test]
    fn test_sentences_are_not_headers() {
        assert_eq!(classify_header("Experience with distributed systems"), None);
        assert_eq!(classify_header("Led the education outreach program"), None);
        assert_eq!(classify_header(""), None);
    }

    #[test]
    fn test_every_composed_heading_is_recognised() {
        for kind in SectionKind::ALL {
            assert_eq!(classify_header(kind.heading()), Some(HeaderKind::Block(kind)));
        }
        assert_eq!(classify_header("SUMMARY"), Some(HeaderKind::Summary));
        assert_eq!(classify_header("SKILLS"), Some(HeaderKind::Skills));
    }

    #[test]
    fn test_split_header_region_and_blocks() {
        let text = "Jane Doe\njane@example.com\n\nExperience\nAcme Corp\n- Built APIs\n\nGlobex\n- Ran ops\nEducation\nState University";
        let layout = split_sections(text);

        assert_eq!(layout.header_lines, vec!["Jane Doe", "jane@example.com"]);
        assert_eq!(layout.sections.len(), 2);
        assert_eq!(
            layout.sections[0],
            RawSection {
                kind: HeaderKind::Block(SectionKind::Experience),
                blocks: vec![
                    "Acme Corp\n- Built APIs".to_string(),
                    "Globex\n- Ran ops".to_string()
                ],
            }
        );
        assert_eq!(layout.sections[1].blocks, vec!["State University".to_string()]);
    }

    #[test]
    fn test_no_headers_means_everything_is_header_region() {
        let text = (1..=15).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let layout = split_sections(&text);
        assert!(layout.sections.is_empty());
        assert_eq!(layout.header_lines.len(), HEADER_REGION_LINES);
    }

    #[test]
    fn test_empty_section_has_no_blocks() {
        let layout = split_sections("Skills\n\nEducation\n");
        assert_eq!(layout.sections.len(), 2);
        assert!(layout.sections.iter().all(|s| s.blocks.is_empty()));
    }
}
