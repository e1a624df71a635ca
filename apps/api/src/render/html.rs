//! HTML pages. Templates only see precomputed strings and flags.

use askama::Template;

use crate::analysis::{sample_scores, AnalysisReport, ScoreBand};
use crate::models::form::ResumeForm;
use crate::models::resume::{ResumeRecord, SectionKind};
use crate::session::ResumeSession;

pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.docx,.txt,.md,.markdown";

const ESSENTIAL_SECTIONS: [&str; 5] = [
    "Contact Information",
    "Professional Summary",
    "Work Experience",
    "Education",
    "Skills & Competencies",
];

const BEST_PRACTICES: [&str; 5] = [
    "Use strong action verbs",
    "Include quantifiable results",
    "Tailor to job descriptions",
    "Keep formatting consistent",
    "Proofread thoroughly",
];

pub struct FeedbackLine {
    pub text: String,
    pub tone_class: &'static str,
}

pub struct ScoreCard {
    pub label: &'static str,
    pub score: String,
    pub band_label: &'static str,
    pub band_class: &'static str,
    pub feedback: Vec<FeedbackLine>,
}

impl ScoreCard {
    fn new(label: &'static str, score: f64, feedback: Vec<FeedbackLine>) -> Self {
        let band = ScoreBand::from_score(score);
        ScoreCard {
            label,
            score: format!("{score:.0}"),
            band_label: band.label(),
            band_class: band.css_class(),
            feedback,
        }
    }
}

#[derive(Default)]
pub struct AnalysisView {
    pub overall: String,
    pub band_label: &'static str,
    pub band_class: &'static str,
    pub word_count: usize,
    pub cards: Vec<ScoreCard>,
    pub recommendations: Vec<String>,
}

impl AnalysisView {
    pub fn from_report(report: &AnalysisReport) -> Self {
        AnalysisView {
            overall: format!("{:.0}", report.overall_score),
            band_label: report.overall_band.label(),
            band_class: report.overall_band.css_class(),
            word_count: report.word_count,
            cards: report
                .categories
                .iter()
                .map(|c| {
                    let feedback = c
                        .feedback
                        .iter()
                        .map(|f| FeedbackLine {
                            text: f.text.clone(),
                            tone_class: f.tone.css_class(),
                        })
                        .collect();
                    ScoreCard::new(c.category.label(), c.score, feedback)
                })
                .collect(),
            recommendations: report.recommendations.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub accepted: &'static str,
    pub max_upload: String,
    pub essential_sections: Vec<&'static str>,
    pub best_practices: Vec<&'static str>,
    pub samples: Vec<ScoreCard>,
}

pub fn index_page(max_upload_bytes: usize) -> IndexPage {
    IndexPage {
        accepted: ACCEPTED_EXTENSIONS,
        max_upload: human_size(max_upload_bytes),
        essential_sections: ESSENTIAL_SECTIONS.to_vec(),
        best_practices: BEST_PRACTICES.to_vec(),
        samples: sample_scores()
            .into_iter()
            .map(|(category, score)| ScoreCard::new(category.label(), score, Vec::new()))
            .collect(),
    }
}

#[derive(Template)]
#[template(path = "editor.html")]
pub struct EditorPage {
    pub id: String,
    pub file_name: String,
    pub kind_label: &'static str,
    pub notice: String,
    pub has_notice: bool,
    pub edited: bool,
    pub form: ResumeForm,
    pub has_analysis: bool,
    pub analysis: AnalysisView,
}

pub fn editor_page(session: &ResumeSession) -> EditorPage {
    let report = session.analysis();
    let notice = session.notice.clone().unwrap_or_default();
    EditorPage {
        id: session.id.to_string(),
        file_name: session.file_name.clone(),
        kind_label: session.document_kind.label(),
        has_notice: !notice.is_empty(),
        notice,
        edited: session.edited,
        form: ResumeForm::from_record(&session.record),
        has_analysis: report.is_some(),
        analysis: report
            .as_ref()
            .map(AnalysisView::from_report)
            .unwrap_or_default(),
    }
}

pub struct LinkView {
    pub href: String,
    pub text: String,
}

/// One free-text block: first line as the heading, `-`/`•`/`*` lines as bullets.
pub struct BlockView {
    pub heading: String,
    pub details: Vec<String>,
    pub bullets: Vec<String>,
}

pub struct GroupView {
    pub title: &'static str,
    pub blocks: Vec<BlockView>,
}

#[derive(Template)]
#[template(path = "export.html")]
pub struct ExportPage {
    pub name: String,
    pub contact_items: Vec<String>,
    pub links: Vec<LinkView>,
    pub summary: Vec<String>,
    pub skills: String,
    pub groups: Vec<GroupView>,
}

pub fn export_page(record: &ResumeRecord) -> ExportPage {
    let contact = &record.contact;
    ExportPage {
        name: contact.name.clone().unwrap_or_else(|| "Resume".to_string()),
        contact_items: [&contact.email, &contact.phone, &contact.location]
            .into_iter()
            .flatten()
            .cloned()
            .collect(),
        links: contact
            .links
            .iter()
            .map(|link| LinkView {
                href: link_href(link),
                text: link.clone(),
            })
            .collect(),
        summary: record
            .summary
            .as_deref()
            .map(|s| {
                s.split("\n\n")
                    .map(|p| p.lines().collect::<Vec<_>>().join(" "))
                    .filter(|p| !p.trim().is_empty())
                    .collect()
            })
            .unwrap_or_default(),
        skills: record.skills.join(" · "),
        groups: SectionKind::ALL
            .iter()
            .filter_map(|&kind| {
                let blocks: Vec<BlockView> =
                    record.blocks(kind).map(|b| block_view(&b.text)).collect();
                (!blocks.is_empty()).then_some(GroupView {
                    title: kind.title(),
                    blocks,
                })
            })
            .collect(),
    }
}

fn block_view(text: &str) -> BlockView {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let heading = lines.next().unwrap_or_default().to_string();
    let mut details = Vec::new();
    let mut bullets = Vec::new();
    for line in lines {
        match line
            .strip_prefix('-')
            .or_else(|| line.strip_prefix('•'))
            .or_else(|| line.strip_prefix('*'))
        {
            Some(rest) => bullets.push(rest.trim().to_string()),
            None => details.push(line.to_string()),
        }
    }
    BlockView {
        heading,
        details,
        bullets,
    }
}

/// Bare references such as `github.com/jane` get an `https://` scheme.
pub fn link_href(link: &str) -> String {
    let lower = link.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        link.to_string()
    } else {
        format!("https://{link}")
    }
}

fn human_size(bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{} MB", bytes / MIB)
    } else if bytes >= 1024 {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{bytes} bytes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::documents::DocumentKind;
    use crate::models::resume::{ContactInfo, SectionBlock};

    fn record() -> ResumeRecord {
        ResumeRecord {
            contact: ContactInfo {
                name: Some("Jane <Doe>".to_string()),
                email: Some("jane@example.com".to_string()),
                phone: None,
                location: Some("Austin, TX".to_string()),
                links: vec!["github.com/jane".to_string()],
            },
            summary: Some("Backend engineer.\n\nLikes compilers.".to_string()),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            sections: vec![SectionBlock {
                kind: SectionKind::Experience,
                text: "Acme Corp\n2019 - 2023\n- Built APIs\n• Led team".to_string(),
            }],
        }
    }

    #[test]
    fn test_link_href() {
        assert_eq!(link_href("github.com/jane"), "https://github.com/jane");
        assert_eq!(link_href("HTTP://x.dev"), "HTTP://x.dev");
        assert_eq!(link_href("https://x.dev"), "https://x.dev");
    }

    #[test]
    fn test_block_view_splits_bullets() {
        let view = block_view("Acme Corp\n2019 - 2023\n- Built APIs\n• Led team");
        assert_eq!(view.heading, "Acme Corp");
        assert_eq!(view.details, vec!["2019 - 2023"]);
        assert_eq!(view.bullets, vec!["Built APIs", "Led team"]);
    }

    #[test]
    fn test_export_escapes_user_text() {
        let html = export_page(&record()).render().unwrap();
        assert!(html.contains("Jane &lt;Doe&gt;"));
        assert!(!html.contains("Jane <Doe>"));
        assert!(html.contains("Experience"));
        assert!(html.contains("Built APIs"));
        assert!(html.contains("Likes compilers."));
    }

    #[test]
    fn test_export_of_empty_record() {
        let page = export_page(&ResumeRecord::default());
        assert_eq!(page.name, "Resume");
        assert!(page.groups.is_empty());
        assert!(page.render().unwrap().contains("<title>Resume</title>"));
    }

    #[test]
    fn test_index_page_lists_samples() {
        let html = index_page(10 * 1024 * 1024).render().unwrap();
        assert!(html.contains("10 MB"));
        assert!(html.contains("Quantifiable Results"));
        assert!(html.contains("60/100 (Needs Work)"));
        assert!(html.contains("90/100 (Excellent)"));
        assert!(html.contains("name=\"file\""));
    }

    #[test]
    fn test_editor_page_renders_analysis_and_notice() {
        let text = "Jane Doe\njane@example.com\n\nExperience\nLed 3 teams";
        let mut session = ResumeSession::new(
            "cv.txt".to_string(),
            DocumentKind::PlainText,
            text.to_string(),
            crate::parsing::parse_resume(text),
            Some("Heads up".to_string()),
        );
        let html = editor_page(&session).render().unwrap();
        assert!(html.contains("Heads up"));
        assert!(html.contains("Contact Information"));
        assert!(html.contains("badge-needs-work\">Needs Work</span>"));
        assert!(html.contains("jane@example.com"));

        session.source_text.clear();
        session.notice = None;
        let page = editor_page(&session);
        assert!(!page.has_analysis);
        assert!(!page.has_notice);
        assert!(page.render().is_ok());
    }

    #[test]
    fn test_analysis_view_rounds_scores() {
        let view = AnalysisView::from_report(&analyze("jane@example.com"));
        assert_eq!(view.cards.len(), 6);
        assert_eq!(view.cards[0].score, "33");
        assert_eq!(view.cards[0].band_class, "needs-work");
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(10 * 1024 * 1024), "10 MB");
        assert_eq!(human_size(1536), "1 KB");
        assert_eq!(human_size(12), "12 bytes");
    }
}
