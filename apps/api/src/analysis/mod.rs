//! Resume scoring: six fixed checks over the resume text plus overall recommendations.

pub mod checks;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

use crate::analysis::checks::{
    check_action_verbs, check_contact_info, check_length_and_format, check_quantifiable_results,
    check_sections, check_skills,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ContactInformation,
    ResumeSections,
    ActionVerbs,
    QuantifiableResults,
    SkillsAssessment,
    FormatAndLength,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::ContactInformation,
        Category::ResumeSections,
        Category::ActionVerbs,
        Category::QuantifiableResults,
        Category::SkillsAssessment,
        Category::FormatAndLength,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::ContactInformation => "Contact Information",
            Category::ResumeSections => "Resume Sections",
            Category::ActionVerbs => "Action Verbs",
            Category::QuantifiableResults => "Quantifiable Results",
            Category::SkillsAssessment => "Skills Assessment",
            Category::FormatAndLength => "Format & Length",
        }
    }

    pub fn priority_message(self) -> &'static str {
        match self {
            Category::ContactInformation => "Priority: Complete all contact information",
            Category::ResumeSections => "Priority: Include all essential resume sections",
            Category::ActionVerbs => "Priority: Incorporate more dynamic action verbs",
            Category::QuantifiableResults => "Priority: Add measurable achievements and metrics",
            Category::SkillsAssessment => "Priority: Expand and detail your skills section",
            Category::FormatAndLength => "Priority: Optimize formatting and length",
        }
    }

    fn run(self, text: &str) -> checks::CheckResult {
        match self {
            Category::ContactInformation => check_contact_info(text),
            Category::ResumeSections => check_sections(text),
            Category::ActionVerbs => check_action_verbs(text),
            Category::QuantifiableResults => check_quantifiable_results(text),
            Category::SkillsAssessment => check_skills(text),
            Category::FormatAndLength => check_length_and_format(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            ScoreBand::Excellent
        } else if score >= 70.0 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsWork
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsWork => "Needs Work",
        }
    }

    /// CSS modifier used by the HTML pages.
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::NeedsWork => "needs-work",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTone {
    Positive,
    Negative,
    Neutral,
}

impl FeedbackTone {
    pub fn classify(item: &str) -> Self {
        let lower = item.to_lowercase();
        if item.starts_with('✓')
            || lower.contains("excellent")
            || (lower.contains("good") && !lower.contains("limited"))
        {
            FeedbackTone::Positive
        } else if item.starts_with('✗') || lower.contains("missing") || lower.contains("limited") {
            FeedbackTone::Negative
        } else {
            FeedbackTone::Neutral
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            FeedbackTone::Positive => "positive",
            FeedbackTone::Negative => "negative",
            FeedbackTone::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub text: String,
    pub tone: FeedbackTone,
}

impl From<String> for FeedbackItem {
    fn from(text: String) -> Self {
        let tone = FeedbackTone::classify(&text);
        FeedbackItem { text, tone }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: Category,
    pub score: f64,
    pub band: ScoreBand,
    pub feedback: Vec<FeedbackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_score: f64,
    pub overall_band: ScoreBand,
    pub word_count: usize,
    pub categories: Vec<CategoryResult>,
    pub recommendations: Vec<String>,
}

/// Runs every check over `text` and assembles the report.
pub fn analyze(text: &str) -> AnalysisReport {
    let categories: Vec<CategoryResult> = Category::ALL
        .iter()
        .map(|&category| {
            let (score, feedback) = category.run(text);
            let score = score.clamp(0.0, 100.0);
            CategoryResult {
                category,
                score,
                band: ScoreBand::from_score(score),
                feedback: feedback.into_iter().map(FeedbackItem::from).collect(),
            }
        })
        .collect();

    let scores: Vec<(Category, f64)> = categories.iter().map(|c| (c.category, c.score)).collect();
    let (overall_score, recommendations) = overall_feedback(&scores);

    tracing::debug!("Analysis complete: overall={overall_score:.1}");

    AnalysisReport {
        overall_score,
        overall_band: ScoreBand::from_score(overall_score),
        word_count: text.split_whitespace().count(),
        categories,
        recommendations,
    }
}

/// Mean score plus recommendations: a banded verdict, then priorities for the
/// two weakest categories that fall below 70.
pub fn overall_feedback(scores: &[(Category, f64)]) -> (f64, Vec<String>) {
    if scores.is_empty() {
        return (0.0, Vec::new());
    }
    let average = scores.iter().map(|(_, s)| s).sum::<f64>() / scores.len() as f64;

    let verdict = if average >= 85.0 {
        "Excellent resume quality - ready for applications"
    } else if average >= 70.0 {
        "Good foundation with room for targeted improvements"
    } else if average >= 55.0 {
        "Moderate quality - several areas need attention"
    } else {
        "Significant improvements needed across multiple areas"
    };
    let mut recommendations = vec![verdict.to_string()];

    let mut ranked = scores.to_vec();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    recommendations.extend(
        ranked
            .iter()
            .take(2)
            .filter(|(_, score)| *score < 70.0)
            .map(|(category, _)| category.priority_message().to_string()),
    );

    (average, recommendations)
}

/// Fixed scores shown on the landing page before anything is uploaded.
pub fn sample_scores() -> Vec<(Category, f64)> {
    vec![
        (Category::ContactInformation, 85.0),
        (Category::ResumeSections, 90.0),
        (Category::ActionVerbs, 70.0),
        (Category::QuantifiableResults, 60.0),
        (Category::SkillsAssessment, 80.0),
        (Category::FormatAndLength, 85.0),
    ]
}
