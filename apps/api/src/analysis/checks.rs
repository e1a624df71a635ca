//! The six scoring checks. Each returns a 0–100 score and its feedback lines.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::vocabulary::{simple_tokens, ACTION_VERBS, SECTION_KEYWORDS};
use crate::parsing::contact::{EMAIL_RE, LINKEDIN_RE, PHONE_RE};
use crate::parsing::skills::{find_in_catalogue, SOFT_SKILLS, TECHNICAL_SKILLS};

static METRIC_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\d+%",
        r"\$\d+",
        r"\d+\+",
        r"\d{1,3}(?:,\d{3})*",
        r"\d+(?:\.\d+)?[KMB]",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("metric pattern"))
    .collect()
});

pub type CheckResult = (f64, Vec<String>);

pub fn check_contact_info(text: &str) -> CheckResult {
    let has_email = EMAIL_RE.is_match(text);
    let has_phone = PHONE_RE.is_match(text);
    let has_linkedin = LINKEDIN_RE.is_match(&text.to_lowercase());

    let found = [has_email, has_phone, has_linkedin]
        .iter()
        .filter(|present| **present)
        .count();
    let score = found as f64 / 3.0 * 100.0;

    let feedback = vec![
        if has_email {
            "✓ Email address found"
        } else {
            "✗ Missing email address"
        }
        .to_string(),
        if has_phone {
            "✓ Phone number found"
        } else {
            "✗ Missing phone number"
        }
        .to_string(),
        if has_linkedin {
            "✓ LinkedIn profile found"
        } else {
            "✗ LinkedIn profile missing"
        }
        .to_string(),
    ];

    (score, feedback)
}

pub fn check_sections(text: &str) -> CheckResult {
    let lower = text.to_lowercase();

    let mut present_count = 0;
    let mut feedback = Vec::with_capacity(SECTION_KEYWORDS.len());
    for (section, keywords) in SECTION_KEYWORDS {
        let present = keywords.iter().any(|k| lower.contains(k));
        let title = title_case(section);
        if present {
            present_count += 1;
            feedback.push(format!("✓ {title} section present"));
        } else {
            feedback.push(format!("✗ {title} section missing"));
        }
    }

    let score = present_count as f64 / SECTION_KEYWORDS.len() as f64 * 100.0;
    (score, feedback)
}

pub fn check_action_verbs(text: &str) -> CheckResult {
    // (verb, count) in order of first use
    let mut counts: Vec<(String, usize)> = Vec::new();
    for token in simple_tokens(text) {
        if !ACTION_VERBS.contains(&token.as_str()) {
            continue;
        }
        match counts.iter_mut().find(|(verb, _)| *verb == token) {
            Some((_, n)) => *n += 1,
            None => counts.push((token, 1)),
        }
    }

    let variety = counts.len();
    let score = (variety as f64 * 10.0).min(100.0);

    let mut feedback = Vec::new();
    if variety >= 8 {
        feedback.push(format!("Excellent variety of action verbs ({variety} unique)"));
    } else if variety >= 5 {
        feedback.push(format!("Good use of action verbs ({variety} unique)"));
    } else {
        feedback.push(format!("Limited action verb variety ({variety} unique)"));
        feedback.push("Consider using more impactful action verbs".to_string());
    }

    if !counts.is_empty() {
        // Stable sort keeps first-use order among equal counts.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        let top: Vec<&str> = counts.iter().take(3).map(|(v, _)| v.as_str()).collect();
        feedback.push(format!("Most frequent: {}", top.join(", ")));
    }

    (score, feedback)
}

pub fn check_quantifiable_results(text: &str) -> CheckResult {
    let metrics: usize = METRIC_PATTERNS
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum();

    let score = (metrics as f64 * 15.0).min(100.0);

    let mut feedback = Vec::new();
    if metrics >= 5 {
        feedback.push(format!(
            "Strong quantifiable results ({metrics} metrics found)"
        ));
    } else if metrics >= 3 {
        feedback.push(format!(
            "Moderate quantifiable results ({metrics} metrics found)"
        ));
    } else {
        feedback.push(format!(
            "Limited quantifiable results ({metrics} metrics found)"
        ));
        feedback.push(
            "Add specific numbers, percentages, or metrics to demonstrate impact".to_string(),
        );
    }

    (score, feedback)
}

pub fn check_skills(text: &str) -> CheckResult {
    let lower = text.to_lowercase();
    let technical = find_in_catalogue(TECHNICAL_SKILLS, &lower);
    let soft = find_in_catalogue(SOFT_SKILLS, &lower);

    let total = technical.len() + soft.len();
    let score = (total as f64 * 5.0).min(100.0);

    let mut feedback = vec![
        format!("Technical skills identified: {}", technical.len()),
        format!("Soft skills identified: {}", soft.len()),
    ];
    if !technical.is_empty() {
        feedback.push(format!(
            "Key technical skills: {}",
            technical.iter().take(3).copied().collect::<Vec<_>>().join(", ")
        ));
    }
    if !soft.is_empty() {
        feedback.push(format!(
            "Key soft skills: {}",
            soft.iter().take(3).copied().collect::<Vec<_>>().join(", ")
        ));
    }
    if total < 5 {
        feedback.push("Consider expanding your skills section".to_string());
    }

    (score, feedback)
}

/// Blank-line separators are counted in normalised text, where runs of blank lines are already collapsed.
pub fn check_length_and_format(text: &str) -> CheckResult {
    let word_count = text.split_whitespace().count();

    let (length_score, length_feedback) = if (400..=800).contains(&word_count) {
        (100.0, format!("Optimal length ({word_count} words)"))
    } else if word_count < 400 {
        (70.0, format!("May be too brief ({word_count} words)"))
    } else {
        (80.0, format!("May be too lengthy ({word_count} words)"))
    };

    let has_bullets = text.contains('•') || text.contains('-') || text.contains('*');
    let has_sections = text.matches("\n\n").count() > 3;

    let mut format_score = 0.0;
    let mut feedback = vec![length_feedback];

    if has_bullets {
        format_score += 50.0;
        feedback.push("Uses bullet points effectively".to_string());
    } else {
        feedback.push("Consider using bullet points for better readability".to_string());
    }

    if has_sections {
        format_score += 50.0;
        feedback.push("Well-organized section structure".to_string());
    } else {
        feedback.push("Improve section organization and spacing".to_string());
    }

    ((length_score + format_score) / 2.0, feedback)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
