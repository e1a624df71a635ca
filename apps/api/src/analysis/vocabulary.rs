/// Strong action verbs counted by the action-verb check. Lowercase.
pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "analyzed",
    "built",
    "created",
    "designed",
    "developed",
    "enhanced",
    "established",
    "executed",
    "generated",
    "implemented",
    "improved",
    "increased",
    "launched",
    "led",
    "managed",
    "optimized",
    "organized",
    "performed",
    "planned",
    "produced",
    "reduced",
    "resolved",
    "streamlined",
    "supervised",
    "transformed",
    "utilized",
    "automated",
    "collaborated",
    "coordinated",
    "delivered",
    "demonstrated",
    "directed",
    "facilitated",
    "initiated",
    "maintained",
    "operated",
    "oversaw",
    "pioneered",
    "presented",
    "processed",
    "programmed",
    "researched",
    "spearheaded",
    "strategized",
    "trained",
    "upgraded",
    "validated",
];

/// Keywords whose presence anywhere in the text marks a section as present.
pub const SECTION_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "experience",
        &["experience", "employment", "work history", "professional"],
    ),
    (
        "education",
        &["education", "degree", "university", "college", "school"],
    ),
    (
        "skills",
        &["skills", "technical", "competencies", "proficiencies"],
    ),
    ("summary", &["summary", "objective", "profile", "about"]),
];

/// Lowercase word tokens with ASCII punctuation removed.
pub fn simple_tokens(text: &str) -> Vec<String> {
    let stripped: String = text
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    stripped
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_strip_punctuation() {
        assert_eq!(
            simple_tokens("Led, built & SHIPPED (fast)."),
            vec!["led", "built", "shipped", "fast"]
        );
    }

    #[test]
    fn test_hyphenated_words_join() {
        assert_eq!(simple_tokens("co-led"), vec!["coled"]);
    }

    #[test]
    fn test_verbs_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for verb in ACTION_VERBS {
            assert_eq!(*verb, verb.to_lowercase());
            assert!(seen.insert(*verb), "duplicate verb {verb}");
        }
    }
}
