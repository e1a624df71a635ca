//! Static skill catalogue and substring matching against it.

pub const TECHNICAL_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "React",
    "Node.js",
    "SQL",
    "MongoDB",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "Git",
    "Linux",
    "HTML",
    "CSS",
    "Machine Learning",
    "Data Analysis",
    "Excel",
    "Tableau",
    "PowerBI",
    "Photoshop",
    "Illustrator",
    "Figma",
    "Sketch",
    "AutoCAD",
    "SolidWorks",
    "Project Management",
    "Agile",
    "Scrum",
    "Jira",
    "Confluence",
    "Salesforce",
];

pub const SOFT_SKILLS: &[&str] = &[
    "Leadership",
    "Communication",
    "Teamwork",
    "Problem Solving",
    "Critical Thinking",
    "Adaptability",
    "Creativity",
    "Time Management",
    "Collaboration",
    "Analytical",
    "Detail-Oriented",
    "Organized",
    "Customer Service",
    "Presentation",
    "Negotiation",
    "Mentoring",
];

/// Catalogue entries whose lowercase form occurs anywhere in the lowercased text.
/// Plain substring search: "Java" is found inside "JavaScript".
pub fn find_in_catalogue(catalogue: &[&'static str], text_lower: &str) -> Vec<&'static str> {
    catalogue
        .iter()
        .copied()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .collect()
}

/// All matched skills, technical first, each list in catalogue order.
pub fn match_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    find_in_catalogue(TECHNICAL_SKILLS, &lower)
        .into_iter()
        .chain(find_in_catalogue(SOFT_SKILLS, &lower))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(
            match_skills("Built services in PYTHON and node.js"),
            vec!["Python".to_string(), "Node.js".to_string()]
        );
    }

    #[test]
    fn test_catalogue_order_not_text_order() {
        assert_eq!(
            match_skills("mentoring, docker, python"),
            vec!["Python", "Docker", "Mentoring"]
        );
    }

    #[test]
    fn test_substring_semantics() {
        let skills = match_skills("JavaScript only");
        assert!(skills.contains(&"Java".to_string()));
        assert!(skills.contains(&"JavaScript".to_string()));
    }

    #[test]
    fn test_multi_word_skills() {
        let skills = match_skills("Strong problem solving and time management");
        assert_eq!(skills, vec!["Problem Solving", "Time Management"]);
    }

    #[test]
    fn test_no_skills() {
        assert!(match_skills("").is_empty());
    }

    #[test]
    fn test_section_headings_contain_no_skills() {
        let headings = "summary skills experience education projects";
        assert!(match_skills(headings).is_empty());
    }
}
