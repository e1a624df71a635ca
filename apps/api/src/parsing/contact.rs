use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::ContactInfo;

pub static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern")
});

pub static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone pattern")
});

pub static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"linkedin\.com/in/[\w-]+").expect("linkedin pattern"));

// Full URLs first so a scheme-qualified profile link keeps its path.
static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)https?://[^\s|,;<>()"']+|(?:www\.)?(?:linkedin\.com/in|github\.com)/[\w-]+/?"#,
    )
    .expect("link pattern")
});

static SEGMENT_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[|•·\t]\s*|\s{2,}").expect("segment pattern"));

static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Z][A-Za-z.'\-]*(?: [A-Z][A-Za-z.'\-]*)*, ?[A-Z][A-Za-z]*(?: [A-Z][A-Za-z]*)*(?: \d{5}(?:-\d{4})?)?$",
    )
    .expect("location pattern")
});

const NOT_A_NAME: &[&str] = &["resume", "résumé", "curriculum vitae", "cv"];

/// Extracts contact fields. Email, phone and links are searched across the whole
/// text; name and location only within the header lines.
pub fn extract_contact(text: &str, header_lines: &[&str]) -> ContactInfo {
    let name = header_lines
        .iter()
        .find(|line| looks_like_name(line))
        .map(|line| line.to_string());

    let location = header_lines
        .iter()
        .filter(|line| Some(**line) != name.as_deref())
        .flat_map(|line| SEGMENT_SPLIT_RE.split(line))
        .map(str::trim)
        .find(|segment| LOCATION_RE.is_match(segment))
        .map(String::from);

    ContactInfo {
        name,
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().trim().to_string()),
        location,
        links: extract_links(text),
    }
}

/// Profile and web links in order of first appearance, without duplicates.
pub fn extract_links(text: &str) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    for m in LINK_RE.find_iter(text) {
        let link = m
            .as_str()
            .trim_end_matches(['.', ',', ';', ':', ')', ']', '!', '?']);
        if !link.is_empty() && !links.iter().any(|l| l == link) {
            links.push(link.to_string());
        }
    }
    links
}

fn looks_like_name(line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() || words.len() > 5 || line.len() > 60 {
        return false;
    }
    if NOT_A_NAME.contains(&line.to_lowercase().as_str()) {
        return false;
    }
    if line
        .chars()
        .any(|c| c.is_ascii_digit() || matches!(c, '@' | ',' | '|' | '/' | ':' | '•' | '(' | ')'))
    {
        return false;
    }
    words.iter().all(|word| {
        // "J." is an initial; "janedoe.dev" is a domain.
        !word.trim_end_matches('.').contains('.')
            && word
                .chars()
                .all(|c| c.is_alphabetic() || matches!(c, '.' | '\'' | '-'))
    }) && line.chars().any(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_first_match() {
        let info = extract_contact("a@b.io then jane.doe@example.com", &[]);
        assert_eq!(info.email.as_deref(), Some("a@b.io"));
    }

    #[test]
    fn test_phone_formats() {
        for (text, expected) in [
            ("Call (555) 123-4567 today", "(555) 123-4567"),
            ("+1 555.123.4567", "+1 555.123.4567"),
            ("tel 5551234567", "5551234567"),
        ] {
            let info = extract_contact(text, &[]);
            assert_eq!(info.phone.as_deref(), Some(expected), "input: {text}");
        }
    }

    #[test]
    fn test_missing_fields_stay_empty() {
        let info = extract_contact("Nothing useful here", &[]);
        assert_eq!(info, ContactInfo::default());
    }

    #[test]
    fn test_name_is_first_plausible_header_line() {
        let header = ["RESUME", "Jane Q. Doe", "Software Engineer"];
        let info = extract_contact("", &header);
        assert_eq!(info.name.as_deref(), Some("Jane Q. Doe"));
    }

    #[test]
    fn test_name_rejects_contact_lines() {
        let header = ["jane@example.com", "janedoe.dev", "Austin, TX", "555 123 4567"];
        let info = extract_contact("", &header);
        assert_eq!(info.name, None);
    }

    #[test]
    fn test_location_from_segment() {
        let header = [
            "Jane Doe",
            "jane@example.com | (555) 123-4567 | San Francisco, CA 94105",
        ];
        let info = extract_contact("", &header);
        assert_eq!(info.location.as_deref(), Some("San Francisco, CA 94105"));
    }

    #[test]
    fn test_location_country_form() {
        let header = ["John Smith", "London, United Kingdom  •  john@smith.co.uk"];
        let info = extract_contact("", &header);
        assert_eq!(info.location.as_deref(), Some("London, United Kingdom"));
    }

    #[test]
    fn test_links_deduplicated_in_order() {
        let text = "https://github.com/jane/compiler, linkedin.com/in/jane-doe and \
                    https://janedoe.dev. Again: https://github.com/jane/compiler";
        assert_eq!(
            extract_links(text),
            vec![
                "https://github.com/jane/compiler".to_string(),
                "linkedin.com/in/jane-doe".to_string(),
                "https://janedoe.dev".to_string(),
            ]
        );
    }

    #[test]
    fn test_email_domain_is_not_a_link() {
        assert!(extract_links("jane@github.com").is_empty());
    }
}
