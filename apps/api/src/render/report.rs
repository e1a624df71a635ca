//! Plain-text analysis report offered as a download.

use chrono::{DateTime, Utc};

use crate::analysis::AnalysisReport;

pub fn render_text_report(report: &AnalysisReport, generated_at: DateTime<Utc>) -> String {
    let scores = report
        .categories
        .iter()
        .map(|c| format!("• {}: {:.0}/100", c.category.label(), c.score))
        .collect::<Vec<_>>()
        .join("\n");

    let recommendations = report
        .recommendations
        .iter()
        .map(|r| format!("• {r}"))
        .collect::<Vec<_>>()
        .join("\n");

    let feedback = report
        .categories
        .iter()
        .map(|c| {
            let items = c
                .feedback
                .iter()
                .map(|f| format!("  - {}", f.text))
                .collect::<Vec<_>>()
                .join("\n");
            format!("\n{}:\n{}\n", c.category.label().to_uppercase(), items)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "RESUME ANALYSIS REPORT\n\
         Generated: {}\n\
         \n\
         OVERALL SCORE: {:.0}/100\n\
         \n\
         DETAILED SCORES:\n\
         {scores}\n\
         \n\
         RECOMMENDATIONS:\n\
         {recommendations}\n\
         \n\
         DETAILED FEEDBACK:\n\
         {feedback}",
        generated_at.format("%Y-%m-%d %H:%M:%S"),
        report.overall_score,
    )
}

pub fn report_file_name(generated_at: DateTime<Utc>) -> String {
    format!(
        "resume_analysis_{}.txt",
        generated_at.format("%Y%m%d_%H%M%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_file_name() {
        assert_eq!(report_file_name(at()), "resume_analysis_20240309_140507.txt");
    }

    #[test]
    fn test_report_layout() {
        let report = analyze("jane@example.com");
        let text = render_text_report(&report, at());

        assert!(text.starts_with("RESUME ANALYSIS REPORT\nGenerated: 2024-03-09 14:05:07\n\n"));
        assert!(text.contains("\nDETAILED SCORES:\n• Contact Information: 33/100\n"));
        assert!(text.contains("• Format & Length: 35/100"));
        assert!(text.contains("\nRECOMMENDATIONS:\n• Significant improvements needed"));
        assert!(text.contains("\nCONTACT INFORMATION:\n  - ✓ Email address found\n"));
        assert!(text.contains("\nFORMAT & LENGTH:\n  - May be too brief (1 words)"));
    }
}
