use geo_core::AnalysisResult;
use std::fmt::Write;

/// Plain-text summary used by the share/export action.
pub fn share_text(title: &str, analysis: &AnalysisResult) -> String {
    format!(
        "GeoImpact Analysis: {}\n\nSummary: {}\n\nImpact for India: {}",
        title, analysis.summary, analysis.impact_for_india
    )
}

/// Full report as shown on the analysis screen.
pub fn render_report(title: &str, analysis: &AnalysisResult) -> String {
    let mut out = String::new();
    let rule = "=".repeat(title.chars().count().clamp(20, 80));

    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "Sentiment: {}    Timeline: {}",
        analysis.sentiment, analysis.timeline
    );
    section(&mut out, "Summary", &analysis.summary);
    section(&mut out, "Geopolitical Context", &analysis.geopolitical_context);
    section(&mut out, "Impact for India", &analysis.impact_for_india);

    if !analysis.key_takeaways.is_empty() {
        let _ = writeln!(out, "\nKey Takeaways");
        for (i, takeaway) in analysis.key_takeaways.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, takeaway);
        }
    }

    out
}

fn section(out: &mut String, heading: &str, body: &str) {
    let _ = writeln!(out, "\n{}", heading);
    let _ = writeln!(out, "{}", "-".repeat(heading.len()));
    let _ = writeln!(out, "{}", body);
}
