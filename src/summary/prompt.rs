use crate::models::finding::Finding;

const SUMMARY_INSTRUCTIONS: &str = "You are an expert business analyst. Based on the following social media and platform audit findings, \
write a concise, professional executive summary (2-3 paragraphs) for a presentation. \
Focus on the key takeaways and strategic recommendations.";

/// Render findings as `- [<category>] <text>` lines, in input order.
pub fn format_findings(findings: &[Finding]) -> String {
    findings
        .iter()
        .map(|f| format!("- [{}] {}", f.category, f.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the full executive-summary prompt. Only the findings block varies.
pub fn build_prompt(findings: &[Finding]) -> String {
    format!("{}\n\nAudit Findings:\n{}", SUMMARY_INSTRUCTIONS, format_findings(findings))
}
