use std::path::Path;
use std::sync::Arc;

use crate::cli::commands::SummarizeArgs;
use crate::dashboard::dashboard_findings;
use crate::errors::AuditError;
use crate::models::finding::Finding;
use crate::render::{render_findings, render_summary, SummaryProgress};
use crate::summary::SummaryWorkflow;
use tracing::info;

/// Run the summary workflow once and render where it ended up.
///
/// A failed generation is a normal outcome: it is rendered and the command
/// still exits successfully.
pub async fn handle_summarize(args: SummarizeArgs, quiet: bool) -> Result<(), AuditError> {
    let runtime = super::load_runtime(args.llm.config.as_deref(), &args.overrides()).await?;

    let findings = match &args.findings {
        Some(path) => load_findings(Path::new(path)).await?,
        None => dashboard_findings(),
    };
    info!(findings = findings.len(), "Summarizing findings");

    let workflow = Arc::new(SummaryWorkflow::new(super::build_provider(&runtime), runtime.overlap));

    if !quiet && !args.json {
        print!("{}", render_findings(&findings));
    }

    let progress = if quiet || args.json { SummaryProgress::hidden() } else { SummaryProgress::new() };
    let rx = workflow.subscribe();
    let follower = tokio::spawn(async move { progress.follow(rx).await });

    let state = workflow.generate(&findings).await;
    follower
        .await
        .map_err(|e| AuditError::Internal(format!("Progress task failed: {}", e)))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", render_summary(&state));
    }
    Ok(())
}

/// Read a JSON array of findings, e.g. `[{"category": "Critical", "text": "..."}]`.
pub async fn load_findings(path: &Path) -> Result<Vec<Finding>, AuditError> {
    if !path.exists() {
        return Err(AuditError::Config(format!("Findings file not found: {}", path.display())));
    }
    let content = tokio::fs::read_to_string(path).await?;
    let findings: Vec<Finding> = serde_json::from_str(&content)?;
    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_findings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"category": "Critical", "text": "CPL rose 20%"}}, {{"category": "Positive", "text": "ROAS improved"}}]"#).unwrap();

        let findings = load_findings(file.path()).await.unwrap();
        assert_eq!(findings, vec![Finding::critical("CPL rose 20%"), Finding::positive("ROAS improved")]);
    }

    #[tokio::test]
    async fn test_load_findings_rejects_unknown_category() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"category": "Neutral", "text": "x"}}]"#).unwrap();
        assert!(matches!(load_findings(file.path()).await, Err(AuditError::Json(_))));
    }

    #[tokio::test]
    async fn test_load_findings_missing_file() {
        let err = load_findings(Path::new("/nonexistent/findings.json")).await.unwrap_err();
        assert!(matches!(err, AuditError::Config(_)));
    }
}
