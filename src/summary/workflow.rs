use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};

use crate::errors::SummaryGenerationError;
use crate::llm::LLMProvider;
use crate::models::finding::Finding;
use super::prompt::build_prompt;
use super::state::{OverlapPolicy, SummaryCell, SummaryRequestState, Ticket};

/// Model every executive summary is requested from.
pub const SUMMARY_MODEL: &str = "gemini-2.5-flash";

/// Ask `provider` for an executive summary of `findings`.
///
/// Exactly one call is made. The returned text is passed through untouched;
/// any provider failure comes back as a [`SummaryGenerationError`].
pub async fn generate_summary(
    provider: &dyn LLMProvider,
    findings: &[Finding],
) -> Result<String, SummaryGenerationError> {
    let prompt = build_prompt(findings);
    info!(
        provider = provider.provider_name(),
        model = provider.model_name(),
        findings = findings.len(),
        "Generating executive summary"
    );

    match provider.complete(&prompt).await {
        Ok(response) => Ok(response.content),
        Err(e) => {
            let class = e.classify();
            error!(error_type = class.error_type, error = %e, "Error generating summary");
            Err(SummaryGenerationError::from_cause(&e))
        }
    }
}

/// Owns the summary state cell and drives it through trigger and resolution.
///
/// Observers call [`subscribe`](Self::subscribe) and re-render whenever the
/// receiver reports a change.
pub struct SummaryWorkflow {
    provider: Arc<dyn LLMProvider>,
    cell: watch::Sender<SummaryCell>,
}

impl SummaryWorkflow {
    pub fn new(provider: Arc<dyn LLMProvider>, policy: OverlapPolicy) -> Self {
        let (cell, _) = watch::channel(SummaryCell::new(policy));
        Self { provider, cell }
    }

    pub fn subscribe(&self) -> watch::Receiver<SummaryCell> {
        self.cell.subscribe()
    }

    pub fn state(&self) -> SummaryRequestState {
        self.cell.borrow().state().clone()
    }

    pub fn snapshot(&self) -> SummaryCell {
        self.cell.borrow().clone()
    }

    /// Move to `Pending` and hand out the ticket the outcome must be filed under.
    pub fn begin(&self) -> Ticket {
        let mut ticket = None;
        self.cell.send_modify(|cell| ticket = Some(cell.begin()));
        ticket.unwrap_or_else(|| self.cell.borrow().latest_ticket())
    }

    /// File the outcome of `ticket`. Observers are only notified when the
    /// state actually changed.
    pub fn resolve(&self, ticket: Ticket, outcome: Result<String, SummaryGenerationError>) -> bool {
        self.cell.send_if_modified(|cell| cell.resolve(ticket, outcome))
    }

    /// Call the provider for an attempt that has already begun and file the
    /// outcome under its ticket.
    pub async fn complete(&self, ticket: Ticket, findings: &[Finding]) -> bool {
        let outcome = generate_summary(self.provider.as_ref(), findings).await;
        let applied = self.resolve(ticket, outcome);
        info!(attempt = ticket.attempt(), applied, "Summary attempt finished");
        applied
    }

    /// Run one complete attempt: trigger, call the provider, resolve.
    pub async fn generate(&self, findings: &[Finding]) -> SummaryRequestState {
        let ticket = self.begin();
        self.complete(ticket, findings).await;
        self.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use crate::errors::AuditError;
    use crate::llm::LLMResponse;

    /// Replays a fixed outcome and records every prompt it receives.
    struct StubProvider {
        outcome: Result<String, String>,
        calls: AtomicU32,
        prompts: Mutex<Vec<String>>,
    }

    impl StubProvider {
        fn ok(text: &str) -> Self {
            Self { outcome: Ok(text.to_string()), calls: AtomicU32::new(0), prompts: Mutex::new(Vec::new()) }
        }

        fn failing(message: &str) -> Self {
            Self { outcome: Err(message.to_string()), calls: AtomicU32::new(0), prompts: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl LLMProvider for StubProvider {
        async fn complete(&self, prompt: &str) -> Result<LLMResponse, AuditError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.outcome {
                Ok(text) => Ok(LLMResponse::text(text.clone(), SUMMARY_MODEL)),
                Err(msg) => Err(AuditError::Network(msg.clone())),
            }
        }

        fn provider_name(&self) -> &str { "stub" }
        fn model_name(&self) -> &str { SUMMARY_MODEL }
    }

    fn sample_findings() -> Vec<Finding> {
        vec![Finding::critical("CPL rose 20%"), Finding::positive("ROAS improved")]
    }

    #[tokio::test]
    async fn test_generate_summary_returns_text_verbatim() {
        let provider = StubProvider::ok("  Overall performance improved.\n");
        let text = generate_summary(&provider, &sample_findings()).await.unwrap();
        assert_eq!(text, "  Overall performance improved.\n");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generate_summary_sends_formatted_prompt() {
        let provider = StubProvider::ok("ok");
        generate_summary(&provider, &sample_findings()).await.unwrap();
        let prompts = provider.prompts.lock().unwrap();
        assert!(prompts[0].ends_with("- [Critical] CPL rose 20%\n- [Positive] ROAS improved"));
    }

    #[tokio::test]
    async fn test_generate_summary_failure_message() {
        let provider = StubProvider::failing("network down");
        let err = generate_summary(&provider, &sample_findings()).await.unwrap_err();
        assert_eq!(err.message(), "network down");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generate_summary_failure_without_message() {
        let provider = StubProvider::failing("");
        let err = generate_summary(&provider, &[]).await.unwrap_err();
        assert_eq!(err.message(), "Failed to generate summary.");
    }

    #[tokio::test]
    async fn test_workflow_reaches_succeeded() {
        let workflow = SummaryWorkflow::new(Arc::new(StubProvider::ok("done")), OverlapPolicy::default());
        assert_eq!(workflow.state(), SummaryRequestState::Idle);

        let state = workflow.generate(&sample_findings()).await;
        assert_eq!(state, SummaryRequestState::Succeeded { text: "done".into() });
        assert_eq!(workflow.snapshot().attempts(), 1);
    }

    #[tokio::test]
    async fn test_workflow_stays_usable_after_failure() {
        let workflow = SummaryWorkflow::new(Arc::new(StubProvider::failing("network down")), OverlapPolicy::default());
        let first = workflow.generate(&sample_findings()).await;
        assert_eq!(first.view().error, "network down");

        let second = workflow.generate(&sample_findings()).await;
        assert_eq!(second.view().error, "network down");
        assert_eq!(workflow.snapshot().attempts(), 2);
    }

    #[tokio::test]
    async fn test_subscribers_see_pending_then_terminal() {
        let workflow = SummaryWorkflow::new(Arc::new(StubProvider::ok("done")), OverlapPolicy::default());
        let mut rx = workflow.subscribe();

        let ticket = workflow.begin();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().state().is_loading());

        workflow.resolve(ticket, Ok("done".into()));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().state().view().text, "done");
    }

    #[tokio::test]
    async fn test_discarded_outcome_does_not_notify() {
        let workflow = SummaryWorkflow::new(Arc::new(StubProvider::ok("x")), OverlapPolicy::LatestTrigger);
        let stale = workflow.begin();
        let _fresh = workflow.begin();
        let mut rx = workflow.subscribe();

        assert!(!workflow.resolve(stale, Ok("stale".into())));
        assert!(!rx.has_changed().unwrap());
        assert!(workflow.state().is_loading());
    }
}
