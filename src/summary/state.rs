use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::SummaryGenerationError;

/// Lifecycle of one summary attempt, as seen by whoever renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SummaryRequestState {
    #[default]
    Idle,
    Pending,
    Succeeded { text: String },
    Failed { message: String },
}

impl SummaryRequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Succeeded { .. } => "succeeded",
            Self::Failed { .. } => "failed",
        }
    }

    /// Flatten into the loading/text/error triple a renderer consumes.
    pub fn view(&self) -> SummaryView {
        match self {
            Self::Idle => SummaryView::default(),
            Self::Pending => SummaryView { is_loading: true, ..Default::default() },
            Self::Succeeded { text } => SummaryView { text: text.clone(), ..Default::default() },
            Self::Failed { message } => SummaryView { error: message.clone(), ..Default::default() },
        }
    }
}

impl std::fmt::Display for SummaryRequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SummaryView {
    pub is_loading: bool,
    pub text: String,
    pub error: String,
}

/// What to do with a response that arrives after a newer trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Only the response to the most recent trigger is applied.
    #[default]
    LatestTrigger,
    /// Every response overwrites the state, in arrival order.
    LastResolved,
}

impl OverlapPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LatestTrigger => "latest_trigger",
            Self::LastResolved => "last_resolved",
        }
    }
}

/// Identifies one trigger so its resolution can be matched back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn attempt(&self) -> u64 {
        self.0
    }
}

/// The single mutable state cell behind the summary card.
///
/// Transitions are plain method calls so they can be exercised without a
/// runtime; `SummaryWorkflow` publishes the cell through a watch channel.
#[derive(Debug, Clone)]
pub struct SummaryCell {
    state: SummaryRequestState,
    policy: OverlapPolicy,
    latest: u64,
    updated_at: DateTime<Utc>,
}

impl SummaryCell {
    pub fn new(policy: OverlapPolicy) -> Self {
        Self {
            state: SummaryRequestState::Idle,
            policy,
            latest: 0,
            updated_at: Utc::now(),
        }
    }

    pub fn state(&self) -> &SummaryRequestState {
        &self.state
    }

    /// Number of triggers seen so far.
    pub fn attempts(&self) -> u64 {
        self.latest
    }

    pub fn latest_ticket(&self) -> Ticket {
        Ticket(self.latest)
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Enter `Pending`, dropping whatever text or error was shown before.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.state = SummaryRequestState::Pending;
        self.updated_at = Utc::now();
        debug!(attempt = self.latest, "Summary attempt started");
        Ticket(self.latest)
    }

    /// Apply the outcome of the attempt identified by `ticket`.
    ///
    /// Returns false when the outcome was discarded because a newer trigger
    /// superseded it under [`OverlapPolicy::LatestTrigger`].
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<String, SummaryGenerationError>) -> bool {
        if self.policy == OverlapPolicy::LatestTrigger && ticket.0 != self.latest {
            debug!(
                attempt = ticket.0,
                latest = self.latest,
                "Discarding summary outcome from superseded attempt"
            );
            return false;
        }

        self.state = match outcome {
            Ok(text) => SummaryRequestState::Succeeded { text },
            Err(err) => SummaryRequestState::Failed { message: err.into_message() },
        };
        self.updated_at = Utc::now();
        true
    }
}

impl Default for SummaryCell {
    fn default() -> Self {
        Self::new(OverlapPolicy::default())
    }
}
