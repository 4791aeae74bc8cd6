pub mod prompt;
pub mod state;
pub mod workflow;

pub use prompt::{build_prompt, format_findings};
pub use state::{OverlapPolicy, SummaryCell, SummaryRequestState, SummaryView, Ticket};
pub use workflow::{generate_summary, SummaryWorkflow, SUMMARY_MODEL};
