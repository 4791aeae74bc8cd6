use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::watch;

use crate::summary::{SummaryCell, SummaryRequestState};
use crate::utils::formatting::format_duration;

/// Spinner shown while a summary request is in flight.
pub struct SummaryProgress {
    bar: ProgressBar,
    start_time: std::time::Instant,
}

impl SummaryProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(spinner) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            bar.set_style(spinner);
        }
        bar.set_message("Waiting to start...");
        bar.enable_steady_tick(std::time::Duration::from_millis(120));
        Self { bar, start_time: std::time::Instant::now() }
    }

    /// Hidden spinner for quiet mode and non-terminal output.
    pub fn hidden() -> Self {
        Self { bar: ProgressBar::hidden(), start_time: std::time::Instant::now() }
    }

    /// Update the spinner for a state change.
    pub fn handle_state(&self, state: &SummaryRequestState) {
        let elapsed = format_duration(self.start_time.elapsed().as_millis() as u64);
        match state {
            SummaryRequestState::Idle => {}
            SummaryRequestState::Pending => {
                self.bar.set_message(format!("Generating... ({})", elapsed));
            }
            SummaryRequestState::Succeeded { .. } => {
                self.bar.finish_with_message(format!("{} Summary ready in {}", style("✓").green(), elapsed));
            }
            SummaryRequestState::Failed { .. } => {
                self.bar.abandon_with_message(format!("{} Summary failed after {}", style("✗").red(), elapsed));
            }
        }
    }

    /// Follow `rx` until the state becomes terminal or the sender goes away.
    pub async fn follow(&self, mut rx: watch::Receiver<SummaryCell>) {
        loop {
            let state = rx.borrow_and_update().state().clone();
            self.handle_state(&state);
            if state.is_terminal() || rx.changed().await.is_err() {
                break;
            }
        }
    }
}

impl Default for SummaryProgress {
    fn default() -> Self {
        Self::new()
    }
}
