//! Spinner display for overlay streams of unknown length

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

// Tick interval for the spinner animation
const TICK_INTERVAL: Duration = Duration::from_millis(100);

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} [{elapsed_precise}] {pos} images {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Counts overlaid images while the directory walk runs
///
/// The walk is lazy, so the total is unknown and a spinner is shown instead
/// of a bar.
pub struct ProgressReporter {
    spinner: ProgressBar,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    /// Create and start a spinner
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.enable_steady_tick(TICK_INTERVAL);
        Self { spinner }
    }

    /// Create a reporter that draws nothing
    pub fn hidden() -> Self {
        Self {
            spinner: ProgressBar::hidden(),
        }
    }

    /// Record one finished image with a short description of it
    pub fn advance(&self, summary: impl Into<String>) {
        self.spinner.inc(1);
        self.spinner.set_message(summary.into());
    }

    /// Number of images recorded so far
    pub fn count(&self) -> u64 {
        self.spinner.position()
    }

    /// Stop the spinner and leave a summary line
    pub fn finish(&self) {
        let count = self.count();
        self.spinner
            .finish_with_message(format!("done, {count} images overlaid"));
    }
}
