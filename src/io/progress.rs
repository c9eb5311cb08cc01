//! Progress display for the collapse loop

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SOLVE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for a single solve, restarted per attempt
///
/// One bar tracks collapses against the cell count; a contradicted attempt
/// abandons the bar with the offending coordinates and the next attempt
/// starts a fresh one.
pub struct SolveProgress {
    bar: Option<ProgressBar>,
    enabled: bool,
}

impl SolveProgress {
    /// Create a progress display; a disabled one renders nothing
    pub const fn new(enabled: bool) -> Self {
        Self { bar: None, enabled }
    }

    /// Begin a new attempt over `cell_count` collapses
    pub fn start_attempt(&mut self, attempt: usize, total_attempts: usize, cell_count: usize) {
        if !self.enabled {
            return;
        }
        let bar = ProgressBar::new(cell_count as u64);
        bar.set_style(SOLVE_STYLE.clone());
        bar.set_message(format!("attempt {attempt}/{total_attempts}"));
        self.bar = Some(bar);
    }

    /// Record one collapsed cell
    pub fn record_collapse(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Abandon the current attempt after a contradiction
    pub fn abandon_attempt(&mut self, x: usize, y: usize) {
        if let Some(bar) = self.bar.take() {
            bar.abandon_with_message(format!("contradiction at ({x}, {y})"));
        }
    }

    /// Mark the solve as finished
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message("solved");
        }
    }
}
