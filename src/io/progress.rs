//! Stage progress display for command-line runs

use crate::algorithm::pipeline::Stage;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{spinner:.cyan} {prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advancing through the pipeline stages of one image
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress bar drawn to the terminal
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(Stage::ALL.len() as u64))
    }

    /// Create a progress manager that draws nothing
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_length(Stage::ALL.len() as u64);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Label the bar with the file being processed
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.reset();
        self.bar.set_prefix(display_name);
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    /// Report the stage that is about to run
    pub fn update_stage(&self, stage: Stage) {
        self.bar.set_position(stage.index() as u64);
        self.bar.set_message(stage.description());
    }

    /// Number of stages completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Mark the file as done and clear the display
    pub fn complete_file(&self, elapsed: Duration) {
        self.bar.set_position(Stage::ALL.len() as u64);
        self.bar
            .finish_with_message(format!("done in {:.2}s", elapsed.as_secs_f64()));
    }

    /// Stop drawing without marking completion
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
