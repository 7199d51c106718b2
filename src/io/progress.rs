//! Multi-file progress tracking with automatic batching for large sets

use crate::algorithm::solver::SearchStats;
use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates progress display for batch solving
///
/// Shows one line per recent puzzle file, plus a batch bar once the number
/// of files exceeds what fits as individual lines
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    /// Stores (`filename`, `status`) for rolling window display
    file_states: Vec<(String, String)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Puzzles: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Initialize progress lines based on file count
    pub fn initialize(&mut self, file_count: usize) {
        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new_spinner();
            pb.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Show a file as being solved
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states
                .resize(index + 1, (String::new(), String::new()));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (display_name, "solving".to_string());
        }
        self.update_bars();
    }

    /// Record the outcome of a file and advance the batch bar
    pub fn complete_file(
        &mut self,
        index: usize,
        solved: bool,
        stats: SearchStats,
        elapsed: Duration,
    ) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            let mark = if solved { "✓" } else { "✗" };
            state.0 = format!("{mark} {}", state.0);
            state.1 = format!(
                "{} candidates, {} backtracks in {:.2?}",
                stats.candidates_tried, stats.backtracks, elapsed
            );
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All puzzles processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Number of files the manager has seen started
    pub fn tracked_files(&self) -> usize {
        self.file_states
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .count()
    }

    /// Update all lines to show the last N active files
    fn update_bars(&self) {
        let active_files: Vec<&(String, String)> = self
            .file_states
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .collect();

        let start_idx = active_files
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_files = active_files.get(start_idx..).unwrap_or(&[]);

        for (bar, (name, status)) in self.file_bars.iter().zip(visible_files.iter()) {
            bar.set_prefix(name.clone());
            bar.set_message(status.clone());
            bar.tick();
        }

        // Clear any unused lines
        for bar in self.file_bars.iter().skip(visible_files.len()) {
            bar.set_prefix(String::new());
            bar.set_message(String::new());
        }
    }
}
