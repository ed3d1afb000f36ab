use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over the codebases of a run.
///
/// The progress bar is automatically disabled in quiet mode or when stderr is not a TTY.
pub struct GradeProgress {
    progress_bar: ProgressBar,
}

impl GradeProgress {
    /// Creates a progress bar for `total` codebases, drawn on stderr.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };
        Self { progress_bar }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} Grading [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
        {
            pb.set_style(style.progress_chars("█▓░"));
        }
        pb
    }

    /// Announce the codebase about to be validated.
    pub fn start(&self, name: &str) {
        self.progress_bar.set_message(name.to_string());
    }

    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Print a line above the bar without breaking it.
    pub fn println(&self, line: &str) {
        if self.progress_bar.is_hidden() {
            eprintln!("{line}");
        } else {
            self.progress_bar.println(line);
        }
    }

    /// Hide the bar while `f` writes to the terminal.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.progress_bar.suspend(f)
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
