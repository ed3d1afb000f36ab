use std::fmt::Write;
use std::path::Path;

use crate::codebase::Codebase;
use crate::config::Settings;
use crate::error::Result;
use crate::scoring::ScoreCard;
use crate::violation::Violation;

use super::{CategoryColumn, GradedCodebase, OutputFormatter, category_columns};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// Console summary: one block per codebase with its scores and example violations.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
    columns: Vec<CategoryColumn>,
    max_total: u32,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode, settings: &Settings) -> Self {
        Self::with_verbose(mode, settings, 0)
    }

    /// With `verbose >= 1` every violation is listed, ignoring `examples`.
    #[must_use]
    pub fn with_verbose(mode: ColorMode, settings: &Settings, verbose: u8) -> Self {
        let columns = category_columns(settings);
        let max_total = columns.iter().map(|c| c.max_score).sum();
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
            columns,
            max_total,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    const fn score_color(score: u32, max: u32) -> &'static str {
        if score >= max {
            ansi::GREEN
        } else if score == 0 && max > 0 {
            ansi::RED
        } else {
            ansi::YELLOW
        }
    }

    fn heading(graded: &GradedCodebase) -> String {
        let codebase = &graded.result.codebase;
        match codebase.revision.as_deref() {
            Some(rev) => format!("{} ({})", codebase.name, rev.get(..7).unwrap_or(rev)),
            None => codebase.name.clone(),
        }
    }

    fn format_codebase(&self, graded: &GradedCodebase, output: &mut String) {
        let heading = Self::heading(graded);
        let ScoreCard::Scored { total, .. } = &graded.score else {
            let message = graded.result.failure_message().unwrap_or_default();
            let _ = writeln!(output, "✗ {heading}: {}", self.colorize("N/A", ansi::RED));
            let _ = writeln!(output, "   {message}");
            return;
        };

        let total_str = self.colorize(
            &format!("{total}/{}", self.max_total),
            Self::score_color(*total, self.max_total),
        );
        let _ = writeln!(output, "✓ {heading}: {total_str}");

        for column in &self.columns {
            let score = graded.score.category(column.category).unwrap_or_default();
            let violations: Vec<&Violation> =
                graded.result.violations.in_category(column.category).collect();
            let score_str = self.colorize(
                &format!("{score}/{}", column.max_score),
                Self::score_color(score, column.max_score),
            );
            let _ = writeln!(
                output,
                "   {}: {score_str} ({} violations)",
                column.category,
                violations.len()
            );

            let limit = if self.verbose >= 1 {
                violations.len()
            } else {
                column.examples.unwrap_or(violations.len())
            };
            for violation in violations.iter().take(limit) {
                self.format_violation(&graded.result.codebase, violation, output);
            }
            if violations.len() > limit {
                let more = self.colorize(
                    &format!("... and {} more", violations.len() - limit),
                    ansi::CYAN,
                );
                let _ = writeln!(output, "     {more}");
            }
        }
    }

    fn format_violation(&self, codebase: &Codebase, violation: &Violation, output: &mut String) {
        let location = format!(
            "{}:{}",
            relative(codebase, &violation.path).display(),
            violation.start_line
        );
        let _ = write!(
            output,
            "     {} {}",
            self.colorize(&location, ansi::CYAN),
            violation.describe()
        );
        if let Some(link) = codebase.link(&violation.path, violation.start_line) {
            let _ = write!(output, " <{link}>");
        }
        output.push('\n');
    }

    /// Closing line of a run over several codebases.
    #[must_use]
    pub fn summary(&self, graded: &[GradedCodebase]) -> String {
        let failed = graded.iter().filter(|g| g.result.is_fatal()).count();
        let scored = graded.len() - failed;
        let scored_str = self.colorize(&scored.to_string(), ansi::GREEN);
        let failed_str = self.colorize(&failed.to_string(), ansi::RED);
        format!(
            "Summary: {} codebases graded, {scored_str} scored, {failed_str} failed",
            graded.len()
        )
    }
}

fn relative<'a>(codebase: &Codebase, path: &'a Path) -> &'a Path {
    path.strip_prefix(&codebase.root).unwrap_or(path)
}

impl OutputFormatter for TextFormatter {
    fn format(&self, graded: &[GradedCodebase]) -> Result<String> {
        let mut output = String::new();
        for entry in graded {
            self.format_codebase(entry, &mut output);
            output.push('\n');
        }
        if graded.len() > 1 {
            let _ = writeln!(output, "{}", self.summary(graded));
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
