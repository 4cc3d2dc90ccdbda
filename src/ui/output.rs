use crate::error::{DaySortError, UserFriendlyError};
use crate::extractor::RunSummary;
use console::{style, Emoji, StyledObject, Term};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Glyphs, plus colour when the terminal supports it.
    Human,
    /// Stable `TAG: text` lines for scripts.
    Plain,
}

static COPIED: Emoji = Emoji("📄 ", "+ ");
static PLANNED: Emoji = Emoji("📝 ", "~ ");
static STAGE: Emoji = Emoji("📂 ", "> ");
static NOTICE: Emoji = Emoji("💡 ", "i ");
static DETAIL: Emoji = Emoji("   ", "  ");
static FAILED: Emoji = Emoji("⛔ ", "x ");

/// Kinds of line the sorter prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Copied,
    Planned,
    Done,
    Stage,
    Notice,
    Detail,
    Failed,
    Hint,
}

impl Line {
    /// Verbosity needed to show the line. `None` shows it even under `--quiet`.
    fn threshold(self) -> Option<u8> {
        match self {
            Line::Failed | Line::Hint => None,
            Line::Copied | Line::Planned | Line::Done => Some(0),
            Line::Stage | Line::Notice => Some(1),
            Line::Detail => Some(2),
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Line::Copied | Line::Done => "SUCCESS",
            Line::Planned => "PLANNED",
            Line::Stage => "STAGE",
            Line::Notice => "NOTE",
            Line::Detail => "DEBUG",
            Line::Failed => "ERROR",
            Line::Hint => "SUGGESTION",
        }
    }

    fn glyph(self) -> &'static Emoji<'static, 'static> {
        match self {
            Line::Copied | Line::Done => &COPIED,
            Line::Planned => &PLANNED,
            Line::Stage => &STAGE,
            Line::Notice | Line::Hint => &NOTICE,
            Line::Detail => &DETAIL,
            Line::Failed => &FAILED,
        }
    }

    fn paint(self, text: &str) -> StyledObject<&str> {
        let styled = style(text);
        match self {
            Line::Copied | Line::Done => styled.green(),
            Line::Planned => styled.yellow(),
            Line::Stage => styled.bold(),
            Line::Notice | Line::Hint => styled.cyan(),
            Line::Detail => styled.dim(),
            Line::Failed => styled.red().bold(),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Line::Failed | Line::Hint)
    }
}

/// Console reporting for one invocation.
pub struct OutputFormatter {
    mode: OutputMode,
    colors: bool,
    verbosity: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let colors = mode == OutputMode::Human
            && !quiet
            && Term::stdout().features().colors_supported();

        Self {
            mode,
            colors,
            verbosity: verbose,
            quiet,
        }
    }

    pub fn copied(&self, source: &Path, destination: &Path) {
        self.emit(
            Line::Copied,
            &format!("Copied: {} => {}", source.display(), destination.display()),
        );
    }

    pub fn planned(&self, source: &Path, destination: &Path) {
        self.emit(
            Line::Planned,
            &format!("{} => {}", source.display(), destination.display()),
        );
    }

    pub fn done(&self, message: &str) {
        self.emit(Line::Done, message);
    }

    pub fn stage(&self, message: &str) {
        self.emit(Line::Stage, message);
    }

    pub fn notice(&self, message: &str) {
        self.emit(Line::Notice, message);
    }

    pub fn detail(&self, message: &str) {
        self.emit(Line::Detail, message);
    }

    /// One line for a file that could not be copied.
    pub fn item_failed(&self, error: &DaySortError) {
        self.emit(Line::Failed, &error.user_message());
    }

    /// An error that ends the run, followed by a suggestion when there is one.
    pub fn fatal(&self, error: &DaySortError) {
        self.emit(Line::Failed, &error.user_message());
        if let Some(suggestion) = error.suggestion() {
            self.emit(Line::Hint, &suggestion);
        }
    }

    pub fn summary(&self, summary: &RunSummary) {
        if !self.shows(Line::Stage) {
            return;
        }

        match self.mode {
            OutputMode::Plain => {
                println!(
                    "SUMMARY: visited={} matched={} copied={} failed={} unreadable={} bytes={} elapsed_ms={}",
                    summary.walk.entries_visited,
                    summary.files_matched,
                    summary.files_copied,
                    summary.failures(),
                    summary.walk.traversal_errors,
                    summary.bytes_copied,
                    summary.elapsed().as_millis()
                );
                for (bucket, count) in &summary.files_by_bucket {
                    println!("SUMMARY: {}={}", bucket, count);
                }
            }
            OutputMode::Human => {
                self.emit(
                    Line::Done,
                    &format!(
                        "Copied {} of {} matching files ({}) in {}",
                        summary.files_copied,
                        summary.files_matched,
                        human_size(summary.bytes_copied),
                        human_elapsed(summary.elapsed())
                    ),
                );
                for (bucket, count) in &summary.files_by_bucket {
                    println!("     {:<12} {}", bucket, count);
                }

                let mut trouble = Vec::new();
                if summary.failures() > 0 {
                    trouble.push(format!("{} failed", summary.failures()));
                }
                if summary.walk.traversal_errors > 0 {
                    trouble.push(format!("{} unreadable", summary.walk.traversal_errors));
                }
                if !trouble.is_empty() {
                    self.emit(Line::Notice, &trouble.join(", "));
                }
            }
        }
    }

    fn shows(&self, line: Line) -> bool {
        match line.threshold() {
            None => true,
            Some(level) => !self.quiet && self.verbosity >= level,
        }
    }

    fn render(&self, line: Line, text: &str) -> String {
        match self.mode {
            OutputMode::Plain => format!("{}: {}", line.tag(), text),
            OutputMode::Human if self.colors => format!("{}{}", line.glyph(), line.paint(text)),
            OutputMode::Human => format!("{}{}", line.glyph(), text),
        }
    }

    fn emit(&self, line: Line, text: &str) {
        if !self.shows(line) {
            return;
        }

        let rendered = self.render(line, text);
        if line.to_stderr() {
            eprintln!("{}", rendered);
        } else {
            println!("{}", rendered);
        }
    }
}

fn human_size(bytes: u64) -> String {
    const STEPS: [(u64, &str); 3] = [(1 << 30, "GiB"), (1 << 20, "MiB"), (1 << 10, "KiB")];

    STEPS
        .iter()
        .find(|(size, _)| bytes >= *size)
        .map(|(size, unit)| format!("{:.1} {}", bytes as f64 / *size as f64, unit))
        .unwrap_or_else(|| format!("{} B", bytes))
}

fn human_elapsed(elapsed: Duration) -> String {
    match elapsed.as_millis() {
        ms if ms < 1000 => format!("{}ms", ms),
        ms => format!("{:.1}s", ms as f64 / 1000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_keeps_only_errors() {
        let formatter = OutputFormatter::new(OutputMode::Human, 2, true);
        assert!(!formatter.colors);
        assert!(formatter.shows(Line::Failed));
        assert!(formatter.shows(Line::Hint));
        assert!(!formatter.shows(Line::Copied));
        assert!(!formatter.shows(Line::Detail));
    }

    #[test]
    fn test_verbosity_thresholds() {
        let formatter = OutputFormatter::new(OutputMode::Plain, 1, false);
        assert!(formatter.shows(Line::Copied));
        assert!(formatter.shows(Line::Stage));
        assert!(!formatter.shows(Line::Detail));

        let terse = OutputFormatter::new(OutputMode::Plain, 0, false);
        assert!(terse.shows(Line::Planned));
        assert!(!terse.shows(Line::Notice));
    }

    #[test]
    fn test_plain_lines_are_tagged() {
        let formatter = OutputFormatter::new(OutputMode::Plain, 0, false);
        assert!(!formatter.colors);
        assert_eq!(
            formatter.render(Line::Copied, "Copied: a => b"),
            "SUCCESS: Copied: a => b"
        );
        assert_eq!(formatter.render(Line::Planned, "a => b"), "PLANNED: a => b");
        assert_eq!(formatter.render(Line::Hint, "check it"), "SUGGESTION: check it");
    }

    #[test]
    fn test_only_failures_go_to_stderr() {
        assert!(Line::Failed.to_stderr());
        assert!(Line::Hint.to_stderr());
        assert!(!Line::Copied.to_stderr());
        assert!(!Line::Done.to_stderr());
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(1023), "1023 B");
        assert_eq!(human_size(1536), "1.5 KiB");
        assert_eq!(human_size(3 << 20), "3.0 MiB");
        assert_eq!(human_size(1 << 30), "1.0 GiB");
    }

    #[test]
    fn test_human_elapsed() {
        assert_eq!(human_elapsed(Duration::from_millis(7)), "7ms");
        assert_eq!(human_elapsed(Duration::from_millis(2500)), "2.5s");
    }
}
