use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

use crate::RebrandSummary;

pub trait Reporter {
    fn file_updated(&mut self, path: &Path);
    fn file_skipped(&mut self, path: &Path, reason: &str);
    fn complete(&mut self, summary: &RebrandSummary);
}

/// Prints one line per updated or skipped file, then the run totals and a
/// completion line, which is always last.
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    dry_run: bool,
}

impl ConsoleReporter {
    pub fn stdout(dry_run: bool) -> Self {
        Self::new(io::stdout(), dry_run)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, dry_run: bool) -> Self {
        Self { out, dry_run }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, line: String) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!("Failed to write report line: {}", e);
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn file_updated(&mut self, path: &Path) {
        let verb = if self.dry_run { "Would update" } else { "Updating" };
        self.line(format!("{} {}", verb, path.display()));
    }

    fn file_skipped(&mut self, path: &Path, reason: &str) {
        self.line(format!("Skipping {}: {}", path.display(), reason));
    }

    fn complete(&mut self, summary: &RebrandSummary) {
        let updated = if self.dry_run {
            "Files that would be updated"
        } else {
            "Files updated"
        };
        self.line(format!("  Files processed: {}", summary.files_processed));
        self.line(format!("  {}: {}", updated, summary.files_updated));
        if summary.files_declined > 0 {
            self.line(format!("  Files declined: {}", summary.files_declined));
        }
        self.line(format!("  Files skipped: {}", summary.files_skipped));
        self.line("Replacement complete.".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn output(reporter: ConsoleReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_console_lines() {
        let mut reporter = ConsoleReporter::new(Vec::new(), false);

        reporter.file_updated(Path::new("./src/a.ts"));
        reporter.file_skipped(Path::new("./logo.svg"), "stream did not contain valid UTF-8");
        reporter.complete(&RebrandSummary {
            files_processed: 3,
            files_updated: 1,
            files_unchanged: 1,
            files_declined: 0,
            files_skipped: 1,
        });

        assert_eq!(
            output(reporter),
            "Updating ./src/a.ts\n\
             Skipping ./logo.svg: stream did not contain valid UTF-8\n\
             \x20 Files processed: 3\n\
             \x20 Files updated: 1\n\
             \x20 Files skipped: 1\n\
             Replacement complete.\n"
        );
    }

    #[test]
    fn test_dry_run_wording() {
        let mut reporter = ConsoleReporter::new(Vec::new(), true);

        reporter.file_updated(Path::new("b.md"));
        reporter.complete(&RebrandSummary {
            files_processed: 1,
            files_updated: 1,
            ..RebrandSummary::default()
        });

        assert_eq!(
            output(reporter),
            "Would update b.md\n\
             \x20 Files processed: 1\n\
             \x20 Files that would be updated: 1\n\
             \x20 Files skipped: 0\n\
             Replacement complete.\n"
        );
    }

    #[test]
    fn test_declined_count_only_when_present() {
        let mut reporter = ConsoleReporter::new(Vec::new(), false);

        reporter.complete(&RebrandSummary {
            files_processed: 2,
            files_declined: 2,
            ..RebrandSummary::default()
        });

        let output = output(reporter);
        assert!(output.contains("  Files declined: 2\n"));
        assert!(output.ends_with("Replacement complete.\n"));
    }
}
