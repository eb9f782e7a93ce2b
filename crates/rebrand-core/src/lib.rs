use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

pub mod config;
pub mod engine;
pub mod filter;
pub mod report;
pub mod table;
pub mod transaction;
pub mod walker;

pub use config::RebrandConfig;
pub use engine::{apply, apply_for_file, Substitution};
pub use filter::{PathFilter, PathFilterConfig};
pub use report::{ConsoleReporter, Reporter};
pub use table::{ReplacementRule, ReplacementTable};
pub use transaction::{FileOutcome, RebrandOptions};
pub use walker::{walk, EligibleFile};

#[derive(thiserror::Error, Debug)]
pub enum RebrandError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Replacement rule #{index} has an empty token")]
    EmptyToken { index: usize },
    #[error("Config error: {message}")]
    Config { message: String },
    #[error("Target error: {message}")]
    Target { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebrandSummary {
    pub files_processed: usize,
    pub files_updated: usize,
    pub files_unchanged: usize,
    pub files_declined: usize,
    pub files_skipped: usize,
}

/// Rebrands every eligible file under `target`, reporting outcomes as they occur.
///
/// File-level failures are reported as skips and the run continues. Traversal
/// failures abort the run.
pub fn rebrand_directory<R: Reporter>(
    target: &Path,
    table: &ReplacementTable,
    filter: &PathFilter,
    options: &RebrandOptions,
    reporter: &mut R,
) -> Result<RebrandSummary> {
    rebrand_directory_interactive(target, table, filter, options, reporter, |_, _, _, _| Ok(true))
}

/// Same as [`rebrand_directory`], but `confirm` is asked before each write.
pub fn rebrand_directory_interactive<R, F>(
    target: &Path,
    table: &ReplacementTable,
    filter: &PathFilter,
    options: &RebrandOptions,
    reporter: &mut R,
    confirm: F,
) -> Result<RebrandSummary>
where
    R: Reporter,
    F: Fn(&Path, &str, &str, &str) -> Result<bool>,
{
    if !target.is_dir() {
        return Err(RebrandError::Target {
            message: format!("not a directory: {:?}", target),
        }
        .into());
    }

    info!("Starting rebrand: {:?}", target);
    debug!("{} replacement rules loaded", table.len());

    let mut summary = RebrandSummary::default();

    for file in walker::walk(target, filter) {
        let file = file?;
        summary.files_processed += 1;

        match transaction::process_interactive(&file.path, table, options, &confirm) {
            FileOutcome::Updated => {
                summary.files_updated += 1;
                reporter.file_updated(&file.path);
            }
            FileOutcome::Unchanged => {
                summary.files_unchanged += 1;
                debug!("Unchanged: {:?}", file.path);
            }
            FileOutcome::Declined => {
                summary.files_declined += 1;
                info!("Declined change to: {:?}", file.path);
            }
            FileOutcome::Skipped(reason) => {
                summary.files_skipped += 1;
                reporter.file_skipped(&file.path, &reason);
            }
        }
    }

    info!(
        "Rebrand complete: {} files processed, {} updated, {} skipped",
        summary.files_processed, summary.files_updated, summary.files_skipped
    );

    // The completion notice is the last thing a run emits.
    reporter.complete(&summary);

    Ok(summary)
}
