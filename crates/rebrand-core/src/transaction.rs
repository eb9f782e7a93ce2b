use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::engine;
use crate::table::ReplacementTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Updated,
    Unchanged,
    Declined,
    Skipped(String),
}

#[derive(Debug, Clone, Default)]
pub struct RebrandOptions {
    pub dry_run: bool,
}

pub fn process(path: &Path, table: &ReplacementTable, options: &RebrandOptions) -> FileOutcome {
    process_interactive(path, table, options, |_, _, _, _| Ok(true))
}

/// Reads, rewrites and persists one file. Never fails: every I/O or decoding
/// problem becomes [`FileOutcome::Skipped`].
///
/// The write is a plain overwrite, so an interrupted write can leave a partial file.
pub fn process_interactive<F>(
    path: &Path,
    table: &ReplacementTable,
    options: &RebrandOptions,
    confirm: F,
) -> FileOutcome
where
    F: Fn(&Path, &str, &str, &str) -> Result<bool>,
{
    debug!("Processing file: {:?}", path);

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return FileOutcome::Skipped(e.to_string()),
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let substitution = engine::apply_for_file(&content, table, &file_name);

    if !substitution.changed {
        return FileOutcome::Unchanged;
    }

    match confirm(path, &content, &substitution.content, "Rebrand") {
        Ok(true) => {}
        Ok(false) => return FileOutcome::Declined,
        Err(e) => return FileOutcome::Skipped(e.to_string()),
    }

    if options.dry_run {
        info!("Would update contents of: {:?}", path);
        return FileOutcome::Updated;
    }

    match fs::write(path, &substitution.content) {
        Ok(()) => {
            debug!(
                "Wrote {} replacements to: {:?}",
                substitution.replacements, path
            );
            FileOutcome::Updated
        }
        Err(e) => FileOutcome::Skipped(e.to_string()),
    }
}
