//! Strip use case

use crate::domain::{StripResult, TagStripper};
use crate::error::Result;
use crate::infrastructure::{read_document, write_document};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct StripOptions {
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub replacements: usize,
    pub changed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripReport {
    pub outcomes: Vec<FileOutcome>,
    pub dry_run: bool,
}

impl StripReport {
    pub fn changed_files(&self) -> usize {
        self.outcomes.iter().filter(|o| o.changed).count()
    }

    pub fn total_replacements(&self) -> usize {
        self.outcomes.iter().map(|o| o.replacements).sum()
    }
}

pub struct StripFilesService {
    stripper: TagStripper,
    options: StripOptions,
}

impl StripFilesService {
    pub fn new(stripper: TagStripper, options: StripOptions) -> Self {
        StripFilesService { stripper, options }
    }

    /// Rewrite one file in place.
    ///
    /// The file is written back even when nothing matched, so its content is
    /// byte-identical in that case.
    pub fn process(&self, path: &Path) -> Result<FileOutcome> {
        let content = read_document(path)?;
        let result: StripResult = self.stripper.strip(&content);
        let changed = result.content != content;

        if self.options.dry_run {
            tracing::debug!(path = %path.display(), changed, "dry run, not writing");
        } else {
            write_document(path, &result.content)?;
            tracing::info!(
                path = %path.display(),
                replacements = result.replacements(),
                "rewrote file"
            );
        }

        Ok(FileOutcome {
            path: path.to_path_buf(),
            replacements: result.replacements(),
            changed,
        })
    }

    /// Process every target in order, stopping at the first failure.
    ///
    /// `on_done` is called after each file so confirmations appear as the run
    /// progresses rather than only at the end.
    pub fn execute<F>(&self, targets: &[PathBuf], mut on_done: F) -> Result<StripReport>
    where
        F: FnMut(&FileOutcome),
    {
        let mut outcomes = Vec::with_capacity(targets.len());

        for path in targets {
            let outcome = self.process(path)?;
            on_done(&outcome);
            outcomes.push(outcome);
        }

        Ok(StripReport {
            outcomes,
            dry_run: self.options.dry_run,
        })
    }
}
