//! Per-file compact diffs assembled into one report
//!
//! ## Format
//!
//! Every file with changes contributes one block:
//!
//! ```text
//! === <path> ===
//! - removed line
//! + added line
//!
//! ```
//!
//! Files without changes contribute nothing. Blocks keep input order: all
//! changed files first, then all new files, whichever way they were computed.

use crate::artifacts::diff::compact::{format_compact, format_compact_colored};
use crate::artifacts::diff::edit::{Edit, count_changes};
use crate::artifacts::diff::error::DiffError;
use crate::artifacts::diff::lines::split_lines;
use crate::artifacts::diff::myers::diff_within;
use crate::artifacts::diff::options::DiffOptions;
use derive_new::new;
use std::fmt::{self, Display};
use tokio::task::JoinSet;

/// A file present before and after, either side possibly unreadable
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ChangedFile {
    pub path: String,
    pub before: Option<String>,
    pub after: Option<String>,
}

/// A file with no previous revision
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct NewFile {
    pub path: String,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Changed,
    Added,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlock {
    path: String,
    kind: BlockKind,
    body: String,
    insertions: usize,
    deletions: usize,
}

impl FileBlock {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn insertions(&self) -> usize {
        self.insertions
    }

    pub fn deletions(&self) -> usize {
        self.deletions
    }
}

impl Display for FileBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.path)?;
        writeln!(f, "{}", self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SkippedFile {
    pub path: String,
    pub limit: usize,
}

impl Display for SkippedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skipped {}: {}",
            self.path,
            DiffError::TooLarge { limit: self.limit }
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    blocks: Vec<FileBlock>,
    skipped: Vec<SkippedFile>,
}

impl DiffReport {
    pub fn blocks(&self) -> &[FileBlock] {
        &self.blocks
    }

    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn insertions(&self) -> usize {
        self.blocks.iter().map(FileBlock::insertions).sum()
    }

    pub fn deletions(&self) -> usize {
        self.blocks.iter().map(FileBlock::deletions).sum()
    }
}

impl Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.blocks.iter().try_for_each(|block| write!(f, "{block}"))
    }
}

#[derive(Debug)]
enum FileOutcome {
    Block(FileBlock),
    Unchanged,
    Skipped(SkippedFile),
}

#[derive(Debug, Clone, Copy, Default, new)]
pub struct DiffAggregator {
    options: DiffOptions,
}

impl DiffAggregator {
    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn aggregate(&self, changed: &[ChangedFile], added: &[NewFile]) -> DiffReport {
        let outcomes = changed
            .iter()
            .map(|file| diff_changed(&self.options, file))
            .collect::<Vec<_>>();

        self.assemble(outcomes, added)
    }

    /// Same report as [`aggregate`](Self::aggregate), one blocking task per changed file
    ///
    /// Results are gathered as tasks finish, then put back in input order
    /// before the report is assembled. A panicking task is re-raised here.
    pub async fn aggregate_parallel(
        &self,
        changed: Vec<ChangedFile>,
        added: &[NewFile],
    ) -> anyhow::Result<DiffReport> {
        let mut tasks = JoinSet::new();
        for (index, file) in changed.into_iter().enumerate() {
            let options = self.options;
            tasks.spawn_blocking(move || (index, diff_changed(&options, &file)));
        }

        let mut outcomes = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
                Err(err) => anyhow::bail!("diff task did not complete: {err}"),
            }
        }
        outcomes.sort_by_key(|(index, _)| *index);

        Ok(self.assemble(
            outcomes.into_iter().map(|(_, outcome)| outcome).collect(),
            added,
        ))
    }

    fn assemble(&self, outcomes: Vec<FileOutcome>, added: &[NewFile]) -> DiffReport {
        let mut report = DiffReport::default();

        for outcome in outcomes {
            match outcome {
                FileOutcome::Block(block) => report.blocks.push(block),
                FileOutcome::Skipped(skipped) => report.skipped.push(skipped),
                FileOutcome::Unchanged => {}
            }
        }

        report
            .blocks
            .extend(added.iter().filter_map(|file| added_block(&self.options, file)));

        log::debug!(
            "aggregated {} block(s), {} skipped, +{} -{}",
            report.blocks.len(),
            report.skipped.len(),
            report.insertions(),
            report.deletions()
        );

        report
    }
}

fn render(options: &DiffOptions, edits: &[Edit<String>]) -> String {
    if options.color {
        format_compact_colored(edits)
    } else {
        format_compact(edits)
    }
}

fn diff_changed(options: &DiffOptions, file: &ChangedFile) -> FileOutcome {
    let a = split_lines(file.before.as_deref(), options.line_endings);
    let b = split_lines(file.after.as_deref(), options.line_endings);

    let edits = match diff_within(&a, &b, options.max_edit_distance) {
        Ok(edits) => edits,
        Err(DiffError::TooLarge { limit }) => {
            log::warn!("{}: edit distance exceeds {limit}, skipping", file.path);
            return FileOutcome::Skipped(SkippedFile::new(file.path.clone(), limit));
        }
    };

    let (insertions, deletions) = count_changes(&edits);
    if insertions + deletions == 0 {
        log::trace!("{}: unchanged", file.path);
        return FileOutcome::Unchanged;
    }

    FileOutcome::Block(FileBlock {
        path: file.path.clone(),
        kind: BlockKind::Changed,
        body: render(options, &edits),
        insertions,
        deletions,
    })
}

fn added_block(options: &DiffOptions, file: &NewFile) -> Option<FileBlock> {
    let edits = split_lines(file.content.as_deref(), options.line_endings)
        .into_iter()
        .map(|value| Edit::Insert { value })
        .collect::<Vec<_>>();

    if edits.is_empty() {
        return None;
    }

    Some(FileBlock {
        path: file.path.clone(),
        kind: BlockKind::Added,
        body: render(options, &edits),
        insertions: edits.len(),
        deletions: 0,
    })
}
