use crate::areas::session::Session;
use crate::areas::workspace::{Workspace, display_path};
use crate::artifacts::diff::aggregate::{ChangedFile, NewFile};
use std::collections::BTreeSet;
use std::path::Path;

impl Session {
    /// Write the aggregated report of `before_dir` against `after_dir`
    ///
    /// Files in both snapshots, or only in `before_dir`, are diffed in path
    /// order. Files only in `after_dir` follow as new files, also in path order.
    pub async fn report(&self, before_dir: &Path, after_dir: &Path) -> anyhow::Result<()> {
        let before = Workspace::open(before_dir)?;
        let after = Workspace::open(after_dir)?;

        let (changed, added) = Self::collect_changes(&before, &after)?;
        log::debug!(
            "report: {} changed candidate(s), {} new file(s)",
            changed.len(),
            added.len()
        );

        let report = self.aggregator().aggregate_parallel(changed, &added).await?;

        write!(self.writer(), "{report}")?;
        for skipped in report.skipped() {
            eprintln!("{skipped}");
        }

        Ok(())
    }

    fn collect_changes(
        before: &Workspace,
        after: &Workspace,
    ) -> anyhow::Result<(Vec<ChangedFile>, Vec<NewFile>)> {
        let before_files = before.list_files()?.into_iter().collect::<BTreeSet<_>>();
        let after_files = after.list_files()?.into_iter().collect::<BTreeSet<_>>();

        let changed = before_files
            .iter()
            .map(|file| {
                let content_after = after_files
                    .contains(file)
                    .then(|| after.read_file_lossy(file))
                    .flatten();

                ChangedFile::new(
                    display_path(file),
                    before.read_file_lossy(file),
                    content_after,
                )
            })
            .collect::<Vec<_>>();

        let added = after_files
            .difference(&before_files)
            .map(|file| NewFile::new(display_path(file), after.read_file_lossy(file)))
            .collect::<Vec<_>>();

        Ok((changed, added))
    }
}
