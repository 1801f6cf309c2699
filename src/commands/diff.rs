use crate::areas::session::Session;
use crate::areas::workspace::read_text_lossy;
use crate::artifacts::diff::aggregate::ChangedFile;
use std::path::Path;

impl Session {
    /// Write the compact diff of `before` against `after`, without a header
    ///
    /// A file that cannot be read is diffed as empty text.
    pub fn diff(&self, before: &Path, after: &Path) -> anyhow::Result<()> {
        let file = ChangedFile::new(
            after.display().to_string(),
            read_text_lossy(before),
            read_text_lossy(after),
        );

        let report = self.aggregator().aggregate(&[file], &[]);

        for block in report.blocks() {
            write!(self.writer(), "{}", block.body())?;
        }
        for skipped in report.skipped() {
            eprintln!("{skipped}");
        }

        Ok(())
    }
}
