use crate::artifacts::diff::lines::LineEndings;
use derive_new::new;

/// Knobs shared by every diff a session runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct DiffOptions {
    pub line_endings: LineEndings,
    /// Files whose edit distance would exceed this are skipped, not diffed
    pub max_edit_distance: Option<usize>,
    pub color: bool,
}
