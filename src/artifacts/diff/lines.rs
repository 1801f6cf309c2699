//! Splitting raw text into line sequences
//!
//! Lines are separated by `\n` only. A single terminating newline does not
//! produce an extra empty line, and absent or empty text is the empty
//! sequence. What happens to a `\r` left at the end of a line is decided by
//! [`LineEndings`].

pub type LineSet = Vec<String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEndings {
    /// Keep `\r` verbatim as part of the line content
    #[default]
    Preserve,
    /// Drop one trailing `\r` from every line
    Strip,
}

pub fn split_lines(text: Option<&str>, endings: LineEndings) -> LineSet {
    let text = text.unwrap_or_default();
    if text.is_empty() {
        return Vec::new();
    }

    let text = text.strip_suffix('\n').unwrap_or(text);

    text.split('\n')
        .map(|line| match endings {
            LineEndings::Preserve => line,
            LineEndings::Strip => line.strip_suffix('\r').unwrap_or(line),
        })
        .map(str::to_string)
        .collect()
}
