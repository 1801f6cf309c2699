//! Compact, context-free rendering of an edit script
//!
//! Only insertions and deletions are written, one per line, prefixed with
//! `"+ "` or `"- "`. Unchanged lines are dropped entirely.

use crate::artifacts::diff::edit::Edit;
use colored::Colorize;
use std::fmt::{Display, Write};

pub fn format_compact<T: Display>(edits: &[Edit<T>]) -> String {
    render(edits, |edit| edit.to_string())
}

/// Same lines as [`format_compact`], colored for a terminal
pub fn format_compact_colored<T: Display>(edits: &[Edit<T>]) -> String {
    render(edits, |edit| match edit {
        Edit::Insert { .. } => edit.to_string().green().to_string(),
        Edit::Delete { .. } => edit.to_string().red().to_string(),
        Edit::Equal { .. } => unreachable!(),
    })
}

fn render<T>(edits: &[Edit<T>], line: impl Fn(&Edit<T>) -> String) -> String {
    edits
        .iter()
        .filter(|edit| !edit.is_equal())
        .fold(String::new(), |mut out, edit| {
            // writing into a String cannot fail
            let _ = writeln!(out, "{}", line(edit));
            out
        })
}
