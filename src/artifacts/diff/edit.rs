//! Edit operations produced by the line differ
//!
//! An edit script is an ordered list of [`Edit`]s. Reading the `Equal` and
//! `Delete` values in order gives back the old sequence, reading the `Equal`
//! and `Insert` values gives back the new one.

use std::fmt::Display;

pub const INSERT_PREFIX: &str = "+ ";
pub const DELETE_PREFIX: &str = "- ";
pub const EQUAL_PREFIX: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

pub type EditScript<T> = Vec<Edit<T>>;

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Edit::Delete { .. } => DELETE_PREFIX,
            Edit::Insert { .. } => INSERT_PREFIX,
            Edit::Equal { .. } => EQUAL_PREFIX,
        }
    }
}

impl<T: Display> Display for Edit<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.prefix(), self.value())
    }
}

/// Number of insertions and deletions in an edit script
pub fn count_changes<T>(edits: &[Edit<T>]) -> (usize, usize) {
    edits.iter().fold((0, 0), |(ins, del), edit| match edit {
        Edit::Insert { .. } => (ins + 1, del),
        Edit::Delete { .. } => (ins, del + 1),
        Edit::Equal { .. } => (ins, del),
    })
}

/// Rebuild the old sequence from the `Equal` and `Delete` operations
pub fn old_side<T: Clone>(edits: &[Edit<T>]) -> Vec<T> {
    edits
        .iter()
        .filter_map(|edit| match edit {
            Edit::Equal { value } | Edit::Delete { value } => Some(value.clone()),
            Edit::Insert { .. } => None,
        })
        .collect()
}

/// Rebuild the new sequence from the `Equal` and `Insert` operations
pub fn new_side<T: Clone>(edits: &[Edit<T>]) -> Vec<T> {
    edits
        .iter()
        .filter_map(|edit| match edit {
            Edit::Equal { value } | Edit::Insert { value } => Some(value.clone()),
            Edit::Delete { .. } => None,
        })
        .collect()
}
