use crate::artifacts::diff::aggregate::DiffAggregator;
use crate::artifacts::diff::options::DiffOptions;
use std::cell::{RefCell, RefMut};

/// State for one invocation: where output goes and how diffs are computed
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    options: DiffOptions,
}

impl Session {
    pub fn new(writer: Box<dyn std::io::Write>, options: DiffOptions) -> Self {
        Session {
            writer: RefCell::new(writer),
            options,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn aggregator(&self) -> DiffAggregator {
        DiffAggregator::new(self.options)
    }
}
