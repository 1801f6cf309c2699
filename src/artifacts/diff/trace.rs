//! Search trace of the Myers forward pass
//!
//! Each layer is a snapshot of the furthest-reaching x per diagonal, taken
//! right before a depth is explored. Layers are flat vectors indexed by
//! `k + offset`, where `offset = N + M + 1` bounds every diagonal the search
//! can visit.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    offset: isize,
    layers: Vec<Vec<isize>>,
}

impl Trace {
    pub(crate) fn new(offset: usize) -> Self {
        Trace {
            offset: offset as isize,
            layers: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, layer: Vec<isize>) {
        self.layers.push(layer);
    }

    /// Edit distance of the shortest edit script
    ///
    /// The last layer is the one recorded before the terminating depth was
    /// explored, so the depth equals the index of that layer.
    pub fn distance(&self) -> usize {
        self.layers.len().saturating_sub(1)
    }

    /// Furthest x on diagonal `k` after depth `d - 1`, as seen when depth `d` started
    pub fn furthest(&self, d: usize, k: isize) -> Option<isize> {
        let layer = self.layers.get(d)?;
        let idx = self.offset + k;
        if idx < 0 {
            return None;
        }
        layer.get(idx as usize).copied()
    }
}
