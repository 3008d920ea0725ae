//! Per-pass assembly counters.

use std::collections::BTreeMap;
use std::fmt;

use crate::grid::NodeClass;

/// Counts gathered during one assembly pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyStats {
    /// Rows stamped per node class
    pub per_class: BTreeMap<NodeClass, usize>,
    /// Raw triplets emitted
    pub triplets: usize,
    /// Stored entries after compaction (0 until compacted)
    pub nnz: usize,
}

impl AssemblyStats {
    pub(crate) fn record(&mut self, class: NodeClass) {
        *self.per_class.entry(class).or_insert(0) += 1;
    }

    /// Rows stamped for a class.
    pub fn count(&self, class: NodeClass) -> usize {
        self.per_class.get(&class).copied().unwrap_or(0)
    }

    /// Total rows stamped.
    pub fn rows(&self) -> usize {
        self.per_class.values().sum()
    }
}

impl fmt::Display for AssemblyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows:     {}", self.rows())?;
        writeln!(f, "triplets: {}", self.triplets)?;
        writeln!(f, "nnz:      {}", self.nnz)?;
        for (class, count) in &self.per_class {
            writeln!(f, "  {class:<20} {count}")?;
        }
        Ok(())
    }
}
