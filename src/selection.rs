//! Comparison Selection
//!
//! Ordered set of at most `MAX_SELECTION` records, unique by `pl_name`.
//! Overflow and duplicate adds are silent no-ops; the return value tells the
//! caller whether anything changed.

use smallvec::SmallVec;

use crate::record::ExoplanetRecord;

/// Most planets that can be compared at once
pub const MAX_SELECTION: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    members: SmallVec<[ExoplanetRecord; MAX_SELECTION]>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` unless the set is full or already holds that name
    pub fn add(&mut self, record: ExoplanetRecord) -> bool {
        if self.is_full() {
            tracing::debug!("Selection full, ignoring '{}'", record.pl_name);
            return false;
        }
        if self.contains(&record.pl_name) {
            return false;
        }
        tracing::debug!("Selected '{}'", record.pl_name);
        self.members.push(record);
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        match self.members.iter().position(|r| r.pl_name == name) {
            Some(idx) => {
                self.members.remove(idx);
                tracing::debug!("Deselected '{}'", name);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|r| r.pl_name == name)
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_SELECTION
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in insertion order
    pub fn records(&self) -> &[ExoplanetRecord] {
        &self.members
    }

    pub fn names(&self) -> Vec<&str> {
        self.members.iter().map(|r| r.pl_name.as_str()).collect()
    }
}
