//! Record store implementation

use crate::error::{PassError, Result};
use crate::record::PassRecord;

/// Ordered sequence of records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<PassRecord>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end
    pub fn add(&mut self, record: PassRecord) {
        self.records.push(record);
    }

    /// Remove and return the record at a 0-based position
    ///
    /// Out-of-range positions are an error, never a silent no-op.
    pub fn delete(&mut self, index: usize) -> Result<PassRecord> {
        if index >= self.records.len() {
            return Err(PassError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Remove every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Owned copy of the current contents
    pub fn list(&self) -> Vec<PassRecord> {
        self.records.clone()
    }

    /// Swap in a new sequence, returning the old one
    pub fn replace_all(&mut self, records: Vec<PassRecord>) -> Vec<PassRecord> {
        std::mem::replace(&mut self.records, records)
    }

    /// Borrowed view of the current contents
    pub fn as_slice(&self) -> &[PassRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&PassRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrowing iterator in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, PassRecord> {
        self.records.iter()
    }
}

impl From<Vec<PassRecord>> for RecordStore {
    fn from(records: Vec<PassRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a PassRecord;
    type IntoIter = std::slice::Iter<'a, PassRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
