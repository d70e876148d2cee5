//! Loan record model.
//!
//! # Responsibility
//! - Define `LoanRecord`, the single persisted entity.
//! - Define `RecordCollection`, the ordered unit of persistence.
//!
//! # Invariants
//! - `id` is stable for the lifetime of a record and unique in its collection.
//! - Replacing a record by id preserves the position of every record.
//! - The collection serializes as a plain JSON array of record objects.

use serde::{Deserialize, Serialize};

/// Stable identifier for a loan record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Values are epoch-millisecond derived; see `idgen`.
pub type RecordId = i64;

/// One customer loan entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    /// Stable id assigned at creation time.
    pub id: RecordId,
    /// Customer name, free text.
    pub name: String,
    /// Loan principal in whole currency units.
    pub amount: i64,
    /// Disbursement date, `YYYY-MM-DD`.
    pub date: String,
}

impl LoanRecord {
    pub fn new(id: RecordId, name: impl Into<String>, amount: i64, date: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            date: date.into(),
        }
    }
}

/// Ordered collection of loan records, insertion order = display order.
///
/// Serializes transparently as a JSON array so the persisted slot holds
/// `[{"id":...,"name":...,"amount":...,"date":...}, ...]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordCollection {
    records: Vec<LoanRecord>,
}

impl RecordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<LoanRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LoanRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[LoanRecord] {
        &self.records
    }

    /// Looks up a record by id.
    pub fn get(&self, id: RecordId) -> Option<&LoanRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Appends a record at the end of the display order.
    pub fn push(&mut self, record: LoanRecord) {
        self.records.push(record);
    }

    /// Replaces the record whose id matches `edited`, keeping its position.
    ///
    /// Returns `false` and leaves the collection untouched when no record
    /// carries that id.
    pub fn replace(&mut self, edited: &LoanRecord) -> bool {
        match self.records.iter().position(|record| record.id == edited.id) {
            Some(index) => {
                self.records[index] = edited.clone();
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a LoanRecord;
    type IntoIter = std::slice::Iter<'a, LoanRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
