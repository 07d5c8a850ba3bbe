//! Catalog Data Types
//!
//! The record shape served to clients and the read-only container that owns all records.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Field names on the wire are snake_case (`sub_category`, `price_per_unit`, ...),
/// which is what existing front-ends of this endpoint read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub sub_category: String,
    pub container_type: String,
    pub price_per_unit: f64,
    pub margin: f64,
}

/// The full, ordered record set.
///
/// Built once and never mutated afterwards, so it can be shared between
/// request tasks behind a plain `Arc` without any locking.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Wraps already-parsed records, keeping their order.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// All records in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
