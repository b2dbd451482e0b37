// Copyright 2025-present TalentAI
// SPDX-License-Identifier: Apache-2.0

//! Entity stores: the CRUD collaborators that feed the engine.
//!
//! The engine itself is stateless about persistence - it only ever sees
//! collections handed to `update_data`. Stores own identity and lifecycle.
//! [`MemoryStore`] is the in-process implementation backing the demo app
//! and the tests; an external database store implements the same trait
//! behind the same seam.

use crate::types::{FieldValue, Record};

/// Field every stored record is identified by.
pub const ID_FIELD: &str = "id";

/// CRUD surface over one entity collection.
///
/// `all` returns records in insertion order - the "given order" the engine
/// preserves when no query or sort applies.
pub trait RecordStore {
    /// Every record, insertion order.
    fn all(&self) -> &[Record];

    /// Record with the given id, if present.
    fn get(&self, id: &str) -> Option<&Record>;

    /// Insert a record. A missing id is assigned; a caller-supplied id is
    /// kept as-is. Returns the stored record.
    fn create(&mut self, record: Record) -> &Record;

    /// Shallow-merge `patch` into the record with the given id.
    /// Returns the updated record, or `None` if no such id.
    fn update(&mut self, id: &str, patch: Record) -> Option<&Record>;

    /// Remove the record with the given id. Returns whether anything was
    /// removed.
    fn delete(&mut self, id: &str) -> bool;
}

/// In-memory array store with sequential id assignment.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<Record>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Store seeded with existing records (ids kept; the id counter starts
    /// past the highest numeric id so assigned ids never collide).
    pub fn with_records(records: Vec<Record>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|r| record_id(r)?.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        MemoryStore { records, next_id }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| record_id(r) == Some(id))
    }
}

impl RecordStore for MemoryStore {
    fn all(&self) -> &[Record] {
        &self.records
    }

    fn get(&self, id: &str) -> Option<&Record> {
        self.position(id).map(|i| &self.records[i])
    }

    fn create(&mut self, mut record: Record) -> &Record {
        if record_id(&record).is_none() {
            record.set(ID_FIELD, self.next_id.to_string());
            self.next_id += 1;
        }
        self.records.push(record);
        self.records.last().expect("just pushed")
    }

    fn update(&mut self, id: &str, patch: Record) -> Option<&Record> {
        let position = self.position(id)?;
        self.records[position].merge(patch);
        // The id survives a patch that tries to blank it
        self.records[position].set(ID_FIELD, id.to_string());
        Some(&self.records[position])
    }

    fn delete(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(position) => {
                self.records.remove(position);
                true
            }
            None => false,
        }
    }
}

fn record_id(record: &Record) -> Option<&str> {
    record.get(ID_FIELD).and_then(FieldValue::as_str)
}
