//! Pluggable shift-record persistence.
//!
//! The engine only ever sees in-memory collections; where the records live
//! between requests is this trait's concern. Any backend that can append,
//! read a scope, and rewrite the collection without one worker fits behind
//! [`ShiftStore`]: an embedded database, a relational table, or a
//! spreadsheet API. No spreadsheet semantics (formulas, cell addressing)
//! leak through the interface.

mod memory;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::ShiftRecord;

pub use memory::MemoryStore;

/// The record scope of a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Every stored record.
    All,
    /// Records of a single department, matched on the exact stored label.
    Department(String),
}

/// A shift the store refused because an equivalent record already exists.
///
/// This is a caller-facing warning, not an error: the response reports the
/// rejection so the user can correct the register instead of silently
/// overwriting the earlier entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateShift {
    /// The worker name as submitted on the rejected record.
    pub worker_name: String,
    /// The date already occupied for that worker.
    pub date: NaiveDate,
}

/// The result of an [`ShiftStore::append_unique`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendOutcome {
    /// Records admitted into the store.
    pub admitted: Vec<ShiftRecord>,
    /// Candidates rejected by the one-shift-per-worker-per-day rule.
    pub duplicates: Vec<DuplicateShift>,
}

/// Persistence boundary for the shift register.
///
/// Implementations must serialize the duplicate check and the append inside
/// [`append_unique`](ShiftStore::append_unique): the engine's
/// `detect_duplicate` followed by a separate append would be a
/// check-then-act race under concurrent writers, so the store owns the
/// whole sequence.
pub trait ShiftStore: Send + Sync {
    /// Appends the candidates that do not duplicate an existing record.
    ///
    /// Candidates are checked against the stored records and against the
    /// candidates admitted earlier in the same batch, in batch order. The
    /// check and the append happen under a single writer section.
    fn append_unique(&self, batch: Vec<ShiftRecord>) -> EngineResult<AppendOutcome>;

    /// Reads all records within a scope, in insertion order.
    fn read_all(&self, scope: &Scope) -> EngineResult<Vec<ShiftRecord>>;

    /// Removes every record of one worker (normalized-name match) by
    /// rewriting the collection. Returns the number of records removed.
    fn delete_worker(&self, worker_name: &str) -> EngineResult<usize>;
}
