//! In-memory reference store.

use std::sync::RwLock;

use crate::classification::{detect_duplicate, normalize_worker_name};
use crate::error::{EngineError, EngineResult};
use crate::models::ShiftRecord;

use super::{AppendOutcome, DuplicateShift, Scope, ShiftStore};

/// An append-only in-memory record store.
///
/// Writers are serialized by an `RwLock`, which also makes the duplicate
/// check and the append one atomic step. Suitable as the default backend
/// and for tests; a file- or database-backed store implements the same
/// trait.
///
/// # Example
///
/// ```
/// use turnos_engine::models::ShiftRecord;
/// use turnos_engine::store::{MemoryStore, Scope, ShiftStore};
/// use chrono::NaiveDate;
///
/// let store = MemoryStore::new();
/// let record = ShiftRecord {
///     worker_name: "Ana Gomez".to_string(),
///     department: "Urgencias".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     shift_type: "Nocturno".to_string(),
///     note: String::new(),
/// };
///
/// let outcome = store.append_unique(vec![record]).unwrap();
/// assert_eq!(outcome.admitted.len(), 1);
/// assert_eq!(store.read_all(&Scope::All).unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<ShiftRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with existing records, skipping duplicates.
    pub fn with_records(records: Vec<ShiftRecord>) -> EngineResult<Self> {
        let store = Self::new();
        store.append_unique(records)?;
        Ok(store)
    }
}

fn lock_error<T>(_: T) -> EngineError {
    EngineError::StoreUnavailable {
        message: "record lock poisoned".to_string(),
    }
}

impl ShiftStore for MemoryStore {
    fn append_unique(&self, batch: Vec<ShiftRecord>) -> EngineResult<AppendOutcome> {
        let mut records = self.records.write().map_err(lock_error)?;

        let mut admitted = Vec::new();
        let mut duplicates = Vec::new();

        for candidate in batch {
            // Earlier admissions in the same batch count as existing records.
            if detect_duplicate(&records, &candidate) {
                duplicates.push(DuplicateShift {
                    worker_name: candidate.worker_name,
                    date: candidate.date,
                });
            } else {
                records.push(candidate.clone());
                admitted.push(candidate);
            }
        }

        Ok(AppendOutcome {
            admitted,
            duplicates,
        })
    }

    fn read_all(&self, scope: &Scope) -> EngineResult<Vec<ShiftRecord>> {
        let records = self.records.read().map_err(lock_error)?;

        Ok(match scope {
            Scope::All => records.clone(),
            Scope::Department(department) => records
                .iter()
                .filter(|r| r.department == *department)
                .cloned()
                .collect(),
        })
    }

    fn delete_worker(&self, worker_name: &str) -> EngineResult<usize> {
        let mut records = self.records.write().map_err(lock_error)?;

        let target = normalize_worker_name(worker_name);
        let before = records.len();
        records.retain(|r| normalize_worker_name(&r.worker_name) != target);

        Ok(before - records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_record(worker: &str, department: &str, date_str: &str) -> ShiftRecord {
        ShiftRecord {
            worker_name: worker.to_string(),
            department: department.to_string(),
            date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
            shift_type: "Nocturno".to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn test_append_and_read_all() {
        let store = MemoryStore::new();
        store
            .append_unique(vec![
                make_record("Ana Gomez", "Urgencias", "2024-05-01"),
                make_record("Pedro Ruiz", "UCI", "2024-05-01"),
            ])
            .unwrap();

        let records = store.read_all(&Scope::All).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_read_preserves_insertion_order() {
        let store = MemoryStore::new();
        store
            .append_unique(vec![
                make_record("Pedro Ruiz", "UCI", "2024-05-01"),
                make_record("Ana Gomez", "Urgencias", "2024-05-02"),
            ])
            .unwrap();

        let records = store.read_all(&Scope::All).unwrap();
        assert_eq!(records[0].worker_name, "Pedro Ruiz");
        assert_eq!(records[1].worker_name, "Ana Gomez");
    }

    #[test]
    fn test_department_scope_filters_exact_label() {
        let store = MemoryStore::new();
        store
            .append_unique(vec![
                make_record("Ana Gomez", "Urgencias", "2024-05-01"),
                make_record("Pedro Ruiz", "UCI", "2024-05-01"),
            ])
            .unwrap();

        let records = store
            .read_all(&Scope::Department("UCI".to_string()))
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].worker_name, "Pedro Ruiz");
    }

    #[test]
    fn test_duplicate_against_stored_record_is_rejected() {
        let store = MemoryStore::new();
        store
            .append_unique(vec![make_record("Ana Gomez", "Urgencias", "2024-05-01")])
            .unwrap();

        let outcome = store
            .append_unique(vec![make_record("ana gomez ", "UCI", "2024-05-01")])
            .unwrap();

        assert!(outcome.admitted.is_empty());
        assert_eq!(outcome.duplicates.len(), 1);
        assert_eq!(outcome.duplicates[0].worker_name, "ana gomez ");
        assert_eq!(store.read_all(&Scope::All).unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_within_one_batch_is_rejected() {
        let store = MemoryStore::new();

        let outcome = store
            .append_unique(vec![
                make_record("Ana Gomez", "Urgencias", "2024-05-01"),
                make_record("ANA GOMEZ", "Urgencias", "2024-05-01"),
            ])
            .unwrap();

        assert_eq!(outcome.admitted.len(), 1);
        assert_eq!(outcome.duplicates.len(), 1);
    }

    #[test]
    fn test_mixed_batch_admits_non_duplicates() {
        let store = MemoryStore::new();
        store
            .append_unique(vec![make_record("Ana Gomez", "Urgencias", "2024-05-01")])
            .unwrap();

        let outcome = store
            .append_unique(vec![
                make_record("Ana Gomez", "Urgencias", "2024-05-01"),
                make_record("Ana Gomez", "Urgencias", "2024-05-02"),
            ])
            .unwrap();

        assert_eq!(outcome.admitted.len(), 1);
        assert_eq!(outcome.admitted[0].date.to_string(), "2024-05-02");
        assert_eq!(outcome.duplicates.len(), 1);
    }

    #[test]
    fn test_delete_worker_rewrites_collection() {
        let store = MemoryStore::new();
        store
            .append_unique(vec![
                make_record("Ana Gomez", "Urgencias", "2024-05-01"),
                make_record("Ana Gomez", "UCI", "2024-05-02"),
                make_record("Pedro Ruiz", "UCI", "2024-05-01"),
            ])
            .unwrap();

        let removed = store.delete_worker(" ANA GOMEZ ").unwrap();

        assert_eq!(removed, 2);
        let remaining = store.read_all(&Scope::All).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].worker_name, "Pedro Ruiz");
    }

    #[test]
    fn test_delete_unknown_worker_removes_nothing() {
        let store = MemoryStore::new();
        store
            .append_unique(vec![make_record("Ana Gomez", "Urgencias", "2024-05-01")])
            .unwrap();

        assert_eq!(store.delete_worker("Maria Lopez").unwrap(), 0);
        assert_eq!(store.read_all(&Scope::All).unwrap().len(), 1);
    }

    #[test]
    fn test_with_records_seeds_and_dedups() {
        let store = MemoryStore::with_records(vec![
            make_record("Ana Gomez", "Urgencias", "2024-05-01"),
            make_record("Ana Gomez", "Urgencias", "2024-05-01"),
        ])
        .unwrap();

        assert_eq!(store.read_all(&Scope::All).unwrap().len(), 1);
    }
}
