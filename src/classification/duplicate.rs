//! Duplicate detection for candidate shift records.
//!
//! The register admits at most one shift per worker per day, whatever the
//! declared type or department. Callers warn and reject a duplicate; they
//! never silently overwrite the existing record.

use crate::models::ShiftRecord;

/// Normalizes a worker name for duplicate comparison.
///
/// Matching is case-insensitive and ignores leading/trailing whitespace, so
/// `"Ana Gomez"` and `" ana gomez "` are the same worker for this purpose.
/// Stored records keep their original spelling.
pub fn normalize_worker_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns true if `candidate` duplicates a record already in `records`.
///
/// Two records collide when the normalized worker names match and the dates
/// are exactly equal. Shift type and department play no part: the rule is
/// one shift per worker per day, deliberately coarse.
///
/// # Example
///
/// ```
/// use turnos_engine::classification::detect_duplicate;
/// use turnos_engine::models::ShiftRecord;
/// use chrono::NaiveDate;
///
/// let existing = vec![ShiftRecord {
///     worker_name: "Ana Gomez".to_string(),
///     department: "Urgencias".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     shift_type: "Nocturno".to_string(),
///     note: String::new(),
/// }];
///
/// let candidate = ShiftRecord {
///     worker_name: "ana gomez ".to_string(),
///     department: "UCI".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     shift_type: "Festivo".to_string(),
///     note: String::new(),
/// };
///
/// assert!(detect_duplicate(&existing, &candidate));
/// ```
pub fn detect_duplicate(records: &[ShiftRecord], candidate: &ShiftRecord) -> bool {
    let candidate_name = normalize_worker_name(&candidate.worker_name);
    records.iter().any(|existing| {
        existing.date == candidate.date
            && normalize_worker_name(&existing.worker_name) == candidate_name
    })
}
