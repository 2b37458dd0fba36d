//! Shift record model and related types.
//!
//! This module defines the ShiftRecord struct and the ShiftType enum for
//! representing declared work shifts in the shift register.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The three recognized declared shift categories.
///
/// Workers declare one category per register entry. The declared category is
/// a classification hint, not the exhaustive truth: Sunday and holiday
/// credits are also granted from the calendar date itself, independent of
/// the declaration.
///
/// # Example
///
/// ```
/// use turnos_engine::models::ShiftType;
///
/// assert_eq!(ShiftType::parse("Nocturno"), Some(ShiftType::Night));
/// assert_eq!(ShiftType::parse("Tarde"), None);
/// assert_eq!(ShiftType::Sunday.label(), "Dominical");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Night shift ("Nocturno").
    Night,
    /// Sunday shift ("Dominical").
    Sunday,
    /// Public-holiday shift ("Festivo").
    Holiday,
}

impl ShiftType {
    /// Returns the register label for this shift type.
    pub const fn label(&self) -> &'static str {
        match self {
            ShiftType::Night => "Nocturno",
            ShiftType::Sunday => "Dominical",
            ShiftType::Holiday => "Festivo",
        }
    }

    /// Parses a declared label into a recognized shift type.
    ///
    /// Leading and trailing whitespace is ignored. Any label outside the
    /// three recognized values returns `None`; callers treat such records
    /// as earning no credit rather than failing.
    pub fn parse(raw: &str) -> Option<ShiftType> {
        match raw.trim() {
            "Nocturno" => Some(ShiftType::Night),
            "Dominical" => Some(ShiftType::Sunday),
            "Festivo" => Some(ShiftType::Holiday),
            _ => None,
        }
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One declared shift worked by one person on one date.
///
/// The declared `shift_type` is stored as the raw register label so that
/// unrecognized values survive ingestion and degrade to zero credit during
/// classification instead of failing the whole batch.
///
/// # Example
///
/// ```
/// use turnos_engine::models::ShiftRecord;
/// use chrono::NaiveDate;
///
/// let record = ShiftRecord {
///     worker_name: "Maria Lopez".to_string(),
///     department: "UCI".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
///     shift_type: "Nocturno".to_string(),
///     note: String::new(),
/// };
/// assert!(record.falls_on_sunday());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The worker's name as entered in the register.
    pub worker_name: String,
    /// The department (service) the shift was worked in.
    pub department: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The declared shift category label (e.g., "Nocturno").
    pub shift_type: String,
    /// Optional free-text observation. No semantic effect.
    #[serde(default)]
    pub note: String,
}

impl ShiftRecord {
    /// Returns the recognized shift type declared on this record, if any.
    pub fn declared_type(&self) -> Option<ShiftType> {
        ShiftType::parse(&self.shift_type)
    }

    /// Returns true if the shift date falls on a Sunday.
    pub fn falls_on_sunday(&self) -> bool {
        self.date.weekday() == Weekday::Sun
    }
}
