//! Request types for the Shift Premium Engine API.
//!
//! This module defines the JSON request structures for the register and
//! import endpoints, and the ingestion-side validation that keeps
//! malformed records out of the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftRecord;

/// Request body for `POST /shifts`.
///
/// One register entry covers one worker, one department, one declared
/// shift type, and one or more dates, matching how shifts are entered on
/// the register form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterShiftsRequest {
    /// The worker's name.
    pub worker_name: String,
    /// The department the shifts were worked in.
    pub department: String,
    /// The shift dates to register.
    pub dates: Vec<NaiveDate>,
    /// The declared shift category label (e.g., "Nocturno").
    pub shift_type: String,
    /// Optional free-text observation applied to every date.
    #[serde(default)]
    pub note: String,
}

impl RegisterShiftsRequest {
    /// Validates the entry and expands it into one record per date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRecord`] when the worker name, the
    /// department, or the date list is empty. The shift type is not
    /// validated here: an unrecognized label is admitted and earns no
    /// credit, per the register's degrade policy.
    pub fn into_records(self) -> EngineResult<Vec<ShiftRecord>> {
        if self.worker_name.trim().is_empty() {
            return Err(EngineError::InvalidRecord {
                field: "worker_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.department.trim().is_empty() {
            return Err(EngineError::InvalidRecord {
                field: "department".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.dates.is_empty() {
            return Err(EngineError::InvalidRecord {
                field: "dates".to_string(),
                message: "at least one date is required".to_string(),
            });
        }

        Ok(self
            .dates
            .iter()
            .map(|date| ShiftRecord {
                worker_name: self.worker_name.clone(),
                department: self.department.clone(),
                date: *date,
                shift_type: self.shift_type.clone(),
                note: self.note.clone(),
            })
            .collect())
    }
}

/// Request body for `POST /shifts/import`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// The raw register rows to import.
    pub rows: Vec<ImportRow>,
}

/// One raw register row from a bulk import.
///
/// All fields arrive as text, the way an uploaded schedule carries them.
/// Each row is parsed independently so that one bad row rejects that row,
/// not the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRow {
    /// The worker's name.
    pub worker_name: String,
    /// The department label, possibly outside the known set.
    pub department: String,
    /// The shift date as text, `2024-05-01` or `01/05/2024`.
    pub date: String,
    /// The declared shift category label.
    pub shift_type: String,
    /// Optional free-text observation.
    #[serde(default)]
    pub note: String,
}

impl ImportRow {
    /// Validates the row and parses it into a shift record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRecord`] when the worker name or
    /// department is empty or the date does not parse in either accepted
    /// format.
    pub fn parse(&self) -> EngineResult<ShiftRecord> {
        if self.worker_name.trim().is_empty() {
            return Err(EngineError::InvalidRecord {
                field: "worker_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.department.trim().is_empty() {
            return Err(EngineError::InvalidRecord {
                field: "department".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let date = parse_row_date(&self.date)?;

        Ok(ShiftRecord {
            worker_name: self.worker_name.trim().to_string(),
            department: self.department.trim().to_string(),
            date,
            shift_type: self.shift_type.clone(),
            note: self.note.clone(),
        })
    }
}

/// Parses a register date in ISO (`%Y-%m-%d`) or Colombian (`%d/%m/%Y`)
/// notation.
fn parse_row_date(raw: &str) -> EngineResult<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .map_err(|_| EngineError::InvalidRecord {
            field: "date".to_string(),
            message: format!("'{raw}' is not a valid date"),
        })
}
