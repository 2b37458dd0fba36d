//! Public-holiday calendar provider.
//!
//! This module answers one question for the classification engine: is a
//! given calendar date a public holiday in a given region. Tables are built
//! explicitly per (year range, region) and injected where needed; nothing is
//! computed at load time and an uncovered year is an error, never a silent
//! `false`.

pub mod colombia;
mod table;

use chrono::NaiveDate;

use crate::error::EngineResult;

pub use table::HolidayTable;

/// The region code for the built-in Colombian statutory calendar.
pub const REGION_COLOMBIA: &str = "CO";

/// Answers public-holiday lookups for the classification engine.
///
/// Implementations must be deterministic for a given (date, region) pair
/// and must fail loudly when the requested year or region is not covered,
/// so callers never silently under-count holiday hours.
///
/// # Example
///
/// ```
/// use turnos_engine::calendar::{HolidayCalendar, HolidayTable, REGION_COLOMBIA};
/// use chrono::NaiveDate;
///
/// let table = HolidayTable::colombia(2024..=2024).unwrap();
/// let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert!(table.is_public_holiday(new_year, REGION_COLOMBIA).unwrap());
/// ```
pub trait HolidayCalendar: Send + Sync {
    /// Returns whether `date` is a public holiday in `region`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::UnsupportedRegion`] if the
    /// provider does not cover `region`, and
    /// [`crate::error::EngineError::CalendarUnavailable`] if it covers the
    /// region but not the date's year.
    fn is_public_holiday(&self, date: NaiveDate, region: &str) -> EngineResult<bool>;
}
