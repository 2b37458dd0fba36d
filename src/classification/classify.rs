//! Premium-hour classification of single shift records.
//!
//! One record earns up to three independent 8-hour credits: night hours for
//! a declared night shift, Sunday hours for a declared Sunday shift or a
//! shift dated on a Sunday, and holiday hours for a declared holiday shift
//! or a shift dated on a public holiday. The categories are not mutually
//! exclusive. The whole register uses this one function; the three rules
//! must never be restated at a call site.

use serde::{Deserialize, Serialize};

use crate::calendar::HolidayCalendar;
use crate::error::EngineResult;
use crate::models::{ShiftRecord, ShiftType};

/// The fixed credit one qualifying record earns per category.
pub const SHIFT_CREDIT_HOURS: u32 = 8;

/// The premium-hour credits earned by a single shift record.
///
/// # Example
///
/// ```
/// use turnos_engine::classification::ExtraHours;
///
/// let hours = ExtraHours {
///     night_hours: 8,
///     sunday_hours: 8,
///     holiday_hours: 0,
/// };
/// assert_eq!(hours.total(), 16);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraHours {
    /// Credit for a declared night shift.
    pub night_hours: u32,
    /// Credit for a declared Sunday shift or a shift dated on a Sunday.
    pub sunday_hours: u32,
    /// Credit for a declared holiday shift or a shift dated on a public
    /// holiday.
    pub holiday_hours: u32,
}

impl ExtraHours {
    /// Returns the sum of the three category credits.
    pub fn total(&self) -> u32 {
        self.night_hours + self.sunday_hours + self.holiday_hours
    }
}

/// Classifies one shift record into its premium-hour credits.
///
/// The three category rules are evaluated independently:
///
/// - night: declared type is Nocturno
/// - Sunday: declared type is Dominical, or the date falls on a Sunday
/// - holiday: declared type is Festivo, or the date is a public holiday
///
/// An unrecognized declared type matches none of the three and the record
/// earns nothing; that is a degrade, not an error. The calendar is only
/// consulted when the declared type alone does not already grant the
/// holiday credit, and a calendar failure (uncovered year or region)
/// propagates because a missing table would otherwise silently under-count
/// holiday hours.
///
/// # Example
///
/// ```
/// use turnos_engine::calendar::{HolidayTable, REGION_COLOMBIA};
/// use turnos_engine::classification::classify;
/// use turnos_engine::models::ShiftRecord;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayTable::colombia(2024..=2024).unwrap();
/// let record = ShiftRecord {
///     worker_name: "Maria Lopez".to_string(),
///     department: "UCI".to_string(),
///     // 2024-01-07 is a Sunday.
///     date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
///     shift_type: "Nocturno".to_string(),
///     note: String::new(),
/// };
///
/// let hours = classify(&record, &calendar, REGION_COLOMBIA).unwrap();
/// assert_eq!(hours.night_hours, 8);
/// assert_eq!(hours.sunday_hours, 8);
/// assert_eq!(hours.holiday_hours, 0);
/// ```
pub fn classify(
    record: &ShiftRecord,
    calendar: &dyn HolidayCalendar,
    region: &str,
) -> EngineResult<ExtraHours> {
    let declared = record.declared_type();

    let night_hours = if declared == Some(ShiftType::Night) {
        SHIFT_CREDIT_HOURS
    } else {
        0
    };

    let sunday_hours = if declared == Some(ShiftType::Sunday) || record.falls_on_sunday() {
        SHIFT_CREDIT_HOURS
    } else {
        0
    };

    let holiday_hours = if declared == Some(ShiftType::Holiday)
        || calendar.is_public_holiday(record.date, region)?
    {
        SHIFT_CREDIT_HOURS
    } else {
        0
    };

    Ok(ExtraHours {
        night_hours,
        sunday_hours,
        holiday_hours,
    })
}
