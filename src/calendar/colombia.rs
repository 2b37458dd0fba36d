//! Colombian statutory public holidays.
//!
//! Colombia observes three kinds of public holidays: fixed civil and
//! religious dates, dates moved to the following Monday by Law 51 of 1983
//! (the "Ley Emiliani"), and movable feasts tied to Easter, three of which
//! are also moved to Monday. This module computes the full table for a
//! calendar year.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// First year the Emiliani Monday-shift law was in force.
pub const EMILIANI_EFFECTIVE_YEAR: i32 = 1984;

/// Last year the provider is willing to answer for.
pub const MAX_SUPPORTED_YEAR: i32 = 2200;

/// Fixed holidays observed on their calendar date.
const FIXED_HOLIDAYS: [(u32, u32); 6] = [
    (1, 1),   // Año Nuevo
    (5, 1),   // Día del Trabajo
    (7, 20),  // Día de la Independencia
    (8, 7),   // Batalla de Boyacá
    (12, 8),  // Inmaculada Concepción
    (12, 25), // Navidad
];

/// Holidays moved to the following Monday when they do not fall on one.
const EMILIANI_HOLIDAYS: [(u32, u32); 7] = [
    (1, 6),   // Reyes Magos
    (3, 19),  // San José
    (6, 29),  // San Pedro y San Pablo
    (8, 15),  // Asunción de la Virgen
    (10, 12), // Día de la Raza
    (11, 1),  // Todos los Santos
    (11, 11), // Independencia de Cartagena
];

/// Computes the set of Colombian public holidays for a calendar year.
///
/// # Errors
///
/// Returns [`EngineError::CalendarUnavailable`] for years before the
/// Emiliani law took effect (1984) or beyond the supported range; the
/// older observance rules are not modeled and callers must not fall back
/// to an empty table.
///
/// # Example
///
/// ```
/// use turnos_engine::calendar::colombia::statutory_holidays;
/// use chrono::NaiveDate;
///
/// let holidays = statutory_holidays(2024).unwrap();
/// // Reyes Magos 2024 falls on a Saturday and is observed Monday Jan 8.
/// assert!(holidays.contains(&NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()));
/// assert!(!holidays.contains(&NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
/// ```
pub fn statutory_holidays(year: i32) -> EngineResult<BTreeSet<NaiveDate>> {
    if !(EMILIANI_EFFECTIVE_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        return Err(EngineError::CalendarUnavailable {
            year,
            region: super::REGION_COLOMBIA.to_string(),
        });
    }

    let mut holidays = BTreeSet::new();

    for (month, day) in FIXED_HOLIDAYS {
        holidays.insert(civil_date(year, month, day));
    }

    for (month, day) in EMILIANI_HOLIDAYS {
        holidays.insert(observed_on_monday(civil_date(year, month, day)));
    }

    let easter = easter_sunday(year);
    // Jueves y Viernes Santo stay on their own days.
    holidays.insert(easter - Duration::days(3));
    holidays.insert(easter - Duration::days(2));
    // Ascensión, Corpus Christi and Sagrado Corazón are Emiliani-shifted.
    holidays.insert(observed_on_monday(easter + Duration::days(39)));
    holidays.insert(observed_on_monday(easter + Duration::days(60)));
    holidays.insert(observed_on_monday(easter + Duration::days(68)));

    Ok(holidays)
}

/// Moves a date to the following Monday unless it already is one.
fn observed_on_monday(date: NaiveDate) -> NaiveDate {
    let days_ahead = (7 - date.weekday().num_days_from_monday()) % 7;
    date + Duration::days(i64::from(days_ahead))
}

/// Computes Easter Sunday for a year in the Gregorian calendar.
///
/// Anonymous Gregorian computus (Meeus/Jones/Butcher).
fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    civil_date(year, month as u32, day as u32)
}

fn civil_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("statutory dates are valid calendar dates")
}
