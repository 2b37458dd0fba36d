//! Explicit per-year holiday tables.
//!
//! A [`HolidayTable`] is built once for an explicit region and range of
//! years, either from the built-in Colombian statutory rules or from a YAML
//! table file, and afterwards answers lookups without any hidden I/O.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

use super::{colombia, HolidayCalendar, REGION_COLOMBIA};

/// On-disk shape of a calendar table file.
#[derive(Debug, Deserialize)]
struct CalendarFile {
    /// The region the table applies to.
    region: String,
    /// Optional descriptive name, ignored by lookups.
    #[serde(default)]
    #[allow(dead_code)]
    name: String,
    /// Holiday dates keyed by calendar year.
    years: BTreeMap<i32, Vec<NaiveDate>>,
}

/// A once-computed public-holiday table for one region.
///
/// The table covers an explicit set of years; a lookup outside that set is
/// a [`EngineError::CalendarUnavailable`] error rather than `false`, so
/// reports never silently under-count holiday hours.
///
/// # Example
///
/// ```
/// use turnos_engine::calendar::{HolidayCalendar, HolidayTable, REGION_COLOMBIA};
/// use chrono::NaiveDate;
///
/// let table = HolidayTable::colombia(2023..=2025).unwrap();
///
/// let boyaca = NaiveDate::from_ymd_opt(2024, 8, 7).unwrap();
/// assert!(table.is_public_holiday(boyaca, REGION_COLOMBIA).unwrap());
///
/// let plain_monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert!(!table.is_public_holiday(plain_monday, REGION_COLOMBIA).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct HolidayTable {
    region: String,
    years: BTreeMap<i32, BTreeSet<NaiveDate>>,
}

impl HolidayTable {
    /// Builds the Colombian statutory table for an inclusive year range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalendarUnavailable`] if any year in the
    /// range falls outside the supported statutory window.
    pub fn colombia(years: RangeInclusive<i32>) -> EngineResult<Self> {
        let mut tables = BTreeMap::new();
        for year in years {
            tables.insert(year, colombia::statutory_holidays(year)?);
        }
        Ok(Self {
            region: REGION_COLOMBIA.to_string(),
            years: tables,
        })
    }

    /// Loads a holiday table from a YAML file.
    ///
    /// The file carries a region code and a list of holiday dates per year:
    ///
    /// ```text
    /// region: CO
    /// name: Festivos Colombia 2024
    /// years:
    ///   2024:
    ///     - 2024-01-01
    ///     - 2024-01-08
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalendarFileNotFound`] if the file cannot be
    /// read and [`EngineError::CalendarFileParse`] if it is not valid YAML
    /// or lists a date under the wrong year.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::CalendarFileNotFound {
            path: path_str.clone(),
        })?;

        let file: CalendarFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::CalendarFileParse {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let mut years = BTreeMap::new();
        for (year, dates) in file.years {
            for date in &dates {
                if date.year() != year {
                    return Err(EngineError::CalendarFileParse {
                        path: path_str,
                        message: format!("date {date} listed under year {year}"),
                    });
                }
            }
            years.insert(year, dates.into_iter().collect());
        }

        Ok(Self {
            region: file.region,
            years,
        })
    }

    /// Returns the region this table answers for.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the holiday dates for one covered year.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalendarUnavailable`] if the year is not in
    /// the table.
    pub fn holidays_in(&self, year: i32) -> EngineResult<&BTreeSet<NaiveDate>> {
        self.years
            .get(&year)
            .ok_or_else(|| EngineError::CalendarUnavailable {
                year,
                region: self.region.clone(),
            })
    }
}

impl HolidayCalendar for HolidayTable {
    fn is_public_holiday(&self, date: NaiveDate, region: &str) -> EngineResult<bool> {
        if region != self.region {
            return Err(EngineError::UnsupportedRegion {
                region: region.to_string(),
            });
        }
        Ok(self.holidays_in(date.year())?.contains(&date))
    }
}
