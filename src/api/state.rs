//! Application state for the Shift Premium Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::calendar::{HolidayCalendar, HolidayTable, REGION_COLOMBIA};
use crate::error::EngineResult;
use crate::store::{MemoryStore, ShiftStore};

/// Shared application state.
///
/// Contains the externally-owned resources the handlers need: the record
/// store, the holiday calendar, and the region the facility operates in.
/// The engine itself never holds any of this; it receives snapshots per
/// call.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ShiftStore>,
    calendar: Arc<dyn HolidayCalendar>,
    region: String,
}

impl AppState {
    /// Creates application state from explicit collaborators.
    pub fn new(
        store: Arc<dyn ShiftStore>,
        calendar: Arc<dyn HolidayCalendar>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            store,
            calendar,
            region: region.into(),
        }
    }

    /// Creates state for a Colombian facility: an empty in-memory store and
    /// the statutory holiday table for the given years.
    ///
    /// # Errors
    ///
    /// Returns an error if any year falls outside the supported statutory
    /// window.
    pub fn colombia(years: RangeInclusive<i32>) -> EngineResult<Self> {
        Ok(Self::new(
            Arc::new(MemoryStore::new()),
            Arc::new(HolidayTable::colombia(years)?),
            REGION_COLOMBIA,
        ))
    }

    /// Returns the record store.
    pub fn store(&self) -> &dyn ShiftStore {
        self.store.as_ref()
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &dyn HolidayCalendar {
        self.calendar.as_ref()
    }

    /// Returns the configured region code.
    pub fn region(&self) -> &str {
        &self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_colombia_state_uses_region_co() {
        let state = AppState::colombia(2024..=2024).unwrap();
        assert_eq!(state.region(), REGION_COLOMBIA);
    }

    #[test]
    fn test_colombia_state_rejects_unsupported_years() {
        assert!(AppState::colombia(1970..=1971).is_err());
    }
}
