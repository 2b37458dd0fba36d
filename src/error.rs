//! Error types for the Shift Premium Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during classification,
//! aggregation, and calendar lookup.

use thiserror::Error;

/// The main error type for the Shift Premium Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use turnos_engine::error::EngineError;
///
/// let error = EngineError::CalendarUnavailable {
///     year: 1950,
///     region: "CO".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "No holiday calendar available for region 'CO' in year 1950"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No holiday table covers the requested year in the requested region.
    ///
    /// Holiday-dependent computation must stop rather than silently
    /// under-count holiday hours.
    #[error("No holiday calendar available for region '{region}' in year {year}")]
    CalendarUnavailable {
        /// The calendar year that was requested.
        year: i32,
        /// The region the lookup was made against.
        region: String,
    },

    /// The calendar provider does not cover the requested region.
    #[error("Holiday calendar does not cover region '{region}'")]
    UnsupportedRegion {
        /// The region that was requested.
        region: String,
    },

    /// A calendar table file was not found at the specified path.
    #[error("Calendar file not found: {path}")]
    CalendarFileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A calendar table file could not be parsed.
    #[error("Failed to parse calendar file '{path}': {message}")]
    CalendarFileParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift record was invalid or contained inconsistent data.
    #[error("Invalid shift record field '{field}': {message}")]
    InvalidRecord {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The record store could not serve the request.
    #[error("Shift store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
