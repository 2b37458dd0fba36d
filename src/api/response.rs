//! Response types for the Shift Premium Engine API.
//!
//! This module defines the success payloads for each endpoint and the
//! error response structures, including the mapping from engine errors to
//! HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classification::{DepartmentAggregate, WorkerAggregate};
use crate::error::EngineError;
use crate::models::ShiftRecord;
use crate::store::DuplicateShift;

/// Response body for `POST /shifts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterShiftsResponse {
    /// Number of records admitted into the register.
    pub registered: usize,
    /// Dates rejected because the worker already has a shift that day.
    pub duplicates: Vec<DuplicateShift>,
}

/// A rejected row in a bulk import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowError {
    /// Zero-based index of the row in the uploaded batch.
    pub row: usize,
    /// What made the row invalid.
    pub message: String,
}

/// Response body for `POST /shifts/import`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    /// Number of records admitted into the register.
    pub imported: usize,
    /// Rows rejected by the one-shift-per-worker-per-day rule.
    pub duplicates: Vec<DuplicateShift>,
    /// Rows rejected by validation, with the reason per row.
    pub rejected_rows: Vec<RowError>,
    /// Department labels outside the known set, admitted as free text.
    pub unknown_departments: Vec<String>,
}

/// Response body for `GET /shifts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftDetailResponse {
    /// The records in the requested scope, in insertion order.
    pub records: Vec<ShiftRecord>,
}

/// Response body for `GET /reports/workers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerReportResponse {
    /// Unique identifier for this report run.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The engine version that produced the report.
    pub engine_version: String,
    /// The holiday-calendar region the report was computed against.
    pub region: String,
    /// Number of records that went into the report.
    pub record_count: usize,
    /// One row per (department, worker) pair, in deterministic order.
    pub rows: Vec<WorkerAggregate>,
}

/// Response body for `GET /reports/departments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentReportResponse {
    /// Unique identifier for this report run.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The engine version that produced the report.
    pub engine_version: String,
    /// The holiday-calendar region the report was computed against.
    pub region: String,
    /// Number of records that went into the report.
    pub record_count: usize,
    /// One row per department, in deterministic order.
    pub rows: Vec<DepartmentAggregate>,
}

/// Response body for `DELETE /shifts/:worker_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteWorkerResponse {
    /// The worker name the deletion matched against.
    pub worker_name: String,
    /// Number of records removed.
    pub removed: usize,
}

/// Response body for `GET /departments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentsResponse {
    /// The known service labels, in register display order.
    pub departments: Vec<String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::CalendarUnavailable { year, region } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALENDAR_UNAVAILABLE",
                    format!("No holiday calendar available for region '{region}' in year {year}"),
                    "Extend the configured holiday table to cover every year in the register",
                ),
            },
            EngineError::UnsupportedRegion { region } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "UNSUPPORTED_REGION",
                    format!("Holiday calendar does not cover region '{region}'"),
                    "The configured calendar and the configured region disagree",
                ),
            },
            EngineError::CalendarFileNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALENDAR_CONFIG_ERROR",
                    "Calendar configuration error",
                    format!("Calendar file not found: {path}"),
                ),
            },
            EngineError::CalendarFileParse { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALENDAR_CONFIG_ERROR",
                    "Calendar configuration error",
                    format!("Failed to parse {path}: {message}"),
                ),
            },
            EngineError::InvalidRecord { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RECORD",
                    format!("Invalid shift record field '{field}': {message}"),
                    "The register entry contains invalid information",
                ),
            },
            EngineError::StoreUnavailable { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_ERROR", "Shift store unavailable", message),
            },
        }
    }
}
