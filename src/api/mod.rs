//! HTTP API module for the Shift Premium Engine.
//!
//! This module provides the JSON endpoints for registering shift entries,
//! importing raw register rows, and producing the consolidated reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ImportRequest, ImportRow, RegisterShiftsRequest};
pub use response::{
    ApiError, DeleteWorkerResponse, DepartmentReportResponse, DepartmentsResponse,
    ImportResponse, RegisterShiftsResponse, RowError, ShiftDetailResponse, WorkerReportResponse,
};
pub use state::AppState;
