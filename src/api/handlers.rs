//! HTTP request handlers for the Shift Premium Engine API.
//!
//! This module contains the handler functions for all API endpoints. The
//! handlers own all logging and status mapping; the engine below them only
//! returns values and errors.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::classification::{aggregate_by_department, aggregate_by_worker};
use crate::error::{EngineError, EngineResult};
use crate::models::Department;
use crate::store::Scope;

use super::request::{ImportRequest, RegisterShiftsRequest};
use super::response::{
    ApiError, ApiErrorResponse, DeleteWorkerResponse, DepartmentReportResponse,
    DepartmentsResponse, ImportResponse, RegisterShiftsResponse, RowError, ShiftDetailResponse,
    WorkerReportResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shifts", post(register_shifts).get(list_shifts))
        .route("/shifts/import", post(import_shifts))
        .route("/shifts/:worker_name", delete(delete_worker))
        .route("/reports/workers", get(worker_report))
        .route("/reports/departments", get(department_report))
        .route("/departments", get(list_departments))
        .with_state(state)
}

/// Query parameters scoping a read to one department.
#[derive(Debug, Deserialize)]
struct ScopeQuery {
    department: Option<String>,
}

impl ScopeQuery {
    fn into_scope(self) -> Scope {
        match self.department {
            Some(department) if !department.trim().is_empty() => Scope::Department(department),
            _ => Scope::All,
        }
    }
}

/// Handler for POST /shifts.
///
/// Registers one worker's shifts for one or more dates. Dates already
/// occupied for that worker are reported back as duplicates, not errors.
async fn register_shifts(
    State(state): State<AppState>,
    payload: Result<Json<RegisterShiftsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        worker = %request.worker_name,
        dates = request.dates.len(),
        "Registering shifts"
    );

    let records = match request.into_records() {
        Ok(records) => records,
        Err(error) => return engine_error_response(correlation_id, error),
    };

    match state.store().append_unique(records) {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                registered = outcome.admitted.len(),
                duplicates = outcome.duplicates.len(),
                "Shifts registered"
            );
            json_ok(RegisterShiftsResponse {
                registered: outcome.admitted.len(),
                duplicates: outcome.duplicates,
            })
        }
        Err(error) => engine_error_response(correlation_id, error),
    }
}

/// Handler for POST /shifts/import.
///
/// Bulk-imports raw register rows. Each row is validated independently:
/// bad rows are reported with their index and reason, good rows are
/// admitted, and duplicate rows are rejected by the store. One bad row
/// never aborts the batch.
async fn import_shifts(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        rows = request.rows.len(),
        "Importing shift rows"
    );

    let mut records = Vec::new();
    let mut rejected_rows = Vec::new();
    let mut unknown_departments: Vec<String> = Vec::new();

    for (index, row) in request.rows.iter().enumerate() {
        match row.parse() {
            Ok(record) => {
                if !Department::is_known(&record.department)
                    && !unknown_departments.contains(&record.department)
                {
                    unknown_departments.push(record.department.clone());
                }
                records.push(record);
            }
            Err(error) => rejected_rows.push(RowError {
                row: index,
                message: error.to_string(),
            }),
        }
    }

    match state.store().append_unique(records) {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                imported = outcome.admitted.len(),
                duplicates = outcome.duplicates.len(),
                rejected = rejected_rows.len(),
                "Import completed"
            );
            json_ok(ImportResponse {
                imported: outcome.admitted.len(),
                duplicates: outcome.duplicates,
                rejected_rows,
                unknown_departments,
            })
        }
        Err(error) => engine_error_response(correlation_id, error),
    }
}

/// Handler for GET /shifts.
///
/// Returns the raw record detail for the whole register or one department.
async fn list_shifts(State(state): State<AppState>, Query(query): Query<ScopeQuery>) -> Response {
    let correlation_id = Uuid::new_v4();
    let scope = query.into_scope();

    match state.store().read_all(&scope) {
        Ok(records) => json_ok(ShiftDetailResponse { records }),
        Err(error) => engine_error_response(correlation_id, error),
    }
}

/// Handler for GET /reports/workers.
///
/// Produces the per-worker consolidation, recomputed from the current
/// record set.
async fn worker_report(State(state): State<AppState>, Query(query): Query<ScopeQuery>) -> Response {
    let correlation_id = Uuid::new_v4();
    let scope = query.into_scope();

    match build_worker_report(&state, &scope) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                records = report.record_count,
                rows = report.rows.len(),
                "Worker report generated"
            );
            json_ok(report)
        }
        Err(error) => engine_error_response(correlation_id, error),
    }
}

/// Handler for GET /reports/departments.
///
/// Produces the per-department summary, recomputed from the current
/// record set.
async fn department_report(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    match build_department_report(&state) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                records = report.record_count,
                rows = report.rows.len(),
                "Department report generated"
            );
            json_ok(report)
        }
        Err(error) => engine_error_response(correlation_id, error),
    }
}

/// Handler for DELETE /shifts/:worker_name.
///
/// Removes every record of one worker (normalized-name match) by
/// rewriting the stored collection.
async fn delete_worker(
    State(state): State<AppState>,
    Path(worker_name): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.store().delete_worker(&worker_name) {
        Ok(removed) => {
            info!(
                correlation_id = %correlation_id,
                worker = %worker_name,
                removed,
                "Worker records deleted"
            );
            json_ok(DeleteWorkerResponse {
                worker_name,
                removed,
            })
        }
        Err(error) => engine_error_response(correlation_id, error),
    }
}

/// Handler for GET /departments.
async fn list_departments() -> Response {
    json_ok(DepartmentsResponse {
        departments: Department::ALL
            .into_iter()
            .map(|d| d.label().to_string())
            .collect(),
    })
}

fn build_worker_report(state: &AppState, scope: &Scope) -> EngineResult<WorkerReportResponse> {
    let records = state.store().read_all(scope)?;
    let rows = aggregate_by_worker(&records, state.calendar(), state.region())?;

    Ok(WorkerReportResponse {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        region: state.region().to_string(),
        record_count: records.len(),
        rows,
    })
}

fn build_department_report(state: &AppState) -> EngineResult<DepartmentReportResponse> {
    let records = state.store().read_all(&Scope::All)?;
    let rows = aggregate_by_department(&records, state.calendar(), state.region())?;

    Ok(DepartmentReportResponse {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        region: state.region().to_string(),
        record_count: records.len(),
        rows,
    })
}

fn json_ok<T: serde::Serialize>(payload: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(payload),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, error: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed serde error.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
