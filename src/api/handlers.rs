//! HTTP request handlers for the Vacation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use super::request::{CheckRequest, JobRequest, ListVacationsQuery, RespondRequest, SubmitRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/vacations/check", post(check_handler))
        .route("/vacations", post(submit_handler).get(list_handler))
        .route("/vacations/:id", get(get_handler).delete(delete_handler))
        .route("/vacations/:id/response", post(respond_handler))
        .route("/vacations/:id/cancel", post(cancel_handler))
        .route("/employees/:id/balance", get(balance_handler))
        .route("/jobs/finish-vacations", post(finish_vacations_handler))
        .route("/jobs/update-balances", post(update_balances_handler))
        .with_state(state)
}

/// Handler for POST /vacations/check.
///
/// Runs the eligibility check without creating anything.
async fn check_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing vacation check request");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let today = Utc::now().date_naive();
    match state
        .record_service()
        .check(&request.employee_id, &request.to_vacation_request(), today)
        .await
    {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                is_available = result.is_available,
                "Vacation check completed"
            );
            ok_json(StatusCode::OK, &result)
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /vacations.
///
/// Runs the full submission workflow and returns the created record.
async fn submit_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing vacation submission");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let today = Utc::now().date_naive();
    match state
        .record_service()
        .submit(&request.employee_id, request.to_vacation_request(), today)
        .await
    {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                record_id = %record.id,
                "Vacation submitted"
            );
            ok_json(StatusCode::CREATED, &record)
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /vacations.
async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListVacationsQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.record_service().list(&query.to_filter()).await {
        Ok(records) => ok_json(StatusCode::OK, &records),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /vacations/{id}.
async fn get_handler(State(state): State<AppState>, Path(record_id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.record_service().get(&record_id).await {
        Ok(record) => ok_json(StatusCode::OK, &record),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /vacations/{id}/response.
///
/// Applies an HR approve or reject decision to a pending record.
async fn respond_handler(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
    payload: Result<Json<RespondRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        record_id = %record_id,
        "Processing HR response"
    );

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state
        .record_service()
        .hr_respond(&record_id, request.decision, request.comment)
        .await
    {
        Ok(record) => ok_json(StatusCode::OK, &record),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /vacations/{id}/cancel.
async fn cancel_handler(State(state): State<AppState>, Path(record_id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        record_id = %record_id,
        "Processing cancellation"
    );
    match state.record_service().cancel(&record_id).await {
        Ok(record) => ok_json(StatusCode::OK, &record),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for DELETE /vacations/{id}.
async fn delete_handler(State(state): State<AppState>, Path(record_id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        record_id = %record_id,
        "Processing deletion"
    );
    match state.record_service().delete(&record_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for GET /employees/{id}/balance.
///
/// Returns the employee's most recent vacation balance.
async fn balance_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state
        .balance_service()
        .latest_for_employee(&employee_id)
        .await
    {
        Ok(balance) => ok_json(StatusCode::OK, &balance),
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /jobs/finish-vacations.
///
/// Marks every approved vacation that ended before the run date as
/// finished. The body is optional; `as_of` overrides the run date.
async fn finish_vacations_handler(
    State(state): State<AppState>,
    payload: Option<Json<JobRequest>>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let as_of = job_date(payload);
    info!(correlation_id = %correlation_id, as_of = %as_of, "Running finish-vacations job");

    match state.record_service().auto_finish(as_of).await {
        Ok(finished) => {
            info!(correlation_id = %correlation_id, finished, "Finish-vacations job completed");
            ok_json(StatusCode::OK, &json!({ "finished": finished }))
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Handler for POST /jobs/update-balances.
///
/// Creates the next balance period for every active employee whose hire
/// anniversary falls on the run date.
async fn update_balances_handler(
    State(state): State<AppState>,
    payload: Option<Json<JobRequest>>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let as_of = job_date(payload);
    info!(correlation_id = %correlation_id, as_of = %as_of, "Running update-balances job");

    match state.balance_service().auto_update_balances(as_of).await {
        Ok(created) => {
            info!(correlation_id = %correlation_id, created, "Update-balances job completed");
            ok_json(StatusCode::OK, &json!({ "created": created }))
        }
        Err(err) => engine_error(correlation_id, err),
    }
}

/// Resolves the run date for a job endpoint.
fn job_date(payload: Option<Json<JobRequest>>) -> NaiveDate {
    payload
        .and_then(|Json(request)| request.as_of)
        .unwrap_or_else(|| Utc::now().date_naive())
}

/// Unpacks a JSON body, turning extractor rejections into 400 responses.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

/// Serializes a success body with an explicit JSON content type.
fn ok_json<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps an engine error onto its HTTP status and logs it.
fn engine_error(correlation_id: Uuid, err: crate::error::EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
