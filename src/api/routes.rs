//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{rejection::JsonRejection, Extension, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::domain::OperationContext;
use crate::error::AppError;
use crate::handlers::{
    AttendanceHandler, FeedbackHandler, MarkAttendanceCommand, RegisterCommand,
    RegistrationHandler, SubmitFeedbackCommand,
};
use crate::reports::{AttendanceRateRow, FeedbackScoreRow, RegistrationCountRow, ReportService};

/// Shared router state: the store handle plus request-independent policy
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub require_registration_for_attendance: bool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            require_registration_for_attendance: false,
        }
    }

    pub fn with_required_registration(mut self, required: bool) -> Self {
        self.require_registration_for_attendance = required;
        self
    }
}

// =========================================================================
// Request/Response types
// =========================================================================

/// Body of POST /register and POST /attendance
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub event_id: Option<i64>,
}

/// Body of POST /feedback
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub event_id: Option<i64>,
    #[serde(default)]
    pub rating: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MutationResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub college_id: Option<i64>,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
fn create_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/attendance", post(mark_attendance))
        .route("/feedback", post(submit_feedback))
        .route("/reports/registrations", get(registrations_report))
        .route("/reports/attendance_rate", get(attendance_rate_report))
        .route("/reports/feedback_score", get(feedback_score_report))
}

/// Build the full application: routes, health check and middleware
pub fn build_router(state: AppState) -> Router {
    // Axum layers run in reverse order: context -> logging -> handler
    Router::new()
        .route("/health", get(health_check))
        .merge(create_router())
        .layer(middleware::from_fn(super::middleware::logging_middleware))
        .layer(middleware::from_fn(super::middleware::context_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

fn body_or_validation<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

fn context_or_default(context: Option<Extension<OperationContext>>) -> OperationContext {
    context.map(|Extension(ctx)| ctx).unwrap_or_default()
}

// =========================================================================
// POST /register
// =========================================================================

/// Register a student for an event
async fn register(
    State(state): State<AppState>,
    context: Option<Extension<OperationContext>>,
    payload: Result<Json<EnrollmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MutationResponse>), AppError> {
    let request = body_or_validation(payload)?;
    let command = RegisterCommand::try_new(request.student_id, request.event_id)?;

    let registration = RegistrationHandler::new(state.pool)
        .execute(command, &context_or_default(context))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            message: "Registration successful".to_string(),
            id: registration.id,
        }),
    ))
}

// =========================================================================
// POST /attendance
// =========================================================================

/// Mark a student as present at an event
async fn mark_attendance(
    State(state): State<AppState>,
    context: Option<Extension<OperationContext>>,
    payload: Result<Json<EnrollmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MutationResponse>), AppError> {
    let request = body_or_validation(payload)?;
    let command = MarkAttendanceCommand::try_new(request.student_id, request.event_id)?;

    let attendance = AttendanceHandler::new(state.pool)
        .with_required_registration(state.require_registration_for_attendance)
        .execute(command, &context_or_default(context))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            message: "Attendance marked successfully".to_string(),
            id: attendance.id,
        }),
    ))
}

// =========================================================================
// POST /feedback
// =========================================================================

/// Submit a 1-5 rating for an event
async fn submit_feedback(
    State(state): State<AppState>,
    context: Option<Extension<OperationContext>>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MutationResponse>), AppError> {
    let request = body_or_validation(payload)?;
    let command =
        SubmitFeedbackCommand::try_new(request.student_id, request.event_id, request.rating)?;

    let feedback = FeedbackHandler::new(state.pool)
        .execute(command, &context_or_default(context))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            message: "Feedback submitted successfully".to_string(),
            id: feedback.id,
        }),
    ))
}

// =========================================================================
// GET /reports/*
// =========================================================================

async fn registrations_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<Vec<RegistrationCountRow>>, AppError> {
    let rows = ReportService::new(state.pool)
        .registrations(query.college_id)
        .await?;
    Ok(Json(rows))
}

async fn attendance_rate_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<Vec<AttendanceRateRow>>, AppError> {
    let rows = ReportService::new(state.pool)
        .attendance_rate(query.college_id)
        .await?;
    Ok(Json(rows))
}

async fn feedback_score_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<Vec<FeedbackScoreRow>>, AppError> {
    let rows = ReportService::new(state.pool)
        .feedback_scores(query.college_id)
        .await?;
    Ok(Json(rows))
}
