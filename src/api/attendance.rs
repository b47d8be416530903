use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::model::attendance::Attendance;
use crate::store::StoreError;
use crate::store::attendance::{
    list_attendance as store_list, mark_attendance as store_mark, summarize as store_summarize,
};

#[derive(Serialize, Deserialize, ToSchema)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    fn as_str(&self) -> &str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "Present")]
    pub status: AttendanceStatus,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AttendanceQuery {
    /// Inclusive lower date bound
    #[param(example = "2024-01-01", value_type = Option<String>)]
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound
    #[param(example = "2024-01-31", value_type = Option<String>)]
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SummaryQuery {
    #[param(example = "2024-01-01", value_type = String)]
    pub date: NaiveDate,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceSummaryResponse {
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[schema(example = 5)]
    pub present_count: i64,
    #[schema(example = 2)]
    pub absent_count: i64,
}

/// Mark attendance for an employee
#[utoipa::path(
    post,
    path = "/api/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance recorded", body = Attendance),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found."
        })),
        (status = 409, description = "Already recorded for this date", body = Object, example = json!({
            "message": "Attendance for this date has already been recorded."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<MarkAttendance>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    match store_mark(
        pool.get_ref(),
        employee_id,
        payload.date,
        payload.status.as_str(),
    )
    .await
    {
        Ok(attendance) => Ok(HttpResponse::Created().json(attendance)),
        Err(StoreError::EmployeeNotFound) => Ok(HttpResponse::NotFound().json(json!({
            "message": "Employee not found."
        }))),
        Err(StoreError::DuplicateAttendance) => Ok(HttpResponse::Conflict().json(json!({
            "message": "Attendance for this date has already been recorded."
        }))),
        Err(e) => {
            error!(error = %e, employee_id, "Failed to mark attendance");
            Ok(HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            })))
        }
    }
}

/// Attendance records for an employee, newest first
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        AttendanceQuery
    ),
    responses(
        (status = 200, description = "Attendance records, sorted by date descending", body = [Attendance]),
        (status = 400, description = "Invalid date range"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    query: web::Query<AttendanceQuery>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    if let (Some(from), Some(to)) = (query.from, query.to) {
        if from > to {
            return Ok(HttpResponse::BadRequest().json(json!({
                "message": "from cannot be after to"
            })));
        }
    }

    match store_list(pool.get_ref(), employee_id, query.from, query.to).await {
        Ok(records) => Ok(HttpResponse::Ok().json(records)),
        Err(StoreError::EmployeeNotFound) => Ok(HttpResponse::NotFound().json(json!({
            "message": "Employee not found."
        }))),
        Err(e) => {
            error!(error = %e, employee_id, "Failed to list attendance");
            Ok(HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            })))
        }
    }
}

/// Present/absent counts for a given date
#[utoipa::path(
    get,
    path = "/api/attendance/summary",
    params(SummaryQuery),
    responses(
        (status = 200, description = "Counts for the date", body = AttendanceSummaryResponse),
        (status = 400, description = "Missing or malformed date"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn attendance_summary(
    pool: web::Data<SqlitePool>,
    query: web::Query<SummaryQuery>,
) -> actix_web::Result<impl Responder> {
    match store_summarize(pool.get_ref(), query.date).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(AttendanceSummaryResponse {
            date: query.date,
            present_count: summary.present_count,
            absent_count: summary.absent_count,
        })),
        Err(e) => {
            error!(error = %e, date = %query.date, "Failed to summarize attendance");
            Ok(HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            })))
        }
    }
}
