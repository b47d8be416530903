use crate::api::attendance::{AttendanceStatus, AttendanceSummaryResponse, MarkAttendance};
use crate::api::employee::CreateEmployee;
use crate::model::attendance::Attendance;
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite - Employee & Attendance Management

A small HR record keeper.

### Key Features
- **Employee Management**
  - Create, list, view, and delete employee records
- **Attendance Management**
  - One Present/Absent mark per employee per calendar date
  - Per-employee history with optional date range
  - Daily present/absent summary across all employees

### Response Format
- JSON-based RESTful responses

Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance,
        crate::api::attendance::attendance_summary,

        crate::api::health::health_check
    ),
    components(
        schemas(
            CreateEmployee,
            Employee,
            MarkAttendance,
            AttendanceStatus,
            Attendance,
            AttendanceSummaryResponse
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
