use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::error;
use utoipa::ToSchema;

use crate::model::employee::Employee;
use crate::store::employee::{
    NewEmployee, create_employee as store_create, delete_employee as store_delete,
    get_employee as store_get, list_employees as store_list,
};
use crate::store::StoreError;
use crate::utils::validate;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP-001")]
    pub employee_code: String,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

impl CreateEmployee {
    fn validate(&self) -> Result<(), &'static str> {
        if !validate::length_within(&self.employee_code, 1, 50) {
            return Err("employee_code must be between 1 and 50 characters");
        }
        if !validate::length_within(&self.full_name, 1, 200) {
            return Err("full_name must be between 1 and 200 characters");
        }
        if !validate::is_valid_email(self.email.trim()) {
            return Err("email must be a valid email address");
        }
        if !validate::length_within(&self.department, 1, 100) {
            return Err("department must be between 1 and 100 characters");
        }
        Ok(())
    }
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created successfully", body = Employee),
        (status = 400, description = "Invalid input", body = Object, example = json!({
            "message": "email must be a valid email address"
        })),
        (status = 409, description = "Duplicate employee", body = Object, example = json!({
            "message": "An employee with this email or employee code already exists."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();

    if let Err(message) = payload.validate() {
        return Ok(HttpResponse::BadRequest().json(json!({ "message": message })));
    }

    let new = NewEmployee {
        employee_code: payload.employee_code,
        full_name: payload.full_name,
        email: payload.email,
        department: payload.department,
    };

    match store_create(pool.get_ref(), new).await {
        Ok(employee) => Ok(HttpResponse::Created().json(employee)),
        Err(StoreError::DuplicateEmployee) => Ok(HttpResponse::Conflict().json(json!({
            "message": "An employee with this email or employee code already exists."
        }))),
        Err(e) => {
            error!(error = %e, "Failed to create employee");
            Ok(HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            })))
        }
    }
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees, sorted by full name", body = [Employee]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> actix_web::Result<impl Responder> {
    match store_list(pool.get_ref()).await {
        Ok(employees) => Ok(HttpResponse::Ok().json(employees)),
        Err(e) => {
            error!(error = %e, "Failed to list employees");
            Ok(HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            })))
        }
    }
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    match store_get(pool.get_ref(), id).await {
        Ok(employee) => Ok(HttpResponse::Ok().json(employee)),
        Err(StoreError::EmployeeNotFound) => Ok(HttpResponse::NotFound().json(json!({
            "message": "Employee not found."
        }))),
        Err(e) => {
            error!(error = %e, id, "Failed to fetch employee");
            Ok(HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            })))
        }
    }
}

/// Delete Employee (and all of its attendance records)
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee and attendance records deleted"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    match store_delete(pool.get_ref(), id).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(StoreError::EmployeeNotFound) => Ok(HttpResponse::NotFound().json(json!({
            "message": "Employee not found."
        }))),
        Err(e) => {
            error!(error = %e, id, "Failed to delete employee");
            Ok(HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            })))
        }
    }
}
