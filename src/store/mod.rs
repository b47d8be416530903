pub mod attendance;
pub mod employee;

use thiserror::Error;

/// Failure kinds raised by the record store. The API layer maps these to
/// transport codes and never sees raw driver errors for domain outcomes.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("employee not found")]
    EmployeeNotFound,

    #[error("an employee with this email or employee code already exists")]
    DuplicateEmployee,

    #[error("attendance for this date has already been recorded")]
    DuplicateAttendance,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

// Classify constraint violations from the driver's structured error kind
// rather than by inspecting message text.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
        }
        _ => false,
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            matches!(db.kind(), sqlx::error::ErrorKind::ForeignKeyViolation)
        }
        _ => false,
    }
}
