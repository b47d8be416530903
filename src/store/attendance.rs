use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;

use crate::model::attendance::Attendance;

use super::employee::employee_exists;
use super::{StoreError, is_foreign_key_violation, is_unique_violation};

/// Daily present/absent counts across all employees.
#[derive(Debug, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub present_count: i64,
    pub absent_count: i64,
}

/// Inserts one attendance mark. The `(employee_id, date)` unique constraint
/// is the arbiter for duplicates; the existence check is advisory and a
/// concurrent delete surfaces as a foreign-key violation on the insert.
pub async fn mark_attendance(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
    status: &str,
) -> Result<Attendance, StoreError> {
    if !employee_exists(pool, employee_id).await? {
        return Err(StoreError::EmployeeNotFound);
    }

    let result = sqlx::query(
        "INSERT INTO attendance (employee_id, date, status) VALUES (?, ?, ?)",
    )
    .bind(employee_id)
    .bind(date)
    .bind(status)
    .execute(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            StoreError::DuplicateAttendance
        } else if is_foreign_key_violation(&e) {
            StoreError::EmployeeNotFound
        } else {
            StoreError::Database(e)
        }
    })?;

    Ok(Attendance {
        id: result.last_insert_rowid(),
        employee_id,
        date,
        status: status.to_owned(),
    })
}

pub async fn list_attendance(
    pool: &SqlitePool,
    employee_id: i64,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<Vec<Attendance>, StoreError> {
    if !employee_exists(pool, employee_id).await? {
        return Err(StoreError::EmployeeNotFound);
    }

    // Inclusive bounds; dates are stored in ISO form so text comparison
    // matches date order.
    let mut sql = String::from(
        "SELECT id, employee_id, date, status FROM attendance WHERE employee_id = ?",
    );
    if from.is_some() {
        sql.push_str(" AND date >= ?");
    }
    if to.is_some() {
        sql.push_str(" AND date <= ?");
    }
    sql.push_str(" ORDER BY date DESC");

    debug!(sql = %sql, employee_id, ?from, ?to, "Fetching attendance");

    let mut query = sqlx::query_as::<_, Attendance>(&sql).bind(employee_id);
    if let Some(from) = from {
        query = query.bind(from);
    }
    if let Some(to) = to {
        query = query.bind(to);
    }

    Ok(query.fetch_all(pool).await?)
}

pub async fn summarize(pool: &SqlitePool, date: NaiveDate) -> Result<AttendanceSummary, StoreError> {
    let (present_count, absent_count) = sqlx::query_as::<_, (i64, i64)>(
        r#"
        SELECT
            COALESCE(SUM(CASE WHEN status = 'Present' THEN 1 ELSE 0 END), 0),
            COALESCE(SUM(CASE WHEN status = 'Absent' THEN 1 ELSE 0 END), 0)
        FROM attendance
        WHERE date = ?
        "#,
    )
    .bind(date)
    .fetch_one(pool)
    .await?;

    Ok(AttendanceSummary {
        present_count,
        absent_count,
    })
}
