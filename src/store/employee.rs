use sqlx::SqlitePool;

use crate::model::employee::Employee;

use super::{StoreError, is_unique_violation};

pub struct NewEmployee {
    pub employee_code: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Normalizes string fields (trim, lowercased email) and inserts. The unique
/// constraints on `employee_code` and `email` are the arbiter for duplicates:
/// the insert either lands whole or not at all.
pub async fn create_employee(
    pool: &SqlitePool,
    new: NewEmployee,
) -> Result<Employee, StoreError> {
    let employee_code = new.employee_code.trim().to_owned();
    let full_name = new.full_name.trim().to_owned();
    let email = new.email.trim().to_lowercase();
    let department = new.department.trim().to_owned();

    let result = sqlx::query(
        r#"
        INSERT INTO employees (employee_code, full_name, email, department)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&employee_code)
    .bind(&full_name)
    .bind(&email)
    .bind(&department)
    .execute(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            StoreError::DuplicateEmployee
        } else {
            StoreError::Database(e)
        }
    })?;

    Ok(Employee {
        id: result.last_insert_rowid(),
        employee_code,
        full_name,
        email,
        department,
    })
}

pub async fn get_employee(pool: &SqlitePool, id: i64) -> Result<Employee, StoreError> {
    sqlx::query_as::<_, Employee>(
        "SELECT id, employee_code, full_name, email, department FROM employees WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::EmployeeNotFound)
}

pub async fn list_employees(pool: &SqlitePool) -> Result<Vec<Employee>, StoreError> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, employee_code, full_name, email, department FROM employees ORDER BY full_name",
    )
    .fetch_all(pool)
    .await?;

    Ok(employees)
}

pub(crate) async fn employee_exists(pool: &SqlitePool, id: i64) -> Result<bool, StoreError> {
    let row = sqlx::query_scalar::<_, i64>("SELECT 1 FROM employees WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

/// Removes the employee and every attendance row referencing it in one
/// transaction. A missing employee leaves the transaction uncommitted, so no
/// partial cascade is ever observable.
pub async fn delete_employee(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM attendance WHERE employee_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::EmployeeNotFound);
    }

    tx.commit().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::str::FromStr;

    async fn test_pool() -> SqlitePool {
        let options = sqlx::sqlite::SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();
        db::create_schema(&pool).await.unwrap();
        pool
    }

    fn ann() -> NewEmployee {
        NewEmployee {
            employee_code: " E1 ".to_string(),
            full_name: " Ann ".to_string(),
            email: " Ann@X.com ".to_string(),
            department: " Eng ".to_string(),
        }
    }

    #[actix_web::test]
    async fn create_normalizes_fields() {
        let pool = test_pool().await;

        let employee = create_employee(&pool, ann()).await.unwrap();

        assert_eq!(employee.employee_code, "E1");
        assert_eq!(employee.full_name, "Ann");
        assert_eq!(employee.email, "ann@x.com");
        assert_eq!(employee.department, "Eng");

        let fetched = get_employee(&pool, employee.id).await.unwrap();
        assert_eq!(fetched.email, "ann@x.com");
    }

    #[actix_web::test]
    async fn duplicate_email_is_case_insensitive() {
        let pool = test_pool().await;
        create_employee(&pool, ann()).await.unwrap();

        let second = NewEmployee {
            employee_code: "E2".to_string(),
            email: "ANN@x.COM".to_string(),
            ..ann()
        };
        let err = create_employee(&pool, second).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmployee));

        // one record, untouched
        assert_eq!(list_employees(&pool).await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn delete_missing_employee_is_not_found() {
        let pool = test_pool().await;
        let err = delete_employee(&pool, 42).await.unwrap_err();
        assert!(matches!(err, StoreError::EmployeeNotFound));
    }
}
