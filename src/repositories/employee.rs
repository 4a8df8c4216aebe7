use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeData};
use crate::repositories::map_db_error;

const EMPLOYEE_COLUMNS: &str = "id, name, surname, email, hire_date, salary, department_id";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn insert(&self, data: &EmployeeData) -> Result<Employee, AppError>;
    async fn replace(&self, employee: &Employee) -> Result<Employee, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError>;
    async fn find_by_department_name(&self, name: &str) -> Result<Vec<Employee>, AppError>;
    async fn find_by_salary_range(&self, min: Decimal, max: Decimal) -> Result<Vec<Employee>, AppError>;
    async fn find_hired_after(&self, date: NaiveDate) -> Result<Vec<Employee>, AppError>;
    async fn average_salary_by_department(&self, department_id: i64) -> Result<Option<Decimal>, AppError>;
    async fn find_all(&self) -> Result<Vec<Employee>, AppError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn insert(&self, data: &EmployeeData) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(&format!(
            "INSERT INTO employees (name, surname, email, hire_date, salary, department_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {EMPLOYEE_COLUMNS}"
        ))
        .bind(&data.name)
        .bind(&data.surname)
        .bind(&data.email)
        .bind(data.hire_date)
        .bind(data.salary)
        .bind(data.department_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn replace(&self, employee: &Employee) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(&format!(
            "UPDATE employees SET name = $2, surname = $3, email = $4, hire_date = $5, \
             salary = $6, department_id = $7 WHERE id = $1 RETURNING {EMPLOYEE_COLUMNS}"
        ))
        .bind(employee.id)
        .bind(&employee.name)
        .bind(&employee.surname)
        .bind(&employee.email)
        .bind(employee.hire_date)
        .bind(employee.salary)
        .bind(employee.department_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn find_by_department_name(&self, name: &str) -> Result<Vec<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(
            "SELECT e.id, e.name, e.surname, e.email, e.hire_date, e.salary, e.department_id \
             FROM employees e JOIN departments d ON d.id = e.department_id WHERE d.name = $1",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn find_by_salary_range(&self, min: Decimal, max: Decimal) -> Result<Vec<Employee>, AppError> {
        // Closed interval on both ends.
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE salary BETWEEN $1 AND $2"
        ))
        .bind(min)
        .bind(max)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn find_hired_after(&self, date: NaiveDate) -> Result<Vec<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE hire_date > $1"
        ))
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn average_salary_by_department(&self, department_id: i64) -> Result<Option<Decimal>, AppError> {
        // AVG over zero rows is NULL, which keeps "no employees" distinct from
        // an average of zero.
        sqlx::query_scalar::<_, Option<Decimal>>(
            "SELECT ROUND(AVG(salary), 2) FROM employees WHERE department_id = $1",
        )
        .bind(department_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(&format!("SELECT {EMPLOYEE_COLUMNS} FROM employees"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM employees WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
