use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeData};
use crate::repositories::EmployeeRepository;

pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// Email uniqueness is checked proactively so a duplicate fails with
    /// `DuplicateEmail` before anything is written, not with the reactive
    /// storage-constraint error.
    pub async fn save(&self, data: EmployeeData) -> Result<Employee, AppError> {
        if self.repo.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::DuplicateEmail(data.email));
        }
        self.repo.insert(&data).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Employee, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::EmployeeNotFound(id))
    }

    pub async fn find_by_department(&self, department_name: &str) -> Result<Vec<Employee>, AppError> {
        self.repo.find_by_department_name(department_name).await
    }

    /// Closed interval: employees earning exactly `min` or `max` are included.
    pub async fn find_by_salary_range(&self, min: Decimal, max: Decimal) -> Result<Vec<Employee>, AppError> {
        self.repo.find_by_salary_range(min, max).await
    }

    /// `None` when the department has no employees, so callers can tell
    /// "no employees" apart from an average of zero.
    pub async fn average_salary_by_department(&self, department_id: i64) -> Result<Option<Decimal>, AppError> {
        self.repo.average_salary_by_department(department_id).await
    }

    pub async fn find_hired_after(&self, date: NaiveDate) -> Result<Vec<Employee>, AppError> {
        self.repo.find_hired_after(date).await
    }

    pub async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        self.repo.find_all().await
    }

    /// Full replace with the id forced to the path parameter; any id in the
    /// payload is ignored.
    pub async fn update(&self, id: i64, data: EmployeeData) -> Result<Employee, AppError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(AppError::EmployeeNotFound(id));
        }
        let employee = Employee {
            id,
            name: data.name,
            surname: data.surname,
            email: data.email,
            hire_date: data.hire_date,
            salary: data.salary,
            department_id: data.department_id,
        };
        self.repo.replace(&employee).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(AppError::EmployeeNotFound(id));
        }
        self.repo.delete_by_id(id).await
    }
}
