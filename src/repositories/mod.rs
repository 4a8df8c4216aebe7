pub mod department;
pub mod employee;
pub mod project;

pub use department::{DepartmentRepository, PgDepartmentRepository};
pub use employee::{EmployeeRepository, PgEmployeeRepository};
pub use project::{PgProjectRepository, ProjectRepository};

use crate::errors::AppError;

/// Unique-constraint violations keep their own error kind so the boundary can
/// answer 409 instead of 500; everything else is a storage failure.
pub(crate) fn map_db_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::UniqueViolation(db.message().to_string())
        }
        _ => AppError::Database(err.to_string()),
    }
}
