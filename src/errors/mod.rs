use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DepartmentNotFound(i64),
    EmployeeNotFound(i64),
    ProjectNotFound(i64),
    DuplicateEmail(String),
    UniqueViolation(String),
    Database(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DepartmentNotFound(id) => write!(f, "Departamento no encontrado con ID: {}", id),
            AppError::EmployeeNotFound(id) => write!(f, "Empleado no encontrado con ID: {}", id),
            AppError::ProjectNotFound(id) => write!(f, "Proyecto no encontrado con ID: {}", id),
            AppError::DuplicateEmail(email) => write!(f, "Ya existe un empleado con el email: {}", email),
            AppError::UniqueViolation(msg) => write!(f, "Violación de restricción de unicidad: {}", msg),
            AppError::Database(msg) => write!(f, "Error de base de datos: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            // Plain-text body so clients see "<Entidad> no encontrado con ID: <id>".
            AppError::DepartmentNotFound(_)
            | AppError::EmployeeNotFound(_)
            | AppError::ProjectNotFound(_) => HttpResponse::NotFound().body(self.to_string()),
            AppError::DuplicateEmail(_) | AppError::UniqueViolation(_) => {
                HttpResponse::Conflict().json(ErrorResponse { error: self.to_string() })
            }
            AppError::Database(_) => {
                HttpResponse::InternalServerError().json(ErrorResponse { error: self.to_string() })
            }
        }
    }
}
