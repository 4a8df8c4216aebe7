use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::department::{Department, DepartmentData};
use crate::repositories::map_db_error;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn insert(&self, data: &DepartmentData) -> Result<Department, AppError>;
    async fn replace(&self, department: &Department) -> Result<Department, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Department>, AppError>;
    async fn find_all(&self) -> Result<Vec<Department>, AppError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgDepartmentRepository {
    pool: PgPool,
}

impl PgDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PgDepartmentRepository {
    async fn insert(&self, data: &DepartmentData) -> Result<Department, AppError> {
        sqlx::query_as::<_, Department>(
            "INSERT INTO departments (name, description) VALUES ($1, $2) RETURNING id, name, description",
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn replace(&self, department: &Department) -> Result<Department, AppError> {
        sqlx::query_as::<_, Department>(
            "UPDATE departments SET name = $2, description = $3 WHERE id = $1 RETURNING id, name, description",
        )
        .bind(department.id)
        .bind(&department.name)
        .bind(&department.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Department>, AppError> {
        sqlx::query_as::<_, Department>("SELECT id, name, description FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn find_all(&self) -> Result<Vec<Department>, AppError> {
        sqlx::query_as::<_, Department>("SELECT id, name, description FROM departments")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM departments WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
