use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::project::{Project, ProjectData};
use crate::repositories::map_db_error;

const PROJECT_COLUMNS: &str = "id, name, description, start_date, end_date";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn insert(&self, data: &ProjectData) -> Result<Project, AppError>;
    async fn replace(&self, project: &Project) -> Result<Project, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError>;
    async fn find_active_as_of(&self, date: NaiveDate) -> Result<Vec<Project>, AppError>;
    async fn find_all(&self) -> Result<Vec<Project>, AppError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn insert(&self, data: &ProjectData) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(&format!(
            "INSERT INTO projects (name, description, start_date, end_date) \
             VALUES ($1, $2, $3, $4) RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn replace(&self, project: &Project) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(&format!(
            "UPDATE projects SET name = $2, description = $3, start_date = $4, end_date = $5 \
             WHERE id = $1 RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(project.id)
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.start_date)
        .bind(project.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError> {
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn find_active_as_of(&self, date: NaiveDate) -> Result<Vec<Project>, AppError> {
        // Strictly after: a project ending today is no longer active.
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE end_date > $1"
        ))
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn find_all(&self) -> Result<Vec<Project>, AppError> {
        sqlx::query_as::<_, Project>(&format!("SELECT {PROJECT_COLUMNS} FROM projects"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM projects WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
