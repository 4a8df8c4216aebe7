use std::sync::Arc;

use chrono::Utc;

use crate::errors::AppError;
use crate::models::project::{Project, ProjectData};
use crate::repositories::ProjectRepository;

pub struct ProjectService {
    repo: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }

    pub async fn save(&self, data: ProjectData) -> Result<Project, AppError> {
        self.repo.insert(&data).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Project, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ProjectNotFound(id))
    }

    /// Active means `end_date` strictly after today. Recomputed on every call
    /// against the clock, never stored.
    pub async fn find_active(&self) -> Result<Vec<Project>, AppError> {
        let today = Utc::now().date_naive();
        self.repo.find_active_as_of(today).await
    }

    pub async fn find_all(&self) -> Result<Vec<Project>, AppError> {
        self.repo.find_all().await
    }

    /// Full replace with the id forced to the path parameter; any id in the
    /// payload is ignored.
    pub async fn update(&self, id: i64, data: ProjectData) -> Result<Project, AppError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(AppError::ProjectNotFound(id));
        }
        let project = Project {
            id,
            name: data.name,
            description: data.description,
            start_date: data.start_date,
            end_date: data.end_date,
        };
        self.repo.replace(&project).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(AppError::ProjectNotFound(id));
        }
        self.repo.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::project::MockProjectRepository;
    use chrono::{Duration, NaiveDate};

    fn project_data(name: &str) -> ProjectData {
        ProjectData {
            id: None,
            name: name.to_string(),
            description: "Descripción Test".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
        }
    }

    fn project(id: i64, name: &str) -> Project {
        Project {
            id,
            name: name.to_string(),
            description: "Descripción Test".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn save_returns_persisted_project() {
        let mut repo = MockProjectRepository::new();
        repo.expect_insert()
            .withf(|data| data.name == "Proyecto Test")
            .times(1)
            .returning(|data| {
                Ok(Project {
                    id: 1,
                    name: data.name.clone(),
                    description: data.description.clone(),
                    start_date: data.start_date,
                    end_date: data.end_date,
                })
            });

        let service = ProjectService::new(Arc::new(repo));
        let saved = service.save(project_data("Proyecto Test")).await.unwrap();

        assert_eq!(saved.id, 1);
        assert_eq!(saved.name, "Proyecto Test");
    }

    #[tokio::test]
    async fn find_by_id_returns_project() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_by_id()
            .withf(|id| *id == 1)
            .returning(|id| Ok(Some(project(id, "Proyecto Test"))));

        let service = ProjectService::new(Arc::new(repo));
        let found = service.find_by_id(1).await.unwrap();

        assert_eq!(found.name, "Proyecto Test");
    }

    #[tokio::test]
    async fn find_by_id_missing_is_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = ProjectService::new(Arc::new(repo));
        let err = service.find_by_id(999).await.unwrap_err();

        assert!(matches!(err, AppError::ProjectNotFound(999)));
        assert!(err.to_string().contains("Proyecto no encontrado con ID: 999"));
    }

    #[tokio::test]
    async fn find_active_queries_with_todays_date() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_active_as_of()
            .withf(|date| *date == Utc::now().date_naive())
            .times(1)
            .returning(|date| {
                Ok(vec![Project {
                    end_date: date + Duration::days(5),
                    ..project(2, "Proyecto Activo")
                }])
            });

        let service = ProjectService::new(Arc::new(repo));
        let active = service.find_active().await.unwrap();

        assert_eq!(active.len(), 1);
    }

    #[tokio::test]
    async fn find_all_returns_every_project() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_all().returning(|| Ok(vec![project(1, "Proyecto Test")]));

        let service = ProjectService::new(Arc::new(repo));
        let all = service.find_all().await.unwrap();

        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn update_forces_id_from_path_over_payload_id() {
        let mut repo = MockProjectRepository::new();
        repo.expect_exists_by_id()
            .withf(|id| *id == 1)
            .returning(|_| Ok(true));
        repo.expect_replace()
            .withf(|p| p.id == 1 && p.name == "Proyecto Actualizado")
            .times(1)
            .returning(|p| Ok(p.clone()));

        let service = ProjectService::new(Arc::new(repo));
        let mut data = project_data("Proyecto Actualizado");
        data.id = Some(999);
        let updated = service.update(1, data).await.unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Proyecto Actualizado");
    }

    #[tokio::test]
    async fn update_missing_fails_without_writing() {
        let mut repo = MockProjectRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(false));
        repo.expect_replace().never();

        let service = ProjectService::new(Arc::new(repo));
        let err = service.update(999, project_data("Inexistente")).await.unwrap_err();

        assert!(matches!(err, AppError::ProjectNotFound(999)));
    }

    #[tokio::test]
    async fn delete_removes_existing_project() {
        let mut repo = MockProjectRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(true));
        repo.expect_delete_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(()));

        let service = ProjectService::new(Arc::new(repo));
        service.delete(1).await.unwrap();
    }

    #[tokio::test]
    async fn delete_missing_fails_without_writing() {
        let mut repo = MockProjectRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(false));
        repo.expect_delete_by_id().never();

        let service = ProjectService::new(Arc::new(repo));
        let err = service.delete(999).await.unwrap_err();

        assert!(matches!(err, AppError::ProjectNotFound(999)));
    }
}
