use std::sync::Arc;

use crate::errors::AppError;
use crate::models::department::{Department, DepartmentData};
use crate::repositories::DepartmentRepository;

/// Stateless per call: only a handle to the storage gateway, so the same
/// value is shared across all actix workers.
pub struct DepartmentService {
    repo: Arc<dyn DepartmentRepository>,
}

impl DepartmentService {
    pub fn new(repo: Arc<dyn DepartmentRepository>) -> Self {
        Self { repo }
    }

    /// No duplicate-name pre-check: the storage uniqueness constraint on
    /// `name` rejects collisions and surfaces as `UniqueViolation`.
    pub async fn save(&self, data: DepartmentData) -> Result<Department, AppError> {
        self.repo.insert(&data).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Department, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::DepartmentNotFound(id))
    }

    pub async fn find_all(&self) -> Result<Vec<Department>, AppError> {
        self.repo.find_all().await
    }

    /// Full replace: every field of the stored record is overwritten with the
    /// caller's values, and the id is forced to the path parameter no matter
    /// what the payload carried.
    pub async fn update(&self, id: i64, data: DepartmentData) -> Result<Department, AppError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(AppError::DepartmentNotFound(id));
        }
        let department = Department {
            id,
            name: data.name,
            description: data.description,
        };
        self.repo.replace(&department).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(AppError::DepartmentNotFound(id));
        }
        self.repo.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::department::MockDepartmentRepository;

    fn department_data(name: &str) -> DepartmentData {
        DepartmentData {
            id: None,
            name: name.to_string(),
            description: Some("Tecnología".to_string()),
        }
    }

    fn department(id: i64, name: &str) -> Department {
        Department {
            id,
            name: name.to_string(),
            description: Some("Tecnología".to_string()),
        }
    }

    #[tokio::test]
    async fn save_returns_persisted_department_with_id() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_insert()
            .withf(|data| data.name == "IT")
            .times(1)
            .returning(|data| {
                Ok(Department {
                    id: 1,
                    name: data.name.clone(),
                    description: data.description.clone(),
                })
            });

        let service = DepartmentService::new(Arc::new(repo));
        let saved = service.save(department_data("IT")).await.unwrap();

        assert_eq!(saved.id, 1);
        assert_eq!(saved.name, "IT");
    }

    #[tokio::test]
    async fn save_propagates_unique_violation() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(AppError::UniqueViolation("departments_name_key".to_string())));

        let service = DepartmentService::new(Arc::new(repo));
        let err = service.save(department_data("IT")).await.unwrap_err();

        assert!(matches!(err, AppError::UniqueViolation(_)));
    }

    #[tokio::test]
    async fn find_by_id_returns_department() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_find_by_id()
            .withf(|id| *id == 1)
            .returning(|id| Ok(Some(department(id, "IT"))));

        let service = DepartmentService::new(Arc::new(repo));
        let found = service.find_by_id(1).await.unwrap();

        assert_eq!(found.name, "IT");
    }

    #[tokio::test]
    async fn find_by_id_missing_is_not_found() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = DepartmentService::new(Arc::new(repo));
        let err = service.find_by_id(999).await.unwrap_err();

        assert!(matches!(err, AppError::DepartmentNotFound(999)));
        assert!(err.to_string().contains("Departamento no encontrado con ID: 999"));
    }

    #[tokio::test]
    async fn find_all_returns_every_department() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_find_all()
            .returning(|| Ok(vec![department(1, "IT"), department(2, "RRHH")]));

        let service = DepartmentService::new(Arc::new(repo));
        let all = service.find_all().await.unwrap();

        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn update_forces_id_from_path_over_payload_id() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_exists_by_id()
            .withf(|id| *id == 1)
            .returning(|_| Ok(true));
        repo.expect_replace()
            .withf(|dept| dept.id == 1 && dept.name == "IT_Modificado")
            .times(1)
            .returning(|dept| Ok(dept.clone()));

        let service = DepartmentService::new(Arc::new(repo));
        let mut data = department_data("IT_Modificado");
        data.id = Some(999);
        let updated = service.update(1, data).await.unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "IT_Modificado");
    }

    #[tokio::test]
    async fn update_missing_fails_without_writing() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(false));
        repo.expect_replace().never();

        let service = DepartmentService::new(Arc::new(repo));
        let err = service.update(999, department_data("NoExiste")).await.unwrap_err();

        assert!(matches!(err, AppError::DepartmentNotFound(999)));
    }

    #[tokio::test]
    async fn delete_removes_existing_department() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(true));
        repo.expect_delete_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(()));

        let service = DepartmentService::new(Arc::new(repo));
        service.delete(1).await.unwrap();
    }

    #[tokio::test]
    async fn delete_missing_fails_without_writing() {
        let mut repo = MockDepartmentRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(false));
        repo.expect_delete_by_id().never();

        let service = DepartmentService::new(Arc::new(repo));
        let err = service.delete(999).await.unwrap_err();

        assert!(matches!(err, AppError::DepartmentNotFound(999)));
    }
}
