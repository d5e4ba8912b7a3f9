use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::CatalogServiceError;

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, name: &str) -> Result<User, CatalogServiceError> {
        if name.trim().is_empty() {
            return Err(CatalogServiceError::MissingData);
        }
        self.repo.create(name).await
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, CatalogServiceError> {
        self.repo.list().await
    }
}
