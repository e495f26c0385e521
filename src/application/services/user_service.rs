//! User profile business rules.

use serde_json::json;
use std::sync::Arc;

use crate::application::authorization::ensure_owner;
use crate::domain::entities::{User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for browsing and updating user profiles.
///
/// Reads are public; a profile can only be updated by the account itself.
pub struct UserService<U: UserRepository> {
    users: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    /// Creates a new user service.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Lists all registered users.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.users.list().await
    }

    /// Retrieves a single user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches `id`.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }

    /// Partially updates the principal's own profile.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when `principal` differs from the
    /// target `id`, and [`AppError::NotFound`] for an unknown target.
    pub async fn update_user(
        &self,
        principal: i64,
        id: i64,
        patch: UserPatch,
    ) -> Result<User, AppError> {
        let user = self.get_user(id).await?;
        ensure_owner(principal, user.id)?;

        self.users.update(id, patch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    fn test_user(id: i64) -> User {
        User {
            id,
            email: format!("user{id}@example.com"),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            phone_number: "0700000000".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_update_other_account_is_unauthorized() {
        let mut repo = MockUserRepository::new();

        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(test_user(id))));
        // No expect_update: a call would panic the mock.

        let service = UserService::new(Arc::new(repo));
        let err = service
            .update_user(8, 7, UserPatch::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_update_own_account_passes_patch_through() {
        let mut repo = MockUserRepository::new();

        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(test_user(id))));
        repo.expect_update()
            .withf(|_, patch: &UserPatch| patch.phone_number == Some("0711111111".to_string()))
            .times(1)
            .returning(|id, _| Ok(test_user(id)));

        let service = UserService::new(Arc::new(repo));
        let patch = UserPatch {
            phone_number: Some("0711111111".to_string()),
            ..UserPatch::default()
        };

        assert!(service.update_user(7, 7, patch).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();

        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repo));
        let err = service.get_user(404).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
