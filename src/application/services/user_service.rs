//! User management service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::Storage;
use crate::error::AppError;

use super::objects;

/// CRUD operations over users.
pub struct UserService<S: Storage + ?Sized> {
    storage: Arc<S>,
}

impl<S: Storage + ?Sized> UserService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Lists every user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend failures.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        objects::list(self.storage.as_ref()).await
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        objects::fetch(self.storage.as_ref(), id).await
    }

    /// Creates and persists a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend failures.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = objects::create(self.storage.as_ref(), User::new(new_user)).await?;
        tracing::info!(id = %user.id, "user created");
        Ok(user)
    }

    /// Applies `patch` to an existing user. The email is never changed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn update_user(&self, id: &str, patch: UserPatch) -> Result<User, AppError> {
        let user = objects::modify(self.storage.as_ref(), id, |user: &mut User| {
            user.apply(patch)
        })
        .await?;
        tracing::info!(id = %user.id, "user updated");
        Ok(user)
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        objects::remove::<User, _>(self.storage.as_ref(), id).await?;
        tracing::info!(id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Object, ObjectKind};
    use crate::domain::repositories::{MockStorage, StorageError};

    fn create_test_user() -> User {
        User::new(NewUser {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            first_name: None,
            last_name: None,
        })
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut mock_storage = MockStorage::new();

        mock_storage
            .expect_insert()
            .withf(|object| object.kind() == ObjectKind::User)
            .times(1)
            .returning(|_| Ok(()));
        mock_storage.expect_save().times(1).returning(|| Ok(()));

        let service = UserService::new(Arc::new(mock_storage));

        let user = service
            .create_user(NewUser {
                email: "a@b.com".to_string(),
                password: "x".to_string(),
                first_name: Some("Ada".to_string()),
                last_name: None,
            })
            .await
            .unwrap();

        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.first_name, "Ada");
    }

    #[tokio::test]
    async fn test_create_user_save_failure() {
        let mut mock_storage = MockStorage::new();

        mock_storage.expect_insert().returning(|_| Ok(()));
        mock_storage.expect_save().times(1).returning(|| {
            Err(StorageError::Io(std::io::Error::other("disk full")))
        });

        let service = UserService::new(Arc::new(mock_storage));

        let result = service
            .create_user(NewUser {
                email: "a@b.com".to_string(),
                password: "x".to_string(),
                first_name: None,
                last_name: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_update_user_keeps_email() {
        let mut mock_storage = MockStorage::new();

        let existing = create_test_user();
        let id = existing.id.clone();
        mock_storage
            .expect_get()
            .withf(|kind, _| *kind == ObjectKind::User)
            .times(1)
            .returning(move |_, _| Ok(Some(Object::User(existing.clone()))));
        mock_storage
            .expect_insert()
            .withf(|object| matches!(object, Object::User(u) if u.email == "a@b.com"))
            .times(1)
            .returning(|_| Ok(()));
        mock_storage.expect_save().times(1).returning(|| Ok(()));

        let service = UserService::new(Arc::new(mock_storage));

        let updated = service
            .update_user(
                &id,
                UserPatch {
                    password: Some("new".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.email, "a@b.com");
        assert_eq!(updated.password, "new");
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut mock_storage = MockStorage::new();

        mock_storage
            .expect_get()
            .times(1)
            .returning(|_, _| Ok(None));
        mock_storage.expect_delete().never();

        let service = UserService::new(Arc::new(mock_storage));

        let result = service.delete_user("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
