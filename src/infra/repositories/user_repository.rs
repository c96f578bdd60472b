//! User repository - lookup of user records by username.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::db::ping_connection;

#[cfg(test)]
use mockall::automock;

/// User store trait for dependency injection.
///
/// A missing user is `Ok(None)`; `Err` always means the store itself failed.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by exact (case-sensitive) username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a new user; `Conflict` if the username is taken
    async fn create(&self, username: String, password: Password) -> AppResult<User>;

    /// Check that the store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// SeaORM-backed user store
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, username: String, password: Password) -> AppResult<User> {
        let user = User::new(username, password);
        let active_model = ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            password_hash: Set(user.password.as_str().to_string()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        };

        match active_model.insert(&self.db).await {
            Ok(model) => Ok(User::from(model)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::conflict("User"))
            }
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn ping(&self) -> AppResult<()> {
        ping_connection(&self.db).await.map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use uuid::Uuid;

    fn row(username: &str, plain: &str) -> user::Model {
        let now = Utc::now();
        user::Model {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: Password::hash(plain).unwrap().as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_by_username_maps_row_to_user() {
        let stored = row("alice", "secret");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();

        let user = UserStore::new(db)
            .find_by_username("alice")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id, stored.id);
        assert_eq!(user.username, "alice");
        assert_eq!(user.password.as_str(), stored.password_hash);
        assert!(user.password.verify("secret"));
    }

    #[tokio::test]
    async fn test_find_by_username_without_row_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();

        let user = UserStore::new(db).find_by_username("bob").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_find_by_username_store_error_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();

        let result = UserStore::new(db).find_by_username("alice").await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_create_returns_inserted_user() {
        let inserted = row("carol", "hunter2");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![inserted.clone()]])
            .into_connection();

        let password = Password::from_hash(inserted.password_hash.clone());
        let user = UserStore::new(db)
            .create("carol".to_string(), password)
            .await
            .unwrap();

        assert_eq!(user.username, "carol");
        assert!(user.password.verify("hunter2"));
    }

    #[tokio::test]
    async fn test_create_other_store_error_is_not_conflict() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("disk full".into())])
            .into_connection();

        let password = Password::hash("secret").unwrap();
        let result = UserStore::new(db).create("dave".to_string(), password).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_ping_runs_statement() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        assert!(UserStore::new(db).ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_ping_failure_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("unreachable".into())])
            .into_connection();

        let result = UserStore::new(db).ping().await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
