//! User command - seeds user records for the login endpoint.

use crate::cli::args::{UserAction, UserArgs};
use crate::config::Config;
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, UserRepository, UserStore};

/// Execute the user command
pub async fn execute(args: UserArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let users = UserStore::new(db.get_connection());

    match args.action {
        UserAction::Add { username, password } => {
            let user = add_user(&users, username, &password).await?;
            println!("Created user {} ({})", user.username, user.id);
        }
    }

    Ok(())
}

/// Hash the password and insert a new user record.
pub async fn add_user(
    users: &dyn UserRepository,
    username: String,
    password: &str,
) -> AppResult<User> {
    if username.is_empty() {
        return Err(AppError::validation("username must not be empty"));
    }

    let password = Password::hash(password)?;
    let user = users.create(username, password).await?;
    tracing::info!(username = %user.username, "User created");

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;

    #[tokio::test]
    async fn test_add_user_stores_hash_not_plaintext() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|name, password| name == "alice" && password.as_str() != "secret")
            .times(1)
            .returning(|name, password| Ok(User::new(name, password)));

        let user = add_user(&repo, "alice".to_string(), "secret").await.unwrap();

        assert_eq!(user.username, "alice");
        assert!(user.password.verify("secret"));
    }

    #[tokio::test]
    async fn test_add_user_rejects_empty_username() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().times(0);

        let result = add_user(&repo, String::new(), "secret").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_add_user_reports_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|_, _| Err(AppError::conflict("User")));

        let result = add_user(&repo, "alice".to_string(), "secret").await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
