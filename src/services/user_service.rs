use crate::auth::{hash_password, verify_password};
use crate::database::{NewUser, Store, User};
use crate::error::{ApiError, ApiResult};

pub const CREDENTIALS_MISMATCH: &str = "Username or password does not match";

pub struct UserService<'a> {
    store: &'a dyn Store,
}

impl<'a> UserService<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Hash the password and insert the user.
    pub async fn register(&self, email: String, password: String) -> ApiResult<User> {
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| ApiError::internal(format!("password hashing task failed: {}", e)))??;

        Ok(self
            .store
            .insert_user(NewUser {
                email,
                password_hash,
            })
            .await?)
    }

    /// First user with this exact email whose password verifies.
    pub async fn validate_credentials(&self, email: &str, password: &str) -> ApiResult<Option<User>> {
        let candidates = self.store.find_users_by_email(email).await?;
        if candidates.is_empty() {
            return Ok(None);
        }

        let password = password.to_string();
        tokio::task::spawn_blocking(move || {
            candidates
                .into_iter()
                .find(|user| verify_password(&password, &user.password))
        })
        .await
        .map_err(|e| ApiError::internal(format!("password verification task failed: {}", e)))
    }
}
