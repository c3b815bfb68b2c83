use serde::{Deserialize, Serialize};

use super::brewery::missing_field;
use crate::error::ApiError;

/// Body of `POST /api/signup` and `POST /api/login`
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CredentialsRequest {
    /// Signup accepts any present value, the empty string included.
    pub fn require(self) -> Result<(String, String), ApiError> {
        let email = self.email.ok_or_else(|| missing_field("email"))?;
        let password = self.password.ok_or_else(|| missing_field("password"))?;
        Ok((email, password))
    }
}

/// Returned by signup and login when session tokens are enabled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
}
