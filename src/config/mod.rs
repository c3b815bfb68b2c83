use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Test,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Postgres connection string. `None` selects the in-memory store.
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Shared bearer token for service callers. Empty disables the static path.
    pub api_token: String,
    pub jwt_secret: String,
    /// Whether signup/login hand out signed session tokens or bare ids.
    pub session_tokens: bool,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set when session tokens are enabled")]
    MissingJwtSecret,

    #[error("API_TOKEN must be set in production")]
    MissingApiToken,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match var("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("test") => Environment::Test,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Test => Self::test(),
            Environment::Development => Self::development(),
        }
        .with_overrides(var)
    }

    fn with_overrides<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        let url_var = match self.environment {
            Environment::Test => "TEST_DATABASE_URL",
            _ => "DATABASE_URL",
        };
        if let Some(v) = var(url_var).filter(|v| !v.trim().is_empty()) {
            self.database.url = Some(v);
        }
        if let Some(v) = var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }

        if let Some(v) = var("API_TOKEN") {
            self.security.api_token = v;
        }
        if let Some(v) = var("JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Some(v) = var("SESSION_TOKENS") {
            self.security.session_tokens = v.parse().unwrap_or(self.security.session_tokens);
        }
        if let Some(v) = var("CLIENT_ORIGIN") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        self
    }

    /// Reject combinations the server cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.security.session_tokens && self.security.jwt_secret.is_empty() {
            return Err(ConfigError::MissingJwtSecret);
        }
        if self.is_production() && self.security.api_token.is_empty() {
            return Err(ConfigError::MissingApiToken);
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 8000 },
            database: DatabaseConfig {
                url: None,
                max_connections: 10,
            },
            security: SecurityConfig {
                api_token: String::new(),
                jwt_secret: String::new(),
                session_tokens: true,
                cors_origins: vec!["http://localhost:3000".to_string()],
            },
        }
    }

    pub fn test() -> Self {
        Self {
            environment: Environment::Test,
            ..Self::development()
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 8000 },
            database: DatabaseConfig {
                url: None,
                max_connections: 20,
            },
            security: SecurityConfig {
                api_token: String::new(),
                jwt_secret: String::new(),
                session_tokens: true,
                cors_origins: Vec::new(),
            },
        }
    }
}
