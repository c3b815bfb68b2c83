use std::sync::Arc;

use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::database::Store;

/// Shared handles cloned into every request
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<AppConfig>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: AppConfig) -> Self {
        let tokens = TokenService::new(&config.security.jwt_secret);
        Self {
            store,
            config: Arc::new(config),
            tokens: Arc::new(tokens),
        }
    }
}
