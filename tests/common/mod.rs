#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose, Engine as _};
use serde_json::Value;
use tower::ServiceExt;

use brewery_api::config::AppConfig;
use brewery_api::database::{Brewery, MemoryStore, NewBrewery, Store, User};
use brewery_api::services::UserService;
use brewery_api::{app, AppState};

pub const API_TOKEN: &str = "test-api-token";
pub const JWT_SECRET: &str = "test-jwt-secret";

/// (email, password) of the seeded users; ids are 1, 2, 3 in this order.
pub const USERS: [(&str, &str); 3] = [
    ("First user email", "First user password"),
    ("Second user email", "Second user password"),
    ("Third user email", "Third user password"),
];

/// In-process app over a fresh memory store
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    pub fn with_config(configure: impl FnOnce(&mut AppConfig)) -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), configure)
    }

    pub fn with_store(store: Arc<dyn Store>, configure: impl FnOnce(&mut AppConfig)) -> Self {
        let mut config = AppConfig::test();
        config.security.api_token = API_TOKEN.to_string();
        config.security.jwt_secret = JWT_SECRET.to_string();
        configure(&mut config);

        let state = AppState::new(store, config);
        Self {
            router: app(state.clone()),
            state,
        }
    }

    pub fn store(&self) -> &dyn Store {
        self.state.store.as_ref()
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
        body: Option<Value>,
    ) -> Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("router failed")?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        Ok(TestResponse { status, headers, body })
    }

    pub async fn get(&self, uri: &str, authorization: Option<&str>) -> Result<TestResponse> {
        self.request(Method::GET, uri, authorization, None).await
    }

    /// Register the fixture users through the normal signup path.
    pub async fn seed_users(&self) -> Result<Vec<User>> {
        let service = UserService::new(self.store());
        let mut users = Vec::new();
        for (email, password) in USERS {
            let user = service
                .register(email.to_string(), password.to_string())
                .await
                .map_err(|e| anyhow::anyhow!("seeding user failed: {}", e))?;
            users.push(user);
        }
        Ok(users)
    }

    /// Seed users plus one brewery owned by each of them.
    pub async fn seed_breweries(&self) -> Result<Vec<Brewery>> {
        let users = self.seed_users().await?;
        let fixtures = [
            ("One Love Brewery", "25 S Mountain Dr, Lincoln, NH 03251", "Still serving flights!"),
            ("Woodstock Inn Brewery", "135 Main St, North Woodstock, NH 03262", "A great place to try when One Love has a long wait"),
            ("White Mountain Brewing", "50 Winter St, Ashland, NH 03217", "They have a porter"),
        ];

        let mut breweries = Vec::new();
        for ((name, address, comments), user) in fixtures.into_iter().zip(users.iter()) {
            let brewery = self
                .store()
                .insert_brewery(NewBrewery {
                    name: name.to_string(),
                    address: address.to_string(),
                    comments: Some(comments.to_string()),
                    user_id: Some(user.id),
                })
                .await?;
            breweries.push(brewery);
        }
        Ok(breweries)
    }

    pub fn user_token(&self, user_id: i64) -> String {
        bearer(&self.state.tokens.issue(user_id).expect("token issuance"))
    }
}

pub fn service_auth() -> String {
    bearer(API_TOKEN)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub fn basic(email: &str, password: &str) -> String {
    format!("Basic {}", general_purpose::STANDARD.encode(format!("{}:{}", email, password)))
}

/// Expected JSON for a brewery as stored, before escaping matters.
pub fn brewery_json(brewery: &Brewery) -> Value {
    serde_json::json!({
        "id": brewery.id,
        "name": brewery.name,
        "address": brewery.address,
        "comments": brewery.comments,
        "rating": brewery.rating,
        "user_id": brewery.user_id,
    })
}
