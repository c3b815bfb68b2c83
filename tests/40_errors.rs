mod common;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use brewery_api::config::Environment;
use brewery_api::database::{
    Brewery, BreweryPatch, DatabaseError, NewBrewery, NewUser, Store, User,
};
use serde_json::json;

use common::{basic, service_auth, TestApp};

/// Store whose every call fails, standing in for an unreachable database.
struct UnavailableStore;

fn unavailable() -> DatabaseError {
    DatabaseError::Sqlx(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl Store for UnavailableStore {
    async fn insert_user(&self, _user: NewUser) -> Result<User, DatabaseError> {
        Err(unavailable())
    }

    async fn find_users_by_email(&self, _email: &str) -> Result<Vec<User>, DatabaseError> {
        Err(unavailable())
    }

    async fn list_breweries(&self, _owner: Option<i64>) -> Result<Vec<Brewery>, DatabaseError> {
        Err(unavailable())
    }

    async fn get_brewery(&self, _id: i64) -> Result<Option<Brewery>, DatabaseError> {
        Err(unavailable())
    }

    async fn insert_brewery(&self, _brewery: NewBrewery) -> Result<Brewery, DatabaseError> {
        Err(unavailable())
    }

    async fn update_brewery(&self, _id: i64, _patch: BreweryPatch) -> Result<bool, DatabaseError> {
        Err(unavailable())
    }

    async fn delete_brewery(&self, _id: i64) -> Result<bool, DatabaseError> {
        Err(unavailable())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Err(unavailable())
    }
}

#[tokio::test]
async fn production_hides_store_failures() -> Result<()> {
    let app = TestApp::with_store(Arc::new(UnavailableStore), |config| {
        config.environment = Environment::Production;
    });

    let res = app.get("/api/breweries", Some(&service_auth())).await?;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body, json!({ "error": { "message": "server error" } }));
    Ok(())
}

#[tokio::test]
async fn development_reveals_store_failures() -> Result<()> {
    let app = TestApp::with_store(Arc::new(UnavailableStore), |_| {});

    let res = app.get("/api/breweries/1", Some(&service_auth())).await?;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body, json!({ "error": { "message": unavailable().to_string() } }));
    Ok(())
}

#[tokio::test]
async fn basic_auth_store_failure_is_500_not_401() -> Result<()> {
    let app = TestApp::with_store(Arc::new(UnavailableStore), |_| {});

    let res = app.get("/api/breweries", Some(&basic("a", "b"))).await?;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn signup_store_failure_is_500() -> Result<()> {
    let app = TestApp::with_store(Arc::new(UnavailableStore), |config| {
        config.environment = Environment::Production;
    });

    let res = app
        .request(Method::POST, "/api/signup", None, Some(json!({ "email": "a", "password": "b" })))
        .await?;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body, json!({ "error": { "message": "server error" } }));
    Ok(())
}

#[tokio::test]
async fn health_reports_unavailable_store() -> Result<()> {
    let app = TestApp::with_store(Arc::new(UnavailableStore), |_| {});

    let res = app.get("/health", None).await?;
    assert_eq!(res.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(res.body["database"], "unavailable");
    Ok(())
}
