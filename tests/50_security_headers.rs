mod common;

use anyhow::Result;
use axum::http::{HeaderMap, Method, StatusCode};
use serde_json::json;

use common::{service_auth, TestApp};

fn assert_hardened(headers: &HeaderMap) {
    let expected = [
        ("x-content-type-options", "nosniff"),
        ("x-frame-options", "SAMEORIGIN"),
        ("referrer-policy", "no-referrer"),
        ("x-dns-prefetch-control", "off"),
        ("x-download-options", "noopen"),
        ("x-permitted-cross-domain-policies", "none"),
    ];
    for (name, value) in expected {
        assert_eq!(
            headers.get(name).and_then(|v| v.to_str().ok()),
            Some(value),
            "{}",
            name
        );
    }
}

#[tokio::test]
async fn public_responses_carry_security_headers() -> Result<()> {
    let app = TestApp::new();

    let res = app.get("/", None).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_hardened(&res.headers);

    let res = app
        .request(Method::POST, "/api/signup", None, Some(json!({ "email": "a" })))
        .await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_hardened(&res.headers);
    Ok(())
}

#[tokio::test]
async fn protected_responses_carry_security_headers() -> Result<()> {
    let app = TestApp::new();
    app.seed_breweries().await?;

    let res = app.get("/api/breweries/1", Some(&service_auth())).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_hardened(&res.headers);

    let res = app.get("/api/breweries", None).await?;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_hardened(&res.headers);

    let res = app
        .request(Method::DELETE, "/api/breweries/1", Some(&service_auth()), None)
        .await?;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert_hardened(&res.headers);
    Ok(())
}
