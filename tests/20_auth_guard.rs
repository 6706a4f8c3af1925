mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn protected_routes_require_bearer_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for path in [
        "/api/employees",
        "/api/employees/1",
        "/api/users/1/dependents",
        "/api/dependents/1",
    ] {
        let res = client
            .get(format!("{}{}", server.base_url, path))
            .send()
            .await?;
        assert_eq!(
            res.status(),
            StatusCode::UNAUTHORIZED,
            "{} should reject missing token",
            path
        );

        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["code"], "UNAUTHORIZED", "unexpected body: {}", body);
    }

    Ok(())
}

#[tokio::test]
async fn garbage_tokens_are_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/employees", server.base_url))
        .header("authorization", "Bearer not.a.jwt")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/api/employees", server.base_url))
        .header("authorization", "Basic dXNlcjpwYXNz")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn whoami_reflects_token_identity() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/auth/whoami", server.base_url))
        .header("authorization", format!("Bearer {}", common::bearer_token()))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["user_id"].as_i64().unwrap(), 1);
    assert_eq!(body["data"]["email"], "tests@example.com");
    assert_eq!(body["data"]["role"], "admin");

    Ok(())
}

#[tokio::test]
async fn valid_token_passes_the_guard() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/employees", server.base_url))
        .header("authorization", format!("Bearer {}", common::bearer_token()))
        .send()
        .await?;

    // Past the guard the result depends on database availability
    assert!(
        res.status() == StatusCode::OK || res.status() == StatusCode::INTERNAL_SERVER_ERROR,
        "Expected OK or INTERNAL_SERVER_ERROR, got {}",
        res.status()
    );
    assert_ne!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
