//! End-to-end CRUD over employees and dependents. Requires DATABASE_URL;
//! skipped otherwise.

mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn employee_and_dependent_crud_roundtrip() -> Result<()> {
    if !common::database_configured() {
        eprintln!("DATABASE_URL not set; skipping");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::bearer_token();
    let email = format!("records-{}@tests.local", std::process::id());

    // Onboard: creates the account and the employee together
    let res = client
        .post(format!("{}/api/employees", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Asha Rao",
            "role": "engineer",
            "email": email,
            "designation": "Developer",
            "date_of_joining": "2024-01-15",
            "gender": "female",
            "mobile_number": "555-0101",
            "password": "initial-secret-1"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    let employee_id = body["data"]["employee_id"].as_i64().unwrap();
    let user_id = body["data"]["user_id"].as_i64().unwrap();

    // Duplicate email is a conflict and must not strand partial rows
    let res = client
        .post(format!("{}/api/employees", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Imposter",
            "role": "engineer",
            "email": email,
            "designation": "Developer",
            "date_of_joining": "2024-01-15",
            "gender": "male",
            "mobile_number": "555-0102"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Read back
    let res = client
        .get(format!("{}/api/employees/{}", server.base_url, employee_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["name"], "Asha Rao");

    // Partial update keeps omitted fields
    let res = client
        .put(format!("{}/api/employees/{}", server.base_url, employee_id))
        .bearer_auth(&token)
        .json(&json!({ "designation": "Senior Developer" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["designation"], "Senior Developer");
    assert_eq!(body["data"]["name"], "Asha Rao");

    // Lookup through the owning account
    let res = client
        .get(format!("{}/api/users/{}/employee", server.base_url, user_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Dependents: add, edit, list, delete
    let res = client
        .post(format!("{}/api/dependents", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "employee_id": employee_id,
            "name": "Mira Rao",
            "date_of_birth": "2016-06-01",
            "relation": "child"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    let dependent_id = body["data"]["dependent_id"].as_i64().unwrap();

    let res = client
        .patch(format!("{}/api/dependents/{}", server.base_url, dependent_id))
        .bearer_auth(&token)
        .json(&json!({ "relation": "daughter" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["relation"], "daughter");
    assert_eq!(body["data"]["name"], "Mira Rao");

    let res = client
        .get(format!("{}/api/users/{}/dependents", server.base_url, user_id))
        .bearer_auth(&token)
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let res = client
        .delete(format!("{}/api/dependents/{}", server.base_url, dependent_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Deleting again is a 404
    let res = client
        .delete(format!("{}/api/dependents/{}", server.base_url, dependent_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Referencing a missing employee is rejected up front
    let res = client
        .post(format!("{}/api/dependents", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "employee_id": 999_999_999,
            "name": "Ghost",
            "date_of_birth": "2016-06-01",
            "relation": "child"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Login with the onboarded credentials
    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": email, "password": "initial-secret-1" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["user_id"].as_i64().unwrap(), user_id);
    assert_eq!(body["data"]["role"], "engineer");
    assert!(body["data"]["token"].as_str().unwrap().contains('.'));

    // Wrong password is unauthorized, not generic
    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": email, "password": "wrong" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Cleanup through the cascading delete
    let res = client
        .delete(format!("{}/api/users/{}", server.base_url, user_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    Ok(())
}
