use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::support::start;

#[tokio::test]
async fn lists_seeded_users() {
    let base = start().await;

    let body: Value = reqwest::get(format!("{base}/users"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        body,
        json!({ "data": [
            { "id": 1, "name": "John Doe" },
            { "id": 2, "name": "Jane Doe" },
        ]})
    );
}

#[tokio::test]
async fn creates_and_fetches_user() {
    let base = start().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/users"))
        .json(&json!({ "name": "Ada" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["data"], json!({ "id": 3, "name": "Ada" }));

    let body: Value = reqwest::get(format!("{base}/users/3"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "data": { "id": 3, "name": "Ada" } }));
}

#[tokio::test]
async fn rejects_invalid_user_bodies() {
    let base = start().await;
    let client = reqwest::Client::new();

    for body in [json!({}), json!({ "name": "" }), json!({ "name": 7 }), json!([1])] {
        let res = client
            .post(format!("{base}/users"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body {body}");
        let err: Value = res.json().await.unwrap();
        assert_eq!(err, json!({ "error": "Invalid user data" }));
    }

    let res = client
        .post(format!("{base}/users"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_user_is_404() {
    let base = start().await;

    for path in ["/users/99", "/users/abc"] {
        let res = reqwest::get(format!("{base}{path}")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!({ "error": "User not found" }));
    }
}
