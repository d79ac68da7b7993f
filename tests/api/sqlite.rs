//! The same routes served from SQLite.

use catalog_api::SqliteStore;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use crate::support::start_server;

#[tokio::test]
async fn product_routes_over_sqlite() {
    let base = start_server(SqliteStore::open_in_memory().unwrap()).await;
    let client = Client::new();

    let users: Value = client
        .get(format!("{base}/users"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users["data"].as_array().map(Vec::len), Some(2));

    let res = client
        .post(format!("{base}/products"))
        .json(&json!({ "name": "Widget", "categoryId": 2, "basePrice": 250 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    let created = created["data"].clone();
    assert_eq!(created["id"], 1);

    let res = client
        .patch(format!("{base}/products/1"))
        .json(&json!({ "basePrice": 0.0, "name": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["basePrice"], 0.0);
    assert_eq!(body["data"]["name"], "Widget");
    assert_eq!(body["data"]["createdAt"], created["createdAt"]);

    let res = client
        .patch(format!("{base}/products/1"))
        .json(&json!({ "basePrice": 4.5, "categoryId": 3.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["basePrice"], 4.5);
    assert_eq!(body["data"]["categoryId"], 3);

    let res = client
        .patch(format!("{base}/products/1"))
        .json(&json!({ "basePrice": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .patch(format!("{base}/products/999"))
        .json(&json!({ "name": "X" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(format!("{base}/products/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["basePrice"], 0.0);
}
