use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use crate::support::start;

#[tokio::test]
async fn category_lifecycle() {
    let base = start().await;
    let client = Client::new();

    let res = client
        .post(format!("{base}/product-categories"))
        .json(&json!({ "name": "Tools" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Product category created successfully");
    assert_eq!(
        body["data"],
        json!({ "id": 1, "name": "Tools", "description": null })
    );

    let res = client
        .patch(format!("{base}/product-categories/1"))
        .json(&json!({ "description": "Hand tools" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Product category updated successfully");
    assert_eq!(
        body["data"],
        json!({ "id": 1, "name": "Tools", "description": "Hand tools" })
    );

    let res = client
        .delete(format!("{base}/product-categories/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Product category deleted successfully");

    let list: Value = client
        .get(format!("{base}/product-categories"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, json!({ "data": [] }));
}

#[tokio::test]
async fn empty_and_null_text_leave_category_unchanged() {
    let base = start().await;
    let client = Client::new();

    client
        .post(format!("{base}/product-categories"))
        .json(&json!({ "name": "Tools", "description": "Hand tools" }))
        .send()
        .await
        .unwrap();

    let res = client
        .patch(format!("{base}/product-categories/1"))
        .json(&json!({ "name": "", "description": null }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body["data"],
        json!({ "id": 1, "name": "Tools", "description": "Hand tools" })
    );
}

#[tokio::test]
async fn missing_category_is_404() {
    let base = start().await;
    let client = Client::new();

    let res = client
        .patch(format!("{base}/product-categories/5"))
        .json(&json!({ "name": "Other" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Product category not found" }));

    let res = client
        .get(format!("{base}/product-categories/x"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
