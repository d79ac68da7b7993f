use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use crate::support::start;

async fn create_widget(client: &Client, base: &str) -> Value {
    let res = client
        .post(format!("{base}/products"))
        .json(&json!({ "name": "Widget", "categoryId": 1, "basePrice": 100 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Product created successfully");
    body["data"].clone()
}

async fn patch(client: &Client, url: &str, body: Value) -> (StatusCode, Value) {
    let res = client.patch(url).json(&body).send().await.unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

#[tokio::test]
async fn create_then_list_and_get() {
    let base = start().await;
    let client = Client::new();

    let created = create_widget(&client, &base).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Widget");
    assert_eq!(created["basePrice"], 100.0);
    assert_eq!(created["categoryId"], 1);
    assert!(created["createdAt"].as_str().is_some_and(|s| !s.is_empty()));

    let list: Value = client
        .get(format!("{base}/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, json!({ "data": [created.clone()] }));

    let one: Value = client
        .get(format!("{base}/products/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(one, json!({ "data": created }));
}

#[tokio::test]
async fn create_rejects_incomplete_bodies() {
    let base = start().await;
    let client = Client::new();

    for body in [
        json!({ "name": "Widget", "categoryId": 1 }),
        json!({ "name": "", "categoryId": 1, "basePrice": 5 }),
        json!({ "name": "Widget", "categoryId": "one", "basePrice": 5 }),
    ] {
        let res = client
            .post(format!("{base}/products"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body {body}");
        let err: Value = res.json().await.unwrap();
        assert_eq!(err, json!({ "error": "Invalid request data" }));
    }
}

#[tokio::test]
async fn patch_sets_zero_price() {
    let base = start().await;
    let client = Client::new();
    let created = create_widget(&client, &base).await;

    let (status, body) = patch(
        &client,
        &format!("{base}/products/1"),
        json!({ "basePrice": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product updated successfully");
    assert_eq!(body["data"]["basePrice"], 0.0);
    assert_eq!(body["data"]["name"], created["name"]);
    assert_eq!(body["data"]["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn patch_accepts_float_numbers() {
    let base = start().await;
    let client = Client::new();
    create_widget(&client, &base).await;
    let url = format!("{base}/products/1");

    let (status, body) = patch(&client, &url, json!({ "basePrice": 0.0 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["basePrice"], 0.0);

    let (status, body) = patch(&client, &url, json!({ "basePrice": 9.99 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["basePrice"], 9.99);

    let (status, body) = patch(&client, &url, json!({ "categoryId": 2.0 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["categoryId"], 2);
    assert_eq!(body["data"]["basePrice"], 9.99);
}

#[tokio::test]
async fn create_accepts_fractional_price() {
    let base = start().await;
    let client = Client::new();

    let res = client
        .post(format!("{base}/products"))
        .json(&json!({ "name": "Gizmo", "categoryId": 1.0, "basePrice": 19.99 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["basePrice"], 19.99);
    assert_eq!(body["data"]["categoryId"], 1);
}

#[tokio::test]
async fn patch_ignores_empty_name() {
    let base = start().await;
    let client = Client::new();
    let created = create_widget(&client, &base).await;

    let (status, body) = patch(&client, &format!("{base}/products/1"), json!({ "name": "" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], created);

    let (status, body) = patch(&client, &format!("{base}/products/1"), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], created);
}

#[tokio::test]
async fn patch_updates_only_given_fields() {
    let base = start().await;
    let client = Client::new();
    create_widget(&client, &base).await;

    let (status, body) = patch(
        &client,
        &format!("{base}/products/1"),
        json!({ "name": "Gadget", "categoryId": 4, "unknown": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Gadget");
    assert_eq!(body["data"]["categoryId"], 4);
    assert_eq!(body["data"]["basePrice"], 100.0);
    assert_eq!(body["data"]["id"], 1);
}

#[tokio::test]
async fn patch_rejects_null_and_mistyped_numbers() {
    let base = start().await;
    let client = Client::new();
    let created = create_widget(&client, &base).await;

    for body in [
        json!({ "basePrice": null }),
        json!({ "basePrice": "free" }),
        json!({ "categoryId": 2.5 }),
        json!({ "name": null }),
        json!({ "name": 42 }),
        json!("basePrice"),
    ] {
        let (status, err) = patch(&client, &format!("{base}/products/1"), body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(err, json!({ "error": "Invalid request data" }));
    }

    let unchanged: Value = client
        .get(format!("{base}/products/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(unchanged["data"], created);
}

#[tokio::test]
async fn patch_missing_product_is_404() {
    let base = start().await;
    let client = Client::new();

    for body in [json!({ "name": "X" }), json!({})] {
        let (status, err) = patch(&client, &format!("{base}/products/999"), body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(err, json!({ "error": "Product not found" }));
    }

    let list: Value = client
        .get(format!("{base}/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, json!({ "data": [] }));
}

#[tokio::test]
async fn delete_returns_removed_product() {
    let base = start().await;
    let client = Client::new();
    let created = create_widget(&client, &base).await;

    let res = client
        .delete(format!("{base}/products/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "message": "Product deleted successfully", "data": created })
    );

    let res = client
        .get(format!("{base}/products/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(format!("{base}/products/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let base = start().await;
    let client = Client::new();
    create_widget(&client, &base).await;
    create_widget(&client, &base).await;

    client
        .delete(format!("{base}/products/1"))
        .send()
        .await
        .unwrap();
    let third = create_widget(&client, &base).await;
    assert_eq!(third["id"], 3);
}
