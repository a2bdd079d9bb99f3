mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{body_json, build_test_app, count, delete, get, patch_json, post_json};

/// Colour hex codes must be `#RRGGBB`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn colour_hex_code_is_validated(pool: sqlx::PgPool) {
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/colours", json!({ "name": "Teal", "hexCode": "teal" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "hexCode: hex_colour");

    let response = post_json(&app, "/api/colours", json!({ "name": "Teal", "hexCode": "#008080" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = patch_json(&app, &format!("/api/colours/{id}"), json!({ "id": id, "hexCode": "#12" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count(&app, "/api/colours").await, 1);
}

/// Removing a colour leaves its categories in place, uncoloured.
#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_colour_unlinks_categories(pool: sqlx::PgPool) {
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/colours", json!({ "name": "Red" })).await;
    let colour = body_json(response).await["id"].as_i64().unwrap();

    let response = post_json(
        &app,
        "/api/product-categories",
        json!({ "name": "Sofas", "colourId": colour }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let category = body_json(response).await;
    assert_eq!(category["colourId"], colour);
    let category_id = category["id"].as_i64().unwrap();

    let response = delete(&app, &format!("/api/colours/{colour}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/api/product-categories/{category_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["colourId"].is_null());
}

/// Images need an existing product and a non-negative sort order.
#[sqlx::test(migrations = "../../db/migrations")]
async fn product_image_constraints(pool: sqlx::PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/product-images",
        json!({ "url": "https://img.example/a.png", "productId": 12345 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        &app,
        "/api/products",
        json!({ "name": "Vase", "price": 12.0, "available": true }),
    )
    .await;
    let product = body_json(response).await["id"].as_i64().unwrap();

    let response = post_json(
        &app,
        "/api/product-images",
        json!({ "url": "https://img.example/a.png", "sortOrder": -1, "productId": product }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "sortOrder: range");

    let response = get(&app, &format!("/api/product-images?productId.equals={product}")).await;
    assert_eq!(response.headers()["x-total-count"], "0");
}
